use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

use matter_textures::*;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Mod project root; textures are read from and written under its resources.
    #[arg(short, long, default_value = ".")]
    root: PathBuf,
    /// Palette file (.json, .ron or .yaml) replacing the built-in matter tiers.
    #[arg(short, long)]
    palette: Option<PathBuf>,
    /// Edge length (in pixels) of generated matter block textures.
    #[arg(short, long, default_value_t = DEFAULT_GLOW_SIZE)]
    size: u32,
    /// Number of parallel threads.
    #[arg(short, long, default_value_t = 1)]
    threads: usize,
}

impl Cli {
    fn generate_config(&self) -> Result<GenerateConfig, GenerateError> {
        let mut cfg = GenerateConfig::new(&self.root);
        cfg.size = self.size;
        cfg.threads = self.threads;
        if let Some(path) = &self.palette {
            cfg.palette = Palette::from_file(path)?;
        }
        Ok(cfg)
    }
}

fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();
}

fn run() -> Result<(), GenerateError> {
    let cli = Cli::parse();
    let generator = Generator::new(cli.generate_config()?)?;

    let rule = "=".repeat(60);
    log::info!("{}", rule);
    log::info!("ProjectEX Reforged - Texture Generator");
    log::info!("{}", rule);

    let before_run = std::time::Instant::now();

    generator.run()?;

    let dur = before_run.elapsed();

    log::info!("");
    log::info!("{}", rule);
    log::info!(
        "[OK] All textures generated successfully! ({}.{:03} seconds)",
        dur.as_secs(),
        dur.subsec_millis()
    );
    log::info!("{}", rule);

    Ok(())
}

fn main() {
    init_logger();
    if let Err(e) = run() {
        log::error!("Error: {}", e);
        std::process::exit(1);
    }
}
