use std::{fs, path::{Path, PathBuf}, thread};
use image::RgbaImage;
use log::{debug, error, info};

use super::{
    color::*,
    error::*,
    glow::*,
    tint::*
};

const TEXTURES_SUBDIR: &str = "src/main/resources/assets/projectex_reforged/textures/block";

/// Where the base texture lives and where generated textures go.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureLayout {
    textures: PathBuf,
}

impl TextureLayout {
    pub fn new(root: impl AsRef<Path>) -> Self {
        TextureLayout { textures: root.as_ref().join(TEXTURES_SUBDIR) }
    }

    pub fn textures_dir(&self) -> &Path {
        &self.textures
    }

    pub fn base_image(&self) -> PathBuf {
        self.textures.join("energy_link.png")
    }

    pub fn energy_link_dir(&self) -> PathBuf {
        self.textures.join("energy_link")
    }

    pub fn matter_block_dir(&self) -> PathBuf {
        self.textures.join("matter_block")
    }
}

#[derive(Debug, Clone)]
pub struct GenerateConfig {
    pub layout: TextureLayout,
    pub palette: Palette,
    pub size: u32,
    pub threads: usize,
}

impl GenerateConfig {
    pub fn new(root: impl AsRef<Path>) -> Self {
        GenerateConfig {
            layout: TextureLayout::new(root),
            palette: Palette::matter(),
            size: DEFAULT_GLOW_SIZE,
            threads: 1,
        }
    }

    fn validate(&self) -> Result<(), GenerateError> {
        if self.size == 0 {
            return Err(GenerateError::Size);
        }
        if self.threads == 0 {
            return Err(GenerateError::Threads);
        }
        Ok(())
    }
}

/// Counts of textures written by a full run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub energy_links: usize,
    pub matter_blocks: usize,
}

pub fn ensure_dir(path: impl AsRef<Path>) -> Result<(), TextureError> {
    fs::create_dir_all(path)?;
    Ok(())
}

fn save(img: &RgbaImage, path: PathBuf) -> Result<(), TextureError> {
    img.save_with_format(&path, image::ImageFormat::Png)
        .map_err(|source| TextureError::Save { path, source })
}

pub struct Generator {
    cfg: GenerateConfig,
}

impl Generator {
    pub fn new(cfg: GenerateConfig) -> Result<Generator, GenerateError> {
        cfg.validate()?;
        Ok(Generator { cfg })
    }

    pub fn config(&self) -> &GenerateConfig {
        &self.cfg
    }

    /// Runs both texture sets. A failure in one set is logged and does not
    /// stop the other; the run fails afterwards if either set failed.
    pub fn run(&self) -> Result<Summary, GenerateError> {
        let mut summary = Summary::default();
        let mut failed = 0;

        match self.generate_energy_links() {
            Ok(n) => summary.energy_links = n,
            Err(e) => {
                error!("ERROR: {}", e);
                failed += 1;
            }
        }

        match self.generate_matter_blocks() {
            Ok(n) => summary.matter_blocks = n,
            Err(e) => {
                error!("ERROR: {}", e);
                failed += 1;
            }
        }

        if failed > 0 {
            return Err(GenerateError::Incomplete { failed });
        }

        Ok(summary)
    }

    /// Writes one tinted copy of the base texture per palette entry.
    pub fn generate_energy_links(&self) -> Result<usize, TextureError> {
        info!("Generating Energy Link textures...");

        let base = load_base(self.cfg.layout.base_image())?;
        debug!("base texture is {}x{}", base.width(), base.height());

        let dir = self.cfg.layout.energy_link_dir();
        ensure_dir(&dir)?;

        let n = self.for_each_entry(|entry| {
            save(&tint(&base, entry.color), dir.join(format!("{}.png", entry.name)))
        })?;

        info!("[OK] Generated {} Energy Link textures", n);
        Ok(n)
    }

    /// Writes one glowing block texture per palette entry.
    pub fn generate_matter_blocks(&self) -> Result<usize, TextureError> {
        info!("");
        info!("Generating Matter Block textures...");

        let dir = self.cfg.layout.matter_block_dir();
        ensure_dir(&dir)?;

        let size = self.cfg.size;
        let n = self.for_each_entry(|entry| {
            save(&glow(entry.color, size), dir.join(format!("{}.png", entry.name)))
        })?;

        info!("[OK] Generated {} Matter Block textures", n);
        Ok(n)
    }

    fn for_each_entry<F>(&self, f: F) -> Result<usize, TextureError>
    where F: Fn(&PaletteEntry) -> Result<(), TextureError> + Sync {
        let entries = self.cfg.palette.entries();
        let run_chunk = |chunk: &[PaletteEntry]| -> Result<(), TextureError> {
            for entry in chunk {
                info!("  - {}.png (color: {})", entry.name, entry.color);
                f(entry)?;
            }
            Ok(())
        };

        if self.cfg.threads == 1 {
            run_chunk(entries)?;
            return Ok(entries.len());
        }

        let chunk_len = entries.len().div_ceil(self.cfg.threads);
        let run_chunk = &run_chunk;
        thread::scope(|s| {
            let handles: Vec<_> = entries
                .chunks(chunk_len)
                .map(|chunk| s.spawn(move || run_chunk(chunk)))
                .collect();

            handles
                .into_iter()
                .map(|h| h.join().unwrap_or_else(|p| std::panic::resume_unwind(p)))
                .collect::<Result<(), _>>()
        })?;

        Ok(entries.len())
    }
}
