use std::{collections::HashSet, fmt, path::Path};
use serde::{Serialize, Deserialize};

use super::error::PaletteError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Color { red, green, blue }
    }

    pub fn channels(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}

impl From<[u8; 3]> for Color {
    fn from([red, green, blue]: [u8; 3]) -> Color {
        Color { red, green, blue }
    }
}

impl From<Color> for [u8; 3] {
    fn from(c: Color) -> [u8; 3] {
        c.channels()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.red, self.green, self.blue)
    }
}

/// Matter tier colors: Minecraft dye colors plus a few custom tiers.
pub const MATTER_COLORS: [(&str, Color); 16] = [
    ("basic", Color::rgb(85, 255, 255)),
    ("dark", Color::rgb(25, 25, 25)),
    ("red", Color::rgb(153, 51, 51)),
    ("magenta", Color::rgb(178, 76, 216)),
    ("pink", Color::rgb(242, 127, 165)),
    ("purple", Color::rgb(137, 50, 184)),
    ("violet", Color::rgb(118, 68, 188)),
    ("blue", Color::rgb(53, 57, 157)),
    ("cyan", Color::rgb(76, 153, 178)),
    ("green", Color::rgb(94, 124, 22)),
    ("lime", Color::rgb(128, 199, 31)),
    ("yellow", Color::rgb(254, 216, 61)),
    ("orange", Color::rgb(216, 127, 51)),
    ("white", Color::rgb(249, 255, 254)),
    ("fading", Color::rgb(220, 220, 255)),
    ("final", Color::rgb(255, 215, 0)),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteEntry {
    pub name: String,
    pub color: Color,
}

/// Ordered list of named colors. Order only affects processing and log order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<PaletteEntry>", into = "Vec<PaletteEntry>")]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

impl Palette {
    pub fn new(entries: impl IntoIterator<Item = PaletteEntry>) -> Result<Palette, PaletteError> {
        let entries: Vec<PaletteEntry> = entries.into_iter().collect();

        if entries.is_empty() {
            return Err(PaletteError::Empty)
        }

        let mut seen = HashSet::new();
        for entry in &entries {
            if !is_file_stem(&entry.name) {
                return Err(PaletteError::InvalidName(entry.name.clone()))
            }
            if !seen.insert(entry.name.as_str()) {
                return Err(PaletteError::DuplicateName(entry.name.clone()))
            }
        }

        Ok(Palette { entries })
    }

    /// The built-in sixteen matter tiers.
    pub fn matter() -> Palette {
        Palette {
            entries: MATTER_COLORS
                .iter()
                .map(|&(name, color)| PaletteEntry { name: name.to_owned(), color })
                .collect()
        }
    }

    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<Color> {
        self.entries.iter().find(|e| e.name == name).map(|e| e.color)
    }

    pub fn from_json(src: &str) -> Result<Palette, PaletteError> {
        Ok(serde_json::from_str(src)?)
    }

    pub fn from_ron(src: &str) -> Result<Palette, PaletteError> {
        Ok(ron::from_str(src)?)
    }

    pub fn from_yaml(src: &str) -> Result<Palette, PaletteError> {
        Ok(serde_yaml::from_str(src)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Palette, PaletteError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        match path.as_ref().extension().ok_or(PaletteError::ExtensionError)?.to_str() {
            Some("json") => Palette::from_json(&contents),
            Some("ron") => Palette::from_ron(&contents),
            Some("yaml") | Some("yml") => Palette::from_yaml(&contents),
            _ => Err(PaletteError::ExtensionError)
        }
    }
}

impl Default for Palette {
    fn default() -> Palette {
        Palette::matter()
    }
}

impl TryFrom<Vec<PaletteEntry>> for Palette {
    type Error = PaletteError;

    fn try_from(entries: Vec<PaletteEntry>) -> Result<Palette, PaletteError> {
        Palette::new(entries)
    }
}

impl From<Palette> for Vec<PaletteEntry> {
    fn from(p: Palette) -> Vec<PaletteEntry> {
        p.entries
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a PaletteEntry;
    type IntoIter = std::slice::Iter<'a, PaletteEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// names become `<name>.png` inside an output directory
fn is_file_stem(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(|c: char| c == '/' || c == '\\' || c.is_control())
}
