use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::types::TextureId;

/// One interned texture: the key blocks refer to it by, plus the image
/// candidates it maps to, in preference order.
#[derive(Clone, Debug)]
pub struct TextureEntry {
    pub id: TextureId,
    pub key: String,
    pub candidates: Vec<PathBuf>,
}

/// Interned set of texture keys. Ids are dense indices into `textures`,
/// assigned in sorted key order so they are stable for a given file.
#[derive(Default, Clone, Debug)]
pub struct TextureCatalog {
    pub textures: Vec<TextureEntry>,
    pub by_key: HashMap<String, TextureId>,
}

impl TextureCatalog {
    pub fn new() -> Self {
        Self {
            textures: Vec::new(),
            by_key: HashMap::new(),
        }
    }

    pub fn get_id(&self, key: &str) -> Option<TextureId> {
        self.by_key.get(key).copied()
    }

    pub fn get(&self, id: TextureId) -> Option<&TextureEntry> {
        self.textures.get(id.0 as usize)
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: TexturesConfig = toml::from_str(toml_str)?;
        let mut catalog = TextureCatalog::new();
        let mut entries: Vec<(String, TextureEntryDef)> = cfg.textures.into_iter().collect();
        // HashMap iteration order is nondeterministic; sort keys so TextureId
        // assignment is stable.
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        for (key, entry) in entries {
            let paths = match entry {
                TextureEntryDef::Path(p) => vec![p],
                TextureEntryDef::Paths(v) => v,
            };
            let id = TextureId(catalog.textures.len() as u16);
            catalog.by_key.insert(key.clone(), id);
            catalog.textures.push(TextureEntry {
                id,
                key,
                candidates: paths.into_iter().map(PathBuf::from).collect(),
            });
        }
        Ok(catalog)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }
}

// --- Config ---

#[derive(Deserialize, Debug)]
pub struct TexturesConfig {
    pub textures: HashMap<String, TextureEntryDef>,
}

#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum TextureEntryDef {
    // Single image: stone = "assets/blocks/stone.png"
    Path(String),
    // Candidates in preference order: stone = ["stone_hd.png", "stone.png"]
    Paths(Vec<String>),
}
