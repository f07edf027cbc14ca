use serde::{Deserialize, Serialize};

// Top-level shape of a block-set config file
#[derive(Deserialize, Debug)]
pub struct BlocksConfig {
    pub blocks: Vec<BlockDef>,
    // Name of the block returned when a lookup falls outside the set.
    #[serde(default)]
    pub unknown_block: Option<String>,
}

// One block definition as authored. Omitted fields fall back to defaults
// at registration time (`solid` is true, the other flags false, the id is
// the next free slot).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BlockDef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub empty: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solid: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fluid: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transparent: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub textures: Option<TexturesDef>,
}

// Per-face texture references. `all` covers every face, `top`/`side`/`bottom`
// cover the three-sided split, and the six direction keys pin single faces.
// The most specific layer that names a face wins.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct TexturesDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub px: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub py: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pz: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nx: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ny: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nz: Option<String>,
}
