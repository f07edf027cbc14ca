//! Block data model: definitions, texture catalog, and the validated registry.
#![forbid(unsafe_code)]

pub mod config;
pub mod registry;
pub mod textures;
pub mod types;

pub use registry::{BlockRegistry, BlockType, RegistryError};
pub use textures::{TextureCatalog, TextureEntry};
pub use types::{BlockId, Face, FaceRole, TextureId};
