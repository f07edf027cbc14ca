use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::Path;

use super::config::{BlockDef, BlocksConfig, TexturesDef};
use super::textures::TextureCatalog;
use super::types::{BlockId, Face, FaceRole, TextureId};

/// Validated block set: dense id-indexed table plus a name index.
#[derive(Default, Clone, Debug)]
pub struct BlockRegistry {
    pub textures: TextureCatalog,
    pub blocks: Vec<BlockType>,
    pub by_name: HashMap<String, BlockId>,
    pub unknown_block_id: Option<BlockId>,
}

impl BlockRegistry {
    pub fn new() -> Self {
        Self {
            textures: TextureCatalog::new(),
            blocks: Vec::new(),
            by_name: HashMap::new(),
            unknown_block_id: None,
        }
    }

    /// Build a registry from parsed configs, rejecting definitions that
    /// would make id or name lookups ambiguous.
    pub fn from_configs(
        textures: TextureCatalog,
        cfg: BlocksConfig,
    ) -> Result<Self, RegistryError> {
        let BlocksConfig {
            blocks,
            unknown_block,
        } = cfg;
        let mut reg = BlockRegistry {
            textures,
            blocks: Vec::new(),
            by_name: HashMap::new(),
            unknown_block_id: None,
        };
        for (index, def) in blocks.into_iter().enumerate() {
            if def.name.is_empty() {
                return Err(RegistryError::EmptyName { index });
            }
            let id = match def.id {
                Some(id) => id,
                None => {
                    if reg.blocks.len() > BlockId::MAX as usize {
                        return Err(RegistryError::TooManyBlocks { name: def.name });
                    }
                    reg.blocks.len() as BlockId
                }
            };
            if let Some(prev) = reg.blocks.get(id as usize).filter(|t| !t.name.is_empty()) {
                return Err(RegistryError::DuplicateId {
                    id,
                    name: def.name,
                    prev: prev.name.clone(),
                });
            }
            if reg.by_name.contains_key(&def.name) {
                return Err(RegistryError::DuplicateName { name: def.name });
            }
            let ty = compile_block(&reg.textures, id, def);
            if reg.blocks.len() <= id as usize {
                reg.blocks.resize(id as usize + 1, BlockType::placeholder());
            }
            reg.by_name.insert(ty.name.clone(), id);
            reg.blocks[id as usize] = ty;
        }
        if let Some(name) = unknown_block {
            reg.unknown_block_id = reg.id_by_name(&name);
            if reg.unknown_block_id.is_none() {
                log::warn!("unknown_block {:?} is not a registered block", name);
            }
        }
        Ok(reg)
    }

    pub fn load_from_paths(
        textures_path: impl AsRef<Path>,
        blocks_path: impl AsRef<Path>,
    ) -> Result<Self, Box<dyn Error>> {
        let textures = TextureCatalog::from_path(textures_path)?;
        let blocks_toml = fs::read_to_string(blocks_path)?;
        let blocks_cfg: BlocksConfig = toml::from_str(&blocks_toml)?;
        let reg = Self::from_configs(textures, blocks_cfg)?;
        Ok(reg)
    }

    /// Registered block for `id`. Gap slots between explicit ids hold
    /// placeholders with empty names, which registration rejects, so the
    /// name check is unambiguous.
    #[inline]
    pub fn get(&self, id: BlockId) -> Option<&BlockType> {
        self.blocks.get(id as usize).filter(|ty| !ty.name.is_empty())
    }

    pub fn id_by_name(&self, name: &str) -> Option<BlockId> {
        self.by_name.get(name).copied()
    }

    pub fn get_by_name(&self, name: &str) -> Option<&BlockType> {
        self.id_by_name(name).and_then(|id| self.get(id))
    }

    /// Like `get`, but falls back to the configured unknown block when `id`
    /// is not registered.
    pub fn get_or_unknown(&self, id: BlockId) -> Option<&BlockType> {
        self.get(id)
            .or_else(|| self.unknown_block_id.and_then(|u| self.get(u)))
    }

    /// Registered blocks in id order, skipping gap slots.
    pub fn iter(&self) -> impl Iterator<Item = &BlockType> {
        self.blocks.iter().filter(|ty| !ty.name.is_empty())
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

/// Compiled runtime form of one block definition.
#[derive(Clone, Debug)]
pub struct BlockType {
    pub id: BlockId,
    pub name: String,
    pub empty: bool,
    pub solid: bool,
    pub fluid: bool,
    pub transparent: bool,
    // Raw per-face references as authored; kept for re-serialization and
    // for resolving keys the catalog does not know.
    pub textures: Option<TexturesDef>,
    // Precomputed face -> catalog id table (fast path for consumers)
    pub pre_face_tex: [Option<TextureId>; 6],
}

impl BlockType {
    fn placeholder() -> Self {
        BlockType {
            id: 0,
            name: String::new(),
            empty: false,
            solid: false,
            fluid: false,
            transparent: false,
            textures: None,
            pre_face_tex: [None; 6],
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.empty
    }

    #[inline]
    pub fn is_solid(&self) -> bool {
        self.solid
    }

    #[inline]
    pub fn is_fluid(&self) -> bool {
        self.fluid
    }

    #[inline]
    pub fn is_transparent(&self) -> bool {
        self.transparent
    }

    /// Texture key for `face`, most specific layer first: the face's own
    /// direction key, then its three-sided role, then `all`.
    pub fn texture_key_for(&self, face: Face) -> Option<&str> {
        let t = self.textures.as_ref()?;
        let per_face = match face {
            Face::PosY => t.py.as_deref(),
            Face::NegY => t.ny.as_deref(),
            Face::PosX => t.px.as_deref(),
            Face::NegX => t.nx.as_deref(),
            Face::PosZ => t.pz.as_deref(),
            Face::NegZ => t.nz.as_deref(),
        };
        let role = match face.role() {
            FaceRole::Top => t.top.as_deref(),
            FaceRole::Bottom => t.bottom.as_deref(),
            FaceRole::Side => t.side.as_deref(),
        };
        per_face.or(role).or(t.all.as_deref())
    }

    /// Precompiled catalog id for `face`. Agrees with `texture_key_for`
    /// whenever the resolved key is in the catalog.
    #[inline]
    pub fn texture_cached(&self, face: Face) -> Option<TextureId> {
        self.pre_face_tex[face.index()]
    }
}

fn compile_block(catalog: &TextureCatalog, id: BlockId, def: BlockDef) -> BlockType {
    let mut ty = BlockType {
        id,
        name: def.name,
        empty: def.empty.unwrap_or(false),
        solid: def.solid.unwrap_or(true),
        fluid: def.fluid.unwrap_or(false),
        transparent: def.transparent.unwrap_or(false),
        textures: def.textures,
        pre_face_tex: [None; 6],
    };
    let pre = compile_faces(catalog, &ty);
    ty.pre_face_tex = pre;
    ty
}

fn compile_faces(catalog: &TextureCatalog, ty: &BlockType) -> [Option<TextureId>; 6] {
    let mut out = [None; 6];
    for face in Face::ALL {
        let Some(key) = ty.texture_key_for(face) else {
            continue;
        };
        match catalog.get_id(key) {
            Some(tid) => out[face.index()] = Some(tid),
            None => log::warn!(
                "block {:?}: texture key {:?} for face {} is not in the catalog",
                ty.name,
                key,
                face.key()
            ),
        }
    }
    out
}

#[derive(Debug)]
pub enum RegistryError {
    DuplicateId {
        id: BlockId,
        name: String,
        prev: String,
    },
    DuplicateName {
        name: String,
    },
    EmptyName {
        index: usize,
    },
    TooManyBlocks {
        name: String,
    },
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryError::DuplicateId { id, name, prev } => {
                write!(f, "block {:?} reuses id {} already held by {:?}", name, id, prev)
            }
            RegistryError::DuplicateName { name } => {
                write!(f, "block name {:?} is defined twice", name)
            }
            RegistryError::EmptyName { index } => {
                write!(f, "block at index {} has an empty name", index)
            }
            RegistryError::TooManyBlocks { name } => {
                write!(f, "no free id left for block {:?}", name)
            }
        }
    }
}

impl std::error::Error for RegistryError {}
