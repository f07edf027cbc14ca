pub type BlockId = u16;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct TextureId(pub u16);

// Six cube directions, in the order per-face tables are indexed.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Face {
    PosY = 0,
    NegY = 1,
    PosX = 2,
    NegX = 3,
    PosZ = 4,
    NegZ = 5,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::PosY,
        Face::NegY,
        Face::PosX,
        Face::NegX,
        Face::PosZ,
        Face::NegZ,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Short direction key used in config files and CLI output.
    #[inline]
    pub fn key(self) -> &'static str {
        match self {
            Face::PosY => "py",
            Face::NegY => "ny",
            Face::PosX => "px",
            Face::NegX => "nx",
            Face::PosZ => "pz",
            Face::NegZ => "nz",
        }
    }

    pub fn parse(s: &str) -> Option<Face> {
        match s {
            "py" => Some(Face::PosY),
            "ny" => Some(Face::NegY),
            "px" => Some(Face::PosX),
            "nx" => Some(Face::NegX),
            "pz" => Some(Face::PosZ),
            "nz" => Some(Face::NegZ),
            _ => None,
        }
    }

    /// Three-sided role covering this face: +Y is the top, -Y the bottom,
    /// the four lateral faces are sides.
    #[inline]
    pub fn role(self) -> FaceRole {
        match self {
            Face::PosY => FaceRole::Top,
            Face::NegY => FaceRole::Bottom,
            Face::PosX | Face::NegX | Face::PosZ | Face::NegZ => FaceRole::Side,
        }
    }
}

// Used by cube faces to resolve the three-sided texture layer
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FaceRole {
    Top,
    Bottom,
    Side,
}
