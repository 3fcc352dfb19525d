use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Category of renameable scene item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    #[default]
    Object,
    VertexGroup,
    ShapeKey,
    UvMap,
    Material,
    Bone,
    Action,
}

impl EntityKind {
    pub const ALL: &'static [EntityKind] = &[
        EntityKind::Object,
        EntityKind::VertexGroup,
        EntityKind::ShapeKey,
        EntityKind::UvMap,
        EntityKind::Material,
        EntityKind::Bone,
        EntityKind::Action,
    ];

    /// Parse singular or plural, `_` or `-` separated: `uv_map`, `uv-maps`, `UV_MAPS`.
    pub fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        let singular = normalized.strip_suffix('s').unwrap_or(&normalized);

        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == singular || kind.as_str() == normalized)
            .ok_or_else(|| {
                Error::validation_invalid_argument(
                    "kind",
                    format!("Unknown entity kind '{}'", s),
                    None,
                    Some(Self::ALL.iter().map(|k| k.as_str().to_string()).collect()),
                )
            })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Object => "object",
            EntityKind::VertexGroup => "vertex_group",
            EntityKind::ShapeKey => "shape_key",
            EntityKind::UvMap => "uv_map",
            EntityKind::Material => "material",
            EntityKind::Bone => "bone",
            EntityKind::Action => "action",
        }
    }
}

/// Opaque reference to the scene object that owns an entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerId(String);

impl OwnerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OwnerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
