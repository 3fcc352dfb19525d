//! Host scene collaborator.
//!
//! A rename session never touches scene data directly. It asks a
//! [`SceneGraph`] for the current selection and entity names, and hands
//! renames and removals back to it one entity at a time.

mod memory;

pub use memory::{MemoryScene, SceneBone, SceneObject, SceneSettings};

use serde::{Deserialize, Serialize};

use crate::entity::EntityKind;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectType {
    Mesh,
    Armature,
    #[default]
    #[serde(other)]
    Other,
}

/// Editor mode, which decides whether bone selection is meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionMode {
    #[default]
    Object,
    Pose,
    EditArmature,
}

/// What the scene does when a rename lands on a name that is already taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionPolicy {
    /// Number the new name `.001`, `.002`, ... like the host does.
    #[default]
    Suffix,
    /// Refuse the rename and report `scene.name_collision`.
    Error,
}

impl CollisionPolicy {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "suffix" => Some(CollisionPolicy::Suffix),
            "error" => Some(CollisionPolicy::Error),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CollisionPolicy::Suffix => "suffix",
            CollisionPolicy::Error => "error",
        }
    }
}

pub trait SceneGraph {
    /// Selected object names, in selection order.
    fn selected_objects(&self) -> Vec<String>;

    fn object_type(&self, object: &str) -> Option<ObjectType>;

    fn interaction_mode(&self) -> InteractionMode;

    /// Names of every entity of `kind` owned by `owner`, in scene order.
    ///
    /// For [`EntityKind::Object`] this is the owner itself.
    fn list(&self, owner: &str, kind: EntityKind) -> Result<Vec<String>>;

    /// Bones currently selected on an armature. Empty outside pose/edit mode.
    fn selected_bones(&self, owner: &str) -> Vec<String>;

    /// Rename one entity and return the name the scene actually assigned.
    fn rename(&mut self, owner: &str, kind: EntityKind, from: &str, to: &str) -> Result<String>;

    fn remove(&mut self, owner: &str, kind: EntityKind, name: &str) -> Result<()>;
}
