// Public modules
pub mod case;
pub mod defaults;
pub mod entity;
pub mod error;
pub mod mirror;
pub mod ops;
pub mod output;
pub mod scene;
pub mod sequence;
pub mod session;

// Internal modules - not part of public API
pub(crate) mod paths;

// Re-export common types for convenience
pub use case::{apply_case, CaseMode};
pub use entity::{EntityKind, OwnerId};
pub use error::{Error, ErrorCode, Result};
pub use mirror::{has_laterality, mirror};
pub use ops::{apply_plan, parse_plan, OpReport, RenameOp};
pub use output::{BulkResult, BulkSummary, ItemOutcome, ItemStatus};
pub use scene::{CollisionPolicy, InteractionMode, MemoryScene, ObjectType, SceneGraph};
pub use sequence::{generate_sequence, Direction, SequenceSpec};
pub use session::{CommitOutcome, DeleteOutcome, RenameEntry, Session};
