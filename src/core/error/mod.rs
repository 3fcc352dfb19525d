use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ConfigInvalidJson,
    ConfigInvalidValue,

    ValidationInvalidArgument,
    ValidationInvalidJson,

    SceneInvalidDocument,
    SceneEntityNotFound,
    SceneNameCollision,
    SceneProtectedEntity,

    SessionIndexOutOfRange,

    InternalIoError,
    InternalJsonError,
    InternalUnexpected,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ConfigInvalidJson => "config.invalid_json",
            ErrorCode::ConfigInvalidValue => "config.invalid_value",

            ErrorCode::ValidationInvalidArgument => "validation.invalid_argument",
            ErrorCode::ValidationInvalidJson => "validation.invalid_json",

            ErrorCode::SceneInvalidDocument => "scene.invalid_document",
            ErrorCode::SceneEntityNotFound => "scene.entity_not_found",
            ErrorCode::SceneNameCollision => "scene.name_collision",
            ErrorCode::SceneProtectedEntity => "scene.protected_entity",

            ErrorCode::SessionIndexOutOfRange => "session.index_out_of_range",

            ErrorCode::InternalIoError => "internal.io_error",
            ErrorCode::InternalJsonError => "internal.json_error",
            ErrorCode::InternalUnexpected => "internal.unexpected",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hint {
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigInvalidJsonDetails {
    pub path: String,
    pub error: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigInvalidValueDetails {
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub problem: String,
}

#[derive(Debug, Clone)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    pub details: Value,
    pub hints: Vec<Hint>,
    pub retryable: Option<bool>,
}

pub type Result<T> = std::result::Result<T, Error>;

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidArgumentDetails {
    pub field: String,
    pub problem: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tried: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalIoErrorDetails {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalJsonErrorDetails {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

/// Identifies one entity inside the scene: its owner, kind and name.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityDetails {
    pub owner: String,
    pub kind: String,
    pub name: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NameCollisionDetails {
    pub owner: String,
    pub kind: String,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexOutOfRangeDetails {
    pub index: usize,
    pub len: usize,
}

fn to_details<T: Serialize>(details: T) -> Value {
    serde_json::to_value(details).unwrap_or_else(|_| Value::Object(serde_json::Map::new()))
}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>, details: Value) -> Self {
        Self {
            code,
            message: message.into(),
            details,
            hints: Vec::new(),
            retryable: None,
        }
    }

    pub fn validation_invalid_argument(
        field: impl Into<String>,
        problem: impl Into<String>,
        id: Option<String>,
        tried: Option<Vec<String>>,
    ) -> Self {
        let details = to_details(InvalidArgumentDetails {
            field: field.into(),
            problem: problem.into(),
            id,
            tried,
        });

        Self::new(
            ErrorCode::ValidationInvalidArgument,
            "Invalid argument",
            details,
        )
    }

    pub fn validation_invalid_json(
        err: serde_json::Error,
        context: Option<String>,
        input: Option<String>,
    ) -> Self {
        let details = serde_json::json!({
            "error": err.to_string(),
            "context": context,
            "input": input,
        });

        Self::new(ErrorCode::ValidationInvalidJson, "Invalid JSON", details)
    }

    pub fn config_invalid_json(path: impl Into<String>, err: serde_json::Error) -> Self {
        let details = to_details(ConfigInvalidJsonDetails {
            path: path.into(),
            error: err.to_string(),
        });

        Self::new(
            ErrorCode::ConfigInvalidJson,
            "Invalid JSON in configuration",
            details,
        )
    }

    pub fn config_invalid_value(
        key: impl Into<String>,
        value: Option<String>,
        problem: impl Into<String>,
    ) -> Self {
        let details = to_details(ConfigInvalidValueDetails {
            key: key.into(),
            value,
            problem: problem.into(),
        });

        Self::new(
            ErrorCode::ConfigInvalidValue,
            "Invalid configuration value",
            details,
        )
        .with_hint("Run 'renamer config show' to see accepted keys and current values")
    }

    pub fn scene_invalid_document(path: impl Into<String>, error: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::SceneInvalidDocument,
            "Scene document could not be parsed",
            serde_json::json!({ "path": path.into(), "error": error.into() }),
        )
    }

    pub fn scene_entity_not_found(
        owner: impl Into<String>,
        kind: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        let details = to_details(EntityDetails {
            owner: owner.into(),
            kind: kind.into(),
            name: name.into(),
        });

        Self::new(
            ErrorCode::SceneEntityNotFound,
            "Entity no longer exists in the scene",
            details,
        )
        .with_hint("Run 'renamer preview' to refresh the entry table")
    }

    pub fn scene_name_collision(
        owner: impl Into<String>,
        kind: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        let to = to.into();
        let details = to_details(NameCollisionDetails {
            owner: owner.into(),
            kind: kind.into(),
            from: from.into(),
            to: to.clone(),
        });

        Self::new(
            ErrorCode::SceneNameCollision,
            format!("Name '{}' is already taken", to),
            details,
        )
        .with_hint("Set 'collision' to 'suffix' to let the scene number duplicate names")
    }

    pub fn scene_protected_entity(
        owner: impl Into<String>,
        kind: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        let name = name.into();
        let details = to_details(EntityDetails {
            owner: owner.into(),
            kind: kind.into(),
            name: name.clone(),
        });

        Self::new(
            ErrorCode::SceneProtectedEntity,
            format!("'{}' is protected and cannot be removed", name),
            details,
        )
    }

    pub fn session_index_out_of_range(index: usize, len: usize) -> Self {
        Self::new(
            ErrorCode::SessionIndexOutOfRange,
            format!("Entry index {} is out of range", index),
            to_details(IndexOutOfRangeDetails { index, len }),
        )
    }

    pub fn internal_io(error: impl Into<String>, context: Option<String>) -> Self {
        let details = to_details(InternalIoErrorDetails {
            error: error.into(),
            context,
        });

        Self::new(ErrorCode::InternalIoError, "IO error", details)
    }

    pub fn internal_json(error: impl Into<String>, context: Option<String>) -> Self {
        let details = to_details(InternalJsonErrorDetails {
            error: error.into(),
            context,
        });

        Self::new(ErrorCode::InternalJsonError, "JSON error", details)
    }

    pub fn internal_unexpected(error: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::InternalUnexpected,
            "Unexpected error",
            serde_json::json!({ "error": error.into() }),
        )
    }

    pub fn with_hint(mut self, message: impl Into<String>) -> Self {
        self.hints.push(Hint {
            message: message.into(),
        });
        self
    }

    /// Short form used when the error is reported inline for one batch entry.
    pub fn summary(&self) -> String {
        format!("{}: {}", self.code.as_str(), self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_dotted_and_stable() {
        assert_eq!(ErrorCode::SceneNameCollision.as_str(), "scene.name_collision");
        assert_eq!(
            ErrorCode::SessionIndexOutOfRange.as_str(),
            "session.index_out_of_range"
        );
    }

    #[test]
    fn name_collision_carries_details_and_hint() {
        let err = Error::scene_name_collision("Armature", "bone", "thigh.L", "thigh.R");
        assert_eq!(err.code, ErrorCode::SceneNameCollision);
        assert_eq!(err.details["to"], "thigh.R");
        assert_eq!(err.hints.len(), 1);
        assert!(err.message.contains("thigh.R"));
    }

    #[test]
    fn summary_includes_code() {
        let err = Error::scene_entity_not_found("Cube", "uv_map", "UVMap");
        assert!(err.summary().starts_with("scene.entity_not_found:"));
    }
}
