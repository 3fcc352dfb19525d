//! Batch rename plans.
//!
//! A plan is a JSON list of operations applied to a session in order:
//!
//! ```json
//! [
//!   { "op": "select", "patterns": ["thigh*"] },
//!   { "op": "prefix", "text": "DEF-" },
//!   { "op": "sequence", "base": "bone_", "start": "01", "direction": "up" }
//! ]
//! ```

use serde::{Deserialize, Serialize};

use crate::case::CaseMode;
use crate::error::{Error, Result};
use crate::sequence::{Direction, SequenceSpec};
use crate::session::Session;
use crate::validation;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum RenameOp {
    Prefix {
        text: String,
    },
    Suffix {
        text: String,
    },
    Sequence {
        #[serde(default)]
        base: String,
        #[serde(default)]
        start: String,
        #[serde(default)]
        last: String,
        #[serde(default)]
        direction: Direction,
    },
    /// Toggle mirroring on one entry, or on every selected entry when `index` is absent.
    Mirror {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        index: Option<usize>,
    },
    Case {
        mode: CaseMode,
    },
    Clear,
    InvertSelection,
    Select {
        patterns: Vec<String>,
    },
    Edit {
        index: usize,
        new_name: String,
    },
}

/// What one operation did to the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpReport {
    pub op: &'static str,
    pub affected: usize,
}

impl RenameOp {
    pub fn name(&self) -> &'static str {
        match self {
            RenameOp::Prefix { .. } => "prefix",
            RenameOp::Suffix { .. } => "suffix",
            RenameOp::Sequence { .. } => "sequence",
            RenameOp::Mirror { .. } => "mirror",
            RenameOp::Case { .. } => "case",
            RenameOp::Clear => "clear",
            RenameOp::InvertSelection => "invert_selection",
            RenameOp::Select { .. } => "select",
            RenameOp::Edit { .. } => "edit",
        }
    }

    /// Apply to the session. Fails on a bad index or an empty `select`.
    pub fn apply(self, session: &mut Session) -> Result<OpReport> {
        let op = self.name();
        let affected = match self {
            RenameOp::Prefix { text } => session.apply_prefix(&text),
            RenameOp::Suffix { text } => session.apply_suffix(&text),
            RenameOp::Sequence {
                base,
                start,
                last,
                direction,
            } => session.apply_sequence(SequenceSpec::new(base, start, last).with_direction(direction)),
            RenameOp::Mirror { index: Some(index) } => {
                session.toggle_mirror(index)?;
                1
            }
            RenameOp::Mirror { index: None } => session.mirror_selected(),
            RenameOp::Case { mode } => session.apply_case(mode),
            RenameOp::Clear => {
                session.clear_new_names();
                session.len()
            }
            RenameOp::InvertSelection => {
                if session.invert_selection() {
                    session.len()
                } else {
                    0
                }
            }
            RenameOp::Select { patterns } => {
                validation::require_non_empty_vec(&patterns, "patterns", "select needs at least one glob")?;
                session.select_matching(&patterns)
            }
            RenameOp::Edit { index, new_name } => {
                session.set_new_name(index, new_name)?;
                1
            }
        };
        Ok(OpReport { op, affected })
    }
}

/// Parse a plan: either a JSON array of operations or a single operation object.
pub fn parse_plan(json: &str) -> Result<Vec<RenameOp>> {
    let value: serde_json::Value = serde_json::from_str(json)
        .map_err(|e| Error::validation_invalid_json(e, Some("parse plan".to_string()), Some(json.to_string())))?;

    let parsed = if value.is_array() {
        serde_json::from_value::<Vec<RenameOp>>(value)
    } else {
        serde_json::from_value::<RenameOp>(value).map(|op| vec![op])
    };

    parsed.map_err(|e| Error::validation_invalid_json(e, Some("parse plan operations".to_string()), None))
}

/// Apply every operation in order, stopping at the first failure.
pub fn apply_plan(session: &mut Session, plan: Vec<RenameOp>) -> Result<Vec<OpReport>> {
    plan.into_iter().map(|op| op.apply(session)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::EntityKind;
    use crate::scene::MemoryScene;

    fn session() -> Session {
        let scene = MemoryScene::from_json(
            r#"{
                "selected": ["Body"],
                "objects": [
                    { "name": "Body", "type": "mesh", "vertex_groups": ["arm_L", "arm_R", "head"] }
                ]
            }"#,
        )
        .unwrap();
        let mut session = Session::new(EntityKind::VertexGroup);
        session.populate(&scene, EntityKind::VertexGroup).unwrap();
        session
    }

    fn new_names(session: &Session) -> Vec<&str> {
        session.entries().iter().map(|e| e.new_name.as_str()).collect()
    }

    #[test]
    fn parses_tagged_operations() {
        let plan = parse_plan(
            r#"[
                { "op": "prefix", "text": "DEF_" },
                { "op": "sequence", "base": "b", "direction": "up" },
                { "op": "mirror" },
                { "op": "case", "mode": "upper" },
                { "op": "invert_selection" },
                { "op": "edit", "index": 2, "new_name": "Head" }
            ]"#,
        )
        .unwrap();

        assert_eq!(plan.len(), 6);
        assert_eq!(plan[0], RenameOp::Prefix { text: "DEF_".to_string() });
        assert_eq!(
            plan[1],
            RenameOp::Sequence {
                base: "b".to_string(),
                start: String::new(),
                last: String::new(),
                direction: Direction::Up,
            }
        );
        assert_eq!(plan[2], RenameOp::Mirror { index: None });
        assert_eq!(plan[3], RenameOp::Case { mode: CaseMode::Upper });
    }

    #[test]
    fn single_object_is_a_one_step_plan() {
        let plan = parse_plan(r#"{ "op": "clear" }"#).unwrap();
        assert_eq!(plan, vec![RenameOp::Clear]);
    }

    #[test]
    fn unknown_op_is_rejected() {
        let err = parse_plan(r#"[{ "op": "explode" }]"#).unwrap_err();
        assert_eq!(err.code.as_str(), "validation.invalid_json");

        let err = parse_plan("not json").unwrap_err();
        assert_eq!(err.code.as_str(), "validation.invalid_json");
    }

    #[test]
    fn plan_applies_in_order() {
        let mut session = session();
        let plan = parse_plan(
            r#"[
                { "op": "select", "patterns": ["arm_*"] },
                { "op": "mirror" },
                { "op": "suffix", "text": "_x" },
                { "op": "edit", "index": 2, "new_name": "Head" }
            ]"#,
        )
        .unwrap();

        let reports = apply_plan(&mut session, plan).unwrap();

        assert_eq!(reports[0], OpReport { op: "select", affected: 2 });
        assert_eq!(new_names(&session), vec!["arm_L_x", "arm_R_x", "Head"]);
    }

    #[test]
    fn mirror_by_index_toggles_one_entry() {
        let mut session = session();
        RenameOp::Mirror { index: Some(1) }.apply(&mut session).unwrap();
        assert_eq!(new_names(&session), vec!["arm_L", "arm_L", "head"]);
    }

    #[test]
    fn empty_select_is_rejected() {
        let mut session = session();
        let err = RenameOp::Select { patterns: Vec::new() }.apply(&mut session).unwrap_err();
        assert_eq!(err.code.as_str(), "validation.invalid_argument");
        assert!(session.entries().iter().all(|e| e.selected));
    }

    #[test]
    fn out_of_range_edit_stops_the_plan() {
        let mut session = session();
        let plan = vec![
            RenameOp::Edit {
                index: 7,
                new_name: "x".to_string(),
            },
            RenameOp::Clear,
        ];
        let err = apply_plan(&mut session, plan).unwrap_err();
        assert_eq!(err.code.as_str(), "session.index_out_of_range");
        assert_eq!(new_names(&session), vec!["arm_L", "arm_R", "head"]);
    }
}
