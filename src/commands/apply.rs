use clap::Args;
use serde::Serialize;

use renamer::{apply_plan, parse_plan, BulkResult, CaseMode, CommitOutcome, Direction, OpReport, RenameOp};

use super::{
    open_workspace, read_json_spec_to_string, CmdResult, EntryTable, GlobalArgs, SceneArgs,
    PARTIAL_FAILURE_EXIT,
};

#[derive(Args)]
pub struct ApplyArgs {
    #[command(flatten)]
    pub scene: SceneArgs,

    /// Case conversion (none, upper, lower, title, snake, camel, pascal, kebab)
    #[arg(long, value_name = "MODE")]
    pub case: Option<String>,

    /// Prepend text to each selected name
    #[arg(long, value_name = "TEXT")]
    pub prefix: Option<String>,

    /// Append text to each selected name
    #[arg(long, value_name = "TEXT")]
    pub suffix: Option<String>,

    /// Sequence: text before the counter
    #[arg(long, value_name = "TEXT")]
    pub seq_base: Option<String>,

    /// Sequence: first counter value (digits or a single letter)
    #[arg(long, value_name = "START")]
    pub seq_start: Option<String>,

    /// Sequence: text after the counter
    #[arg(long, value_name = "TEXT")]
    pub seq_last: Option<String>,

    /// Sequence: number from the bottom of the table up
    #[arg(long)]
    pub seq_up: bool,

    /// Swap left/right tokens on each selected name
    #[arg(long)]
    pub mirror: bool,

    /// Rename plan: inline JSON, @file, or - for stdin. Runs after the flags above.
    /// Use a plan to chain several rename steps; the flags accept only one.
    #[arg(long, value_name = "JSON")]
    pub plan: Option<String>,

    /// Commit the renames and save the scene file (default is a dry run)
    #[arg(long)]
    pub write: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyOutput {
    pub command: &'static str,
    pub dry_run: bool,
    pub operations: Vec<OpReport>,
    /// Pending names before commit.
    pub preview: EntryTable,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit: Option<BulkResult<CommitOutcome>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub committed_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

pub fn run(args: ApplyArgs, global: &GlobalArgs) -> CmdResult<ApplyOutput> {
    let ops = build_ops(&args, global)?;
    let mut ws = open_workspace(&args.scene, global)?;

    let operations = apply_plan(&mut ws.session, ops)?;
    let preview = EntryTable::from_workspace(&ws);

    if !args.write {
        return Ok((
            ApplyOutput {
                command: "apply",
                dry_run: true,
                operations,
                preview,
                commit: None,
                committed_at: None,
                path: None,
            },
            0,
        ));
    }

    let commit = ws.session.commit(&mut ws.scene);
    ws.save()?;
    renamer::log_status!(
        "commit",
        "{} renamed, {} failed, {} skipped",
        commit.summary.succeeded,
        commit.summary.failed,
        commit.summary.skipped
    );

    let exit_code = if commit.has_failures() {
        PARTIAL_FAILURE_EXIT
    } else {
        0
    };

    Ok((
        ApplyOutput {
            command: "apply",
            dry_run: false,
            operations,
            preview,
            commit: Some(commit),
            committed_at: Some(chrono::Local::now().to_rfc3339()),
            path: Some(ws.path.display().to_string()),
        },
        exit_code,
    ))
}

/// Turn the convenience flags into plan operations, then append `--plan`.
///
/// Each rename step rebuilds names from the current ones, so at most one
/// rename flag is accepted.
fn build_ops(args: &ApplyArgs, global: &GlobalArgs) -> renamer::Result<Vec<RenameOp>> {
    let mut ops = Vec::new();

    if let Some(mode) = &args.case {
        ops.push(RenameOp::Case {
            mode: CaseMode::from_str(mode)?,
        });
    }
    if let Some(text) = &args.prefix {
        ops.push(RenameOp::Prefix { text: text.clone() });
    }
    if let Some(text) = &args.suffix {
        ops.push(RenameOp::Suffix { text: text.clone() });
    }

    let wants_sequence = args.seq_base.is_some()
        || args.seq_start.is_some()
        || args.seq_last.is_some()
        || args.seq_up;
    if wants_sequence {
        ops.push(RenameOp::Sequence {
            base: args.seq_base.clone().unwrap_or_default(),
            start: args
                .seq_start
                .clone()
                .unwrap_or_else(|| global.defaults.sequence_start.clone()),
            last: args.seq_last.clone().unwrap_or_default(),
            direction: if args.seq_up { Direction::Up } else { Direction::Down },
        });
    }

    if args.mirror {
        ops.push(RenameOp::Mirror { index: None });
    }

    if ops.len() > 1 {
        let flags: Vec<String> = ops.iter().map(|op| format!("--{}", op.name())).collect();
        return Err(renamer::Error::validation_invalid_argument(
            "flags",
            format!("Only one rename flag can be used at a time, got {}", flags.join(", ")),
            None,
            Some(flags),
        )
        .with_hint("Pass an ordered list of steps with --plan instead"));
    }

    if let Some(spec) = &args.plan {
        let raw = read_json_spec_to_string(spec)?;
        ops.extend(parse_plan(&raw)?);
    }

    Ok(ops)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::{global, scene_args, scene_file};
    use renamer::{EntityKind, MemoryScene, SceneGraph};
    use std::path::Path;

    fn args(scene: String, kind: &str) -> ApplyArgs {
        ApplyArgs {
            scene: scene_args(scene, kind),
            case: None,
            prefix: None,
            suffix: None,
            seq_base: None,
            seq_start: None,
            seq_last: None,
            seq_up: false,
            mirror: false,
            plan: None,
            write: false,
        }
    }

    fn pending(output: &ApplyOutput) -> Vec<&str> {
        output.preview.entries.iter().map(|e| e.new_name.as_str()).collect()
    }

    #[test]
    fn dry_run_leaves_scene_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let scene = scene_file(dir.path());
        let before = std::fs::read_to_string(&scene).unwrap();
        let mut args = args(scene.clone(), "vertex_group");
        args.prefix = Some("DEF_".to_string());

        let (output, code) = run(args, &global()).unwrap();

        assert_eq!(code, 0);
        assert!(output.dry_run);
        assert!(output.commit.is_none());
        assert_eq!(pending(&output), vec!["DEF_arm_L", "DEF_arm_R", "DEF_head"]);
        assert_eq!(std::fs::read_to_string(&scene).unwrap(), before);
    }

    #[test]
    fn sequence_flags_use_configured_start() {
        let dir = tempfile::tempdir().unwrap();
        let mut args = args(scene_file(dir.path()), "vertex_group");
        args.scene.only = vec!["arm*".to_string()];
        args.seq_base = Some("grp_".to_string());
        args.seq_up = true;

        let (output, _) = run(args, &global()).unwrap();

        assert_eq!(pending(&output), vec!["grp_2", "grp_1", "head"]);
    }

    #[test]
    fn write_commits_and_saves() {
        let dir = tempfile::tempdir().unwrap();
        let scene = scene_file(dir.path());
        let mut args = args(scene.clone(), "vertex_group");
        args.scene.only = vec!["arm*".to_string()];
        args.mirror = true;
        args.write = true;

        let (output, code) = run(args, &global()).unwrap();

        assert_eq!(code, 0);
        let commit = output.commit.unwrap();
        assert_eq!(commit.summary.succeeded, 2);
        assert_eq!(commit.summary.skipped, 1);
        assert!(output.committed_at.is_some());

        let saved = MemoryScene::load(Path::new(&scene)).unwrap();
        assert_eq!(
            saved.list("Body", EntityKind::VertexGroup).unwrap(),
            vec!["arm_R.001", "arm_L", "head"]
        );
    }

    #[test]
    fn collision_under_error_policy_exits_partial() {
        let dir = tempfile::tempdir().unwrap();
        let mut args = args(scene_file(dir.path()), "vertex_group");
        args.plan = Some(r#"[{"op":"edit","index":0,"new_name":"head"},{"op":"edit","index":2,"new_name":"Head"}]"#.to_string());
        args.write = true;
        let mut global = global();
        global.defaults.collision = renamer::CollisionPolicy::Error;

        let (output, code) = run(args, &global).unwrap();

        assert_eq!(code, PARTIAL_FAILURE_EXIT);
        let commit = output.commit.unwrap();
        assert_eq!(commit.summary.failed, 1);
        assert_eq!(commit.summary.succeeded, 2);
    }

    #[test]
    fn combined_rename_flags_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let scene = scene_file(dir.path());
        let before = std::fs::read_to_string(&scene).unwrap();
        let mut args = args(scene.clone(), "vertex_group");
        args.prefix = Some("DEF_".to_string());
        args.suffix = Some("_jnt".to_string());
        args.write = true;

        let err = run(args, &global()).unwrap_err();

        assert_eq!(err.code.as_str(), "validation.invalid_argument");
        assert_eq!(err.details["tried"], serde_json::json!(["--prefix", "--suffix"]));
        assert!(!err.hints.is_empty());
        assert_eq!(std::fs::read_to_string(&scene).unwrap(), before);
    }

    #[test]
    fn case_with_mirror_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut args = args(scene_file(dir.path()), "vertex_group");
        args.case = Some("upper".to_string());
        args.mirror = true;

        let err = run(args, &global()).unwrap_err();
        assert_eq!(err.details["tried"], serde_json::json!(["--case", "--mirror"]));
    }

    #[test]
    fn sequence_flags_count_as_one_rename() {
        let dir = tempfile::tempdir().unwrap();
        let mut args = args(scene_file(dir.path()), "vertex_group");
        args.seq_base = Some("g".to_string());
        args.seq_start = Some("A".to_string());
        args.seq_up = true;

        let (output, _) = run(args, &global()).unwrap();
        assert_eq!(output.operations, vec![OpReport { op: "sequence", affected: 3 }]);
        assert_eq!(pending(&output), vec!["gC", "gB", "gA"]);
    }

    #[test]
    fn bad_case_mode_fails_before_loading() {
        let mut args = args("/does/not/exist.json".to_string(), "bone");
        args.case = Some("loud".to_string());
        let err = run(args, &global()).unwrap_err();
        assert_eq!(err.code.as_str(), "validation.invalid_argument");
    }
}
