use clap::Args;
use serde::Serialize;

use renamer::{BulkResult, DeleteOutcome};

use super::{open_workspace, CmdResult, GlobalArgs, SceneArgs, PARTIAL_FAILURE_EXIT};

#[derive(Args)]
pub struct DeleteArgs {
    #[command(flatten)]
    pub scene: SceneArgs,

    /// Delete only the entry at this table index (it must be selected)
    #[arg(long, value_name = "N")]
    pub index: Option<usize>,

    /// Save the scene file (default is a dry run against the loaded copy)
    #[arg(long)]
    pub write: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteOutput {
    pub command: &'static str,
    pub dry_run: bool,
    #[serde(flatten)]
    pub result: BulkResult<DeleteOutcome>,
    /// Entries left in the table afterwards.
    pub remaining: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

pub fn run(args: DeleteArgs, global: &GlobalArgs) -> CmdResult<DeleteOutput> {
    let mut ws = open_workspace(&args.scene, global)?;
    let result = ws.session.delete(&mut ws.scene, args.index)?;

    let path = if args.write {
        ws.save()?;
        Some(ws.path.display().to_string())
    } else {
        None
    };

    let exit_code = if result.has_failures() {
        PARTIAL_FAILURE_EXIT
    } else {
        0
    };

    Ok((
        DeleteOutput {
            command: "delete",
            dry_run: !args.write,
            remaining: ws.session.len(),
            result,
            path,
        },
        exit_code,
    ))
}
