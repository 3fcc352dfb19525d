use clap::Args;
use serde::Serialize;

use super::{open_workspace, CmdResult, EntryTable, GlobalArgs, SceneArgs};

#[derive(Args)]
pub struct PreviewArgs {
    #[command(flatten)]
    pub scene: SceneArgs,
}

#[derive(Debug, Serialize)]
pub struct PreviewOutput {
    pub command: &'static str,
    #[serde(flatten)]
    pub table: EntryTable,
}

pub fn run(args: PreviewArgs, global: &GlobalArgs) -> CmdResult<PreviewOutput> {
    let ws = open_workspace(&args.scene, global)?;
    Ok((
        PreviewOutput {
            command: "preview",
            table: EntryTable::from_workspace(&ws),
        },
        0,
    ))
}
