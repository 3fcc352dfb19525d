use clap::Args;
use serde::Serialize;

use renamer::{has_laterality, mirror};

use super::CmdResult;

#[derive(Args)]
pub struct MirrorArgs {
    /// Names to mirror (e.g. hand.L, Arm_Left)
    #[arg(required = true)]
    pub names: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MirroredName {
    pub name: String,
    pub mirrored: String,
    pub changed: bool,
}

#[derive(Debug, Serialize)]
pub struct MirrorOutput {
    pub command: &'static str,
    pub results: Vec<MirroredName>,
}

pub fn run_json(args: MirrorArgs) -> CmdResult<MirrorOutput> {
    let results = args
        .names
        .into_iter()
        .map(|name| {
            let mirrored = mirror(&name);
            MirroredName {
                changed: has_laterality(&name),
                mirrored,
                name,
            }
        })
        .collect();

    Ok((
        MirrorOutput {
            command: "mirror",
            results,
        },
        0,
    ))
}
