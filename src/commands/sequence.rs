use clap::Args;
use serde::Serialize;

use renamer::{Direction, SequenceSpec};

use super::{CmdResult, GlobalArgs};

#[derive(Args)]
pub struct SequenceArgs {
    /// Text before the counter
    #[arg(long, default_value = "")]
    pub base: String,

    /// First counter value: digits (e.g. 1) or a single letter (e.g. A)
    #[arg(long)]
    pub start: Option<String>,

    /// Text after the counter
    #[arg(long, default_value = "")]
    pub last: String,

    /// How many names to generate
    #[arg(long, default_value_t = 1)]
    pub count: usize,

    /// List names bottom-up, as `--seq-up` assigns them
    #[arg(long)]
    pub up: bool,
}

#[derive(Debug, Serialize)]
pub struct SequenceOutput {
    pub command: &'static str,
    pub names: Vec<String>,
}

pub fn run(args: SequenceArgs, global: &GlobalArgs) -> CmdResult<SequenceOutput> {
    let start = args
        .start
        .unwrap_or_else(|| global.defaults.sequence_start.clone());
    let direction = if args.up { Direction::Up } else { Direction::Down };
    let spec = SequenceSpec::new(args.base, start, args.last).with_direction(direction);

    let mut names: Vec<String> = (0..args.count).map(|i| spec.name_at(i)).collect();
    if spec.direction == Direction::Up {
        names.reverse();
    }

    Ok((
        SequenceOutput {
            command: "sequence",
            names,
        },
        0,
    ))
}
