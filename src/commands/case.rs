use clap::Args;
use serde::Serialize;

use renamer::{apply_case, CaseMode};

use super::CmdResult;

#[derive(Args)]
pub struct CaseArgs {
    /// none, upper, lower, title, snake, camel, pascal or kebab
    pub mode: String,

    /// Names to convert
    #[arg(required = true)]
    pub names: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertedName {
    pub name: String,
    pub converted: String,
}

#[derive(Debug, Serialize)]
pub struct CaseOutput {
    pub command: &'static str,
    pub mode: CaseMode,
    pub results: Vec<ConvertedName>,
}

pub fn run_json(args: CaseArgs) -> CmdResult<CaseOutput> {
    let mode = CaseMode::from_str(&args.mode)?;
    let results = args
        .names
        .into_iter()
        .map(|name| ConvertedName {
            converted: apply_case(&name, mode),
            name,
        })
        .collect();

    Ok((
        CaseOutput {
            command: "case",
            mode,
            results,
        },
        0,
    ))
}
