use clap::{Parser, Subcommand};

use commands::GlobalArgs;

mod commands;
mod output;
mod tty;

use commands::{apply, case, config, delete, mirror, preview, sequence};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "renamer")]
#[command(version = VERSION)]
#[command(about = "Batch renamer for scene entities: objects, bones, vertex groups, shape keys and more")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Swap left/right tokens in names
    Mirror(mirror::MirrorArgs),
    /// Generate sequential names
    Sequence(sequence::SequenceArgs),
    /// Convert names to a case style
    Case(case::CaseArgs),
    /// Show the rename table for a scene selection
    Preview(preview::PreviewArgs),
    /// Apply bulk renames to a scene (dry run unless --write)
    Apply(apply::ApplyArgs),
    /// Delete selected entities from a scene (dry run unless --write)
    Delete(delete::DeleteArgs),
    /// Manage global renamer configuration
    Config(config::ConfigArgs),
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let global = GlobalArgs {
        defaults: renamer::defaults::load_defaults(),
    };

    let (json_result, exit_code) = commands::run_json(cli.command, &global);
    if let Err(err) = output::print_json_result(json_result) {
        eprintln!("{}", err.summary());
        return std::process::ExitCode::from(exit_code_to_u8(1));
    }

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
