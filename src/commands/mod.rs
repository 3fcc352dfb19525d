use clap::Args;
use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};

use renamer::defaults::Defaults;
use renamer::{pattern, validation};
use renamer::{EntityKind, MemoryScene, RenameEntry, SceneGraph, Session};

pub type CmdResult<T> = renamer::Result<(T, i32)>;

/// Exit code when a batch ran but some entries failed.
pub const PARTIAL_FAILURE_EXIT: i32 = 3;

pub(crate) struct GlobalArgs {
    pub defaults: Defaults,
}

/// Arguments shared by every command that works on a scene file.
#[derive(Args, Debug, Clone)]
pub struct SceneArgs {
    /// Scene document (.json, .yaml or .yml)
    #[arg(long, value_name = "FILE")]
    pub scene: String,

    /// Entity kind to list (object, vertex_group, shape_key, uv_map, material, bone, action)
    #[arg(long, value_name = "KIND")]
    pub kind: Option<String>,

    /// Replace the scene selection with objects matching these globs
    #[arg(long, value_name = "GLOB")]
    pub select: Vec<String>,

    /// Restrict the entry selection to names matching these globs
    #[arg(long, value_name = "GLOB")]
    pub only: Vec<String>,
}

/// A loaded scene together with the session built from it.
pub struct Workspace {
    pub path: PathBuf,
    pub scene: MemoryScene,
    pub session: Session,
}

impl Workspace {
    pub fn save(&self) -> renamer::Result<()> {
        self.scene.save(&self.path)?;
        renamer::log_status!("scene", "Saved {}", self.path.display());
        Ok(())
    }
}

/// Load the scene, apply `--select`, and populate a session for the requested kind.
pub(crate) fn open_workspace(args: &SceneArgs, global: &GlobalArgs) -> renamer::Result<Workspace> {
    let raw = validation::require_non_empty(&args.scene, "scene", "Scene path cannot be empty")?;
    let path = pattern::expand_path(raw)?;
    let mut scene = MemoryScene::load(&path)?.with_settings(global.defaults.scene_settings());

    if !args.select.is_empty() {
        let matching: Vec<String> = scene
            .objects
            .iter()
            .map(|o| o.name.clone())
            .filter(|name| pattern::matches_any(&args.select, name))
            .collect();
        scene.set_selection(matching);
    }

    let kind = match &args.kind {
        Some(raw) => EntityKind::from_str(raw)?,
        None => global.defaults.kind,
    };

    let mut session = Session::new(kind);
    session.refresh(&scene, kind)?;

    if !args.only.is_empty() {
        session.select_matching(&args.only);
    }

    Ok(Workspace {
        path,
        scene,
        session,
    })
}

/// Entry table as reported by preview, apply and delete.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryTable {
    pub kind: EntityKind,
    pub has_valid_items: bool,
    pub selected_objects: Vec<String>,
    pub entries: Vec<RenameEntry>,
}

impl EntryTable {
    pub fn from_workspace(ws: &Workspace) -> Self {
        Self {
            kind: ws.session.kind(),
            has_valid_items: ws.session.has_valid_items(),
            selected_objects: ws.scene.selected_objects(),
            entries: ws.session.entries().to_vec(),
        }
    }
}

// ============================================================================
// JSON Input Parsing (CLI layer)
// ============================================================================

/// Read plan JSON from a string, a file (@path), or stdin (-).
pub(crate) fn read_json_spec_to_string(spec: &str) -> renamer::Result<String> {
    use std::io::IsTerminal;

    if spec.trim() == "-" {
        let mut buf = String::new();
        let mut stdin = std::io::stdin();
        if stdin.is_terminal() {
            return Err(renamer::Error::validation_invalid_argument(
                "plan",
                "Cannot read JSON from stdin when stdin is a TTY",
                None,
                None,
            ));
        }
        stdin.read_to_string(&mut buf).map_err(|e| {
            renamer::Error::internal_io(e.to_string(), Some("read stdin".to_string()))
        })?;
        return Ok(buf);
    }

    if let Some(path) = spec.strip_prefix('@') {
        if path.trim().is_empty() {
            return Err(renamer::Error::validation_invalid_argument(
                "plan",
                "Invalid plan '@' (missing file path)",
                None,
                None,
            ));
        }
        let path = pattern::expand_path(path)?;
        return renamer::io::read_file(Path::new(&path), &format!("read {}", path.display()));
    }

    Ok(spec.to_string())
}

pub mod apply;
pub mod case;
pub mod config;
pub mod delete;
pub mod mirror;
pub mod preview;
pub mod sequence;

/// Dispatch a command to its handler and map result to JSON.
macro_rules! dispatch {
    ($args:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run_json($args))
    };
    ($args:expr, $global:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run($args, $global))
    };
}

pub(crate) fn run_json(
    command: crate::Commands,
    global: &GlobalArgs,
) -> (renamer::Result<serde_json::Value>, i32) {
    crate::tty::status("renamer is working...");

    match command {
        // Commands without scene context
        crate::Commands::Mirror(args) => dispatch!(args, mirror),
        crate::Commands::Case(args) => dispatch!(args, case),

        // Commands with global context
        crate::Commands::Sequence(args) => dispatch!(args, global, sequence),
        crate::Commands::Preview(args) => dispatch!(args, global, preview),
        crate::Commands::Apply(args) => dispatch!(args, global, apply),
        crate::Commands::Delete(args) => dispatch!(args, global, delete),
        crate::Commands::Config(args) => dispatch!(args, global, config),
    }
}
