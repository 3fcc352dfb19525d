//! Rename session: the preview table between a scene and its renames.
//!
//! A session is populated from the scene selection, edited in bulk
//! (prefix, suffix, sequence, mirror, case), then committed entry by entry.
//! Edits survive a repopulation as long as the same `(owner, name)` pair
//! comes back.

use serde::Serialize;
use std::collections::HashMap;

use crate::case::{self, CaseMode};
use crate::entity::{EntityKind, OwnerId};
use crate::error::{Error, Result};
use crate::mirror::mirror;
use crate::output::BulkResult;
use crate::scene::{InteractionMode, ObjectType, SceneGraph};
use crate::sequence::{Direction, SequenceSpec};

// ============================================================================
// Types
// ============================================================================

/// One row of the preview table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameEntry {
    pub current_name: String,
    pub new_name: String,
    pub selected: bool,
    pub source_kind: EntityKind,
    pub owner: OwnerId,
}

impl RenameEntry {
    fn new(owner: &str, name: &str, kind: EntityKind) -> Self {
        Self {
            current_name: name.to_string(),
            new_name: name.to_string(),
            selected: true,
            source_kind: kind,
            owner: OwnerId::new(owner),
        }
    }

    /// Stable identifier used in batch reports: `owner/kind/name`.
    pub fn id(&self) -> String {
        format!(
            "{}/{}/{}",
            self.owner,
            self.source_kind.as_str(),
            self.current_name
        )
    }

    pub fn is_changed(&self) -> bool {
        self.new_name != self.current_name
    }

    fn key(&self) -> (OwnerId, String) {
        (self.owner.clone(), self.current_name.clone())
    }
}

/// Per-entry payload of a commit report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitOutcome {
    pub owner: String,
    pub kind: EntityKind,
    pub from: String,
    pub to: String,
    /// Name the scene actually assigned; differs from `to` after collision numbering.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned: Option<String>,
}

/// Per-entry payload of a delete report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteOutcome {
    pub owner: String,
    pub kind: EntityKind,
    pub name: String,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    entries: Vec<RenameEntry>,
    kind: EntityKind,
    has_valid_items: bool,
    last_selection: Option<Vec<String>>,
    last_kind: Option<EntityKind>,
}

// ============================================================================
// Population
// ============================================================================

impl Session {
    pub fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub fn entries(&self) -> &[RenameEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// False when the last population found nothing to show.
    pub fn has_valid_items(&self) -> bool {
        self.has_valid_items
    }

    pub fn get(&self, index: usize) -> Result<&RenameEntry> {
        self.entries
            .get(index)
            .ok_or_else(|| Error::session_index_out_of_range(index, self.entries.len()))
    }

    fn entry_mut(&mut self, index: usize) -> Result<&mut RenameEntry> {
        let len = self.entries.len();
        self.entries
            .get_mut(index)
            .ok_or_else(|| Error::session_index_out_of_range(index, len))
    }

    /// Repopulate only if the selection or the requested kind changed since
    /// the last refresh. More than one selected object always shows objects.
    ///
    /// Returns whether the table was rebuilt.
    pub fn refresh<S: SceneGraph + ?Sized>(&mut self, scene: &S, kind: EntityKind) -> Result<bool> {
        let selection = scene.selected_objects();
        let kind = if selection.len() > 1 {
            EntityKind::Object
        } else {
            kind
        };

        let selection_changed = self.last_selection.as_ref() != Some(&selection);
        let kind_changed = self.last_kind != Some(kind);
        if !selection_changed && !kind_changed {
            return Ok(false);
        }

        self.last_selection = Some(selection);
        self.last_kind = Some(kind);
        self.populate(scene, kind)?;
        Ok(true)
    }

    /// Rebuild the entry table from the scene selection.
    pub fn populate<S: SceneGraph + ?Sized>(&mut self, scene: &S, kind: EntityKind) -> Result<()> {
        self.kind = kind;
        let selection = scene.selected_objects();
        if selection.is_empty() {
            self.has_valid_items = false;
            return Ok(());
        }

        let previous: HashMap<(OwnerId, String), RenameEntry> = self
            .entries
            .drain(..)
            .map(|entry| (entry.key(), entry))
            .collect();

        let mut fresh: Vec<RenameEntry> = Vec::new();
        let mut add = |owner: &str, name: &str, kind: EntityKind| {
            if fresh
                .iter()
                .any(|e| e.owner.as_str() == owner && e.current_name == name)
            {
                return;
            }
            let mut entry = RenameEntry::new(owner, name, kind);
            if let Some(prev) = previous.get(&entry.key()) {
                entry.selected = prev.selected;
                entry.new_name = prev.new_name.clone();
            }
            fresh.push(entry);
        };

        if selection.len() > 1 || kind == EntityKind::Object {
            for object in &selection {
                add(object, object, EntityKind::Object);
            }
        } else {
            let owner = selection[0].as_str();
            for name in entity_names(scene, owner, kind)? {
                add(owner, &name, kind);
            }
        }

        self.has_valid_items = !fresh.is_empty();
        crate::log_status!(
            "session",
            "{} {} entr{} from {} selected object(s)",
            fresh.len(),
            kind.as_str(),
            if fresh.len() == 1 { "y" } else { "ies" },
            selection.len()
        );
        self.entries = fresh;
        Ok(())
    }
}

/// Names shown for a single selected object and the requested kind.
fn entity_names<S: SceneGraph + ?Sized>(scene: &S, owner: &str, kind: EntityKind) -> Result<Vec<String>> {
    let Some(object_type) = scene.object_type(owner) else {
        return Ok(Vec::new());
    };

    match (object_type, kind) {
        (
            ObjectType::Mesh,
            EntityKind::VertexGroup | EntityKind::ShapeKey | EntityKind::UvMap | EntityKind::Material,
        ) => scene.list(owner, kind),
        (ObjectType::Armature, EntityKind::Bone) => {
            let selected = match scene.interaction_mode() {
                InteractionMode::Pose | InteractionMode::EditArmature => scene.selected_bones(owner),
                InteractionMode::Object => Vec::new(),
            };
            if selected.is_empty() {
                scene.list(owner, kind)
            } else {
                Ok(selected)
            }
        }
        (_, EntityKind::Action) => scene.list(owner, kind),
        _ => Ok(Vec::new()),
    }
}

// ============================================================================
// Bulk operations
// ============================================================================

impl Session {
    /// `new_name := text + current_name` for selected entries. Empty text is a no-op.
    pub fn apply_prefix(&mut self, text: &str) -> usize {
        if text.is_empty() {
            return 0;
        }
        self.for_selected(|entry| format!("{}{}", text, entry.current_name))
    }

    /// `new_name := current_name + text` for selected entries. Empty text is a no-op.
    pub fn apply_suffix(&mut self, text: &str) -> usize {
        if text.is_empty() {
            return 0;
        }
        self.for_selected(|entry| format!("{}{}", entry.current_name, text))
    }

    /// Number the selected entries in table order, or bottom-up for [`Direction::Up`].
    ///
    /// Consumes the sequence input; returns how many entries were renamed.
    pub fn apply_sequence(&mut self, spec: SequenceSpec) -> usize {
        let mut targets: Vec<usize> = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.selected)
            .map(|(i, _)| i)
            .collect();

        if targets.is_empty() {
            crate::log_status!("sequence", "No entries selected for sequencing");
            return 0;
        }

        if spec.direction == Direction::Up {
            targets.reverse();
        }

        let spec = SequenceSpec {
            base: spec.base.trim().to_string(),
            start: spec.start.trim().to_string(),
            last: spec.last.trim().to_string(),
            direction: spec.direction,
        };

        for (position, idx) in targets.iter().enumerate() {
            self.entries[*idx].new_name = spec.name_at(position);
        }
        targets.len()
    }

    /// Mirror one entry, or revert it if its pending name is already the mirror.
    pub fn toggle_mirror(&mut self, index: usize) -> Result<()> {
        let entry = self.entry_mut(index)?;
        toggle_entry(entry);
        Ok(())
    }

    /// Toggle mirroring on every selected entry.
    pub fn mirror_selected(&mut self) -> usize {
        let mut count = 0;
        for entry in self.entries.iter_mut().filter(|e| e.selected) {
            toggle_entry(entry);
            count += 1;
        }
        count
    }

    pub fn apply_case(&mut self, mode: CaseMode) -> usize {
        self.for_selected(|entry| case::apply_case(&entry.current_name, mode))
    }

    /// Blank every pending name, selected or not. Blank entries are skipped on commit.
    pub fn clear_new_names(&mut self) {
        for entry in self.entries.iter_mut() {
            entry.new_name.clear();
        }
    }

    /// Flip every entry's selection. Returns false when there is nothing to flip.
    pub fn invert_selection(&mut self) -> bool {
        if self.entries.is_empty() {
            return false;
        }
        for entry in self.entries.iter_mut() {
            entry.selected = !entry.selected;
        }
        true
    }

    /// Select exactly the entries whose current name matches one of `patterns`.
    pub fn select_matching(&mut self, patterns: &[String]) -> usize {
        let mut count = 0;
        for entry in self.entries.iter_mut() {
            entry.selected = crate::pattern::matches_any(patterns, &entry.current_name);
            if entry.selected {
                count += 1;
            }
        }
        count
    }

    pub fn set_new_name(&mut self, index: usize, name: impl Into<String>) -> Result<()> {
        self.entry_mut(index)?.new_name = name.into();
        Ok(())
    }

    pub fn set_selected(&mut self, index: usize, selected: bool) -> Result<()> {
        self.entry_mut(index)?.selected = selected;
        Ok(())
    }

    fn for_selected(&mut self, rename: impl Fn(&RenameEntry) -> String) -> usize {
        let mut count = 0;
        for entry in self.entries.iter_mut().filter(|e| e.selected) {
            entry.new_name = rename(entry);
            count += 1;
        }
        count
    }
}

fn toggle_entry(entry: &mut RenameEntry) {
    entry.new_name = if mirror(&entry.new_name) == entry.current_name {
        entry.current_name.clone()
    } else {
        mirror(&entry.current_name)
    };
}

// ============================================================================
// Commit and delete
// ============================================================================

impl Session {
    /// Apply every selected, non-blank pending name to the scene.
    ///
    /// Each entry is renamed on its own; a failure is recorded and the rest
    /// of the batch still runs.
    pub fn commit<S: SceneGraph + ?Sized>(&mut self, scene: &mut S) -> BulkResult<CommitOutcome> {
        let mut bulk = BulkResult::new("commit");

        for entry in self.entries.iter_mut() {
            let id = entry.id();
            let mut outcome = CommitOutcome {
                owner: entry.owner.to_string(),
                kind: entry.source_kind,
                from: entry.current_name.clone(),
                to: entry.new_name.clone(),
                assigned: None,
            };

            if !entry.selected || entry.new_name.is_empty() {
                bulk.record_skipped(id, outcome);
                continue;
            }

            match scene.rename(
                entry.owner.as_str(),
                entry.source_kind,
                &entry.current_name,
                &entry.new_name,
            ) {
                Ok(assigned) => {
                    if entry.source_kind == EntityKind::Object {
                        entry.owner = OwnerId::new(assigned.as_str());
                    }
                    entry.current_name = assigned.clone();
                    entry.new_name = assigned.clone();
                    outcome.assigned = Some(assigned);
                    bulk.record_ok(id, outcome);
                }
                Err(err) => {
                    crate::log_status!(
                        "commit",
                        "Rename failed for {}: {}",
                        entry.current_name,
                        err.message
                    );
                    bulk.record_error(id, outcome, err.summary());
                }
            }
        }

        bulk
    }

    /// Remove selected entries (or only `index`, if it is selected) from the
    /// scene and the table. Entries whose removal fails stay in the table.
    pub fn delete<S: SceneGraph + ?Sized>(
        &mut self,
        scene: &mut S,
        index: Option<usize>,
    ) -> Result<BulkResult<DeleteOutcome>> {
        if let Some(i) = index {
            self.get(i)?;
        }

        let targets: Vec<usize> = self
            .entries
            .iter()
            .enumerate()
            .filter(|(i, e)| e.selected && index.map_or(true, |only| only == *i))
            .map(|(i, _)| i)
            .collect();

        let mut bulk = BulkResult::new("delete");

        // Back to front so earlier indices stay valid while removing.
        for idx in targets.into_iter().rev() {
            let entry = &self.entries[idx];
            let id = entry.id();
            let outcome = DeleteOutcome {
                owner: entry.owner.to_string(),
                kind: entry.source_kind,
                name: entry.current_name.clone(),
            };

            match scene.remove(entry.owner.as_str(), entry.source_kind, &entry.current_name) {
                Ok(()) => {
                    self.entries.remove(idx);
                    bulk.record_ok(id, outcome);
                }
                Err(err) => {
                    crate::log_status!("delete", "Delete failed for {}: {}", outcome.name, err.message);
                    bulk.record_error(id, outcome, err.summary());
                }
            }
        }

        bulk.results.reverse();
        self.has_valid_items = !self.entries.is_empty();
        Ok(bulk)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{CollisionPolicy, MemoryScene, SceneSettings};

    fn scene() -> MemoryScene {
        MemoryScene::from_json(
            r#"{
                "selected": ["Rig"],
                "objects": [
                    {
                        "name": "Rig",
                        "type": "armature",
                        "bones": [
                            { "name": "thigh.L" },
                            { "name": "thigh.R" },
                            { "name": "spine", "selected": true }
                        ],
                        "action": "Walk"
                    },
                    {
                        "name": "Body",
                        "type": "mesh",
                        "vertex_groups": ["arm_L", "arm_R", "head"],
                        "shape_keys": ["Basis", "Smile"],
                        "uv_maps": ["UVMap"],
                        "material_slots": ["Skin", null, "Skin"]
                    },
                    { "name": "Lamp", "type": "light" }
                ],
                "materials": ["Skin"],
                "actions": ["Walk"]
            }"#,
        )
        .unwrap()
    }

    fn names(session: &Session) -> Vec<(&str, &str)> {
        session
            .entries()
            .iter()
            .map(|e| (e.current_name.as_str(), e.new_name.as_str()))
            .collect()
    }

    fn populated(kind: EntityKind, select: &[&str]) -> (MemoryScene, Session) {
        let mut scene = scene();
        scene.set_selection(select.iter().map(|s| s.to_string()).collect());
        let mut session = Session::new(kind);
        session.populate(&scene, kind).unwrap();
        (scene, session)
    }

    #[test]
    fn populate_bones_shows_all_in_object_mode() {
        let (_, session) = populated(EntityKind::Bone, &["Rig"]);
        assert!(session.has_valid_items());
        assert_eq!(session.len(), 3);
        assert!(session.entries().iter().all(|e| e.selected && !e.is_changed()));
    }

    #[test]
    fn populate_bones_only_selected_in_pose_mode() {
        let mut scene = scene();
        scene.mode = InteractionMode::Pose;
        let mut session = Session::new(EntityKind::Bone);
        session.populate(&scene, EntityKind::Bone).unwrap();
        assert_eq!(names(&session), vec![("spine", "spine")]);
    }

    #[test]
    fn populate_mesh_collections_and_dedupes_materials() {
        let (_, session) = populated(EntityKind::Material, &["Body"]);
        assert_eq!(names(&session), vec![("Skin", "Skin")]);

        let (_, session) = populated(EntityKind::ShapeKey, &["Body"]);
        assert_eq!(session.len(), 2);
    }

    #[test]
    fn populate_kind_not_applicable_is_invalid() {
        let (_, session) = populated(EntityKind::VertexGroup, &["Rig"]);
        assert!(!session.has_valid_items());
        assert!(session.is_empty());

        let (_, session) = populated(EntityKind::Bone, &["Body"]);
        assert!(!session.has_valid_items());
    }

    #[test]
    fn populate_action_for_any_object_type() {
        let (_, session) = populated(EntityKind::Action, &["Rig"]);
        assert_eq!(names(&session), vec![("Walk", "Walk")]);

        let (_, session) = populated(EntityKind::Action, &["Lamp"]);
        assert!(!session.has_valid_items());
    }

    #[test]
    fn multi_selection_lists_objects() {
        let (_, session) = populated(EntityKind::UvMap, &["Rig", "Body"]);
        assert_eq!(names(&session), vec![("Rig", "Rig"), ("Body", "Body")]);
        assert!(session.entries().iter().all(|e| e.source_kind == EntityKind::Object));
    }

    #[test]
    fn empty_selection_keeps_entries_but_marks_invalid() {
        let (mut scene, mut session) = populated(EntityKind::Bone, &["Rig"]);
        scene.set_selection(Vec::new());
        session.populate(&scene, EntityKind::Bone).unwrap();
        assert!(!session.has_valid_items());
        assert_eq!(session.len(), 3);
    }

    #[test]
    fn repopulate_restores_edits_and_selection() {
        let (scene, mut session) = populated(EntityKind::Bone, &["Rig"]);
        session.set_new_name(0, "Thigh_Left").unwrap();
        session.set_selected(1, false).unwrap();

        session.populate(&scene, EntityKind::Bone).unwrap();

        assert_eq!(session.get(0).unwrap().new_name, "Thigh_Left");
        assert!(!session.get(1).unwrap().selected);
        assert!(session.get(2).unwrap().selected);
    }

    #[test]
    fn refresh_only_rebuilds_on_change() {
        let mut scene = scene();
        let mut session = Session::new(EntityKind::Bone);
        assert!(session.refresh(&scene, EntityKind::Bone).unwrap());
        assert!(!session.refresh(&scene, EntityKind::Bone).unwrap());
        assert!(session.refresh(&scene, EntityKind::Action).unwrap());

        scene.set_selection(vec!["Rig".to_string(), "Body".to_string()]);
        assert!(session.refresh(&scene, EntityKind::Action).unwrap());
        assert_eq!(session.kind(), EntityKind::Object);
    }

    #[test]
    fn prefix_and_suffix_use_current_name_for_selected_only() {
        let (_, mut session) = populated(EntityKind::Bone, &["Rig"]);
        session.set_selected(2, false).unwrap();

        assert_eq!(session.apply_prefix("DEF-"), 2);
        assert_eq!(session.get(0).unwrap().new_name, "DEF-thigh.L");
        assert_eq!(session.get(2).unwrap().new_name, "spine");

        assert_eq!(session.apply_suffix("_jnt"), 2);
        assert_eq!(session.get(0).unwrap().new_name, "thigh.L_jnt");

        assert_eq!(session.apply_prefix(""), 0);
        assert_eq!(session.get(0).unwrap().new_name, "thigh.L_jnt");
    }

    #[test]
    fn sequence_counts_down_and_up() {
        let (_, mut session) = populated(EntityKind::Bone, &["Rig"]);
        session.set_selected(1, false).unwrap();

        let n = session.apply_sequence(SequenceSpec::new(" bone_ ", "A", ""));
        assert_eq!(n, 2);
        assert_eq!(session.get(0).unwrap().new_name, "bone_A");
        assert_eq!(session.get(1).unwrap().new_name, "thigh.R");
        assert_eq!(session.get(2).unwrap().new_name, "bone_B");

        session.apply_sequence(SequenceSpec::new("b", "1", "").with_direction(Direction::Up));
        assert_eq!(session.get(0).unwrap().new_name, "b2");
        assert_eq!(session.get(2).unwrap().new_name, "b1");
    }

    #[test]
    fn sequence_with_nothing_selected_is_noop() {
        let (_, mut session) = populated(EntityKind::Bone, &["Rig"]);
        session.invert_selection();
        assert_eq!(session.apply_sequence(SequenceSpec::new("x", "1", "")), 0);
    }

    #[test]
    fn mirror_toggles_and_reverts() {
        let (_, mut session) = populated(EntityKind::Bone, &["Rig"]);
        session.toggle_mirror(0).unwrap();
        assert_eq!(session.get(0).unwrap().new_name, "thigh.R");
        session.toggle_mirror(0).unwrap();
        assert_eq!(session.get(0).unwrap().new_name, "thigh.L");

        session.set_new_name(0, "custom").unwrap();
        session.toggle_mirror(0).unwrap();
        assert_eq!(session.get(0).unwrap().new_name, "thigh.R");

        assert!(session.toggle_mirror(9).is_err());
    }

    #[test]
    fn mirror_selected_swaps_pairs() {
        let (_, mut session) = populated(EntityKind::VertexGroup, &["Body"]);
        assert_eq!(session.mirror_selected(), 3);
        assert_eq!(
            names(&session),
            vec![("arm_L", "arm_R"), ("arm_R", "arm_L"), ("head", "head")]
        );
    }

    #[test]
    fn case_clear_and_invert() {
        let (_, mut session) = populated(EntityKind::VertexGroup, &["Body"]);
        session.apply_case(CaseMode::Upper);
        assert_eq!(session.get(2).unwrap().new_name, "HEAD");

        session.clear_new_names();
        assert!(session.entries().iter().all(|e| e.new_name.is_empty()));

        assert!(session.invert_selection());
        assert!(session.entries().iter().all(|e| !e.selected));
        assert!(!Session::default().invert_selection());
    }

    #[test]
    fn select_matching_replaces_selection() {
        let (_, mut session) = populated(EntityKind::VertexGroup, &["Body"]);
        assert_eq!(session.select_matching(&["arm_*".to_string()]), 2);
        assert!(!session.get(2).unwrap().selected);
    }

    #[test]
    fn commit_applies_and_updates_current_name() {
        let (mut scene, mut session) = populated(EntityKind::Bone, &["Rig"]);
        session.set_new_name(2, "Spine_01").unwrap();

        let report = session.commit(&mut scene);

        assert!(!report.has_failures());
        assert_eq!(report.summary.succeeded, 3);
        assert_eq!(session.get(2).unwrap().current_name, "Spine_01");
        assert!(scene.list("Rig", EntityKind::Bone).unwrap().contains(&"Spine_01".to_string()));
    }

    #[test]
    fn commit_skips_unselected_and_blank() {
        let (mut scene, mut session) = populated(EntityKind::Bone, &["Rig"]);
        session.set_selected(0, false).unwrap();
        session.set_new_name(1, "").unwrap();

        let report = session.commit(&mut scene);
        assert_eq!(report.summary.skipped, 2);
        assert_eq!(report.summary.succeeded, 1);
    }

    #[test]
    fn commit_failure_does_not_stop_batch() {
        let (scene, mut session) = populated(EntityKind::VertexGroup, &["Body"]);
        let mut scene = scene.with_settings(SceneSettings {
            collision: CollisionPolicy::Error,
            ..SceneSettings::default()
        });
        session.apply_suffix("_x");
        session.set_new_name(0, "arm_R").unwrap();

        let report = session.commit(&mut scene);

        assert_eq!(report.summary.failed, 1);
        assert_eq!(report.summary.succeeded, 2);
        assert_eq!(session.get(0).unwrap().current_name, "arm_L");
        assert_eq!(session.get(1).unwrap().current_name, "arm_R_x");
        assert_eq!(session.get(2).unwrap().current_name, "head_x");
        let error = report.results[0].error.as_deref().unwrap();
        assert!(error.starts_with("scene.name_collision"));
    }

    #[test]
    fn commit_mirror_swap_numbers_the_collision() {
        let (mut scene, mut session) = populated(EntityKind::VertexGroup, &["Body"]);
        session.mirror_selected();

        let report = session.commit(&mut scene);

        assert!(!report.has_failures());
        assert_eq!(report.results[0].result.as_ref().unwrap().assigned.as_deref(), Some("arm_R.001"));
        assert_eq!(
            scene.list("Body", EntityKind::VertexGroup).unwrap(),
            vec!["arm_R.001", "arm_L", "head"]
        );
    }

    #[test]
    fn commit_object_rename_updates_owner() {
        let (mut scene, mut session) = populated(EntityKind::Object, &["Rig"]);
        session.set_new_name(0, "Armature").unwrap();
        session.commit(&mut scene);

        let entry = session.get(0).unwrap();
        assert_eq!(entry.owner.as_str(), "Armature");
        assert_eq!(entry.id(), "Armature/object/Armature");
    }

    #[test]
    fn delete_selected_keeps_failures() {
        let (mut scene, mut session) = populated(EntityKind::ShapeKey, &["Body"]);

        let report = session.delete(&mut scene, None).unwrap();

        assert_eq!(report.summary.succeeded, 1);
        assert_eq!(report.summary.failed, 1);
        assert_eq!(report.results[0].id, "Body/shape_key/Basis");
        assert_eq!(names(&session), vec![("Basis", "Basis")]);
    }

    #[test]
    fn delete_single_index() {
        let (mut scene, mut session) = populated(EntityKind::VertexGroup, &["Body"]);
        let report = session.delete(&mut scene, Some(2)).unwrap();
        assert_eq!(report.summary.total, 1);
        assert_eq!(session.len(), 2);
        assert_eq!(scene.list("Body", EntityKind::VertexGroup).unwrap(), vec!["arm_L", "arm_R"]);

        assert!(session.delete(&mut scene, Some(5)).is_err());
    }

    #[test]
    fn delete_unselected_index_does_nothing() {
        let (mut scene, mut session) = populated(EntityKind::VertexGroup, &["Body"]);
        session.set_selected(0, false).unwrap();
        let report = session.delete(&mut scene, Some(0)).unwrap();
        assert_eq!(report.summary.total, 0);
        assert_eq!(session.len(), 3);
    }
}
