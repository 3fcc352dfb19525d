//! File-backed scene document implementing [`SceneGraph`].
//!
//! The document mirrors the parts of a host scene the renamer cares about:
//! objects with their per-object collections, plus the shared material and
//! action datablocks.

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{CollisionPolicy, InteractionMode, ObjectType, SceneGraph};
use crate::entity::EntityKind;
use crate::error::{Error, Result};
use crate::io;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryScene {
    #[serde(default)]
    pub mode: InteractionMode,
    #[serde(default)]
    pub selected: Vec<String>,
    #[serde(default)]
    pub objects: Vec<SceneObject>,
    #[serde(default)]
    pub materials: Vec<String>,
    #[serde(default)]
    pub actions: Vec<String>,
    #[serde(skip)]
    settings: SceneSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    pub name: String,
    #[serde(rename = "type", default)]
    pub object_type: ObjectType,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vertex_groups: Vec<String>,
    /// `None` when the mesh has no shape key datablock at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape_keys: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub uv_maps: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub material_slots: Vec<Option<String>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bones: Vec<SceneBone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneBone {
    pub name: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub selected: bool,
}

/// Host behaviour that is not part of the document itself.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneSettings {
    pub collision: CollisionPolicy,
    /// Shape key that can be renamed but never removed.
    pub protected_shape_key: String,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            collision: CollisionPolicy::Suffix,
            protected_shape_key: "Basis".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Yaml,
}

impl Format {
    fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Format::Yaml,
            _ => Format::Json,
        }
    }
}

// ============================================================================
// Loading and saving
// ============================================================================

impl MemoryScene {
    pub fn from_json(content: &str) -> Result<Self> {
        let scene: MemoryScene = serde_json::from_str(content)
            .map_err(|e| Error::scene_invalid_document("<json>", e.to_string()))?;
        scene.validate()?;
        Ok(scene)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let scene: MemoryScene = serde_yml::from_str(content)
            .map_err(|e| Error::scene_invalid_document("<yaml>", e.to_string()))?;
        scene.validate()?;
        Ok(scene)
    }

    /// Load a scene document, picking JSON or YAML from the file extension.
    pub fn load(path: &Path) -> Result<Self> {
        let content = io::read_file(path, &format!("read scene {}", path.display()))?;
        let parsed = match Format::for_path(path) {
            Format::Json => Self::from_json(&content),
            Format::Yaml => Self::from_yaml(&content),
        };
        parsed.map_err(|mut err| {
            err.details["path"] = serde_json::Value::String(path.display().to_string());
            err
        })
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = match Format::for_path(path) {
            Format::Json => serde_json::to_string_pretty(self).map_err(|e| {
                Error::internal_json(e.to_string(), Some("serialize scene".to_string()))
            })?,
            Format::Yaml => serde_yml::to_string(self).map_err(|e| {
                Error::internal_unexpected(format!("serialize scene: {}", e))
            })?,
        };
        io::write_file_atomic(path, &content, &format!("write scene {}", path.display()))
    }

    pub fn with_settings(mut self, settings: SceneSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn settings(&self) -> &SceneSettings {
        &self.settings
    }

    /// Replace the selection, keeping only names of existing objects.
    pub fn set_selection(&mut self, names: Vec<String>) {
        self.selected = names
            .into_iter()
            .filter(|n| self.objects.iter().any(|o| &o.name == n))
            .collect();
    }

    pub fn object(&self, name: &str) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.name == name)
    }

    fn validate(&self) -> Result<()> {
        for (i, obj) in self.objects.iter().enumerate() {
            if self.objects[..i].iter().any(|o| o.name == obj.name) {
                return Err(Error::scene_invalid_document(
                    "<scene>",
                    format!("duplicate object name '{}'", obj.name),
                ));
            }
            for slot in obj.material_slots.iter().flatten() {
                if !self.materials.contains(slot) {
                    return Err(Error::scene_invalid_document(
                        "<scene>",
                        format!("object '{}' uses unknown material '{}'", obj.name, slot),
                    ));
                }
            }
            if let Some(action) = &obj.action {
                if !self.actions.contains(action) {
                    return Err(Error::scene_invalid_document(
                        "<scene>",
                        format!("object '{}' uses unknown action '{}'", obj.name, action),
                    ));
                }
            }
        }
        Ok(())
    }

    fn object_mut(&mut self, owner: &str, kind: EntityKind, name: &str) -> Result<&mut SceneObject> {
        self.objects
            .iter_mut()
            .find(|o| o.name == owner)
            .ok_or_else(|| Error::scene_entity_not_found(owner, kind.as_str(), name))
    }

    fn owner(&self, owner: &str, kind: EntityKind) -> Result<&SceneObject> {
        self.object(owner)
            .ok_or_else(|| Error::scene_entity_not_found(owner, kind.as_str(), owner))
    }
}

// ============================================================================
// Kind dispatch
// ============================================================================

type ListFn = fn(&MemoryScene, &str) -> Result<Vec<String>>;
type RenameFn = fn(&mut MemoryScene, &str, &str, &str) -> Result<String>;
type RemoveFn = fn(&mut MemoryScene, &str, &str) -> Result<()>;

#[derive(Clone, Copy)]
struct KindOps {
    list: ListFn,
    rename: RenameFn,
    remove: RemoveFn,
}

/// The single kind → (list, rename, remove) table.
fn ops_for(kind: EntityKind) -> KindOps {
    match kind {
        EntityKind::Object => KindOps {
            list: list_object,
            rename: rename_object,
            remove: remove_object,
        },
        EntityKind::VertexGroup => KindOps {
            list: list_vertex_groups,
            rename: rename_vertex_group,
            remove: remove_vertex_group,
        },
        EntityKind::ShapeKey => KindOps {
            list: list_shape_keys,
            rename: rename_shape_key,
            remove: remove_shape_key,
        },
        EntityKind::UvMap => KindOps {
            list: list_uv_maps,
            rename: rename_uv_map,
            remove: remove_uv_map,
        },
        EntityKind::Material => KindOps {
            list: list_materials,
            rename: rename_material,
            remove: unlink_material,
        },
        EntityKind::Bone => KindOps {
            list: list_bones,
            rename: rename_bone,
            remove: remove_bone,
        },
        EntityKind::Action => KindOps {
            list: list_action,
            rename: rename_action,
            remove: remove_action,
        },
    }
}

impl SceneGraph for MemoryScene {
    fn selected_objects(&self) -> Vec<String> {
        self.selected.clone()
    }

    fn object_type(&self, object: &str) -> Option<ObjectType> {
        self.object(object).map(|o| o.object_type)
    }

    fn interaction_mode(&self) -> InteractionMode {
        self.mode
    }

    fn list(&self, owner: &str, kind: EntityKind) -> Result<Vec<String>> {
        (ops_for(kind).list)(self, owner)
    }

    fn selected_bones(&self, owner: &str) -> Vec<String> {
        if self.mode == InteractionMode::Object {
            return Vec::new();
        }
        self.object(owner)
            .map(|o| o.bones.iter().filter(|b| b.selected).map(|b| b.name.clone()).collect())
            .unwrap_or_default()
    }

    fn rename(&mut self, owner: &str, kind: EntityKind, from: &str, to: &str) -> Result<String> {
        (ops_for(kind).rename)(self, owner, from, to)
    }

    fn remove(&mut self, owner: &str, kind: EntityKind, name: &str) -> Result<()> {
        (ops_for(kind).remove)(self, owner, name)
    }
}

// ============================================================================
// Name resolution
// ============================================================================

trait Named {
    fn name(&self) -> &str;
    fn set_name(&mut self, name: String);
}

impl Named for String {
    fn name(&self) -> &str {
        self
    }

    fn set_name(&mut self, name: String) {
        *self = name;
    }
}

impl Named for SceneBone {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

impl Named for SceneObject {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

/// Strip a host-style numeric suffix: `Cube.003` → `Cube`.
fn numbered_base(name: &str) -> &str {
    match name.rsplit_once('.') {
        Some((base, digits))
            if !base.is_empty() && digits.len() >= 3 && digits.bytes().all(|b| b.is_ascii_digit()) =>
        {
            base
        }
        _ => name,
    }
}

fn resolve_name(
    policy: CollisionPolicy,
    taken: impl Fn(&str) -> bool,
    owner: &str,
    kind: EntityKind,
    from: &str,
    to: &str,
) -> Result<String> {
    if !taken(to) {
        return Ok(to.to_string());
    }

    match policy {
        CollisionPolicy::Error => Err(Error::scene_name_collision(owner, kind.as_str(), from, to)),
        CollisionPolicy::Suffix => {
            let base = numbered_base(to);
            let mut n: u32 = 1;
            loop {
                let candidate = format!("{}.{:03}", base, n);
                if !taken(&candidate) {
                    return Ok(candidate);
                }
                n += 1;
            }
        }
    }
}

/// Rename the item called `from` inside `items`, resolving collisions against its siblings.
fn rename_in<T: Named>(
    items: &mut [T],
    policy: CollisionPolicy,
    owner: &str,
    kind: EntityKind,
    from: &str,
    to: &str,
) -> Result<String> {
    let idx = items
        .iter()
        .position(|item| item.name() == from)
        .ok_or_else(|| Error::scene_entity_not_found(owner, kind.as_str(), from))?;

    if from == to {
        return Ok(to.to_string());
    }

    let assigned = {
        let siblings = &*items;
        resolve_name(
            policy,
            |candidate| {
                siblings
                    .iter()
                    .enumerate()
                    .any(|(i, item)| i != idx && item.name() == candidate)
            },
            owner,
            kind,
            from,
            to,
        )?
    };

    items[idx].set_name(assigned.clone());
    Ok(assigned)
}

fn remove_from<T: Named>(items: &mut Vec<T>, owner: &str, kind: EntityKind, name: &str) -> Result<()> {
    let idx = items
        .iter()
        .position(|item| item.name() == name)
        .ok_or_else(|| Error::scene_entity_not_found(owner, kind.as_str(), name))?;
    items.remove(idx);
    Ok(())
}

// ============================================================================
// Objects
// ============================================================================

fn list_object(scene: &MemoryScene, owner: &str) -> Result<Vec<String>> {
    Ok(scene.object(owner).map(|o| vec![o.name.clone()]).unwrap_or_default())
}

fn rename_object(scene: &mut MemoryScene, owner: &str, from: &str, to: &str) -> Result<String> {
    let policy = scene.settings.collision;
    let assigned = rename_in(&mut scene.objects, policy, owner, EntityKind::Object, from, to)?;
    for selected in scene.selected.iter_mut().filter(|s| s.as_str() == from) {
        *selected = assigned.clone();
    }
    Ok(assigned)
}

fn remove_object(scene: &mut MemoryScene, owner: &str, name: &str) -> Result<()> {
    remove_from(&mut scene.objects, owner, EntityKind::Object, name)?;
    scene.selected.retain(|s| s != name);
    Ok(())
}

// ============================================================================
// Vertex groups, shape keys, UV maps (per object)
// ============================================================================

fn list_vertex_groups(scene: &MemoryScene, owner: &str) -> Result<Vec<String>> {
    Ok(scene.owner(owner, EntityKind::VertexGroup)?.vertex_groups.clone())
}

fn rename_vertex_group(scene: &mut MemoryScene, owner: &str, from: &str, to: &str) -> Result<String> {
    let policy = scene.settings.collision;
    let kind = EntityKind::VertexGroup;
    let obj = scene.object_mut(owner, kind, from)?;
    rename_in(&mut obj.vertex_groups, policy, owner, kind, from, to)
}

fn remove_vertex_group(scene: &mut MemoryScene, owner: &str, name: &str) -> Result<()> {
    let kind = EntityKind::VertexGroup;
    let obj = scene.object_mut(owner, kind, name)?;
    remove_from(&mut obj.vertex_groups, owner, kind, name)
}

fn list_shape_keys(scene: &MemoryScene, owner: &str) -> Result<Vec<String>> {
    Ok(scene
        .owner(owner, EntityKind::ShapeKey)?
        .shape_keys
        .clone()
        .unwrap_or_default())
}

fn rename_shape_key(scene: &mut MemoryScene, owner: &str, from: &str, to: &str) -> Result<String> {
    let policy = scene.settings.collision;
    let kind = EntityKind::ShapeKey;
    let obj = scene.object_mut(owner, kind, from)?;
    let keys = obj
        .shape_keys
        .as_mut()
        .ok_or_else(|| Error::scene_entity_not_found(owner, kind.as_str(), from))?;
    rename_in(keys, policy, owner, kind, from, to)
}

fn remove_shape_key(scene: &mut MemoryScene, owner: &str, name: &str) -> Result<()> {
    let kind = EntityKind::ShapeKey;
    if name == scene.settings.protected_shape_key {
        return Err(Error::scene_protected_entity(owner, kind.as_str(), name));
    }
    let obj = scene.object_mut(owner, kind, name)?;
    let keys = obj
        .shape_keys
        .as_mut()
        .ok_or_else(|| Error::scene_entity_not_found(owner, kind.as_str(), name))?;
    remove_from(keys, owner, kind, name)
}

fn list_uv_maps(scene: &MemoryScene, owner: &str) -> Result<Vec<String>> {
    Ok(scene.owner(owner, EntityKind::UvMap)?.uv_maps.clone())
}

fn rename_uv_map(scene: &mut MemoryScene, owner: &str, from: &str, to: &str) -> Result<String> {
    let policy = scene.settings.collision;
    let kind = EntityKind::UvMap;
    let obj = scene.object_mut(owner, kind, from)?;
    rename_in(&mut obj.uv_maps, policy, owner, kind, from, to)
}

fn remove_uv_map(scene: &mut MemoryScene, owner: &str, name: &str) -> Result<()> {
    let kind = EntityKind::UvMap;
    let obj = scene.object_mut(owner, kind, name)?;
    remove_from(&mut obj.uv_maps, owner, kind, name)
}

// ============================================================================
// Materials (shared datablocks, linked through slots)
// ============================================================================

fn list_materials(scene: &MemoryScene, owner: &str) -> Result<Vec<String>> {
    Ok(scene
        .owner(owner, EntityKind::Material)?
        .material_slots
        .iter()
        .flatten()
        .cloned()
        .collect())
}

fn rename_material(scene: &mut MemoryScene, owner: &str, from: &str, to: &str) -> Result<String> {
    let kind = EntityKind::Material;
    let linked = scene
        .owner(owner, kind)?
        .material_slots
        .iter()
        .flatten()
        .any(|m| m == from);
    if !linked {
        return Err(Error::scene_entity_not_found(owner, kind.as_str(), from));
    }

    let policy = scene.settings.collision;
    let assigned = rename_in(&mut scene.materials, policy, owner, kind, from, to)?;
    for obj in scene.objects.iter_mut() {
        for slot in obj.material_slots.iter_mut().flatten() {
            if slot == from {
                *slot = assigned.clone();
            }
        }
    }
    Ok(assigned)
}

/// Clear the owner's slots that use the material. The datablock itself stays.
fn unlink_material(scene: &mut MemoryScene, owner: &str, name: &str) -> Result<()> {
    let kind = EntityKind::Material;
    let obj = scene.object_mut(owner, kind, name)?;
    let mut unlinked = false;
    for slot in obj.material_slots.iter_mut() {
        if slot.as_deref() == Some(name) {
            *slot = None;
            unlinked = true;
        }
    }
    if unlinked {
        Ok(())
    } else {
        Err(Error::scene_entity_not_found(owner, kind.as_str(), name))
    }
}

// ============================================================================
// Bones
// ============================================================================

fn list_bones(scene: &MemoryScene, owner: &str) -> Result<Vec<String>> {
    Ok(scene
        .owner(owner, EntityKind::Bone)?
        .bones
        .iter()
        .map(|b| b.name.clone())
        .collect())
}

fn rename_bone(scene: &mut MemoryScene, owner: &str, from: &str, to: &str) -> Result<String> {
    let policy = scene.settings.collision;
    let kind = EntityKind::Bone;
    let obj = scene.object_mut(owner, kind, from)?;
    rename_in(&mut obj.bones, policy, owner, kind, from, to)
}

fn remove_bone(scene: &mut MemoryScene, owner: &str, name: &str) -> Result<()> {
    let kind = EntityKind::Bone;
    let obj = scene.object_mut(owner, kind, name)?;
    remove_from(&mut obj.bones, owner, kind, name)
}

// ============================================================================
// Actions (shared datablocks, one active per object)
// ============================================================================

fn list_action(scene: &MemoryScene, owner: &str) -> Result<Vec<String>> {
    Ok(scene
        .owner(owner, EntityKind::Action)?
        .action
        .iter()
        .cloned()
        .collect())
}

fn rename_action(scene: &mut MemoryScene, owner: &str, from: &str, to: &str) -> Result<String> {
    let policy = scene.settings.collision;
    let assigned = rename_in(&mut scene.actions, policy, owner, EntityKind::Action, from, to)?;
    for obj in scene.objects.iter_mut() {
        if obj.action.as_deref() == Some(from) {
            obj.action = Some(assigned.clone());
        }
    }
    Ok(assigned)
}

fn remove_action(scene: &mut MemoryScene, owner: &str, name: &str) -> Result<()> {
    remove_from(&mut scene.actions, owner, EntityKind::Action, name)?;
    for obj in scene.objects.iter_mut() {
        if obj.action.as_deref() == Some(name) {
            obj.action = None;
        }
    }
    Ok(())
}
