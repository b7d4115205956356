//! Component descriptors without dedicated transform logic of their own.

use serde::{Deserialize, Serialize};

use super::math::Vec3;

/// A particle emitter (`.emitter` source files).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitterDesc {
    pub material: String,
    pub texture: EmitterTexture,
    pub duration: f32,
    pub max_particle_count: u32,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitterTexture {
    pub name: String,
}

/// A rendered model (`.model` source files).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelDesc {
    pub mesh: String,
    pub material: String,
    pub textures: Vec<String>,
}

/// Spawns copies of a prototype at runtime (`.factory`).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FactoryDesc {
    pub prototype: String,
}

/// Render setup: script plus named materials (`.render`).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderPrototypeDesc {
    pub script: String,
    pub materials: Vec<RenderMaterialDesc>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderMaterialDesc {
    pub name: String,
    pub material: String,
}

/// A sprite (`.sprite` source files).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SpriteDesc {
    pub tile_set: String,
    pub default_animation: String,
}

/// A tile grid (`.tilegrid` / `.tilemap` source files).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TileGridDesc {
    pub tile_set: String,
    pub layers: Vec<TileLayerDesc>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TileLayerDesc {
    pub id: String,
    pub z: f32,
    pub cells: Vec<TileCell>,
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TileCell {
    pub x: i32,
    pub y: i32,
    pub tile: u32,
}

/// A camera (`.camera` source files). Compiled without transformation.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraDesc {
    pub aspect_ratio: f32,
    pub fov: f32,
    pub near_z: f32,
    pub far_z: f32,
}

/// A light source (`.light` source files). Compiled without transformation.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LightDesc {
    pub id: String,
    pub r#type: LightType,
    pub intensity: f32,
    pub color: Vec3,
    pub range: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LightType {
    #[default]
    Point,
    Spot,
    Directional,
}

/// Input bindings (`.input_binding`). Compiled without transformation.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InputBinding {
    pub key_trigger: Vec<TriggerDesc>,
    pub mouse_trigger: Vec<TriggerDesc>,
    pub gamepad_trigger: Vec<TriggerDesc>,
}

/// Maps a raw input to a logical action name.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TriggerDesc {
    pub input: String,
    pub action: String,
}

/// Gamepad mapping tables (`.gamepads`). Compiled without transformation.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GamepadMaps {
    pub driver: Vec<GamepadMapEntry>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GamepadMapEntry {
    pub device: String,
    pub platform: String,
    pub map: Vec<GamepadMapItem>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GamepadMapItem {
    pub input: String,
    pub index: u32,
}
