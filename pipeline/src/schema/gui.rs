//! GUI scene descriptors.

use serde::{Deserialize, Serialize};

use super::math::Vec3;

/// A GUI scene (`.gui` source files).
///
/// Nodes refer to textures and fonts by the names declared in `textures`
/// and `fonts`; the transform validates those references.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GuiSceneDesc {
    pub script: String,
    pub fonts: Vec<FontDesc>,
    pub textures: Vec<GuiTextureDesc>,
    pub nodes: Vec<GuiNodeDesc>,
}

/// A font declaration: scene-local name plus the font file it maps to.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FontDesc {
    pub name: String,
    pub font: String,
}

/// A texture declaration: scene-local name plus the image file it maps to.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GuiTextureDesc {
    pub name: String,
    pub texture: String,
}

/// One node in the scene graph. Empty `texture`/`font` means unused.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GuiNodeDesc {
    pub id: String,
    pub position: Vec3,
    pub size: Vec3,
    pub texture: String,
    pub font: String,
    pub text: String,
}
