//! Game object and collection descriptors.

use serde::{Deserialize, Serialize};

use super::math::{Quat, Vec3};

/// A game object prototype (`.go` source files).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PrototypeDesc {
    pub components: Vec<ComponentDesc>,
    pub embedded_components: Vec<EmbeddedComponentDesc>,
}

/// A component referenced by path from a game object.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentDesc {
    pub id: String,
    pub component: String,
    pub position: Vec3,
    pub rotation: Quat,
}

/// A component whose definition is inlined in the parent `.go` file.
///
/// `data` holds the component's own source text verbatim; `r#type` is the
/// source extension it would have as a standalone file (e.g. `sprite`).
/// Decomposition materializes it into a sibling file and removes it from
/// the parent.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddedComponentDesc {
    pub id: String,
    pub r#type: String,
    pub data: String,
    pub position: Vec3,
    pub rotation: Quat,
}

/// A collection of game object instances (`.collection` source files).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionDesc {
    pub name: String,
    pub instances: Vec<InstanceDesc>,
    pub collection_instances: Vec<CollectionInstanceDesc>,
}

/// One placed game object inside a collection.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InstanceDesc {
    pub id: String,
    pub prototype: String,
    pub position: Vec3,
    pub rotation: Quat,
    pub children: Vec<String>,
}

/// A nested collection placed inside another collection.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionInstanceDesc {
    pub id: String,
    pub collection: String,
    pub position: Vec3,
    pub rotation: Quat,
}

/// Deferred-load handle to another collection (`.collectionproxy`).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionProxyDesc {
    pub collection: String,
}
