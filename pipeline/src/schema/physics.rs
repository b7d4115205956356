//! Physics descriptors.

use serde::{Deserialize, Serialize};

use super::math::{Quat, Vec3};

/// How a collision object participates in the simulation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionObjectType {
    Dynamic,
    Kinematic,
    #[default]
    Static,
    Trigger,
}

/// Primitive collision shape kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeType {
    #[default]
    Sphere,
    Box,
    Capsule,
    Hull,
}

/// A standalone convex shape (`.convexshape` source files).
///
/// `data` layout depends on `shape_type`: radius for spheres, half-extents
/// for boxes, radius + half-height for capsules, point soup for hulls.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvexShape {
    pub shape_type: ShapeType,
    pub data: Vec<f32>,
}

/// One shape entry inside an embedded collision shape buffer.
///
/// `index` and `count` address a slice of [`EmbeddedCollisionShape::data`].
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeDesc {
    pub shape_type: ShapeType,
    pub position: Vec3,
    pub rotation: Quat,
    pub index: u32,
    pub count: u32,
}

/// Inlined shape data accumulated by the collision object transform.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddedCollisionShape {
    pub shapes: Vec<ShapeDesc>,
    pub data: Vec<f32>,
}

/// A collision object (`.collisionobject` source files).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionObjectDesc {
    pub collision_shape: String,
    pub r#type: CollisionObjectType,
    pub mass: f32,
    pub friction: f32,
    pub restitution: f32,
    pub group: String,
    pub mask: Vec<String>,
    pub embedded_collision_shape: EmbeddedCollisionShape,
}
