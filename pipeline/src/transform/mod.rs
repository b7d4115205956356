//! Per-type reference transforms.
//!
//! Each transform is a pure function over a decoded descriptor: it rewrites
//! cross-file references to their compiled extensions and applies the
//! type-specific semantic adjustments (mass zeroing, convex shape merging,
//! GUI reference validation). Transforms never write files; the only I/O is
//! the collision object transform reading a referenced convex shape.

use std::path::Path;

mod collection;
mod gameobject;
mod gui;
mod physics;
mod visual;

pub use collection::{transform_collection, transform_collection_proxy};
pub use gameobject::transform_gameobject;
pub use gui::transform_gui_scene;
pub use physics::transform_collision_object;
pub use visual::{
    transform_emitter, transform_factory, transform_model, transform_render, transform_sprite,
    transform_tilegrid,
};

/// Everything a transform may consult about its surroundings.
pub struct CompileContext<'a> {
    /// Directory all `/`-rooted references resolve against.
    pub content_root: &'a Path,
    /// Path of the file being compiled, for diagnostics and sibling naming.
    pub source_path: &'a Path,
}
