//! Content compilation pipeline for the Foxglove Engine.
//!
//! Transforms human-authored RON resource descriptors (collections, game
//! objects, collision shapes, sprites, GUIs, scripts, tile grids) into
//! compact binary runtime resources, rewriting cross-file references from
//! source extensions (`.collection`) to compiled extensions
//! (`.collectionc`) so the runtime loader can resolve dependencies without
//! re-parsing text.
//!
//! # Architecture
//!
//! - [`rewrite`] — the suffix rule table mapping source to compiled
//!   extensions
//! - [`schema`] — serde descriptor types shared by the RON source form and
//!   the bincode compiled form
//! - [`codec`] — text decode / binary encode
//! - [`transform`] — per-type reference transforms and semantic adjustments
//! - [`decompose`] — splits game objects with embedded components into a
//!   parent plus generated sibling files
//! - [`script`] — Lua dependency scanning
//! - [`registry`] — maps file extensions to compile rules; the entry point
//!   a scheduler drives
//! - [`diagnostics`] — lock-serialized failure reporting for parallel
//!   workers
//!
//! The pipeline never schedules work itself: each file compilation is an
//! independent unit, and the only ordering constraint — generated siblings
//! compile before their parent's output is written — is surfaced explicitly
//! in [`decompose::DecomposedGameObject`].

pub mod codec;
pub mod decompose;
pub mod diagnostics;
mod error;
pub mod path;
pub mod registry;
pub mod rewrite;
pub mod schema;
pub mod script;
pub mod transform;

pub use error::{PipelineError, PipelineResult};
pub use registry::{CompileOutput, Registry, ResourceKind, Rule};
pub use transform::CompileContext;
