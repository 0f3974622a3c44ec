//! Render Module
//!
//! Render-facing data only. Windowing, meshes and GPU pipelines live with
//! the embedding application; this module describes what to draw and where.

pub mod instance;

pub use instance::{EntityKind, EntityTransform, TransformInstance, pack_instances};
