//! Scene collaborators of the component system
//!
//! Only what the geometry component needs: a vertex list it can remap and a
//! shared scene node holding a pose and a geometry handle.

pub mod geometry;
pub mod scene_node;

pub use geometry::{AutoUvMapModifier, Geometry, GeometryRef, Vertex};
pub use scene_node::{GeometryNode, GeometryNodeRef};
