//! Scene graph node for geometry

use super::geometry::GeometryRef;
use crate::foundation::math::Transform;
use std::cell::RefCell;
use std::rc::Rc;

/// Scene node shared between a geometry component and the renderer
pub type GeometryNodeRef = Rc<RefCell<GeometryNode>>;

/// Pose plus optional geometry handle
#[derive(Debug, Clone, Default)]
pub struct GeometryNode {
    /// World pose, kept in sync with the entity's transform component
    pub transform: Transform,

    /// Referenced geometry resource
    pub geometry: Option<GeometryRef>,
}

impl GeometryNode {
    /// Create an empty node with identity pose
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a node wrapped for sharing
    pub fn new_shared() -> GeometryNodeRef {
        Rc::new(RefCell::new(Self::new()))
    }
}
