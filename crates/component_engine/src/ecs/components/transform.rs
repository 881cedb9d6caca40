//! Transform component
//!
//! Keeps position, rotation (Euler degrees) and scale as properties so they
//! can be edited in a property grid, plus a cached [`Transform`] built from
//! them for the observers that need a pose.
//!
//! The cache follows a two-state machine:
//!
//! ```text
//! setup_transform()            -> Fresh  (cache and properties set together)
//! change notification, Fresh   -> Stale  (nothing to rebuild)
//! change notification, Stale   -> Stale  (cache rebuilt from properties)
//! ```

use crate::ecs::component::{Component, ComponentBase, ComponentKind, ComponentType};
use crate::ecs::error::ComponentError;
use crate::ecs::property::{PropertyKey, PropertyType};
use crate::ecs::property_factory::PropertyFactory;
use crate::foundation::math::{Transform, Vec3};
use std::any::Any;

/// Whether the cached pose was just set directly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    /// Cache was set by `setup_transform`; the next change notification keeps it
    Fresh,
    /// Cache may lag behind the properties; the next change notification rebuilds it
    Stale,
}

/// Position, rotation and scale of an entity
#[derive(Debug)]
pub struct TransformComponent {
    base: ComponentBase,
    transform: Transform,
    freshness: Freshness,
}

impl TransformComponent {
    /// `Position` property (Vector3)
    pub const POSITION: PropertyKey = 0;
    /// `Rotation` property (Vector3, Euler angles in degrees)
    pub const ROTATION: PropertyKey = 1;
    /// `Scale` property (Vector3)
    pub const SCALE: PropertyKey = 2;

    /// Create an identity transform component
    pub fn new(factory: &dyn PropertyFactory) -> Result<Self, ComponentError> {
        let mut base = ComponentBase::new(Self::TYPE);
        base.create_property(Self::POSITION, PropertyType::Vector3, factory)?;
        base.create_property(Self::ROTATION, PropertyType::Vector3, factory)?;
        base.create_property(Self::SCALE, PropertyType::Vector3, factory)?;
        base.write(Self::SCALE, Vec3::new(1.0, 1.0, 1.0));

        Ok(Self {
            base,
            transform: Transform::identity(),
            freshness: Freshness::Stale,
        })
    }

    /// Set the pose directly, updating the cache and the properties.
    ///
    /// Must be followed by a change notification, which
    /// [`GameObject::update_component_as`](crate::ecs::GameObject::update_component_as)
    /// does.
    pub fn setup_transform(&mut self, transform: &Transform) {
        self.transform = transform.clone();
        self.base.write(Self::POSITION, transform.position);
        self.base.write(Self::ROTATION, transform.euler_degrees());
        self.base.write(Self::SCALE, transform.scale);
        self.freshness = Freshness::Fresh;
    }

    /// Cached pose
    pub fn get_transform(&self) -> &Transform {
        &self.transform
    }

    /// Cache state
    pub fn freshness(&self) -> Freshness {
        self.freshness
    }

    fn rebuild_transform(&mut self) {
        self.transform = Transform::from_euler_degrees(
            self.base.read(Self::POSITION),
            self.base.read(Self::ROTATION),
            self.base.read(Self::SCALE),
        );
    }
}

impl ComponentKind for TransformComponent {
    const TYPE: ComponentType = ComponentType::Transform;
}

impl Component for TransformComponent {
    fn base(&self) -> &ComponentBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ComponentBase {
        &mut self.base
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn on_this_component_changed(&mut self) {
        match self.freshness {
            Freshness::Fresh => self.freshness = Freshness::Stale,
            Freshness::Stale => self.rebuild_transform(),
        }
    }

    fn on_properties_copied(&mut self) {
        self.rebuild_transform();
        self.freshness = Freshness::Stale;
    }

    fn transform(&self) -> Option<&Transform> {
        Some(&self.transform)
    }
}
