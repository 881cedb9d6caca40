//! Geometry component
//!
//! Owns the scene node of an entity. The node follows the entity's transform
//! component, and its geometry gets new texture coordinates whenever the
//! auto UV map component asks for it.

use super::AutoUvMapComponent;
use crate::ecs::component::{Component, ComponentBase, ComponentKind, ComponentType, ObserverContext};
use crate::ecs::component_factory::ComponentFactory;
use crate::ecs::error::ComponentError;
use crate::ecs::property::{PropertyKey, PropertyType};
use crate::ecs::property_factory::PropertyFactory;
use crate::foundation::identity::IdType;
use crate::foundation::math::Vec2;
use crate::scene::{AutoUvMapModifier, GeometryNode, GeometryNodeRef, GeometryRef};
use std::any::Any;

/// Geometry asset reference and scene node
#[derive(Debug)]
pub struct GeometryComponent {
    base: ComponentBase,
    node: GeometryNodeRef,
}

impl GeometryComponent {
    /// `Asset` property (Asset)
    pub const ASSET: PropertyKey = 0;

    /// Create a geometry component with an empty scene node
    pub fn new(factory: &dyn PropertyFactory) -> Result<Self, ComponentError> {
        let mut base = ComponentBase::new(Self::TYPE);
        base.create_property(Self::ASSET, PropertyType::Asset, factory)?;

        Ok(Self {
            base,
            node: GeometryNode::new_shared(),
        })
    }

    /// Attach a geometry resource and record its asset ID
    pub fn setup_geometry(&mut self, asset: IdType, geometry: GeometryRef) {
        self.base.write(Self::ASSET, asset);
        self.node.borrow_mut().geometry = Some(geometry);
    }

    /// Referenced asset ID
    pub fn asset(&self) -> IdType {
        self.base.read(Self::ASSET)
    }

    /// Shared scene node
    pub fn node(&self) -> &GeometryNodeRef {
        &self.node
    }

    fn apply_auto_uv_map(&self, auto_uv_map: &dyn Component) {
        if !auto_uv_map.read_property::<bool>(AutoUvMapComponent::UPDATE) {
            return;
        }

        let node = self.node.borrow();
        let Some(geometry) = node.geometry.as_ref() else {
            return;
        };

        let modifier = AutoUvMapModifier {
            offset: Vec2::new(
                auto_uv_map.read_property(AutoUvMapComponent::OFFSET_U),
                auto_uv_map.read_property(AutoUvMapComponent::OFFSET_V),
            ),
            scale: Vec2::new(
                auto_uv_map.read_property(AutoUvMapComponent::SCALE_U),
                auto_uv_map.read_property(AutoUvMapComponent::SCALE_V),
            ),
            transform: auto_uv_map
                .read_property::<bool>(AutoUvMapComponent::GLOBAL)
                .then(|| node.transform.to_matrix()),
        };

        log::trace!("Remapping texture coordinates of asset {}", self.asset());
        modifier.modify_geometry(&mut geometry.borrow_mut());
    }
}

impl ComponentKind for GeometryComponent {
    const TYPE: ComponentType = ComponentType::Geometry;
}

impl Component for GeometryComponent {
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

    fn is_observable_of_interest(&self, component_type: ComponentType) -> bool {
        matches!(component_type, ComponentType::Transform | ComponentType::AutoUvMap)
    }

    fn on_observable_changed(&mut self, observable: &dyn Component, _context: &mut ObserverContext) {
        match observable.component_type() {
            ComponentType::Transform => {
                if let Some(transform) = observable.transform() {
                    self.node.borrow_mut().transform = transform.clone();
                }
            }
            ComponentType::AutoUvMap => self.apply_auto_uv_map(observable),
            _ => {}
        }
    }

    fn instantiate_copy(&self, factory: &dyn ComponentFactory) -> Result<Box<dyn Component>, ComponentError> {
        let mut copy = factory.instantiate_component(Self::TYPE)?;
        copy.base_mut().copy_property_values_from(&self.base);

        // The copy gets its own node sharing the same geometry resource
        let node = copy
            .scene_node()
            .ok_or(ComponentError::ComponentTypeMismatch { expected: Self::TYPE })?;
        node.borrow_mut().clone_from(&self.node.borrow());
        Ok(copy)
    }

    fn scene_node(&self) -> Option<&GeometryNodeRef> {
        Some(&self.node)
    }
}
