//! Auto UV map component
//!
//! Settings for planar texture coordinate generation. The geometry component
//! of the same entity reacts to changes of this component; in global mode
//! this component also re-announces itself whenever the transform moves, so
//! the mapping stays locked to world space.

use crate::ecs::component::{Component, ComponentBase, ComponentKind, ComponentType, ObserverContext};
use crate::ecs::error::ComponentError;
use crate::ecs::property::{PropertyKey, PropertyType};
use crate::ecs::property_factory::PropertyFactory;
use std::any::Any;

/// Texture coordinate generation settings
#[derive(Debug)]
pub struct AutoUvMapComponent {
    base: ComponentBase,
}

impl AutoUvMapComponent {
    /// `Update` property (Bool): regenerate on change
    pub const UPDATE: PropertyKey = 0;
    /// `Global` property (Bool): map in world space
    pub const GLOBAL: PropertyKey = 1;
    /// `OffsetU` property (Float)
    pub const OFFSET_U: PropertyKey = 2;
    /// `OffsetV` property (Float)
    pub const OFFSET_V: PropertyKey = 3;
    /// `ScaleU` property (Float)
    pub const SCALE_U: PropertyKey = 4;
    /// `ScaleV` property (Float)
    pub const SCALE_V: PropertyKey = 5;

    /// Create with updates off, local mapping, zero offset and unit scale
    pub fn new(factory: &dyn PropertyFactory) -> Result<Self, ComponentError> {
        let mut base = ComponentBase::new(Self::TYPE);
        base.create_property(Self::UPDATE, PropertyType::Bool, factory)?;
        base.create_property(Self::GLOBAL, PropertyType::Bool, factory)?;
        base.create_property(Self::OFFSET_U, PropertyType::Float, factory)?;
        base.create_property(Self::OFFSET_V, PropertyType::Float, factory)?;
        base.create_property(Self::SCALE_U, PropertyType::Float, factory)?;
        base.create_property(Self::SCALE_V, PropertyType::Float, factory)?;
        base.write(Self::SCALE_U, 1.0f32);
        base.write(Self::SCALE_V, 1.0f32);

        Ok(Self { base })
    }

    /// Whether geometry is remapped on change
    pub fn is_update(&self) -> bool {
        self.base.read(Self::UPDATE)
    }

    /// Whether the mapping follows the world transform
    pub fn is_global(&self) -> bool {
        self.base.read(Self::GLOBAL)
    }

    /// Set update and global mode
    pub fn set_mode(&mut self, update: bool, global: bool) {
        self.base.write(Self::UPDATE, update);
        self.base.write(Self::GLOBAL, global);
    }

    /// Set offset and scale in texture space
    pub fn set_mapping(&mut self, offset: (f32, f32), scale: (f32, f32)) {
        self.base.write(Self::OFFSET_U, offset.0);
        self.base.write(Self::OFFSET_V, offset.1);
        self.base.write(Self::SCALE_U, scale.0);
        self.base.write(Self::SCALE_V, scale.1);
    }
}

impl ComponentKind for AutoUvMapComponent {
    const TYPE: ComponentType = ComponentType::AutoUvMap;
}

impl Component for AutoUvMapComponent {
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
        component_type == ComponentType::Transform
    }

    fn on_observable_changed(&mut self, _observable: &dyn Component, context: &mut ObserverContext) {
        if self.is_update() && self.is_global() {
            context.notify_this_component_changed();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::property_factory::DefaultPropertyFactory;

    #[test]
    fn test_defaults() {
        let component = AutoUvMapComponent::new(&DefaultPropertyFactory).unwrap();
        assert!(!component.is_update());
        assert!(!component.is_global());
        assert_eq!(component.base.read::<f32>(AutoUvMapComponent::OFFSET_U), 0.0);
        assert_eq!(component.base.read::<f32>(AutoUvMapComponent::SCALE_U), 1.0);
        assert_eq!(component.base.read::<f32>(AutoUvMapComponent::SCALE_V), 1.0);
    }

    #[test]
    fn test_renotify_only_when_update_and_global() {
        let mut component = AutoUvMapComponent::new(&DefaultPropertyFactory).unwrap();
        let transform = crate::ecs::components::TransformComponent::new(&DefaultPropertyFactory).unwrap();

        for (update, global, expected) in [
            (false, false, false),
            (true, false, false),
            (false, true, false),
            (true, true, true),
        ] {
            component.set_mode(update, global);
            let mut context = ObserverContext::new();
            component.on_observable_changed(&transform, &mut context);
            assert_eq!(context.renotify_requested(), expected);
        }
    }
}
