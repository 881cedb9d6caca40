//! Meta data component: entity name and enabled flag

use crate::ecs::component::{Component, ComponentBase, ComponentKind, ComponentType};
use crate::ecs::error::ComponentError;
use crate::ecs::property::{PropertyKey, PropertyType};
use crate::ecs::property_factory::PropertyFactory;
use std::any::Any;

/// Name and enabled state of an entity
#[derive(Debug)]
pub struct MetaDataComponent {
    base: ComponentBase,
}

impl MetaDataComponent {
    /// `Name` property (String)
    pub const NAME: PropertyKey = 0;
    /// `Enabled` property (Bool)
    pub const ENABLED: PropertyKey = 1;

    /// Name given to new entities
    pub const DEFAULT_NAME: &'static str = "Entity";

    /// Create a meta data component named [`Self::DEFAULT_NAME`], enabled
    pub fn new(factory: &dyn PropertyFactory) -> Result<Self, ComponentError> {
        let mut base = ComponentBase::new(Self::TYPE);
        base.create_property(Self::NAME, PropertyType::String, factory)?;
        base.create_property(Self::ENABLED, PropertyType::Bool, factory)?;

        let mut component = Self { base };
        component.setup_name(Self::DEFAULT_NAME);
        component.set_enabled(true);
        Ok(component)
    }

    /// Set the entity name
    pub fn setup_name(&mut self, name: &str) {
        self.base.write(Self::NAME, name.to_string());
    }

    /// Entity name
    pub fn name(&self) -> String {
        self.base.read(Self::NAME)
    }

    /// Set the enabled flag
    pub fn set_enabled(&mut self, enabled: bool) {
        self.base.write(Self::ENABLED, enabled);
    }

    /// Whether the entity is enabled
    pub fn is_enabled(&self) -> bool {
        self.base.read(Self::ENABLED)
    }
}

impl ComponentKind for MetaDataComponent {
    const TYPE: ComponentType = ComponentType::MetaData;
}

impl Component for MetaDataComponent {
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
}
