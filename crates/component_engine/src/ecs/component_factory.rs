//! Component construction
//!
//! A [`ComponentFactory`] maps a [`ComponentType`] to a fresh component. An
//! application substitutes specialized components engine-wide by overriding
//! the matching `make_*` method and handing its factory to the entities it
//! creates.

use super::component::{Component, ComponentType};
use super::components::{AutoUvMapComponent, GeometryComponent, MetaDataComponent, TransformComponent};
use super::error::ComponentError;
use super::property_factory::{DefaultPropertyFactory, PropertyFactory};
use crate::config::EntityConfig;
use std::borrow::Cow;

/// Builds components for game objects
pub trait ComponentFactory {
    /// Property factory handed to every component this factory builds
    fn property_factory(&self) -> &dyn PropertyFactory {
        &DefaultPropertyFactory
    }

    /// Build a component of the given type.
    ///
    /// Notification components belong to their entity and cannot be built
    /// here.
    fn instantiate_component(&self, component_type: ComponentType) -> Result<Box<dyn Component>, ComponentError> {
        match component_type {
            ComponentType::Notification => Err(ComponentError::OwnerRequired),
            ComponentType::MetaData => self.make_meta_data_component(),
            ComponentType::Transform => self.make_transform_component(),
            ComponentType::Geometry => self.make_geometry_component(),
            ComponentType::AutoUvMap => self.make_auto_uv_map_component(),
            ComponentType::Custom(_) => self.make_custom_component(component_type),
        }
    }

    /// Build a meta data component
    fn make_meta_data_component(&self) -> Result<Box<dyn Component>, ComponentError> {
        Ok(Box::new(MetaDataComponent::new(self.property_factory())?))
    }

    /// Build a transform component
    fn make_transform_component(&self) -> Result<Box<dyn Component>, ComponentError> {
        Ok(Box::new(TransformComponent::new(self.property_factory())?))
    }

    /// Build a geometry component
    fn make_geometry_component(&self) -> Result<Box<dyn Component>, ComponentError> {
        Ok(Box::new(GeometryComponent::new(self.property_factory())?))
    }

    /// Build an auto UV map component
    fn make_auto_uv_map_component(&self) -> Result<Box<dyn Component>, ComponentError> {
        Ok(Box::new(AutoUvMapComponent::new(self.property_factory())?))
    }

    /// Build an application defined component; unsupported by default
    fn make_custom_component(&self, component_type: ComponentType) -> Result<Box<dyn Component>, ComponentError> {
        Err(ComponentError::UnsupportedComponentType(component_type))
    }
}

/// Stock factory building the built-in components with plain properties
#[derive(Debug, Clone)]
pub struct DefaultComponentFactory {
    default_name: Cow<'static, str>,
}

impl Default for DefaultComponentFactory {
    fn default() -> Self {
        Self {
            default_name: Cow::Borrowed(MetaDataComponent::DEFAULT_NAME),
        }
    }
}

impl DefaultComponentFactory {
    /// Create the stock factory
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a factory using the configured entity defaults
    pub fn from_config(config: &EntityConfig) -> Self {
        Self {
            default_name: Cow::Owned(config.default_name.clone()),
        }
    }

    /// Initial name of new meta data components
    pub fn default_name(&self) -> &str {
        &self.default_name
    }
}

impl ComponentFactory for DefaultComponentFactory {
    fn make_meta_data_component(&self) -> Result<Box<dyn Component>, ComponentError> {
        let mut component = MetaDataComponent::new(self.property_factory())?;
        component.setup_name(&self.default_name);
        Ok(Box::new(component))
    }
}
