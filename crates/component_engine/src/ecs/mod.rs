//! Entity/component property model
//!
//! Entities ([`GameObject`]) own typed components; components own typed
//! properties and observe their siblings within the same entity.

pub mod component;
pub mod component_factory;
pub mod components;
pub mod error;
pub mod game_object;
pub mod property;
pub mod property_factory;

#[cfg(test)]
mod tests;

pub use component::{Component, ComponentBase, ComponentKey, ComponentKind, ComponentType, ObserverContext};
pub use component_factory::{ComponentFactory, DefaultComponentFactory};
pub use error::ComponentError;
pub use game_object::{GameObject, GameObjectHooks, NoHooks};
pub use property::{Property, PropertyBinding, PropertyKey, PropertyKind, PropertyType, PropertyValue};
pub use property_factory::{DefaultPropertyFactory, PropertyFactory};
