//! Component system errors

use super::component::ComponentType;
use super::property::{PropertyKey, PropertyType};
use thiserror::Error;

/// Schema and lifecycle errors raised by components and entities.
///
/// Missing properties or components are not errors; lookups return `None`
/// and property helpers fall back to defaults.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComponentError {
    /// A property was declared out of order
    #[error("{component}: property key {found} does not match the next free key {expected}")]
    InvalidPropertyKey {
        /// Component declaring the property
        component: ComponentType,
        /// Next contiguous key
        expected: PropertyKey,
        /// Key that was declared or returned by the factory
        found: PropertyKey,
    },

    /// A property factory returned a property of the wrong kind
    #[error("property factory returned {found} for key {key}, expected {expected}")]
    PropertyTypeMismatch {
        /// Requested key
        key: PropertyKey,
        /// Requested kind
        expected: PropertyType,
        /// Kind that was produced
        found: PropertyType,
    },

    /// The entity already owns a component of this type
    #[error("component {0} already exists")]
    ComponentAlreadyExists(ComponentType),

    /// The component factory cannot build this type
    #[error("component factory cannot create {0}")]
    UnsupportedComponentType(ComponentType),

    /// Notification components are only created by their owning entity
    #[error("notification component requires an owning game object")]
    OwnerRequired,

    /// Typed access found a component of another concrete type
    #[error("component {expected} has an unexpected concrete type")]
    ComponentTypeMismatch {
        /// Requested component type
        expected: ComponentType,
    },
}
