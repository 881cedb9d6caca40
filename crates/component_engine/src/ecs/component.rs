//! Component trait and shared component state
//!
//! A component is a typed bundle of keyed properties attached to a
//! [`GameObject`](super::GameObject). Components of one entity watch each
//! other: when one changes, every sibling that declared interest in its type
//! gets [`Component::on_observable_changed`]. The observer graph is stored as
//! [`ComponentKey`]s into the entity's component slot map, so a removed
//! component can never be reached through a stale link.

use super::component_factory::ComponentFactory;
use super::error::ComponentError;
use super::property::{Property, PropertyKey, PropertyKind, PropertyType};
use super::property_factory::PropertyFactory;
use crate::foundation::math::Transform;
use crate::scene::GeometryNodeRef;
use std::any::Any;
use std::fmt;
use std::io::{self, Read, Write};

slotmap::new_key_type! {
    /// Slot of a component within its owning game object
    pub struct ComponentKey;
}

/// Component type tag; at most one component per type lives on an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ComponentType {
    /// Forwards sibling changes to the owning entity
    Notification,
    /// Name and enabled state
    MetaData,
    /// Position, rotation and scale
    Transform,
    /// Geometry asset and scene node
    Geometry,
    /// Automatic texture coordinate mapping
    AutoUvMap,
    /// Application defined component type
    Custom(u32),
}

impl ComponentType {
    /// Built-in component types
    pub const BUILT_IN: [Self; 5] = [
        Self::Notification,
        Self::MetaData,
        Self::Transform,
        Self::Geometry,
        Self::AutoUvMap,
    ];

    /// Stable identifier name used by editors and scripts
    pub fn id_name(self) -> &'static str {
        match self {
            Self::Notification => "notification",
            Self::MetaData => "meta_data",
            Self::Transform => "transform",
            Self::Geometry => "geometry",
            Self::AutoUvMap => "auto_uv_map",
            Self::Custom(_) => "custom",
        }
    }

    /// Parse a built-in identifier name
    pub fn from_id_name(name: &str) -> Option<Self> {
        Self::BUILT_IN
            .into_iter()
            .find(|component_type| component_type.id_name() == name)
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Custom(id) => write!(f, "custom({})", id),
            other => f.write_str(other.id_name()),
        }
    }
}

/// Concrete component types with a fixed type tag
pub trait ComponentKind: Component {
    /// Type tag of this component
    const TYPE: ComponentType;
}

/// Requests an observer can make while handling a change.
///
/// Observers receive the changed component by shared reference and may not
/// touch the entity directly; whatever they need beyond their own state goes
/// through this context and is carried out by the entity once the current
/// fan-out is done.
#[derive(Debug, Default)]
pub struct ObserverContext {
    renotify: bool,
    forward: bool,
}

impl ObserverContext {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Announce a change of the observing component to its own observers.
    ///
    /// The announcement runs once every observer of the current change has
    /// been called, not from inside this observer's handler. Chained
    /// announcements therefore reach hooks after the originating one.
    pub fn notify_this_component_changed(&mut self) {
        self.renotify = true;
    }

    pub(crate) fn forward_to_owner(&mut self) {
        self.forward = true;
    }

    pub(crate) fn renotify_requested(&self) -> bool {
        self.renotify
    }

    pub(crate) fn forward_requested(&self) -> bool {
        self.forward
    }
}

/// State shared by every component: properties and observer links
#[derive(Debug)]
pub struct ComponentBase {
    component_type: ComponentType,
    properties: Vec<Property>,
    observers: Vec<ComponentKey>,
    observables: Vec<ComponentKey>,
}

impl ComponentBase {
    /// Create empty component state
    pub fn new(component_type: ComponentType) -> Self {
        Self {
            component_type,
            properties: Vec::new(),
            observers: Vec::new(),
            observables: Vec::new(),
        }
    }

    /// Type tag of the owning component
    pub fn component_type(&self) -> ComponentType {
        self.component_type
    }

    /// Declare the next property.
    ///
    /// Keys must be declared densely from zero, and the factory must keep the
    /// requested key and kind. Nothing is added on failure.
    pub fn create_property(
        &mut self,
        key: PropertyKey,
        property_type: PropertyType,
        factory: &dyn PropertyFactory,
    ) -> Result<&mut Property, ComponentError> {
        let expected = self.properties.len();
        if key != expected {
            return Err(ComponentError::InvalidPropertyKey {
                component: self.component_type,
                expected,
                found: key,
            });
        }

        let property = factory.make_property(property_type, key);
        if property.key() != key {
            return Err(ComponentError::InvalidPropertyKey {
                component: self.component_type,
                expected: key,
                found: property.key(),
            });
        }
        if property.property_type() != property_type {
            return Err(ComponentError::PropertyTypeMismatch {
                key,
                expected: property_type,
                found: property.property_type(),
            });
        }

        self.properties.push(property);
        Ok(&mut self.properties[key])
    }

    /// Properties in key order
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Property by key
    pub fn property(&self, key: PropertyKey) -> Option<&Property> {
        self.properties.get(key)
    }

    /// Mutable property by key
    pub fn property_mut(&mut self, key: PropertyKey) -> Option<&mut Property> {
        self.properties.get_mut(key)
    }

    /// Property by key, only if it has the expected kind
    pub fn property_of(&self, key: PropertyKey, property_type: PropertyType) -> Option<&Property> {
        self.property(key)
            .filter(|property| property.property_type() == property_type)
    }

    /// Mutable property by key, only if it has the expected kind
    pub fn property_of_mut(&mut self, key: PropertyKey, property_type: PropertyType) -> Option<&mut Property> {
        self.property_mut(key)
            .filter(|property| property.property_type() == property_type)
    }

    /// Read a typed property value, or the type default if it is missing
    pub fn read<T: PropertyKind>(&self, key: PropertyKey) -> T {
        match self.property_of(key, T::TYPE).and_then(Property::get::<T>) {
            Some(value) => value,
            None => {
                log::trace!("{}: no {} property {}, reading default", self.component_type, T::TYPE, key);
                T::type_default()
            }
        }
    }

    /// Write a typed property value; missing properties are ignored
    pub fn write<T: PropertyKind>(&mut self, key: PropertyKey, value: T) {
        let component_type = self.component_type;
        match self.property_of_mut(key, T::TYPE) {
            Some(property) => {
                property.set(value);
            }
            None => log::trace!("{}: no {} property {}, write ignored", component_type, T::TYPE, key),
        }
    }

    /// Copy property values by position from another component
    pub fn copy_property_values_from(&mut self, source: &ComponentBase) {
        for (target, source) in self.properties.iter_mut().zip(&source.properties) {
            target.set_value(source.value().clone());
        }
    }

    /// Write all properties in key order
    pub fn write_to_file(&self, file: &mut dyn Write) -> io::Result<()> {
        self.properties
            .iter()
            .try_for_each(|property| property.write_to_file(file))
    }

    /// Read all properties in key order
    pub fn read_from_file(&mut self, file: &mut dyn Read) -> io::Result<()> {
        self.properties
            .iter_mut()
            .try_for_each(|property| property.read_from_file(file))
    }

    /// Components notified when this one changes
    pub fn observers(&self) -> &[ComponentKey] {
        &self.observers
    }

    /// Components this one watches
    pub fn observables(&self) -> &[ComponentKey] {
        &self.observables
    }

    pub(crate) fn clear_links(&mut self) {
        self.observers.clear();
        self.observables.clear();
    }

    fn add_observer(&mut self, key: ComponentKey) {
        if !self.observers.contains(&key) {
            self.observers.push(key);
        }
    }

    fn add_observable(&mut self, key: ComponentKey) {
        if !self.observables.contains(&key) {
            self.observables.push(key);
        }
    }

    fn remove_observer(&mut self, key: ComponentKey) {
        self.observers.retain(|&observer| observer != key);
    }

    fn remove_observable(&mut self, key: ComponentKey) {
        self.observables.retain(|&observable| observable != key);
    }
}

/// Component behavior.
///
/// Implementors own a [`ComponentBase`] and declare their properties through a
/// [`PropertyFactory`] when constructed. Everything else has a default.
pub trait Component: Any {
    /// Shared component state
    fn base(&self) -> &ComponentBase;

    /// Mutable shared component state
    fn base_mut(&mut self) -> &mut ComponentBase;

    /// Upcast for downcasting to the concrete type
    fn as_any(&self) -> &dyn Any;

    /// Mutable upcast for downcasting to the concrete type
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Type tag
    fn component_type(&self) -> ComponentType {
        self.base().component_type()
    }

    /// Identifier name; custom components should override this
    fn id_name(&self) -> &str {
        self.component_type().id_name()
    }

    /// Whether changes of components of this type should reach this one
    fn is_observable_of_interest(&self, _component_type: ComponentType) -> bool {
        false
    }

    /// A watched sibling changed
    fn on_observable_changed(&mut self, _observable: &dyn Component, _context: &mut ObserverContext) {}

    /// This component changed; runs before its observers are notified
    fn on_this_component_changed(&mut self) {}

    /// Property values were copied in from another component
    fn on_properties_copied(&mut self) {}

    /// Pose exposed to observers, if this component carries one
    fn transform(&self) -> Option<&Transform> {
        None
    }

    /// Scene node exposed to renderers, if this component carries one
    fn scene_node(&self) -> Option<&GeometryNodeRef> {
        None
    }

    /// Properties in key order
    fn properties(&self) -> &[Property] {
        self.base().properties()
    }

    /// Property by key
    fn find_property(&self, key: PropertyKey) -> Option<&Property> {
        self.base().property(key)
    }

    /// Mutable property by key
    fn find_property_mut(&mut self, key: PropertyKey) -> Option<&mut Property> {
        self.base_mut().property_mut(key)
    }

    /// Property by key, only if it has the expected kind
    fn find_property_of(&self, key: PropertyKey, property_type: PropertyType) -> Option<&Property> {
        self.base().property_of(key, property_type)
    }

    /// Write all property values in key order (no tags, no separators)
    fn write_to_file(&self, file: &mut dyn Write) -> io::Result<()> {
        self.base().write_to_file(file)
    }

    /// Read all property values in key order
    fn read_from_file(&mut self, file: &mut dyn Read) -> io::Result<()> {
        self.base_mut().read_from_file(file)
    }

    /// Build a component of the same type through `factory` and copy the
    /// property values across. Observer links are not copied.
    fn instantiate_copy(&self, factory: &dyn ComponentFactory) -> Result<Box<dyn Component>, ComponentError> {
        let component_type = self.component_type();
        let mut copy = factory.instantiate_component(component_type)?;
        if copy.component_type() != component_type {
            return Err(ComponentError::ComponentTypeMismatch {
                expected: component_type,
            });
        }

        copy.base_mut().copy_property_values_from(self.base());
        copy.on_properties_copied();
        Ok(copy)
    }
}

impl dyn Component + '_ {
    /// Concrete component reference
    pub fn downcast_ref<C: Component>(&self) -> Option<&C> {
        self.as_any().downcast_ref()
    }

    /// Mutable concrete component reference
    pub fn downcast_mut<C: Component>(&mut self) -> Option<&mut C> {
        self.as_any_mut().downcast_mut()
    }

    /// Read a typed property value, or the type default if it is missing
    pub fn read_property<T: PropertyKind>(&self, key: PropertyKey) -> T {
        self.base().read(key)
    }

    /// Write a typed property value; missing properties are ignored
    pub fn write_property<T: PropertyKind>(&mut self, key: PropertyKey, value: T) {
        self.base_mut().write(key, value);
    }
}

impl fmt::Debug for dyn Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Component")
            .field("type", &self.component_type())
            .field("properties", &self.properties())
            .finish()
    }
}

/// Attach `observer` to `observable` if the observer is interested in its type
pub fn register_observable(
    (observer_key, observer): (ComponentKey, &mut dyn Component),
    (observable_key, observable): (ComponentKey, &mut dyn Component),
) {
    if observer.is_observable_of_interest(observable.component_type()) {
        observable.base_mut().add_observer(observer_key);
        observer.base_mut().add_observable(observable_key);
    }
}

/// Detach `observer` from `observable`, whatever its interest
pub fn unregister_observable(
    (observer_key, observer): (ComponentKey, &mut dyn Component),
    (observable_key, observable): (ComponentKey, &mut dyn Component),
) {
    observable.base_mut().remove_observer(observer_key);
    observer.base_mut().remove_observable(observable_key);
}
