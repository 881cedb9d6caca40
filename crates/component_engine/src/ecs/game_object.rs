//! Game objects (entities)
//!
//! A [`GameObject`] owns at most one component per [`ComponentType`] and wires
//! the observer graph between them. Components live in a slot map; observer
//! links are [`ComponentKey`]s, so removing a component invalidates every link
//! to it even if a sibling missed the unregistration.
//!
//! Change notification is synchronous. `notify_component_changed(T)` runs
//! `T`'s own hook, then every observer of `T` in registration order. An
//! observer asking to re-announce its own change is served right after that
//! fan-out, depth first, before the call returns.

use super::component::{register_observable, unregister_observable, Component, ComponentKey, ComponentKind, ComponentType, ObserverContext};
use super::component_factory::{ComponentFactory, DefaultComponentFactory};
use super::components::NotificationComponent;
use super::error::ComponentError;
use crate::config::EntityConfig;
use crate::foundation::identity::{IdType, Identifiable, SharedIdentityFactory};
use crate::scene::GeometryNodeRef;
use slotmap::SlotMap;
use std::fmt;
use std::rc::Rc;

/// Extension points of a game object.
///
/// Every method has an empty default; an editor entity implements the ones it
/// needs (for example to refresh a property grid on every change).
pub trait GameObjectHooks {
    /// A component is being added; it is wired but not yet listed by
    /// [`GameObject::components`]
    fn on_register_component(&mut self, _component: &dyn Component) {}

    /// A component was removed and is about to be detached and dropped
    fn on_unregister_component(&mut self, _component: &dyn Component) {}

    /// A component changed; requires a notification component on the entity
    fn on_component_changed(&mut self, _owner: IdType, _component: &dyn Component) {}
}

/// Hooks that do nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHooks;

impl GameObjectHooks for NoHooks {}

/// Identity-bearing container of components
pub struct GameObject {
    identity: Identifiable,
    components: SlotMap<ComponentKey, Box<dyn Component>>,
    order: Vec<ComponentKey>,
    factory: Rc<dyn ComponentFactory>,
    hooks: Box<dyn GameObjectHooks>,
}

impl fmt::Debug for GameObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameObject")
            .field("id", &self.id())
            .field("components", &self.component_types())
            .finish()
    }
}

impl GameObject {
    /// Create an empty game object with a fresh ID and the default component factory
    pub fn new(id_factory: &SharedIdentityFactory) -> Self {
        Self {
            identity: Identifiable::new(id_factory),
            components: SlotMap::with_key(),
            order: Vec::new(),
            factory: Rc::new(DefaultComponentFactory::new()),
            hooks: Box::new(NoHooks),
        }
    }

    /// Use another component factory for components created from now on (builder pattern)
    pub fn with_component_factory(mut self, factory: Rc<dyn ComponentFactory>) -> Self {
        self.factory = factory;
        self
    }

    /// Install extension hooks (builder pattern)
    pub fn with_hooks(mut self, hooks: Box<dyn GameObjectHooks>) -> Self {
        self.hooks = hooks;
        self
    }

    /// Entity ID
    pub fn id(&self) -> IdType {
        self.identity.id()
    }

    /// Component factory used by this entity
    pub fn component_factory(&self) -> &Rc<dyn ComponentFactory> {
        &self.factory
    }

    /// Components in creation order
    pub fn components(&self) -> impl Iterator<Item = &dyn Component> + '_ {
        self.order
            .iter()
            .filter_map(|&key| self.components.get(key))
            .map(|component| &**component)
    }

    /// Component types in creation order
    pub fn component_types(&self) -> Vec<ComponentType> {
        self.components().map(Component::component_type).collect()
    }

    /// Number of components
    pub fn component_count(&self) -> usize {
        self.order.len()
    }

    /// Component of the given type
    pub fn find_component(&self, component_type: ComponentType) -> Option<&dyn Component> {
        self.find_key(component_type)
            .and_then(|key| self.components.get(key))
            .map(|component| &**component)
    }

    /// Mutable component of the given type.
    ///
    /// Changes made here are not announced; use
    /// [`update_component`](Self::update_component) or follow up with
    /// [`notify_component_changed`](Self::notify_component_changed).
    pub fn find_component_mut(&mut self, component_type: ComponentType) -> Option<&mut dyn Component> {
        let key = self.find_key(component_type)?;
        let component = self.components.get_mut(key)?;
        Some(&mut **component)
    }

    /// Component of a concrete type; `None` if missing or substituted by another type
    pub fn find_component_as<C: ComponentKind>(&self) -> Option<&C> {
        self.find_component(C::TYPE)?.downcast_ref()
    }

    /// Create a component of the given type.
    ///
    /// Fails if the entity already has one. The new component is wired to
    /// every sibling before it becomes visible.
    pub fn create_component(&mut self, component_type: ComponentType) -> Result<&mut dyn Component, ComponentError> {
        let key = self.add_component(component_type)?;
        Ok(&mut *self.components[key])
    }

    /// Create a component and return it as its concrete type.
    ///
    /// Nothing is added if the factory substitutes another type for `C`.
    pub fn create_component_as<C: ComponentKind>(&mut self) -> Result<&mut C, ComponentError> {
        if self.find_key(C::TYPE).is_some() {
            return Err(ComponentError::ComponentAlreadyExists(C::TYPE));
        }

        let component = self.instantiate_component(C::TYPE)?;
        if !component.as_any().is::<C>() {
            return Err(ComponentError::ComponentTypeMismatch { expected: C::TYPE });
        }

        let key = self.register_component(component);
        self.components[key]
            .downcast_mut()
            .ok_or(ComponentError::ComponentTypeMismatch { expected: C::TYPE })
    }

    /// Remove the component of the given type; `false` if there is none
    pub fn delete_component(&mut self, component_type: ComponentType) -> bool {
        let Some(position) = self.order.iter().position(|&key| {
            self.components
                .get(key)
                .is_some_and(|component| component.component_type() == component_type)
        }) else {
            return false;
        };

        let key = self.order.remove(position);
        let Some(mut component) = self.components.remove(key) else {
            return false;
        };

        self.hooks.on_unregister_component(&*component);

        for &other_key in &self.order {
            if let Some(other) = self.components.get_mut(other_key) {
                unregister_observable((key, &mut *component), (other_key, &mut **other));
                unregister_observable((other_key, &mut **other), (key, &mut *component));
            }
        }

        log::debug!("Entity {}: deleted {} component", self.id(), component_type);
        true
    }

    /// Announce a change of the component of the given type; `false` if there is none
    pub fn notify_component_changed(&mut self, component_type: ComponentType) -> bool {
        match self.find_key(component_type) {
            Some(key) => {
                self.dispatch_change(key);
                true
            }
            None => false,
        }
    }

    /// Edit a component and announce the change
    pub fn update_component<R>(
        &mut self,
        component_type: ComponentType,
        edit: impl FnOnce(&mut dyn Component) -> R,
    ) -> Option<R> {
        let key = self.find_key(component_type)?;
        let result = edit(&mut **self.components.get_mut(key)?);
        self.dispatch_change(key);
        Some(result)
    }

    /// Edit a component as its concrete type and announce the change.
    ///
    /// `None` (and no notification) if the component is missing or substituted
    /// by another type.
    pub fn update_component_as<C: ComponentKind, R>(&mut self, edit: impl FnOnce(&mut C) -> R) -> Option<R> {
        let key = self.find_key(C::TYPE)?;
        let component = self.components.get_mut(key)?.downcast_mut::<C>()?;
        let result = edit(component);
        self.dispatch_change(key);
        Some(result)
    }

    /// Types of the components observing the component of the given type
    pub fn observers_of(&self, component_type: ComponentType) -> Vec<ComponentType> {
        self.find_component(component_type)
            .map(|component| {
                component
                    .base()
                    .observers()
                    .iter()
                    .filter_map(|&key| self.components.get(key))
                    .map(|observer| observer.component_type())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Drop every observer link and wire all components pairwise again
    pub fn rebuild_observer_graph(&mut self) {
        for component in self.components.values_mut() {
            component.base_mut().clear_links();
        }

        let order = self.order.clone();
        for (index, &key) in order.iter().enumerate() {
            for &other_key in &order[..index] {
                self.link_pair(key, other_key);
            }
        }

        log::debug!("Entity {}: rebuilt observer graph of {} components", self.id(), self.order.len());
    }

    /// Copy this entity: same component types and property values, new ID.
    ///
    /// Every copied component goes through the normal registration, so the
    /// copy has its own complete observer graph. `component_factory` replaces
    /// this entity's factory for the copy.
    pub fn instantiate_copy(
        &self,
        id_factory: &SharedIdentityFactory,
        component_factory: Option<Rc<dyn ComponentFactory>>,
    ) -> Result<GameObject, ComponentError> {
        let mut copy = self.empty_copy(id_factory, component_factory);
        self.copy_components_into(&mut copy)?;
        Ok(copy)
    }

    /// Copy this entity without wiring the copied components.
    ///
    /// The copy has no observer links and no hook calls were made until
    /// [`rebuild_observer_graph`](Self::rebuild_observer_graph) runs.
    pub fn instantiate_detached_copy(
        &self,
        id_factory: &SharedIdentityFactory,
        component_factory: Option<Rc<dyn ComponentFactory>>,
    ) -> Result<GameObject, ComponentError> {
        let mut copy = self.empty_copy(id_factory, component_factory);
        for component in self.copy_components_for(&copy)? {
            let key = copy.components.insert(component);
            copy.order.push(key);
        }

        log::debug!("Entity {}: detached copy as entity {}", self.id(), copy.id());
        Ok(copy)
    }

    /// Copy this entity, wiring the copy as configured
    pub fn instantiate_copy_with_config(
        &self,
        config: &EntityConfig,
        id_factory: &SharedIdentityFactory,
        component_factory: Option<Rc<dyn ComponentFactory>>,
    ) -> Result<GameObject, ComponentError> {
        if config.rebuild_observers_on_copy {
            self.instantiate_copy(id_factory, component_factory)
        } else {
            self.instantiate_detached_copy(id_factory, component_factory)
        }
    }

    /// Copy all components of this entity into `target` through its normal
    /// registration, so `target`'s hooks see each of them.
    ///
    /// Nothing is added if any type already exists on `target` or a copy fails.
    pub fn copy_components_into(&self, target: &mut GameObject) -> Result<(), ComponentError> {
        if let Some(existing) = self
            .components()
            .map(Component::component_type)
            .find(|&component_type| target.find_key(component_type).is_some())
        {
            return Err(ComponentError::ComponentAlreadyExists(existing));
        }

        for component in self.copy_components_for(target)? {
            target.register_component(component);
        }

        log::debug!("Entity {}: copied {} components into entity {}", self.id(), self.order.len(), target.id());
        Ok(())
    }

    /// Visit every component that exposes a scene node
    pub fn for_each_component_with_scene_node(&self, mut visit: impl FnMut(&dyn Component, &GeometryNodeRef)) {
        for component in self.components() {
            match component.component_type() {
                ComponentType::Geometry => {
                    if let Some(node) = component.scene_node() {
                        visit(component, node);
                    }
                }
                ComponentType::Notification
                | ComponentType::MetaData
                | ComponentType::Transform
                | ComponentType::AutoUvMap
                | ComponentType::Custom(_) => {}
            }
        }
    }

    fn find_key(&self, component_type: ComponentType) -> Option<ComponentKey> {
        self.order.iter().copied().find(|&key| {
            self.components
                .get(key)
                .is_some_and(|component| component.component_type() == component_type)
        })
    }

    fn add_component(&mut self, component_type: ComponentType) -> Result<ComponentKey, ComponentError> {
        if self.find_key(component_type).is_some() {
            return Err(ComponentError::ComponentAlreadyExists(component_type));
        }

        let component = self.instantiate_component(component_type)?;
        Ok(self.register_component(component))
    }

    fn instantiate_component(&self, component_type: ComponentType) -> Result<Box<dyn Component>, ComponentError> {
        let component: Box<dyn Component> = match component_type {
            ComponentType::Notification => Box::new(NotificationComponent::new(self.id())),
            _ => self.factory.instantiate_component(component_type)?,
        };

        if component.component_type() != component_type {
            return Err(ComponentError::ComponentTypeMismatch {
                expected: component_type,
            });
        }
        Ok(component)
    }

    fn register_component(&mut self, component: Box<dyn Component>) -> ComponentKey {
        let component_type = component.component_type();
        let key = self.components.insert(component);

        for index in 0..self.order.len() {
            let other_key = self.order[index];
            self.link_pair(key, other_key);
        }

        self.hooks.on_register_component(&*self.components[key]);
        self.order.push(key);

        log::debug!("Entity {}: registered {} component", self.id(), component_type);
        key
    }

    fn link_pair(&mut self, key: ComponentKey, other_key: ComponentKey) {
        if let Some([component, other]) = self.components.get_disjoint_mut([key, other_key]) {
            register_observable((key, &mut **component), (other_key, &mut **other));
            register_observable((other_key, &mut **other), (key, &mut **component));
        }
    }

    fn empty_copy(&self, id_factory: &SharedIdentityFactory, component_factory: Option<Rc<dyn ComponentFactory>>) -> GameObject {
        GameObject::new(id_factory)
            .with_component_factory(component_factory.unwrap_or_else(|| Rc::clone(&self.factory)))
    }

    fn copy_components_for(&self, target: &GameObject) -> Result<Vec<Box<dyn Component>>, ComponentError> {
        self.components()
            .map(|component| match component.component_type() {
                ComponentType::Notification => Ok(Box::new(NotificationComponent::new(target.id())) as Box<dyn Component>),
                _ => component.instantiate_copy(&*target.factory),
            })
            .collect()
    }

    fn dispatch_change(&mut self, key: ComponentKey) {
        let Some(component) = self.components.get_mut(key) else {
            return;
        };

        component.on_this_component_changed();
        let observers = component.base().observers().to_vec();
        log::trace!(
            "Entity {}: {} changed, notifying {} observers",
            self.identity.id(),
            component.component_type(),
            observers.len()
        );

        let mut renotify = Vec::new();
        for observer_key in observers {
            let Some([observable, observer]) = self.components.get_disjoint_mut([key, observer_key]) else {
                continue;
            };

            let mut context = ObserverContext::new();
            observer.on_observable_changed(&**observable, &mut context);

            if context.forward_requested() {
                self.hooks.on_component_changed(self.identity.id(), &**observable);
            }
            if context.renotify_requested() {
                renotify.push(observer_key);
            }
        }

        for observer_key in renotify {
            self.dispatch_change(observer_key);
        }
    }
}
