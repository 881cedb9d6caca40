//! Notification component
//!
//! Watches every sibling and forwards each change to the owning entity's
//! [`GameObjectHooks::on_component_changed`](crate::ecs::GameObjectHooks::on_component_changed),
//! so an entity can react to its components without each of them knowing
//! about the entity. Only the owning game object can create one.

use crate::ecs::component::{Component, ComponentBase, ComponentKind, ComponentType, ObserverContext};
use crate::foundation::identity::IdType;
use std::any::Any;

/// Forwards sibling changes to the owning entity
#[derive(Debug)]
pub struct NotificationComponent {
    base: ComponentBase,
    owner: IdType,
}

impl NotificationComponent {
    pub(crate) fn new(owner: IdType) -> Self {
        Self {
            base: ComponentBase::new(Self::TYPE),
            owner,
        }
    }

    /// ID of the owning game object
    pub fn owner(&self) -> IdType {
        self.owner
    }
}

impl ComponentKind for NotificationComponent {
    const TYPE: ComponentType = ComponentType::Notification;
}

impl Component for NotificationComponent {
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

    fn is_observable_of_interest(&self, _component_type: ComponentType) -> bool {
        true
    }

    fn on_observable_changed(&mut self, observable: &dyn Component, context: &mut ObserverContext) {
        log::trace!("Entity {}: forwarding change of {}", self.owner, observable.component_type());
        context.forward_to_owner();
    }
}
