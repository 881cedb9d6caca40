//! Shared fixtures for the entity scenario tests

use crate::ecs::{
    Component, ComponentBase, ComponentError, ComponentFactory, ComponentType, GameObjectHooks, ObserverContext,
    PropertyFactory, PropertyKey, PropertyType,
};
use crate::foundation::identity::IdType;
use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

/// (observer, observable) pairs in delivery order
pub type DeliveryLog = Rc<RefCell<Vec<(ComponentType, ComponentType)>>>;

/// Custom component that records every change it observes
pub struct Recorder {
    base: ComponentBase,
    interest: Vec<ComponentType>,
    log: DeliveryLog,
}

impl Recorder {
    pub const VALUE: PropertyKey = 0;

    pub fn new(
        component_type: ComponentType,
        interest: Vec<ComponentType>,
        log: DeliveryLog,
        factory: &dyn PropertyFactory,
    ) -> Result<Self, ComponentError> {
        let mut base = ComponentBase::new(component_type);
        base.create_property(Self::VALUE, PropertyType::Int, factory)?;
        Ok(Self { base, interest, log })
    }
}

impl Component for Recorder {
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

    fn id_name(&self) -> &str {
        "recorder"
    }

    fn is_observable_of_interest(&self, component_type: ComponentType) -> bool {
        self.interest.contains(&component_type)
    }

    fn on_observable_changed(&mut self, observable: &dyn Component, _context: &mut ObserverContext) {
        self.log
            .borrow_mut()
            .push((self.component_type(), observable.component_type()));
    }
}

/// Builds the built-in components plus recorders for the registered custom IDs
#[derive(Default)]
pub struct RecorderFactory {
    pub log: DeliveryLog,
    pub interests: Vec<(u32, Vec<ComponentType>)>,
}

impl RecorderFactory {
    pub fn with_recorder(mut self, id: u32, interest: &[ComponentType]) -> Self {
        self.interests.push((id, interest.to_vec()));
        self
    }
}

impl ComponentFactory for RecorderFactory {
    fn make_custom_component(&self, component_type: ComponentType) -> Result<Box<dyn Component>, ComponentError> {
        let interest = self
            .interests
            .iter()
            .find(|(id, _)| ComponentType::Custom(*id) == component_type)
            .map(|(_, interest)| interest.clone())
            .ok_or(ComponentError::UnsupportedComponentType(component_type))?;

        Ok(Box::new(Recorder::new(
            component_type,
            interest,
            Rc::clone(&self.log),
            self.property_factory(),
        )?))
    }
}

/// Entity hook calls in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookEvent {
    Registered(ComponentType),
    Unregistered(ComponentType),
    Changed(IdType, ComponentType),
}

/// Hooks recording every call
pub struct RecordingHooks(pub Rc<RefCell<Vec<HookEvent>>>);

impl GameObjectHooks for RecordingHooks {
    fn on_register_component(&mut self, component: &dyn Component) {
        self.0.borrow_mut().push(HookEvent::Registered(component.component_type()));
    }

    fn on_unregister_component(&mut self, component: &dyn Component) {
        self.0.borrow_mut().push(HookEvent::Unregistered(component.component_type()));
    }

    fn on_component_changed(&mut self, owner: IdType, component: &dyn Component) {
        self.0.borrow_mut().push(HookEvent::Changed(owner, component.component_type()));
    }
}
