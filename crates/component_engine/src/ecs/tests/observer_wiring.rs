//! Observer graph wiring between sibling components
//!
//! Interest filtering, delivery counts, removal and the entity hooks

use super::support::{DeliveryLog, HookEvent, RecorderFactory, RecordingHooks};
use crate::ecs::components::MetaDataComponent;
use crate::ecs::{ComponentError, ComponentType, GameObject};
use crate::foundation::identity::{IdentityFactory, SharedIdentityFactory};
use std::cell::RefCell;
use std::rc::Rc;

const WATCHER: ComponentType = ComponentType::Custom(1);
const WATCHED: ComponentType = ComponentType::Custom(2);

fn recorder_entity(ids: &SharedIdentityFactory) -> (GameObject, DeliveryLog) {
    let factory = RecorderFactory::default()
        .with_recorder(1, &[WATCHED])
        .with_recorder(2, &[]);
    let log = Rc::clone(&factory.log);
    (GameObject::new(ids).with_component_factory(Rc::new(factory)), log)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interest_is_wired_in_either_creation_order() {
        let ids = IdentityFactory::new_shared();

        for order in [[WATCHER, WATCHED], [WATCHED, WATCHER]] {
            let (mut entity, log) = recorder_entity(&ids);
            for component_type in order {
                entity.create_component(component_type).unwrap();
            }

            assert!(entity.notify_component_changed(WATCHED));
            assert_eq!(*log.borrow(), vec![(WATCHER, WATCHED)]);

            // No interest the other way round
            assert!(entity.notify_component_changed(WATCHER));
            assert_eq!(log.borrow().len(), 1);

            assert_eq!(entity.observers_of(WATCHED), vec![WATCHER]);
            assert!(entity.observers_of(WATCHER).is_empty());
        }
    }

    #[test]
    fn test_deleted_observer_is_never_reached() {
        let ids = IdentityFactory::new_shared();
        let (mut entity, log) = recorder_entity(&ids);
        entity.create_component(WATCHER).unwrap();
        entity.create_component(WATCHED).unwrap();

        assert!(entity.delete_component(WATCHER));
        entity.notify_component_changed(WATCHED);
        assert!(log.borrow().is_empty());
        assert!(entity.observers_of(WATCHED).is_empty());

        // A new watcher is wired on its own
        entity.create_component(WATCHER).unwrap();
        entity.notify_component_changed(WATCHED);
        assert_eq!(*log.borrow(), vec![(WATCHER, WATCHED)]);
    }

    #[test]
    fn test_replaced_observable_reaches_surviving_observer_once() {
        let ids = IdentityFactory::new_shared();
        let (mut entity, log) = recorder_entity(&ids);
        entity.create_component(WATCHER).unwrap();
        entity.create_component(WATCHED).unwrap();

        assert!(entity.delete_component(WATCHED));
        entity.create_component(WATCHED).unwrap();
        entity.notify_component_changed(WATCHED);

        assert_eq!(*log.borrow(), vec![(WATCHER, WATCHED)]);
        assert_eq!(entity.observers_of(WATCHED), vec![WATCHER]);
    }

    #[test]
    fn test_component_types_are_unique() {
        let ids = IdentityFactory::new_shared();
        let mut entity = GameObject::new(&ids);

        entity.create_component(ComponentType::Transform).unwrap();
        let err = entity.create_component(ComponentType::Transform).unwrap_err();
        assert_eq!(err, ComponentError::ComponentAlreadyExists(ComponentType::Transform));
        assert_eq!(entity.component_count(), 1);

        assert!(entity.delete_component(ComponentType::Transform));
        assert!(entity.create_component(ComponentType::Transform).is_ok());

        entity.create_component(ComponentType::Notification).unwrap();
        assert_eq!(
            entity.create_component(ComponentType::Notification).unwrap_err(),
            ComponentError::ComponentAlreadyExists(ComponentType::Notification)
        );
    }

    #[test]
    fn test_built_in_interests() {
        let ids = IdentityFactory::new_shared();
        let mut entity = GameObject::new(&ids);
        for component_type in [
            ComponentType::MetaData,
            ComponentType::Transform,
            ComponentType::AutoUvMap,
            ComponentType::Geometry,
        ] {
            entity.create_component(component_type).unwrap();
        }

        assert_eq!(
            entity.observers_of(ComponentType::Transform),
            vec![ComponentType::AutoUvMap, ComponentType::Geometry]
        );
        assert_eq!(entity.observers_of(ComponentType::AutoUvMap), vec![ComponentType::Geometry]);
        assert!(entity.observers_of(ComponentType::MetaData).is_empty());
        assert!(entity.observers_of(ComponentType::Geometry).is_empty());
    }

    #[test]
    fn test_hooks_follow_component_lifecycle() {
        let ids = IdentityFactory::new_shared();
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut entity = GameObject::new(&ids).with_hooks(Box::new(RecordingHooks(Rc::clone(&events))));

        entity.create_component(ComponentType::MetaData).unwrap();
        entity.create_component(ComponentType::Transform).unwrap();
        entity.delete_component(ComponentType::MetaData);

        assert_eq!(
            *events.borrow(),
            vec![
                HookEvent::Registered(ComponentType::MetaData),
                HookEvent::Registered(ComponentType::Transform),
                HookEvent::Unregistered(ComponentType::MetaData),
            ]
        );
    }

    #[test]
    fn test_notification_forwards_changes_to_owner() {
        let ids = IdentityFactory::new_shared();
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut entity = GameObject::new(&ids).with_hooks(Box::new(RecordingHooks(Rc::clone(&events))));
        let id = entity.id();

        entity.create_component(ComponentType::MetaData).unwrap();
        entity.create_component(ComponentType::Notification).unwrap();
        entity.create_component(ComponentType::Transform).unwrap();
        events.borrow_mut().clear();

        entity.update_component_as::<MetaDataComponent, _>(|meta_data| meta_data.setup_name("Lamp"));
        entity.notify_component_changed(ComponentType::Transform);

        // Changes of the notification component itself are not forwarded
        entity.notify_component_changed(ComponentType::Notification);

        assert_eq!(
            *events.borrow(),
            vec![
                HookEvent::Changed(id, ComponentType::MetaData),
                HookEvent::Changed(id, ComponentType::Transform),
            ]
        );
    }

    #[test]
    fn test_no_forwarding_without_notification_component() {
        let ids = IdentityFactory::new_shared();
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut entity = GameObject::new(&ids).with_hooks(Box::new(RecordingHooks(Rc::clone(&events))));

        entity.create_component(ComponentType::MetaData).unwrap();
        entity.create_component(ComponentType::Notification).unwrap();
        assert!(entity.delete_component(ComponentType::Notification));
        events.borrow_mut().clear();

        entity.notify_component_changed(ComponentType::MetaData);
        assert!(events.borrow().is_empty());
    }
}
