//! Substituting properties and components through factories

use super::support::{RecorderFactory, RecordingHooks};
use crate::ecs::components::{MetaDataComponent, TransformComponent};
use crate::ecs::{
    Component, ComponentBase, ComponentError, ComponentFactory, ComponentType, GameObject, Property, PropertyBinding,
    PropertyFactory, PropertyKey, PropertyType, PropertyValue,
};
use crate::foundation::identity::IdentityFactory;
use crate::foundation::math::{Transform, Vec3};
use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

type GridLog = Rc<RefCell<Vec<(PropertyKey, PropertyValue)>>>;

/// Mirrors every string and bool change into a log, like a property grid would
struct GridBinding(GridLog);

impl PropertyBinding for GridBinding {
    fn on_value_changed(&mut self, key: PropertyKey, value: &PropertyValue) {
        self.0.borrow_mut().push((key, value.clone()));
    }
}

struct GridPropertyFactory(GridLog);

impl PropertyFactory for GridPropertyFactory {
    fn make_string_property(&self, key: PropertyKey) -> Property {
        Property::new(key, PropertyType::String).with_binding(Box::new(GridBinding(Rc::clone(&self.0))))
    }

    fn make_bool_property(&self, key: PropertyKey) -> Property {
        Property::new(key, PropertyType::Bool).with_binding(Box::new(GridBinding(Rc::clone(&self.0))))
    }
}

struct GridComponentFactory {
    properties: GridPropertyFactory,
}

impl ComponentFactory for GridComponentFactory {
    fn property_factory(&self) -> &dyn PropertyFactory {
        &self.properties
    }
}

/// Transform replacement that snaps its position to whole units
struct SnappedTransform {
    base: ComponentBase,
    transform: Transform,
}

impl SnappedTransform {
    fn new(factory: &dyn PropertyFactory) -> Result<Self, ComponentError> {
        let mut base = ComponentBase::new(ComponentType::Transform);
        base.create_property(TransformComponent::POSITION, PropertyType::Vector3, factory)?;
        Ok(Self {
            base,
            transform: Transform::identity(),
        })
    }
}

impl Component for SnappedTransform {
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

    fn on_this_component_changed(&mut self) {
        let position: Vec3 = self.base.read(TransformComponent::POSITION);
        self.transform = Transform::from_position(position.map(f32::round));
    }

    fn transform(&self) -> Option<&Transform> {
        Some(&self.transform)
    }
}

struct SnappingFactory;

impl ComponentFactory for SnappingFactory {
    fn make_transform_component(&self) -> Result<Box<dyn Component>, ComponentError> {
        Ok(Box::new(SnappedTransform::new(self.property_factory())?))
    }
}

/// Factory that answers every meta data request with a transform
struct ConfusedFactory;

impl ComponentFactory for ConfusedFactory {
    fn make_meta_data_component(&self) -> Result<Box<dyn Component>, ComponentError> {
        self.make_transform_component()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::components::GeometryComponent;

    #[test]
    fn test_bound_properties_see_entity_edits() {
        let ids = IdentityFactory::new_shared();
        let log = GridLog::default();
        let factory = GridComponentFactory {
            properties: GridPropertyFactory(Rc::clone(&log)),
        };
        let mut entity = GameObject::new(&ids).with_component_factory(Rc::new(factory));

        entity.create_component(ComponentType::MetaData).unwrap();
        entity.create_component(ComponentType::Transform).unwrap();
        log.borrow_mut().clear();

        entity.update_component_as::<MetaDataComponent, _>(|component| {
            component.setup_name("Door");
            component.set_enabled(false);
        });
        entity.update_component_as::<TransformComponent, _>(|component| {
            component.setup_transform(&Transform::from_position(Vec3::new(1.0, 0.0, 0.0)));
        });

        // Vector properties are not bound by this factory
        assert_eq!(
            *log.borrow(),
            vec![
                (MetaDataComponent::NAME, PropertyValue::String("Door".to_string())),
                (MetaDataComponent::ENABLED, PropertyValue::Bool(false)),
            ]
        );
        let meta_data = entity.find_component(ComponentType::MetaData).unwrap();
        assert!(meta_data.find_property(MetaDataComponent::NAME).unwrap().is_bound());
    }

    #[test]
    fn test_substituted_component_keeps_observers_working() {
        let ids = IdentityFactory::new_shared();
        let mut entity = GameObject::new(&ids).with_component_factory(Rc::new(SnappingFactory));
        entity.create_component(ComponentType::Geometry).unwrap();
        entity.create_component(ComponentType::Transform).unwrap();

        entity.update_component(ComponentType::Transform, |component| {
            component.write_property(TransformComponent::POSITION, Vec3::new(1.4, 2.6, -0.2));
        });

        let geometry = entity.find_component_as::<GeometryComponent>().unwrap();
        assert_eq!(geometry.node().borrow().transform.position, Vec3::new(1.0, 3.0, 0.0));

        // Typed access refuses the substitute
        assert!(entity.find_component_as::<TransformComponent>().is_none());
        assert!(entity
            .update_component_as::<TransformComponent, _>(|_| ())
            .is_none());
    }

    #[test]
    fn test_typed_creation_of_substitute_fails() {
        let ids = IdentityFactory::new_shared();
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut entity = GameObject::new(&ids)
            .with_component_factory(Rc::new(SnappingFactory))
            .with_hooks(Box::new(RecordingHooks(Rc::clone(&events))));

        let err = entity.create_component_as::<TransformComponent>().unwrap_err();
        assert_eq!(err, ComponentError::ComponentTypeMismatch { expected: ComponentType::Transform });
        assert_eq!(entity.component_count(), 0);
        assert!(events.borrow().is_empty());

        // the refused type can still be created untyped
        assert!(entity.create_component(ComponentType::Transform).is_ok());
        assert_eq!(entity.component_count(), 1);
    }

    #[test]
    fn test_factory_returning_wrong_type_adds_nothing() {
        let ids = IdentityFactory::new_shared();
        let mut entity = GameObject::new(&ids).with_component_factory(Rc::new(ConfusedFactory));

        let err = entity.create_component(ComponentType::MetaData).unwrap_err();
        assert_eq!(err, ComponentError::ComponentTypeMismatch { expected: ComponentType::MetaData });
        assert_eq!(entity.component_count(), 0);
    }

    #[test]
    fn test_custom_types_need_a_custom_factory() {
        let ids = IdentityFactory::new_shared();
        let mut plain = GameObject::new(&ids);
        assert_eq!(
            plain.create_component(ComponentType::Custom(1)).unwrap_err(),
            ComponentError::UnsupportedComponentType(ComponentType::Custom(1))
        );

        let factory = RecorderFactory::default().with_recorder(1, &[ComponentType::MetaData]);
        let mut entity = GameObject::new(&ids).with_component_factory(Rc::new(factory));
        let recorder = entity.create_component(ComponentType::Custom(1)).unwrap();
        assert_eq!(recorder.id_name(), "recorder");
        assert_eq!(recorder.properties().len(), 1);
    }
}
