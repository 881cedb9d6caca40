//! Property construction
//!
//! Components never build their properties directly. They ask a
//! [`PropertyFactory`], so an editor can substitute bound properties (for
//! example ones that push every change into a property grid) without touching
//! component code.

use super::property::{Property, PropertyKey, PropertyType};

/// Builds properties on behalf of components.
///
/// Every `make_*` method has a plain default; override any subset to decorate
/// properties. The returned property must keep the requested kind and key.
pub trait PropertyFactory {
    /// Build a property of the given kind
    fn make_property(&self, property_type: PropertyType, key: PropertyKey) -> Property {
        match property_type {
            PropertyType::Bool => self.make_bool_property(key),
            PropertyType::Int => self.make_int_property(key),
            PropertyType::Float => self.make_float_property(key),
            PropertyType::String => self.make_string_property(key),
            PropertyType::Vector3 => self.make_vector3_property(key),
            PropertyType::Vector4 => self.make_vector4_property(key),
            PropertyType::ColorRgb => self.make_color_rgb_property(key),
            PropertyType::ColorRgba => self.make_color_rgba_property(key),
            PropertyType::Asset => self.make_asset_property(key),
        }
    }

    /// Build a boolean property
    fn make_bool_property(&self, key: PropertyKey) -> Property {
        Property::new(key, PropertyType::Bool)
    }

    /// Build an integer property
    fn make_int_property(&self, key: PropertyKey) -> Property {
        Property::new(key, PropertyType::Int)
    }

    /// Build a float property
    fn make_float_property(&self, key: PropertyKey) -> Property {
        Property::new(key, PropertyType::Float)
    }

    /// Build a string property
    fn make_string_property(&self, key: PropertyKey) -> Property {
        Property::new(key, PropertyType::String)
    }

    /// Build a 3D vector property
    fn make_vector3_property(&self, key: PropertyKey) -> Property {
        Property::new(key, PropertyType::Vector3)
    }

    /// Build a 4D vector property
    fn make_vector4_property(&self, key: PropertyKey) -> Property {
        Property::new(key, PropertyType::Vector4)
    }

    /// Build an RGB color property
    fn make_color_rgb_property(&self, key: PropertyKey) -> Property {
        Property::new(key, PropertyType::ColorRgb)
    }

    /// Build an RGBA color property
    fn make_color_rgba_property(&self, key: PropertyKey) -> Property {
        Property::new(key, PropertyType::ColorRgba)
    }

    /// Build an asset reference property
    fn make_asset_property(&self, key: PropertyKey) -> Property {
        Property::new(key, PropertyType::Asset)
    }
}

/// Factory producing plain, unbound properties
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPropertyFactory;

impl PropertyFactory for DefaultPropertyFactory {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::property::PropertyValue;

    #[test]
    fn test_default_factory_builds_requested_kind() {
        let factory = DefaultPropertyFactory;
        let kinds = [
            PropertyType::Bool,
            PropertyType::Int,
            PropertyType::Float,
            PropertyType::String,
            PropertyType::Vector3,
            PropertyType::Vector4,
            PropertyType::ColorRgb,
            PropertyType::ColorRgba,
            PropertyType::Asset,
        ];

        for (key, kind) in kinds.into_iter().enumerate() {
            let property = factory.make_property(kind, key);
            assert_eq!(property.property_type(), kind);
            assert_eq!(property.key(), key);
            assert_eq!(property.value(), &PropertyValue::default_for(kind));
            assert!(!property.is_bound());
        }
    }

    struct LoudFloats;

    impl PropertyFactory for LoudFloats {
        fn make_float_property(&self, key: PropertyKey) -> Property {
            Property::with_value(key, PropertyValue::Float(-1.0))
        }
    }

    #[test]
    fn test_override_touches_only_its_kind() {
        let factory = LoudFloats;
        assert_eq!(
            factory.make_property(PropertyType::Float, 0).value(),
            &PropertyValue::Float(-1.0)
        );
        assert_eq!(
            factory.make_property(PropertyType::Int, 1).value(),
            &PropertyValue::Int(0)
        );
    }
}
