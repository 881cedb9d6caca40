//! Component properties
//!
//! A property is a single typed value slot owned by a component. The set of
//! value kinds is closed ([`PropertyType`]); each kind has a fixed binary
//! encoding and converts losslessly to and from a [`Variant`].
//!
//! | Kind      | Encoding                                   |
//! |-----------|--------------------------------------------|
//! | Bool      | 1 byte, `1` or `0`                         |
//! | Int       | 4 byte signed integer                      |
//! | Float     | 4 byte IEEE float                          |
//! | String    | 4 byte length prefix + UTF-8 bytes         |
//! | Vector3   | 3 x 4 byte float                           |
//! | Vector4   | 4 x 4 byte float                           |
//! | ColorRgb  | 3 x 1 byte                                 |
//! | ColorRgba | 4 x 1 byte                                 |
//! | Asset     | 4 byte unsigned ID (`0` = none)            |
//!
//! All multi-byte values are little-endian. There are no tags or separators:
//! the reader must know the schema.

use crate::foundation::color::{ColorRgb, ColorRgba};
use crate::foundation::identity::{IdType, INVALID_ID};
use crate::foundation::math::{Vec3, Vec4};
use crate::io::{BinaryRead, BinaryWrite, Variant};
use std::fmt;
use std::io::{self, Read, Write};

/// Index of a property within its component (dense, zero-based)
pub type PropertyKey = usize;

/// Property kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyType {
    /// Boolean
    Bool,
    /// Signed 32-bit integer
    Int,
    /// 32-bit float
    Float,
    /// UTF-8 string
    String,
    /// 3D float vector
    Vector3,
    /// 4D float vector
    Vector4,
    /// 8-bit RGB color
    ColorRgb,
    /// 8-bit RGBA color
    ColorRgba,
    /// Reference to an asset by ID
    Asset,
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bool => "Bool",
            Self::Int => "Int",
            Self::Float => "Float",
            Self::String => "String",
            Self::Vector3 => "Vector3",
            Self::Vector4 => "Vector4",
            Self::ColorRgb => "ColorRGB",
            Self::ColorRgba => "ColorRGBA",
            Self::Asset => "Asset",
        };
        f.write_str(name)
    }
}

/// Typed property value
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i32),
    /// Float value
    Float(f32),
    /// String value
    String(String),
    /// 3D vector value
    Vector3(Vec3),
    /// 4D vector value
    Vector4(Vec4),
    /// RGB color value
    ColorRgb(ColorRgb),
    /// RGBA color value
    ColorRgba(ColorRgba),
    /// Asset ID value
    Asset(IdType),
}

impl PropertyValue {
    /// Default value of a kind (false, zero, empty, black, invalid ID)
    pub fn default_for(property_type: PropertyType) -> Self {
        match property_type {
            PropertyType::Bool => Self::Bool(false),
            PropertyType::Int => Self::Int(0),
            PropertyType::Float => Self::Float(0.0),
            PropertyType::String => Self::String(String::new()),
            PropertyType::Vector3 => Self::Vector3(Vec3::zeros()),
            PropertyType::Vector4 => Self::Vector4(Vec4::zeros()),
            PropertyType::ColorRgb => Self::ColorRgb(ColorRgb::default()),
            PropertyType::ColorRgba => Self::ColorRgba(ColorRgba::default()),
            PropertyType::Asset => Self::Asset(INVALID_ID),
        }
    }

    /// Kind of this value
    pub fn property_type(&self) -> PropertyType {
        match self {
            Self::Bool(_) => PropertyType::Bool,
            Self::Int(_) => PropertyType::Int,
            Self::Float(_) => PropertyType::Float,
            Self::String(_) => PropertyType::String,
            Self::Vector3(_) => PropertyType::Vector3,
            Self::Vector4(_) => PropertyType::Vector4,
            Self::ColorRgb(_) => PropertyType::ColorRgb,
            Self::ColorRgba(_) => PropertyType::ColorRgba,
            Self::Asset(_) => PropertyType::Asset,
        }
    }

    /// Write the fixed binary encoding of this value
    pub fn write_to_file(&self, file: &mut dyn Write) -> io::Result<()> {
        match self {
            Self::Bool(value) => file.write_bool(*value),
            Self::Int(value) => file.write_int32(*value),
            Self::Float(value) => file.write_float32(*value),
            Self::String(value) => file.write_string_sized(value),
            Self::Vector3(value) => {
                for component in value.iter() {
                    file.write_float32(*component)?;
                }
                Ok(())
            }
            Self::Vector4(value) => {
                for component in value.iter() {
                    file.write_float32(*component)?;
                }
                Ok(())
            }
            Self::ColorRgb(value) => file.write_all(&[value.r, value.g, value.b]),
            Self::ColorRgba(value) => file.write_all(&[value.r, value.g, value.b, value.a]),
            Self::Asset(value) => file.write_uint32(*value),
        }
    }

    /// Read a value of the same kind from its binary encoding.
    ///
    /// The value is left untouched if reading fails.
    pub fn read_from_file(&mut self, file: &mut dyn Read) -> io::Result<()> {
        *self = match self {
            Self::Bool(_) => Self::Bool(file.read_bool()?),
            Self::Int(_) => Self::Int(file.read_int32()?),
            Self::Float(_) => Self::Float(file.read_float32()?),
            Self::String(_) => Self::String(file.read_string_sized()?),
            Self::Vector3(_) => Self::Vector3(Vec3::new(
                file.read_float32()?,
                file.read_float32()?,
                file.read_float32()?,
            )),
            Self::Vector4(_) => Self::Vector4(Vec4::new(
                file.read_float32()?,
                file.read_float32()?,
                file.read_float32()?,
                file.read_float32()?,
            )),
            Self::ColorRgb(_) => {
                let mut rgb = [0u8; 3];
                file.read_exact(&mut rgb)?;
                Self::ColorRgb(ColorRgb::new(rgb[0], rgb[1], rgb[2]))
            }
            Self::ColorRgba(_) => {
                let mut rgba = [0u8; 4];
                file.read_exact(&mut rgba)?;
                Self::ColorRgba(ColorRgba::new(rgba[0], rgba[1], rgba[2], rgba[3]))
            }
            Self::Asset(_) => Self::Asset(file.read_uint32()?),
        };
        Ok(())
    }

    /// Convert to the matching variant kind
    pub fn to_variant(&self) -> Variant {
        match self {
            Self::Bool(value) => Variant::Bool(*value),
            Self::Int(value) => Variant::Int(*value),
            Self::Float(value) => Variant::Float(*value),
            Self::String(value) => Variant::String(value.clone()),
            Self::Vector3(value) => Variant::Vector3(*value),
            Self::Vector4(value) => Variant::Vector4(*value),
            Self::ColorRgb(value) => Variant::ColorRgb(*value),
            Self::ColorRgba(value) => Variant::ColorRgba(*value),
            Self::Asset(value) => Variant::UInt(*value),
        }
    }

    /// Take the value from a variant, converting it to this value's kind
    pub fn read_from_variant(&mut self, variant: &Variant) {
        *self = match self {
            Self::Bool(_) => Self::Bool(variant.as_bool()),
            Self::Int(_) => Self::Int(variant.as_int()),
            Self::Float(_) => Self::Float(variant.as_float()),
            Self::String(_) => Self::String(variant.as_string()),
            Self::Vector3(_) => Self::Vector3(variant.as_vector3()),
            Self::Vector4(_) => Self::Vector4(variant.as_vector4()),
            Self::ColorRgb(_) => Self::ColorRgb(variant.as_color_rgb()),
            Self::ColorRgba(_) => Self::ColorRgba(variant.as_color_rgba()),
            Self::Asset(_) => Self::Asset(variant.as_uint()),
        };
    }
}

/// Rust value types that map to exactly one property kind
pub trait PropertyKind: Sized {
    /// Property kind holding this type
    const TYPE: PropertyType;

    /// Extract from a property value of the matching kind
    fn from_value(value: &PropertyValue) -> Option<Self>;

    /// Wrap into a property value
    fn into_value(self) -> PropertyValue;

    /// Value returned by reads of a missing property
    fn type_default() -> Self;
}

macro_rules! impl_property_kind {
    ($ty:ty, $variant:ident, $default:expr) => {
        impl PropertyKind for $ty {
            const TYPE: PropertyType = PropertyType::$variant;

            fn from_value(value: &PropertyValue) -> Option<Self> {
                match value {
                    PropertyValue::$variant(inner) => Some(inner.clone()),
                    _ => None,
                }
            }

            fn into_value(self) -> PropertyValue {
                PropertyValue::$variant(self)
            }

            fn type_default() -> Self {
                $default
            }
        }
    };
}

impl_property_kind!(bool, Bool, false);
impl_property_kind!(i32, Int, 0);
impl_property_kind!(f32, Float, 0.0);
impl_property_kind!(String, String, String::new());
impl_property_kind!(Vec3, Vector3, Vec3::zeros());
impl_property_kind!(Vec4, Vector4, Vec4::zeros());
impl_property_kind!(ColorRgb, ColorRgb, ColorRgb::default());
impl_property_kind!(ColorRgba, ColorRgba, ColorRgba::default());
impl_property_kind!(IdType, Asset, INVALID_ID);

/// Hook attached to a property by a custom [`PropertyFactory`](super::PropertyFactory).
///
/// Lets a property grid or script bridge follow every value change without
/// the owning component knowing about it.
pub trait PropertyBinding {
    /// Called after the property value changed through any write path
    fn on_value_changed(&mut self, key: PropertyKey, value: &PropertyValue);
}

/// Single typed value slot owned by a component
pub struct Property {
    key: PropertyKey,
    value: PropertyValue,
    binding: Option<Box<dyn PropertyBinding>>,
}

impl fmt::Debug for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("key", &self.key)
            .field("value", &self.value)
            .field("bound", &self.binding.is_some())
            .finish()
    }
}

impl Property {
    /// Create a property of the given kind with its default value
    pub fn new(key: PropertyKey, property_type: PropertyType) -> Self {
        Self::with_value(key, PropertyValue::default_for(property_type))
    }

    /// Create a property holding the given value
    pub fn with_value(key: PropertyKey, value: PropertyValue) -> Self {
        Self {
            key,
            value,
            binding: None,
        }
    }

    /// Attach a change binding (builder pattern)
    pub fn with_binding(mut self, binding: Box<dyn PropertyBinding>) -> Self {
        self.binding = Some(binding);
        self
    }

    /// Key this property was created for
    pub fn key(&self) -> PropertyKey {
        self.key
    }

    /// Kind of this property
    pub fn property_type(&self) -> PropertyType {
        self.value.property_type()
    }

    /// Current value
    pub fn value(&self) -> &PropertyValue {
        &self.value
    }

    /// Whether a change binding is attached
    pub fn is_bound(&self) -> bool {
        self.binding.is_some()
    }

    /// Replace the value; ignored (returns false) if the kind differs
    pub fn set_value(&mut self, value: PropertyValue) -> bool {
        if value.property_type() != self.property_type() {
            return false;
        }
        self.value = value;
        self.value_changed();
        true
    }

    /// Typed read; `None` if `T` does not match this property's kind
    pub fn get<T: PropertyKind>(&self) -> Option<T> {
        T::from_value(&self.value)
    }

    /// Typed write; ignored (returns false) if `T` does not match this property's kind
    pub fn set<T: PropertyKind>(&mut self, value: T) -> bool {
        self.set_value(value.into_value())
    }

    /// Write the binary encoding of the value
    pub fn write_to_file(&self, file: &mut dyn Write) -> io::Result<()> {
        self.value.write_to_file(file)
    }

    /// Read the value from its binary encoding
    pub fn read_from_file(&mut self, file: &mut dyn Read) -> io::Result<()> {
        self.value.read_from_file(file)?;
        self.value_changed();
        Ok(())
    }

    /// Store the value into a variant
    pub fn write_to_variant(&self, variant: &mut Variant) {
        *variant = self.value.to_variant();
    }

    /// Take the value from a variant
    pub fn read_from_variant(&mut self, variant: &Variant) {
        self.value.read_from_variant(variant);
        self.value_changed();
    }

    /// Value as variant
    pub fn to_variant(&self) -> Variant {
        self.value.to_variant()
    }

    fn value_changed(&mut self) {
        if let Some(binding) = self.binding.as_mut() {
            binding.on_value_changed(self.key, &self.value);
        }
    }
}
