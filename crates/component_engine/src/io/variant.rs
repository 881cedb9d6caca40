//! Generic value variant
//!
//! Used to move property data to and from property grids and scripting
//! bridges without static typing. A variant holds exactly one kind of value,
//! but every accessor converts from the other kinds, so a grid that edits a
//! float field with an integer still yields a sensible value.

use crate::foundation::color::{byte_to_unit, unit_to_byte, ColorRgb, ColorRgba};
use crate::foundation::math::{Vec3, Vec4};
use serde::{Deserialize, Serialize};

/// Tagged interchange value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Variant {
    /// Boolean value
    Bool(bool),
    /// Signed integer value
    Int(i32),
    /// Unsigned integer value (asset IDs travel as this kind)
    UInt(u32),
    /// Floating-point value
    Float(f32),
    /// UTF-8 string value
    String(String),
    /// 3D vector value
    Vector3(Vec3),
    /// 4D vector value
    Vector4(Vec4),
    /// RGB color value
    ColorRgb(ColorRgb),
    /// RGBA color value
    ColorRgba(ColorRgba),
}

impl Default for Variant {
    fn default() -> Self {
        Self::Bool(false)
    }
}

fn concat_floats(values: &[f32]) -> String {
    values.iter().map(|value| format!("{};", value)).collect()
}

impl Variant {
    /// Value as boolean; non-zero numbers and non-empty strings are true
    pub fn as_bool(&self) -> bool {
        match self {
            Self::Bool(value) => *value,
            Self::Int(value) => *value != 0,
            Self::UInt(value) => *value != 0,
            Self::Float(value) => *value != 0.0,
            Self::String(value) => !value.is_empty(),
            _ => false,
        }
    }

    /// Value as signed integer
    #[allow(clippy::cast_possible_truncation)]
    pub fn as_int(&self) -> i32 {
        match self {
            Self::Bool(value) => i32::from(*value),
            Self::Int(value) => *value,
            Self::UInt(value) => i32::try_from(*value).unwrap_or(i32::MAX),
            Self::Float(value) => *value as i32,
            Self::String(value) => value.trim().parse().unwrap_or(0),
            _ => 0,
        }
    }

    /// Value as unsigned integer; negative numbers become zero
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn as_uint(&self) -> u32 {
        match self {
            Self::Bool(value) => u32::from(*value),
            Self::Int(value) => u32::try_from(*value).unwrap_or(0),
            Self::UInt(value) => *value,
            Self::Float(value) => *value as u32,
            Self::String(value) => value.trim().parse().unwrap_or(0),
            _ => 0,
        }
    }

    /// Value as floating-point number
    #[allow(clippy::cast_precision_loss)]
    pub fn as_float(&self) -> f32 {
        match self {
            Self::Bool(value) => f32::from(u8::from(*value)),
            Self::Int(value) => *value as f32,
            Self::UInt(value) => *value as f32,
            Self::Float(value) => *value,
            Self::String(value) => value.trim().parse().unwrap_or(0.0),
            _ => 0.0,
        }
    }

    /// Value as string; vectors and colors are written as `x;y;z;`
    pub fn as_string(&self) -> String {
        match self {
            Self::Bool(value) => if *value { "1".to_string() } else { String::new() },
            Self::Int(value) => value.to_string(),
            Self::UInt(value) => value.to_string(),
            Self::Float(value) => value.to_string(),
            Self::String(value) => value.clone(),
            Self::Vector3(value) => concat_floats(&[value.x, value.y, value.z]),
            Self::Vector4(value) => concat_floats(&[value.x, value.y, value.z, value.w]),
            Self::ColorRgb(value) => format!("{};{};{};", value.r, value.g, value.b),
            Self::ColorRgba(value) => format!("{};{};{};{};", value.r, value.g, value.b, value.a),
        }
    }

    /// Value as 3D vector; colors map to normalized channels
    pub fn as_vector3(&self) -> Vec3 {
        match self {
            Self::Vector3(value) => *value,
            Self::Vector4(value) => value.xyz(),
            Self::ColorRgb(value) => Vec3::new(byte_to_unit(value.r), byte_to_unit(value.g), byte_to_unit(value.b)),
            Self::ColorRgba(value) => Vec3::new(byte_to_unit(value.r), byte_to_unit(value.g), byte_to_unit(value.b)),
            _ => Vec3::zeros(),
        }
    }

    /// Value as 4D vector; a 3D vector gets `w = 1`
    pub fn as_vector4(&self) -> Vec4 {
        match self {
            Self::Vector3(value) => value.push(1.0),
            Self::Vector4(value) => *value,
            Self::ColorRgb(value) => Vec4::new(byte_to_unit(value.r), byte_to_unit(value.g), byte_to_unit(value.b), 1.0),
            Self::ColorRgba(value) => Vec4::new(
                byte_to_unit(value.r),
                byte_to_unit(value.g),
                byte_to_unit(value.b),
                byte_to_unit(value.a),
            ),
            _ => Vec4::zeros(),
        }
    }

    /// Value as RGB color; vectors are treated as normalized channels
    pub fn as_color_rgb(&self) -> ColorRgb {
        self.as_color_rgba().to_rgb()
    }

    /// Value as RGBA color; vectors are treated as normalized channels
    pub fn as_color_rgba(&self) -> ColorRgba {
        match self {
            Self::ColorRgb(value) => value.with_alpha(255),
            Self::ColorRgba(value) => *value,
            Self::Vector3(value) => ColorRgba::new(unit_to_byte(value.x), unit_to_byte(value.y), unit_to_byte(value.z), 255),
            Self::Vector4(value) => ColorRgba::new(
                unit_to_byte(value.x),
                unit_to_byte(value.y),
                unit_to_byte(value.z),
                unit_to_byte(value.w),
            ),
            _ => ColorRgba::default(),
        }
    }
}

impl From<bool> for Variant {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for Variant {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for Variant {
    fn from(value: u32) -> Self {
        Self::UInt(value)
    }
}

impl From<f32> for Variant {
    fn from(value: f32) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Variant {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Variant {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec3> for Variant {
    fn from(value: Vec3) -> Self {
        Self::Vector3(value)
    }
}

impl From<Vec4> for Variant {
    fn from(value: Vec4) -> Self {
        Self::Vector4(value)
    }
}

impl From<ColorRgb> for Variant {
    fn from(value: ColorRgb) -> Self {
        Self::ColorRgb(value)
    }
}

impl From<ColorRgba> for Variant {
    fn from(value: ColorRgba) -> Self {
        Self::ColorRgba(value)
    }
}
