//! I/O primitives shared by the property system
//!
//! - Binary stream helpers for the fixed-width property file encoding
//! - The generic [`Variant`] used by property grids and scripting bridges

pub mod file;
pub mod variant;

pub use file::{BinaryRead, BinaryWrite};
pub use variant::Variant;
