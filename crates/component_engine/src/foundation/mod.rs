//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the engine:
//! - Math types and operations
//! - 8-bit color types
//! - Identity issuing for entities and assets
//! - Logging utilities

pub mod color;
pub mod identity;
pub mod logging;
pub mod math;
