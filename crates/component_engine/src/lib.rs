//! # Component Engine
//!
//! Strongly typed entity/component property model for editors and game
//! tools.
//!
//! ## Features
//!
//! - **Typed Properties**: nine closed value kinds with a fixed binary encoding
//!   and a generic [`Variant`](io::Variant) interchange form
//! - **Observer Wiring**: components watch their siblings by type and react to
//!   changes synchronously
//! - **Pluggable Factories**: substitute components or properties engine-wide
//! - **Recycled Identities**: smallest-free-ID issuing for entities and assets
//!
//! ## Quick Start
//!
//! ```rust
//! use component_engine::prelude::*;
//!
//! let ids = IdentityFactory::new_shared();
//! let mut entity = GameObject::new(&ids);
//!
//! entity.create_component(ComponentType::Transform)?;
//! entity.create_component(ComponentType::Geometry)?;
//!
//! entity.update_component_as::<TransformComponent, _>(|transform| {
//!     transform.setup_transform(&Transform::from_position(Vec3::new(0.0, 1.0, 0.0)));
//! });
//!
//! let geometry = entity.find_component_as::<GeometryComponent>().unwrap();
//! assert_eq!(geometry.node().borrow().transform.position, Vec3::new(0.0, 1.0, 0.0));
//! # Ok::<(), ComponentError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod ecs;
pub mod foundation;
pub mod io;
pub mod scene;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{Config, EngineConfig, EntityConfig, LoggingConfig},
        ecs::{
            components::{AutoUvMapComponent, GeometryComponent, MetaDataComponent, NotificationComponent, TransformComponent},
            Component, ComponentError, ComponentFactory, ComponentKind, ComponentType, DefaultComponentFactory,
            DefaultPropertyFactory, GameObject, GameObjectHooks, Property, PropertyFactory, PropertyKey, PropertyType,
            PropertyValue,
        },
        foundation::{
            color::{ColorRgb, ColorRgba},
            identity::{IdType, Identifiable, IdentityFactory, SharedIdentityFactory, INVALID_ID},
            math::{Transform, Vec2, Vec3, Vec4},
        },
        io::Variant,
        scene::{Geometry, GeometryRef, Vertex},
    };
}
