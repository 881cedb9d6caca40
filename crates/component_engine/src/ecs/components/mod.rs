//! Built-in components

pub mod auto_uv_map;
pub mod geometry;
pub mod meta_data;
pub mod notification;
pub mod transform;

pub use auto_uv_map::AutoUvMapComponent;
pub use geometry::GeometryComponent;
pub use meta_data::MetaDataComponent;
pub use notification::NotificationComponent;
pub use transform::{Freshness, TransformComponent};
