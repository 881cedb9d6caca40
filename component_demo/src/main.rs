//! Component system demo
//!
//! Builds a model entity the way an editor does when a model asset is dropped
//! into a scene, edits it like a property grid would, and copies it. All
//! observer traffic is logged; run with `RUST_LOG=trace` to see every
//! notification.

use component_engine::ecs::components::{AutoUvMapComponent, GeometryComponent, MetaDataComponent, TransformComponent};
use component_engine::ecs::{Component, ComponentError, ComponentFactory, ComponentType, DefaultComponentFactory, GameObject, GameObjectHooks};
use component_engine::foundation::identity::{IdType, IdentityFactory, SharedIdentityFactory};
use component_engine::foundation::logging;
use component_engine::foundation::math::{Transform, Vec2, Vec3};
use component_engine::config::{Config, ConfigError, EngineConfig};
use component_engine::scene::{Geometry, GeometryRef, Vertex};
use std::rc::Rc;
use thiserror::Error;

const CONFIG_PATH: &str = "component_demo.toml";

/// Demo errors
#[derive(Error, Debug)]
enum DemoError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("component error: {0}")]
    Component(#[from] ComponentError),
}

/// Reacts to component changes the way an editor entity updates its scene
/// tree label and selection pose
struct EditorEntityHooks;

impl GameObjectHooks for EditorEntityHooks {
    fn on_register_component(&mut self, component: &dyn Component) {
        log::info!("Added {} component", component.id_name());
    }

    fn on_unregister_component(&mut self, component: &dyn Component) {
        log::info!("Removed {} component", component.id_name());
    }

    fn on_component_changed(&mut self, owner: IdType, component: &dyn Component) {
        match component.component_type() {
            ComponentType::MetaData => {
                let name = component.read_property::<String>(MetaDataComponent::NAME);
                log::info!("Entity {}: scene tree label is now '{}'", owner, name);
            }
            ComponentType::Transform => {
                if let Some(transform) = component.transform() {
                    log::info!("Entity {}: selection pose moved to {:?}", owner, transform.position);
                }
            }
            ComponentType::Geometry => {
                if let Some(node) = component.scene_node() {
                    let vertices = node
                        .borrow()
                        .geometry
                        .as_ref()
                        .map_or(0, |geometry| geometry.borrow().vertices.len());
                    log::info!("Entity {}: geometry hierarchy has {} vertices", owner, vertices);
                }
            }
            _ => {}
        }
    }
}

/// Unit quad facing +Z
fn quad() -> GeometryRef {
    let corners = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
    Geometry::new(
        corners
            .iter()
            .map(|&(x, y)| Vertex::new(Vec3::new(x, y, 0.0), Vec3::z(), Vec2::zeros()))
            .collect(),
    )
    .into_shared()
}

fn create_model_entity(
    ids: &SharedIdentityFactory,
    factory: Rc<dyn ComponentFactory>,
    label: &str,
    asset: IdType,
) -> Result<GameObject, ComponentError> {
    let mut entity = GameObject::new(ids)
        .with_component_factory(factory)
        .with_hooks(Box::new(EditorEntityHooks));

    entity.create_component(ComponentType::Notification)?;
    entity.create_component_as::<MetaDataComponent>()?;
    entity.update_component_as::<MetaDataComponent, _>(|meta_data| meta_data.setup_name(label));
    entity.create_component(ComponentType::Transform)?;
    entity.create_component(ComponentType::AutoUvMap)?;
    entity.create_component(ComponentType::Geometry)?;

    let geometry = quad();
    entity.update_component_as::<GeometryComponent, _>(|component| component.setup_geometry(asset, geometry));
    Ok(entity)
}

fn log_uvs(entity: &GameObject) {
    entity.for_each_component_with_scene_node(|component, node| {
        let node = node.borrow();
        if let Some(geometry) = node.geometry.as_ref() {
            let uvs: Vec<Vec2> = geometry.borrow().vertices.iter().map(|vertex| vertex.tex_coord).collect();
            log::info!("Entity {} ({}): uvs {:?}", entity.id(), component.id_name(), uvs);
        }
    });
}

fn run() -> Result<(), DemoError> {
    let config = EngineConfig::load_or_default(CONFIG_PATH)?;
    logging::init_with_config(&config.logging);
    log::info!("Starting component demo");

    let ids = IdentityFactory::new_shared();
    let factory: Rc<dyn ComponentFactory> = Rc::new(DefaultComponentFactory::from_config(&config.entity));

    let mut model = create_model_entity(&ids, Rc::clone(&factory), "Crate", 1)?;
    log::info!("Observers of transform: {:?}", model.observers_of(ComponentType::Transform));

    // Selection gizmo drag
    model.update_component_as::<TransformComponent, _>(|transform| {
        transform.setup_transform(&Transform::from_position(Vec3::new(2.0, 0.0, 0.0)));
    });

    // Property grid edits
    model.update_component_as::<AutoUvMapComponent, _>(|auto_uv_map| {
        auto_uv_map.set_mode(true, true);
        auto_uv_map.set_mapping((0.0, 0.0), (0.5, 0.5));
    });
    log_uvs(&model);

    model.update_component(ComponentType::Transform, |transform| {
        transform.write_property(TransformComponent::POSITION, Vec3::new(4.0, 0.0, 0.0));
    });
    log_uvs(&model);

    let copy = model.instantiate_copy_with_config(&config.entity, &ids, None)?;
    log::info!(
        "Copied entity {} as {} with components {:?}",
        model.id(),
        copy.id(),
        copy.component_types()
    );
    log::info!("Observers of transform in copy: {:?}", copy.observers_of(ComponentType::Transform));

    model.delete_component(ComponentType::AutoUvMap);
    log::info!("Issued entity IDs: {:?}", ids.borrow().issued_ids());
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        log::error!("Component demo failed: {}", err);
        eprintln!("Component demo failed: {}", err);
        std::process::exit(1);
    }
}
