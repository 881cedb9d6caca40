//! Geometry resources and the automatic UV map modifier

use crate::foundation::math::{Mat4, Point3, Vec2, Vec3};
use std::cell::RefCell;
use std::rc::Rc;

/// Geometry resource shared between scene nodes
pub type GeometryRef = Rc<RefCell<Geometry>>;

/// Mesh vertex
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// Position in object space
    pub position: Vec3,

    /// Normal vector
    pub normal: Vec3,

    /// Texture coordinates
    pub tex_coord: Vec2,
}

impl Vertex {
    /// Create a new vertex
    pub fn new(position: Vec3, normal: Vec3, tex_coord: Vec2) -> Self {
        Self {
            position,
            normal,
            tex_coord,
        }
    }
}

/// Vertex list of a mesh
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Geometry {
    /// Vertices
    pub vertices: Vec<Vertex>,
}

impl Geometry {
    /// Create geometry from vertices
    pub fn new(vertices: Vec<Vertex>) -> Self {
        Self { vertices }
    }

    /// Wrap for sharing between nodes
    pub fn into_shared(self) -> GeometryRef {
        Rc::new(RefCell::new(self))
    }
}

/// Planar texture coordinate generator.
///
/// Each vertex is projected along the dominant axis of its normal
/// (X onto ZY, Y onto XZ, Z onto XY) and the result is scaled and offset.
/// With a transform set, positions and normals are transformed first so the
/// mapping follows the world pose.
#[derive(Debug, Clone, PartialEq)]
pub struct AutoUvMapModifier {
    /// Added after scaling
    pub offset: Vec2,

    /// Applied to the projected coordinates
    pub scale: Vec2,

    /// Optional world transform
    pub transform: Option<Mat4>,
}

impl Default for AutoUvMapModifier {
    fn default() -> Self {
        Self {
            offset: Vec2::zeros(),
            scale: Vec2::new(1.0, 1.0),
            transform: None,
        }
    }
}

impl AutoUvMapModifier {
    /// Regenerate the texture coordinates of every vertex
    pub fn modify_geometry(&self, geometry: &mut Geometry) {
        for vertex in &mut geometry.vertices {
            let (position, normal) = match &self.transform {
                Some(matrix) => (
                    matrix.transform_point(&Point3::from(vertex.position)).coords,
                    matrix.transform_vector(&vertex.normal),
                ),
                None => (vertex.position, vertex.normal),
            };

            vertex.tex_coord = project(position, normal).component_mul(&self.scale) + self.offset;
        }
    }
}

fn project(position: Vec3, normal: Vec3) -> Vec2 {
    let axis = normal.abs();
    if axis.x >= axis.y && axis.x >= axis.z {
        Vec2::new(position.z, position.y)
    } else if axis.y >= axis.z {
        Vec2::new(position.x, position.z)
    } else {
        Vec2::new(position.x, position.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn quad_vertex(position: Vec3, normal: Vec3) -> Vertex {
        Vertex::new(position, normal, Vec2::zeros())
    }

    #[test]
    fn test_projection_follows_dominant_normal_axis() {
        let mut geometry = Geometry::new(vec![
            quad_vertex(Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.9, 0.1, 0.0)),
            quad_vertex(Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.0, -1.0, 0.2)),
            quad_vertex(Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.0, 0.0, 1.0)),
        ]);

        AutoUvMapModifier::default().modify_geometry(&mut geometry);

        assert_eq!(geometry.vertices[0].tex_coord, Vec2::new(3.0, 2.0));
        assert_eq!(geometry.vertices[1].tex_coord, Vec2::new(1.0, 3.0));
        assert_eq!(geometry.vertices[2].tex_coord, Vec2::new(1.0, 2.0));
    }

    #[test]
    fn test_offset_and_scale() {
        let mut geometry = Geometry::new(vec![quad_vertex(Vec3::new(1.0, 1.0, 0.0), Vec3::z())]);
        let modifier = AutoUvMapModifier {
            offset: Vec2::new(0.5, 0.0),
            scale: Vec2::new(2.0, 1.0),
            transform: None,
        };

        modifier.modify_geometry(&mut geometry);
        assert_relative_eq!(geometry.vertices[0].tex_coord, Vec2::new(2.5, 1.0));
    }

    #[test]
    fn test_transform_applies_before_projection() {
        let mut geometry = Geometry::new(vec![quad_vertex(Vec3::new(1.0, 1.0, 0.0), Vec3::z())]);
        let modifier = AutoUvMapModifier {
            offset: Vec2::new(0.5, 0.0),
            scale: Vec2::new(2.0, 1.0),
            transform: Some(Mat4::new_translation(&Vec3::new(1.0, 0.0, 0.0))),
        };

        modifier.modify_geometry(&mut geometry);
        assert_relative_eq!(geometry.vertices[0].tex_coord, Vec2::new(4.5, 1.0));
    }
}
