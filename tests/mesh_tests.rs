// Host-side tests for the box mesh and instance packing.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod mesh {
    include!("../src/render/mesh.rs");
}

use glam::{Vec3, Vec4};
use hero_core::ObjectPose;
use mesh::*;

fn pose() -> ObjectPose {
    ObjectPose {
        position: Vec3::new(10.0, -4.0, 2.0),
        rotation: Vec3::new(0.3, -0.2, 0.9),
        scale: Vec3::new(2.0, 3.0, 4.0),
        float_rotation: Vec3::new(0.05, 0.02, 0.01),
        float_offset: Vec3::new(0.0, 0.07, 0.0),
        color: [0.2, 0.4, 0.6],
    }
}

#[test]
fn box_has_twelve_triangles_inside_unit_cube() {
    let verts = box_vertices();
    assert_eq!(verts.len(), 36);
    for v in &verts {
        for c in v.position {
            assert!((c.abs() - 0.5).abs() < 1e-6, "corner component {c}");
        }
    }
}

#[test]
fn box_triangles_wind_counter_clockwise_outward() {
    let verts = box_vertices();
    for tri in verts.chunks(3) {
        let a = Vec3::from_array(tri[0].position);
        let b = Vec3::from_array(tri[1].position);
        let c = Vec3::from_array(tri[2].position);
        let face_normal = (b - a).cross(c - a).normalize();
        let n = Vec3::from_array(tri[0].normal);
        assert!(face_normal.dot(n) > 0.99, "triangle winds against its normal");
        // outward: the centroid lies on the normal's side of the origin
        assert!(((a + b + c) / 3.0).dot(n) > 0.0);
    }
}

#[test]
fn instance_packs_model_matrix_and_color() {
    let p = pose();
    let inst = InstanceRaw::from_pose(&p);
    assert_eq!(inst.model, p.model_matrix().to_cols_array_2d());
    assert_eq!(inst.color, [0.2, 0.4, 0.6, 1.0]);
}

#[test]
fn instance_normal_matrix_keeps_normals_perpendicular() {
    let p = pose();
    let inst = InstanceRaw::from_pose(&p);
    let model = p.model_matrix();
    let n = glam::Mat3::from_cols(
        Vec4::from_array(inst.normal[0]).truncate(),
        Vec4::from_array(inst.normal[1]).truncate(),
        Vec4::from_array(inst.normal[2]).truncate(),
    );
    // a surface tangent (X) and the face normal (Y) of the unit box
    let tangent = model.transform_vector3(Vec3::X);
    let normal = n * Vec3::Y;
    assert!(tangent.dot(normal).abs() < 1e-4);
}

#[test]
fn zero_scale_does_not_produce_nan_normals() {
    let mut p = pose();
    p.scale = Vec3::ZERO;
    let inst = InstanceRaw::from_pose(&p);
    assert!(inst.normal.iter().flatten().all(|c| c.is_finite()));
}
