use hero_core::ObjectPose;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct Vertex {
    pub(crate) position: [f32; 3],
    pub(crate) normal: [f32; 3],
}

/// Unit box centred on the origin, 36 vertices with flat face normals.
pub(crate) fn box_vertices() -> Vec<Vertex> {
    // (normal, tangent u, tangent v) per face; u x v == normal keeps CCW winding
    const FACES: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
        ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
        ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
        ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
        ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
        ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    ];
    let mut out = Vec::with_capacity(36);
    for (n, u, v) in FACES {
        let corner = |su: f32, sv: f32| Vertex {
            position: [
                0.5 * (n[0] + su * u[0] + sv * v[0]),
                0.5 * (n[1] + su * u[1] + sv * v[1]),
                0.5 * (n[2] + su * u[2] + sv * v[2]),
            ],
            normal: n,
        };
        let (a, b, c, d) = (
            corner(-1.0, -1.0),
            corner(1.0, -1.0),
            corner(1.0, 1.0),
            corner(-1.0, 1.0),
        );
        out.extend_from_slice(&[a, b, c, a, c, d]);
    }
    out
}

/// Per-instance data: model matrix columns, normal matrix columns and tint.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct InstanceRaw {
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) normal: [[f32; 4]; 3],
    pub(crate) color: [f32; 4],
}

impl InstanceRaw {
    pub(crate) fn from_pose(pose: &ObjectPose) -> Self {
        let model = pose.model_matrix();
        let linear = glam::Mat3::from_mat4(model);
        // degenerate (zero-scale) objects keep unlit-safe normals
        let n = if linear.determinant().abs() > f32::EPSILON {
            linear.inverse().transpose()
        } else {
            glam::Mat3::IDENTITY
        };
        let [r, g, b] = pose.color;
        Self {
            model: model.to_cols_array_2d(),
            normal: [
                n.x_axis.extend(0.0).to_array(),
                n.y_axis.extend(0.0).to_array(),
                n.z_axis.extend(0.0).to_array(),
            ],
            color: [r, g, b, 1.0],
        }
    }
}
