//! Static scene geometry: floor, desk and laptop, built once at init.

use crate::core::{DESK_TOP_Y, FLOOR_Y};
use glam::Vec3;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
    /// rgb tint; alpha is the wood-texture blend weight, not opacity.
    pub color: [f32; 4],
}

#[derive(Default)]
pub struct SceneMesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

#[inline]
fn rgb(hex: u32, tex_weight: f32) -> [f32; 4] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
        tex_weight,
    ]
}

impl SceneMesh {
    fn push_face(&mut self, corners: [Vec3; 4], normal: Vec3, color: [f32; 4], uv_scale: f32) {
        let base = self.vertices.len() as u32;
        let uvs = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
        for (corner, uv) in corners.iter().zip(uvs) {
            self.vertices.push(Vertex {
                position: corner.to_array(),
                normal: normal.to_array(),
                uv: [uv[0] * uv_scale, uv[1] * uv_scale],
                color,
            });
        }
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    fn push_box(&mut self, center: Vec3, half: Vec3, color: [f32; 4], uv_scale: f32) {
        let p = |sx: f32, sy: f32, sz: f32| center + half * Vec3::new(sx, sy, sz);
        self.push_face(
            [p(1.0, -1.0, 1.0), p(1.0, -1.0, -1.0), p(1.0, 1.0, -1.0), p(1.0, 1.0, 1.0)],
            Vec3::X,
            color,
            uv_scale,
        );
        self.push_face(
            [p(-1.0, -1.0, -1.0), p(-1.0, -1.0, 1.0), p(-1.0, 1.0, 1.0), p(-1.0, 1.0, -1.0)],
            -Vec3::X,
            color,
            uv_scale,
        );
        self.push_face(
            [p(-1.0, 1.0, 1.0), p(1.0, 1.0, 1.0), p(1.0, 1.0, -1.0), p(-1.0, 1.0, -1.0)],
            Vec3::Y,
            color,
            uv_scale,
        );
        self.push_face(
            [p(-1.0, -1.0, -1.0), p(1.0, -1.0, -1.0), p(1.0, -1.0, 1.0), p(-1.0, -1.0, 1.0)],
            -Vec3::Y,
            color,
            uv_scale,
        );
        self.push_face(
            [p(-1.0, -1.0, 1.0), p(1.0, -1.0, 1.0), p(1.0, 1.0, 1.0), p(-1.0, 1.0, 1.0)],
            Vec3::Z,
            color,
            uv_scale,
        );
        self.push_face(
            [p(1.0, -1.0, -1.0), p(-1.0, -1.0, -1.0), p(-1.0, 1.0, -1.0), p(1.0, 1.0, -1.0)],
            -Vec3::Z,
            color,
            uv_scale,
        );
    }
}

pub fn build_scene() -> SceneMesh {
    let mut mesh = SceneMesh::default();

    // Floor
    mesh.push_face(
        [
            Vec3::new(-5.0, FLOOR_Y, 5.0),
            Vec3::new(5.0, FLOOR_Y, 5.0),
            Vec3::new(5.0, FLOOR_Y, -5.0),
            Vec3::new(-5.0, FLOOR_Y, -5.0),
        ],
        Vec3::Y,
        rgb(0x0a0a0a, 0.0),
        0.0,
    );

    // Desk top (textured), support beam, four legs
    mesh.push_box(
        Vec3::new(0.0, 0.04, 0.0),
        Vec3::new(1.75, 0.04, 0.75),
        rgb(0x8b5a2b, 1.0),
        3.0,
    );
    mesh.push_box(
        Vec3::new(0.0, -0.08, 0.0),
        Vec3::new(1.55, 0.03, 0.05),
        rgb(0x2a1a0a, 0.0),
        0.0,
    );
    for sx in [-1.0f32, 1.0] {
        for sz in [-1.0f32, 1.0] {
            mesh.push_box(
                Vec3::new(1.6 * sx, -0.4, 0.6 * sz),
                Vec3::new(0.04, 0.4, 0.04),
                rgb(0x2a1a0a, 0.0),
                0.0,
            );
        }
    }

    // Laptop: base on the desk, upright lid, screen inset on the lid front
    let base_y = DESK_TOP_Y + 0.025;
    mesh.push_box(
        Vec3::new(0.0, base_y, 0.0),
        Vec3::new(0.6, 0.025, 0.35),
        rgb(0x222222, 0.0),
        0.0,
    );
    let lid_center = Vec3::new(0.0, base_y + 0.025 + 0.35, -0.325);
    mesh.push_box(
        lid_center,
        Vec3::new(0.6, 0.35, 0.025),
        rgb(0x1a1a1a, 0.0),
        0.0,
    );
    let sz = lid_center.z + 0.026;
    mesh.push_face(
        [
            Vec3::new(-0.575, lid_center.y - 0.325, sz),
            Vec3::new(0.575, lid_center.y - 0.325, sz),
            Vec3::new(0.575, lid_center.y + 0.325, sz),
            Vec3::new(-0.575, lid_center.y + 0.325, sz),
        ],
        Vec3::Z,
        rgb(0x10131a, 0.0),
        0.0,
    );

    mesh
}
