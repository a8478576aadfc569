use glam::{Mat4, Vec3, Vec4};

use crate::mesh::MeshId;

/// Sink for the draw calls a scene traversal emits. Render backends
/// implement this; tests can implement it with a plain `Vec`.
pub trait MeshRenderer {
	/// Draw one mesh with the given world transform. `material` is the
	/// owning node's base color override, or `None` for the backend's
	/// default.
	fn draw_mesh(&mut self, mesh: MeshId, world: Mat4, material: Option<Vec4>);
}

/// Light uniforms for one render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lighting {
	/// Direction the light travels, in world space.
	pub direction: Vec3,
	pub directional_color: Vec3,
	pub ambient_color: Vec3,
}

impl Default for Lighting {
	fn default() -> Self {
		Self {
			direction: Vec3::new(0.0, -1.0, 0.0),
			directional_color: Vec3::ONE,
			ambient_color: Vec3::ONE,
		}
	}
}
