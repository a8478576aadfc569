use glam::{Mat4, Vec2, Vec3};

/// Vertical field of view shared by every pass, in radians.
const FOV_Y: f32 = std::f32::consts::FRAC_PI_4;
const Z_NEAR: f32 = 0.1;
const Z_FAR: f32 = 100.0;

/// A viewpoint into the scene.
///
/// `forward` is a direction, not a target point; it does not need to be
/// normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
	pub position: Vec3,
	pub forward: Vec3,
	pub up: Vec3,
}

impl Default for Camera {
	fn default() -> Self {
		Self {
			position: Vec3::ZERO,
			forward: Vec3::NEG_Z,
			up: Vec3::Y,
		}
	}
}

impl Camera {
	pub fn view(&self) -> Mat4 {
		Mat4::look_at_rh(self.position, self.position + self.forward, self.up)
	}
}

/// Perspective projection for the given viewport size in pixels.
pub fn perspective(viewport: Vec2) -> Mat4 {
	let aspect = viewport.x.max(1.0) / viewport.y.max(1.0);
	Mat4::perspective_rh_gl(FOV_Y, aspect, Z_NEAR, Z_FAR)
}

/// Unit forward vector for a yaw/pitch pair. Yaw 0 looks down +X, yaw
/// increases toward +Z; pitch raises toward +Y.
pub fn forward_from_yaw_pitch(yaw: f32, pitch: f32) -> Vec3 {
	Vec3::new(pitch.cos() * yaw.cos(), pitch.sin(), pitch.cos() * yaw.sin())
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_relative_eq;
	use std::f32::consts::FRAC_PI_2;

	#[test]
	fn forward_is_unit_length() {
		let f = forward_from_yaw_pitch(1.2, -0.4);
		assert_relative_eq!(f.length(), 1.0, epsilon = 1e-6);
	}

	#[test]
	fn level_yaw_spans_the_ground_plane() {
		let f = forward_from_yaw_pitch(-FRAC_PI_2, 0.0);
		assert_relative_eq!(f.x, 0.0, epsilon = 1e-6);
		assert_relative_eq!(f.y, 0.0, epsilon = 1e-6);
		assert_relative_eq!(f.z, -1.0, epsilon = 1e-6);
	}

	#[test]
	fn view_maps_a_point_ahead_onto_negative_z() {
		let camera = Camera {
			position: Vec3::new(0.0, 0.0, 5.0),
			..Default::default()
		};
		let p = camera.view() * glam::vec4(0.0, 0.0, 0.0, 1.0);
		assert_relative_eq!(p.z, -5.0, epsilon = 1e-5);
	}
}
