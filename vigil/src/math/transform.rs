use glam::{EulerRot, Mat4, Quat, Vec3};

/// Local transform of a scene node, relative to its parent.
#[derive(Debug, Clone)]
pub struct Transform {
	/// X Y Z
	pub translation: Vec3,
	/// Euler angles, composed in X-Y-Z order
	pub rotation: Vec3,
	/// X Y Z scale factors
	pub scale: Vec3,
}

impl Default for Transform {
	fn default() -> Self {
		Self {
			translation: Vec3::ZERO,
			rotation: Vec3::ZERO,
			scale: Vec3::ONE,
		}
	}
}

impl Transform {
	pub fn to_matrix(&self) -> Mat4 {
		Mat4::from_translation(self.translation)
			* Mat4::from_quat(Quat::from_euler(
				EulerRot::XYZ,
				self.rotation.x,
				self.rotation.y,
				self.rotation.z,
			)) * Mat4::from_scale(self.scale)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_relative_eq;
	use glam::{vec3, vec4};
	use std::f32::consts::FRAC_PI_2;

	#[test]
	fn identity_by_default() {
		assert_eq!(Transform::default().to_matrix(), Mat4::IDENTITY);
	}

	#[test]
	fn scale_applies_before_rotation_before_translation() {
		let trans = Transform {
			translation: vec3(1.0, 2.0, 3.0),
			rotation: vec3(0.0, FRAC_PI_2, 0.0),
			scale: vec3(2.0, 2.0, 2.0),
		};

		// A point on +X: scaled to (2,0,0), rotated 90 deg about Y onto -Z,
		// then translated.
		let p = trans.to_matrix() * vec4(1.0, 0.0, 0.0, 1.0);
		assert_relative_eq!(p.x, 1.0, epsilon = 1e-5);
		assert_relative_eq!(p.y, 2.0, epsilon = 1e-5);
		assert_relative_eq!(p.z, 1.0, epsilon = 1e-5);
	}

	#[test]
	fn euler_angles_compose_x_then_y_then_z() {
		let trans = Transform {
			rotation: vec3(FRAC_PI_2, FRAC_PI_2, 0.0),
			..Default::default()
		};
		let expected = Quat::from_rotation_x(FRAC_PI_2) * Quat::from_rotation_y(FRAC_PI_2);
		let p = trans.to_matrix() * vec4(0.0, 0.0, 1.0, 1.0);
		let q = expected * vec3(0.0, 0.0, 1.0);
		assert_relative_eq!(p.x, q.x, epsilon = 1e-5);
		assert_relative_eq!(p.y, q.y, epsilon = 1e-5);
		assert_relative_eq!(p.z, q.z, epsilon = 1e-5);
	}
}
