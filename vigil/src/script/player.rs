use glam::vec3;

use crate::math::camera::Camera;

/// Held-key state driving the free-flying player camera.
///
/// The window layer flips the public flags from key press/release events;
/// `update` integrates whatever is held each frame. Turning changes yaw
/// only — the player camera stays level.
pub struct PlayerController {
	yaw: f32,
	move_speed: f32,
	turn_speed: f32,
	pub forward: bool,
	pub back: bool,
	pub turn_left: bool,
	pub turn_right: bool,
	pub rise: bool,
	pub sink: bool,
}

impl PlayerController {
	pub fn new(yaw: f32, move_speed: f32, turn_speed: f32) -> Self {
		Self {
			yaw,
			move_speed,
			turn_speed,
			forward: false,
			back: false,
			turn_left: false,
			turn_right: false,
			rise: false,
			sink: false,
		}
	}

	/// Applies one frame of held input to `camera`.
	pub fn update(&mut self, camera: &mut Camera, dt: f32) {
		if self.turn_left {
			self.yaw -= self.turn_speed * dt;
		}
		if self.turn_right {
			self.yaw += self.turn_speed * dt;
		}

		camera.forward = vec3(self.yaw.cos(), 0.0, self.yaw.sin()).normalize();

		if self.forward {
			camera.position += camera.forward * self.move_speed * dt;
		}
		if self.back {
			camera.position -= camera.forward * self.move_speed * dt;
		}
		if self.rise {
			camera.position.y += self.move_speed * dt;
		}
		if self.sink {
			camera.position.y -= self.move_speed * dt;
		}
	}
}
