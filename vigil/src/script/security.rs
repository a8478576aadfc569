use glam::Vec3;

use crate::math::camera::{forward_from_yaw_pitch, Camera};

/// Oscillates a camera's yaw between two stops at a fixed pitch.
pub struct Sweep {
	yaw: f32,
	pitch: f32,
	rate: f32,
	min_yaw: f32,
	max_yaw: f32,
}

impl Sweep {
	/// `rate` is radians per second; its sign sets the initial direction.
	pub fn new(yaw: f32, pitch: f32, rate: f32, min_yaw: f32, max_yaw: f32) -> Self {
		Self {
			yaw,
			pitch,
			rate,
			min_yaw,
			max_yaw,
		}
	}

	pub fn update(&mut self, dt: f32) {
		self.yaw += self.rate * dt;
		if self.yaw > self.max_yaw {
			self.yaw = self.max_yaw;
			self.rate = -self.rate.abs();
		}
		if self.yaw < self.min_yaw {
			self.yaw = self.min_yaw;
			self.rate = self.rate.abs();
		}
	}

	pub fn yaw(&self) -> f32 {
		self.yaw
	}

	pub fn forward(&self) -> Vec3 {
		forward_from_yaw_pitch(self.yaw, self.pitch)
	}
}

/// The bank of preset viewpoints feeding the office monitor, one active
/// at a time, all sharing one sweeping head.
pub struct SecurityFeed {
	views: Vec<Camera>,
	active: usize,
	sweep: Sweep,
}

impl SecurityFeed {
	pub fn new(views: Vec<Camera>, sweep: Sweep) -> Self {
		Self {
			views,
			active: 0,
			sweep,
		}
	}

	/// Selects the active preset. Panics if `index` is out of bounds;
	/// call sites pass fixed key-binding indices.
	pub fn select(&mut self, index: usize) {
		assert!(index < self.views.len(), "no security view {index}");
		self.active = index;
	}

	pub fn active(&self) -> usize {
		self.active
	}

	pub fn update(&mut self, dt: f32) {
		self.sweep.update(dt);
	}

	/// The camera for this frame's offscreen pass: the active preset's
	/// position under the swept head's forward vector.
	pub fn camera(&self) -> Camera {
		let view = &self.views[self.active];
		Camera {
			position: view.position,
			forward: self.sweep.forward(),
			up: view.up,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_relative_eq;
	use glam::vec3;
	use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, FRAC_PI_8};

	fn office_sweep() -> Sweep {
		Sweep::new(-FRAC_PI_2, -FRAC_PI_4, FRAC_PI_8, -3.0 * FRAC_PI_4, -FRAC_PI_4)
	}

	#[test]
	fn the_sweep_bounces_between_its_stops() {
		let mut sweep = office_sweep();
		// Long simulation: the yaw must never leave its range.
		for _ in 0..2000 {
			sweep.update(0.1);
			assert!(sweep.yaw() >= -3.0 * FRAC_PI_4);
			assert!(sweep.yaw() <= -FRAC_PI_4);
		}
	}

	#[test]
	fn the_sweep_reverses_at_a_stop() {
		let mut sweep = office_sweep();
		// Drive it hard into the upper stop.
		sweep.update(100.0);
		assert_relative_eq!(sweep.yaw(), -FRAC_PI_4);
		let before = sweep.yaw();
		sweep.update(0.1);
		assert!(sweep.yaw() < before);
	}

	#[test]
	fn selecting_a_feed_moves_the_camera_but_keeps_the_sweep() {
		let stage = Camera {
			position: vec3(0.0, 1.0, -28.0),
			..Default::default()
		};
		let alcove = Camera {
			position: vec3(-9.0, 0.6, -27.15),
			..Default::default()
		};
		let mut feed = SecurityFeed::new(vec![stage, alcove], office_sweep());

		feed.update(0.5);
		let forward = feed.camera().forward;
		assert_eq!(feed.camera().position, vec3(0.0, 1.0, -28.0));

		feed.select(1);
		assert_eq!(feed.camera().position, vec3(-9.0, 0.6, -27.15));
		assert_eq!(feed.camera().forward, forward);
	}

	#[test]
	#[should_panic(expected = "no security view 5")]
	fn selecting_a_missing_feed_panics() {
		let mut feed = SecurityFeed::new(vec![Camera::default()], office_sweep());
		feed.select(5);
	}
}
