use glam::Vec3;

use crate::scene::{NodePath, Scene};

/// A sliding door panel driven by a pair of one-shot animators.
///
/// Toggling restarts the matching animator from the head of its queue, so
/// a door can be slammed and reopened any number of times. The panel's
/// position is clamped to its authored travel range once per frame, which
/// keeps rapid re-toggles from driving the slide past either stop.
pub struct Door {
	panel: NodePath,
	lower: usize,
	raise: usize,
	closed: bool,
	open_position: Vec3,
	closed_position: Vec3,
}

impl Door {
	/// `lower` and `raise` are animator indices in the scene this door
	/// controls; the panel starts open.
	pub fn new(
		panel: NodePath,
		lower: usize,
		raise: usize,
		open_position: Vec3,
		closed_position: Vec3,
	) -> Self {
		Self {
			panel,
			lower,
			raise,
			closed: false,
			open_position,
			closed_position,
		}
	}

	pub fn is_closed(&self) -> bool {
		self.closed
	}

	/// Flips the door state and starts the matching slide animator.
	pub fn toggle(&mut self, scene: &mut Scene) {
		if self.closed {
			scene.start_animator(self.raise);
		} else {
			scene.start_animator(self.lower);
		}
		self.closed = !self.closed;
	}

	/// Clamps the panel to its travel range. Run once per frame, after
	/// animators have ticked.
	pub fn clamp(&self, scene: &mut Scene) {
		let min = self.open_position.min(self.closed_position);
		let max = self.open_position.max(self.closed_position);
		let panel = scene.node_mut(&self.panel);
		let clamped = panel.position().clamp(min, max);
		panel.set_position(clamped);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::anim::{Animation, Animator};
	use crate::scene::SpatialNode;
	use approx::assert_relative_eq;
	use glam::vec3;

	const OPEN: Vec3 = vec3(0.85, 0.65, 4.25);
	const CLOSED: Vec3 = vec3(0.85, -0.5, 4.25);

	fn door_scene() -> (Scene, Door) {
		let mut scene = Scene::new();
		let mut panel = SpatialNode::new();
		panel.set_position(OPEN);
		scene.add_root(panel);

		let path = NodePath::root(0);
		let mut lower = Animator::new();
		lower.add_animation(Animation::translation(path.clone(), 1.0, vec3(0.0, -1.15, 0.0)));
		let lower = scene.add_animator(lower);
		let mut raise = Animator::new();
		raise.add_animation(Animation::translation(path.clone(), 2.0, vec3(0.0, 1.15, 0.0)));
		let raise = scene.add_animator(raise);

		let door = Door::new(path, lower, raise, OPEN, CLOSED);
		(scene, door)
	}

	#[test]
	fn a_full_toggle_cycle_returns_the_panel_home() {
		let (mut scene, mut door) = door_scene();

		door.toggle(&mut scene);
		assert!(door.is_closed());
		scene.tick(1.0);
		door.clamp(&mut scene);
		assert_relative_eq!(scene.root(0).position().y, CLOSED.y, epsilon = 1e-5);

		door.toggle(&mut scene);
		assert!(!door.is_closed());
		scene.tick(2.0);
		door.clamp(&mut scene);
		assert_relative_eq!(scene.root(0).position().y, OPEN.y, epsilon = 1e-5);
	}

	#[test]
	fn repeated_cycles_travel_identical_distances() {
		let (mut scene, mut door) = door_scene();

		let mut deltas = Vec::new();
		for _ in 0..2 {
			let before = scene.root(0).position();
			door.toggle(&mut scene);
			scene.tick(1.0);
			door.clamp(&mut scene);
			deltas.push(scene.root(0).position() - before);

			door.toggle(&mut scene);
			scene.tick(2.0);
			door.clamp(&mut scene);
		}

		// Both closes restart the lower animator from its queue head.
		assert_relative_eq!(deltas[0].y, -1.15, epsilon = 1e-5);
		assert_relative_eq!(deltas[1].y, -1.15, epsilon = 1e-5);
	}

	#[test]
	fn the_clamp_stops_an_interrupted_slide_at_the_rails() {
		let (mut scene, mut door) = door_scene();

		// Half-close, then reopen: the raise animation covers the full
		// travel, so from mid-way it would overshoot the top stop.
		door.toggle(&mut scene);
		scene.tick(0.5);
		door.clamp(&mut scene);
		door.toggle(&mut scene);
		scene.tick(2.0);
		door.clamp(&mut scene);

		assert_relative_eq!(scene.root(0).position().y, OPEN.y, epsilon = 1e-5);
	}
}
