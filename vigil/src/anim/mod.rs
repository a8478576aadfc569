use glam::Vec3;

use crate::scene::{NodePath, SpatialNode};

/// What an animation does to its target per second.
#[derive(Debug, Clone, Copy)]
enum AnimationKind {
	/// Euler-angle delta per second.
	Rotation(Vec3),
	/// Position delta per second.
	Translation(Vec3),
}

/// A bounded-duration mutation of one scene node.
///
/// Each tick applies at most the time remaining until `duration`, so the
/// cumulative effect equals the configured total exactly, no matter how
/// the elapsed time is chunked across calls. Once complete, further ticks
/// are no-ops.
#[derive(Debug, Clone)]
pub struct Animation {
	target: NodePath,
	duration: f32,
	elapsed: f32,
	kind: AnimationKind,
}

impl Animation {
	/// Rotates the target by `total` Euler radians spread linearly over
	/// `duration` seconds.
	pub fn rotation(target: NodePath, duration: f32, total: Vec3) -> Self {
		let rate = total / duration;
		Self::new(target, duration, AnimationKind::Rotation(rate))
	}

	/// Moves the target by `total` spread linearly over `duration` seconds.
	pub fn translation(target: NodePath, duration: f32, total: Vec3) -> Self {
		let rate = total / duration;
		Self::new(target, duration, AnimationKind::Translation(rate))
	}

	fn new(target: NodePath, duration: f32, kind: AnimationKind) -> Self {
		assert!(duration > 0.0, "animation duration must be positive");
		Self {
			target,
			duration,
			elapsed: 0.0,
			kind,
		}
	}

	pub fn finished(&self) -> bool {
		self.elapsed >= self.duration
	}

	fn tick(&mut self, dt: f32, roots: &mut [SpatialNode]) {
		if self.finished() {
			return;
		}
		let step = dt.min(self.duration - self.elapsed);
		let node = self.target.resolve_mut(roots);
		match self.kind {
			AnimationKind::Rotation(rate) => node.rotate(rate * step),
			AnimationKind::Translation(rate) => node.translate(rate * step),
		}
		self.elapsed += step;
	}
}

/// Plays a queue of animations one at a time.
///
/// The queue itself holds pristine animations; the animator advances a
/// copy of one of them at a time and discards it once complete, so
/// [`start`](Animator::start) can replay the whole queue any number of
/// times. An animator with no current animation (never started, or its
/// queue exhausted) ticks as a no-op until the next `start()`.
#[derive(Debug, Default)]
pub struct Animator {
	queue: Vec<Animation>,
	cursor: usize,
	current: Option<Animation>,
	running: bool,
}

impl Animator {
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends an animation. The animator stays dormant until `start()`.
	pub fn add_animation(&mut self, animation: Animation) {
		self.queue.push(animation);
	}

	/// (Re)starts playback from the head of the queue, abandoning any
	/// in-flight animation's partial progress.
	pub fn start(&mut self) {
		self.cursor = 0;
		self.current = self.queue.first().cloned();
		self.running = self.current.is_some();
	}

	pub fn is_running(&self) -> bool {
		self.running
	}

	/// Advances the current animation by `dt`. When it completes, the
	/// next queued animation becomes current; leftover time from `dt` is
	/// discarded, not carried over. Safe no-op while idle.
	pub fn tick(&mut self, dt: f32, roots: &mut [SpatialNode]) {
		let current = match self.current.as_mut() {
			Some(current) => current,
			None => return,
		};
		current.tick(dt, roots);
		if current.finished() {
			self.cursor += 1;
			self.current = self.queue.get(self.cursor).cloned();
			if self.current.is_none() {
				self.running = false;
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::scene::Scene;
	use approx::assert_relative_eq;
	use glam::vec3;
	use std::f32::consts::TAU;

	fn one_node_scene() -> Scene {
		let mut scene = Scene::new();
		scene.add_root(SpatialNode::new());
		scene
	}

	/// Scene with one node and one started animator spinning it by
	/// `total` over `duration` seconds.
	fn spinning_scene(duration: f32, total: Vec3) -> Scene {
		let mut scene = one_node_scene();
		let mut animator = Animator::new();
		animator.add_animation(Animation::rotation(NodePath::root(0), duration, total));
		animator.start();
		scene.add_animator(animator);
		scene
	}

	#[test]
	fn chunked_ticks_apply_the_exact_total() {
		let mut coarse = spinning_scene(10.0, vec3(0.0, TAU, 0.0));
		coarse.tick(10.0);

		let mut fine = spinning_scene(10.0, vec3(0.0, TAU, 0.0));
		for _ in 0..10 {
			fine.tick(1.0);
		}

		assert_relative_eq!(coarse.root(0).orientation().y, TAU, epsilon = 1e-4);
		assert_relative_eq!(fine.root(0).orientation().y, TAU, epsilon = 1e-4);
	}

	#[test]
	fn a_rotation_split_in_half_lands_exactly() {
		let mut scene = spinning_scene(10.0, vec3(0.0, TAU, 0.0));
		scene.tick(5.0);
		scene.tick(5.0);
		assert_relative_eq!(scene.root(0).orientation().x, 0.0);
		assert_relative_eq!(scene.root(0).orientation().y, TAU, epsilon = 1e-4);
		assert_relative_eq!(scene.root(0).orientation().z, 0.0);
	}

	#[test]
	fn an_oversized_tick_never_overshoots() {
		let mut scene = spinning_scene(10.0, vec3(0.0, TAU, 0.0));
		scene.tick(1e4);
		assert_relative_eq!(scene.root(0).orientation().y, TAU, epsilon = 1e-4);
		assert!(!scene.animator(0).is_running());
	}

	#[test]
	fn ticking_a_complete_animation_changes_nothing() {
		let mut scene = spinning_scene(10.0, vec3(0.0, TAU, 0.0));
		scene.tick(10.0);
		let settled = scene.root(0).orientation();
		scene.tick(3.0);
		scene.tick(0.25);
		assert_eq!(scene.root(0).orientation(), settled);
	}

	#[test]
	fn a_door_slide_completes_and_goes_idle() {
		let mut scene = one_node_scene();
		let mut animator = Animator::new();
		animator.add_animation(Animation::translation(
			NodePath::root(0),
			1.0,
			vec3(0.0, -1.15, 0.0),
		));
		animator.start();
		scene.add_animator(animator);

		scene.tick(0.5);
		scene.tick(0.5);

		let p = scene.root(0).position();
		assert_relative_eq!(p.y, -1.15, epsilon = 1e-6);
		assert!(!scene.animator(0).is_running());
	}

	#[test]
	fn leftover_time_is_not_carried_into_the_next_animation() {
		let mut scene = one_node_scene();
		let mut animator = Animator::new();
		animator.add_animation(Animation::translation(NodePath::root(0), 1.0, vec3(1.0, 0.0, 0.0)));
		animator.add_animation(Animation::translation(NodePath::root(0), 1.0, vec3(0.0, 1.0, 0.0)));
		animator.start();
		scene.add_animator(animator);

		// 0.5 s of this tick is left over once the first animation
		// completes; it must be dropped, not applied to the second.
		scene.tick(1.5);
		assert_relative_eq!(scene.root(0).position().x, 1.0, epsilon = 1e-6);
		assert_relative_eq!(scene.root(0).position().y, 0.0);

		scene.tick(1.0);
		assert_relative_eq!(scene.root(0).position().y, 1.0, epsilon = 1e-6);
		assert!(!scene.animator(0).is_running());
	}

	#[test]
	fn start_rewinds_to_the_head_of_the_queue() {
		let mut scene = one_node_scene();
		let mut animator = Animator::new();
		animator.add_animation(Animation::translation(NodePath::root(0), 1.0, vec3(1.0, 0.0, 0.0)));
		animator.add_animation(Animation::translation(NodePath::root(0), 1.0, vec3(0.0, 1.0, 0.0)));
		animator.start();
		scene.add_animator(animator);

		scene.tick(1.0);
		scene.tick(0.5);
		assert_relative_eq!(scene.root(0).position().x, 1.0, epsilon = 1e-6);
		assert_relative_eq!(scene.root(0).position().y, 0.5, epsilon = 1e-6);

		// Restart mid-way through the second animation: playback resumes
		// from the first, with its full effect intact.
		scene.start_animator(0);
		scene.tick(1.0);
		scene.tick(1.0);
		assert_relative_eq!(scene.root(0).position().x, 2.0, epsilon = 1e-6);
		assert_relative_eq!(scene.root(0).position().y, 1.5, epsilon = 1e-6);
		assert!(!scene.animator(0).is_running());
	}

	#[test]
	fn a_dormant_animator_ticks_as_a_no_op() {
		let mut scene = one_node_scene();
		let mut animator = Animator::new();
		animator.add_animation(Animation::rotation(NodePath::root(0), 1.0, vec3(0.0, TAU, 0.0)));
		// Never started.
		scene.add_animator(animator);

		scene.tick(5.0);
		assert_eq!(scene.root(0).orientation(), Vec3::ZERO);
		assert!(!scene.animator(0).is_running());
	}

	#[test]
	fn an_empty_animator_is_safe() {
		let mut scene = one_node_scene();
		scene.add_animator(Animator::new());
		scene.start_animator(0);
		scene.tick(1.0);
		assert!(!scene.animator(0).is_running());
	}

	#[test]
	#[should_panic(expected = "duration must be positive")]
	fn a_zero_duration_animation_is_rejected() {
		Animation::rotation(NodePath::root(0), 0.0, Vec3::ONE);
	}
}
