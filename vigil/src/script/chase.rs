use std::f32::consts::FRAC_PI_8;

use glam::{vec3, Vec3};
use tracing::debug;

use crate::scene::{NodePath, Scene};

/// Where the prowler is in its scripted run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChasePhase {
	/// Waiting for the trigger time.
	Dormant,
	/// First leg: cutting diagonally out of the alcove.
	Hallway,
	/// Second leg: straight down the corridor toward the office.
	Corridor,
	/// Reached an open doorway. Terminal; there is no automatic reset.
	Caught,
}

/// The scripted chase: an object that sprints from its alcove to the
/// office door once a wall-clock trigger passes.
///
/// On arrival it consults the protecting door. Closed: the prowler snaps
/// back to its spawn transform and re-arms for another attempt later.
/// Open: it applies a single terminal roll and freezes.
pub struct Prowler {
	target: NodePath,
	phase: ChasePhase,
	trigger_at: f32,
	retry_delay: f32,
	speed: f32,
	travelled: f32,
	first_leg: f32,
	full_run: f32,
	spawn_position: Vec3,
	spawn_orientation: Vec3,
	caught_roll: Vec3,
}

impl Prowler {
	pub fn new(target: NodePath, trigger_at: f32, spawn_position: Vec3, spawn_orientation: Vec3) -> Self {
		Self {
			target,
			phase: ChasePhase::Dormant,
			trigger_at,
			retry_delay: 30.0,
			speed: 2.8,
			travelled: 0.0,
			first_leg: 8.0,
			full_run: 32.0,
			spawn_position,
			spawn_orientation,
			caught_roll: vec3(0.0, 0.0, -FRAC_PI_8),
		}
	}

	/// Seconds to wait after a blocked run before triggering again.
	pub fn with_retry_delay(mut self, retry_delay: f32) -> Self {
		self.retry_delay = retry_delay;
		self
	}

	pub fn phase(&self) -> ChasePhase {
		self.phase
	}

	/// Advances the run by one frame. `door_closed` is the protecting
	/// door's state this frame; `elapsed` is wall-clock seconds since the
	/// level started.
	pub fn update(&mut self, scene: &mut Scene, door_closed: bool, elapsed: f32, dt: f32) {
		match self.phase {
			ChasePhase::Dormant => {
				if elapsed >= self.trigger_at {
					debug!("prowler run triggered");
					self.travelled = 0.0;
					self.phase = ChasePhase::Hallway;
				}
			}
			ChasePhase::Hallway | ChasePhase::Corridor => {
				let step = self.speed * dt;
				let delta = if self.phase == ChasePhase::Hallway {
					vec3(step, 0.0, step)
				} else {
					vec3(0.0, 0.0, step)
				};
				scene.node_mut(&self.target).translate(delta);
				self.travelled += step;

				if self.travelled >= self.full_run {
					self.resolve(scene, door_closed, elapsed);
				} else if self.travelled >= self.first_leg {
					self.phase = ChasePhase::Corridor;
				}
			}
			ChasePhase::Caught => {}
		}
	}

	fn resolve(&mut self, scene: &mut Scene, door_closed: bool, elapsed: f32) {
		if door_closed {
			debug!("prowler blocked at the door, resetting");
			let node = scene.node_mut(&self.target);
			node.set_position(self.spawn_position);
			node.set_orientation(self.spawn_orientation);
			self.trigger_at = elapsed + self.retry_delay;
			self.phase = ChasePhase::Dormant;
		} else {
			debug!("prowler got through an open door");
			scene.node_mut(&self.target).rotate(self.caught_roll);
			self.phase = ChasePhase::Caught;
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::scene::SpatialNode;
	use approx::assert_relative_eq;
	use std::f32::consts::FRAC_PI_4;

	const SPAWN_POS: Vec3 = vec3(-9.0, -0.55, -28.0);
	const SPAWN_ROT: Vec3 = vec3(0.0, FRAC_PI_4, 0.0);

	fn prowler_scene() -> (Scene, Prowler) {
		let mut scene = Scene::new();
		let mut node = SpatialNode::new();
		node.set_position(SPAWN_POS);
		node.set_orientation(SPAWN_ROT);
		scene.add_root(node);
		let prowler = Prowler::new(NodePath::root(0), 30.0, SPAWN_POS, SPAWN_ROT).with_retry_delay(30.0);
		(scene, prowler)
	}

	/// Runs whole frames at a fixed dt until the prowler resolves or the
	/// budget runs out.
	fn run_until_resolved(scene: &mut Scene, prowler: &mut Prowler, door_closed: bool, mut elapsed: f32) -> f32 {
		let dt = 0.25;
		for _ in 0..1000 {
			prowler.update(scene, door_closed, elapsed, dt);
			elapsed += dt;
			if matches!(prowler.phase(), ChasePhase::Dormant | ChasePhase::Caught) {
				break;
			}
		}
		elapsed
	}

	#[test]
	fn stays_dormant_until_the_trigger_time() {
		let (mut scene, mut prowler) = prowler_scene();
		prowler.update(&mut scene, false, 29.9, 0.1);
		assert_eq!(prowler.phase(), ChasePhase::Dormant);
		assert_eq!(scene.root(0).position(), SPAWN_POS);

		prowler.update(&mut scene, false, 30.0, 0.1);
		assert_eq!(prowler.phase(), ChasePhase::Hallway);
	}

	#[test]
	fn switches_axis_after_the_first_leg() {
		let (mut scene, mut prowler) = prowler_scene();
		prowler.update(&mut scene, false, 30.0, 0.0);

		// 2.8 u/s for 3 s = 8.4 units: past the 8-unit first leg.
		let mut elapsed = 30.0;
		for _ in 0..12 {
			prowler.update(&mut scene, false, elapsed, 0.25);
			elapsed += 0.25;
		}
		assert_eq!(prowler.phase(), ChasePhase::Corridor);
		let p = scene.root(0).position();
		assert_relative_eq!(p.x - SPAWN_POS.x, 8.4, epsilon = 1e-4);
		assert_relative_eq!(p.z - SPAWN_POS.z, 8.4, epsilon = 1e-4);

		// From here on only Z advances.
		let x_before = scene.root(0).position().x;
		prowler.update(&mut scene, false, elapsed, 0.25);
		assert_eq!(scene.root(0).position().x, x_before);
	}

	#[test]
	fn a_closed_door_resets_and_rearms_the_run() {
		let (mut scene, mut prowler) = prowler_scene();
		prowler.update(&mut scene, true, 30.0, 0.0);
		let resolved_at = run_until_resolved(&mut scene, &mut prowler, true, 30.0);

		assert_eq!(prowler.phase(), ChasePhase::Dormant);
		assert_eq!(scene.root(0).position(), SPAWN_POS);
		assert_eq!(scene.root(0).orientation(), SPAWN_ROT);

		// Not retriggered until the retry delay has passed.
		prowler.update(&mut scene, true, resolved_at + 1.0, 0.25);
		assert_eq!(prowler.phase(), ChasePhase::Dormant);
		prowler.update(&mut scene, true, resolved_at + 30.0, 0.25);
		assert_eq!(prowler.phase(), ChasePhase::Hallway);
	}

	#[test]
	fn an_open_door_ends_the_run_for_good() {
		let (mut scene, mut prowler) = prowler_scene();
		prowler.update(&mut scene, false, 30.0, 0.0);
		run_until_resolved(&mut scene, &mut prowler, false, 30.0);

		assert_eq!(prowler.phase(), ChasePhase::Caught);
		assert_relative_eq!(scene.root(0).orientation().z, -FRAC_PI_8, epsilon = 1e-6);

		// Frozen: no further motion or rotation, ever.
		let position = scene.root(0).position();
		let orientation = scene.root(0).orientation();
		prowler.update(&mut scene, false, 1e4, 1.0);
		assert_eq!(scene.root(0).position(), position);
		assert_eq!(scene.root(0).orientation(), orientation);
	}
}
