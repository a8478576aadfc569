use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, FRAC_PI_8, PI};

use glam::{vec3, Vec3};
use tracing::info;

use vigil::anim::{Animation, Animator};
use vigil::assets::{Assets, ModelLoadError};
use vigil::math::camera::Camera;
use vigil::mesh::{MeshData, TextureRef};
use vigil::render::Lighting;
use vigil::scene::{NodePath, Scene, SpatialNode};
use vigil::script::chase::Prowler;
use vigil::script::doors::Door;
use vigil::script::security::{SecurityFeed, Sweep};

// Root indices the runtime scripting reaches back into. Construction
// order below must keep these stable.
const PROWLER: usize = 3;
const RIGHT_DOOR: usize = 6;
const LEFT_DOOR: usize = 7;

const PROWLER_SPAWN_POS: Vec3 = vec3(-9.0, -0.55, -28.0);
const PROWLER_SPAWN_ROT: Vec3 = vec3(0.0, FRAC_PI_4, 0.0);

const RIGHT_DOOR_OPEN: Vec3 = vec3(0.85, 0.65, 4.25);
const RIGHT_DOOR_CLOSED: Vec3 = vec3(0.85, -0.5, 4.25);
const LEFT_DOOR_OPEN: Vec3 = vec3(-0.525, 0.65, 4.25);
const LEFT_DOOR_CLOSED: Vec3 = vec3(-0.525, -0.5, 4.25);

/// How far a door panel slides, and how long each direction takes.
const DOOR_TRAVEL: f32 = 1.15;
const DOOR_DROP_SECS: f32 = 1.0;
const DOOR_RAISE_SECS: f32 = 2.0;

/// Seconds of quiet before the prowler's first run.
const FIRST_RUN_AT: f32 = 30.0;

/// The whole security-office level: the scene forest, its asset store,
/// and the scripted actors that mutate it every frame.
pub struct OfficeLevel {
	pub scene: Scene,
	pub assets: Assets,
	pub feeds: SecurityFeed,
	left_door: Door,
	right_door: Door,
	prowler: Prowler,
}

impl OfficeLevel {
	/// Loads every model and assembles the level.
	pub fn build() -> Result<Self, ModelLoadError> {
		let mut assets = Assets::new();
		let mut scene = Scene::new();
		scene.lighting = Lighting {
			direction: vec3(0.0, -1.0, -1.0),
			directional_color: Vec3::ONE,
			ambient_color: Vec3::ONE,
		};

		// Stage figures, left to right.
		let mut bear = assets.load_model("models/bear/bear.obj", true)?;
		bear.translate(vec3(0.0, -0.5, -29.0));
		bear.grow(Vec3::splat(0.55));
		scene.add_root(bear); // 0

		let mut rabbit = assets.load_model("models/rabbit/rabbit.obj", true)?;
		rabbit.translate(vec3(-0.5, -0.5, -29.5));
		rabbit.grow(Vec3::splat(0.05));
		scene.add_root(rabbit); // 1

		let mut bird = assets.load_model("models/bird/bird.obj", true)?;
		bird.translate(vec3(0.5, -0.5, -29.5));
		bird.grow(Vec3::splat(0.05));
		scene.add_root(bird); // 2

		let mut prowler_node = assets.load_model("models/prowler/prowler.obj", true)?;
		prowler_node.translate(PROWLER_SPAWN_POS);
		prowler_node.grow(Vec3::splat(0.05));
		prowler_node.rotate(PROWLER_SPAWN_ROT);
		scene.add_root(prowler_node); // 3 = PROWLER

		let mut stage = assets.load_model("models/stage/stage.obj", true)?;
		stage.translate(vec3(0.0, 0.55, -30.0));
		stage.grow(Vec3::splat(0.336));
		stage.rotate(vec3(0.0, PI, 0.0));
		scene.add_root(stage); // 4

		let mut office = assets.load_model("models/office/office.obj", true)?;
		office.translate(vec3(0.0, -0.5, 4.5));
		scene.add_root(office); // 5

		// Both doors start open (raised).
		let mut right_door_node = assets.load_model("models/door/door.obj", true)?;
		right_door_node.translate(RIGHT_DOOR_OPEN);
		right_door_node.grow(Vec3::splat(0.2));
		scene.add_root(right_door_node); // 6 = RIGHT_DOOR

		let mut left_door_node = assets.load_model("models/door/door.obj", true)?;
		left_door_node.translate(LEFT_DOOR_OPEN);
		left_door_node.grow(Vec3::splat(0.2));
		scene.add_root(left_door_node); // 7 = LEFT_DOOR

		let mut alcove = assets.load_model("models/alcove/alcove.obj", true)?;
		alcove.translate(vec3(-9.0, -0.8, -28.0));
		alcove.grow(Vec3::splat(0.84));
		alcove.rotate(vec3(0.0, 5.0 * FRAC_PI_4, 0.0));
		scene.add_root(alcove); // 8

		// The monitor: a quad textured with the offscreen feed, mirrored
		// with a negative X scale so the picture reads correctly after
		// the half-turn about Z.
		let monitor_mesh = assets.insert_mesh(MeshData::quad(Some(TextureRef::OffscreenColor)));
		let mut monitor = SpatialNode::from_meshes(vec![monitor_mesh]);
		monitor.translate(vec3(0.25, 0.1, 3.85));
		monitor.grow(vec3(-0.5, 0.5, 0.5));
		monitor.rotate(vec3(0.0, 0.0, PI));
		scene.add_root(monitor); // 9

		let right = NodePath::root(RIGHT_DOOR);
		let left = NodePath::root(LEFT_DOOR);

		let mut animator = Animator::new();
		animator.add_animation(Animation::translation(
			right.clone(),
			DOOR_DROP_SECS,
			vec3(0.0, -DOOR_TRAVEL, 0.0),
		));
		let right_lower = scene.add_animator(animator); // 0

		let mut animator = Animator::new();
		animator.add_animation(Animation::translation(
			left.clone(),
			DOOR_DROP_SECS,
			vec3(0.0, -DOOR_TRAVEL, 0.0),
		));
		let left_lower = scene.add_animator(animator); // 1

		let mut animator = Animator::new();
		animator.add_animation(Animation::translation(
			right.clone(),
			DOOR_RAISE_SECS,
			vec3(0.0, DOOR_TRAVEL, 0.0),
		));
		let right_raise = scene.add_animator(animator); // 2

		let mut animator = Animator::new();
		animator.add_animation(Animation::translation(
			left.clone(),
			DOOR_RAISE_SECS,
			vec3(0.0, DOOR_TRAVEL, 0.0),
		));
		let left_raise = scene.add_animator(animator); // 3

		let right_door = Door::new(right, right_lower, right_raise, RIGHT_DOOR_OPEN, RIGHT_DOOR_CLOSED);
		let left_door = Door::new(left, left_lower, left_raise, LEFT_DOOR_OPEN, LEFT_DOOR_CLOSED);

		let prowler = Prowler::new(
			NodePath::root(PROWLER),
			FIRST_RUN_AT,
			PROWLER_SPAWN_POS,
			PROWLER_SPAWN_ROT,
		);

		let feeds = SecurityFeed::new(
			vec![
				// Stage
				Camera {
					position: vec3(0.0, 1.0, -28.0),
					forward: vec3(0.0, 0.0, -1.0),
					up: Vec3::Y,
				},
				// Alcove
				Camera {
					position: vec3(-9.0, 0.6, -27.15),
					forward: vec3(-1.0, 0.0, -1.0),
					up: Vec3::Y,
				},
				// Hall
				Camera {
					position: vec3(-1.0, 0.7, 3.0),
					forward: vec3(-1.0, 0.0, -1.0),
					up: Vec3::Y,
				},
			],
			Sweep::new(-FRAC_PI_2, -FRAC_PI_4, FRAC_PI_8, -3.0 * FRAC_PI_4, -FRAC_PI_4),
		);

		info!(roots = scene.root_count(), "office level assembled");

		Ok(Self {
			scene,
			assets,
			feeds,
			left_door,
			right_door,
			prowler,
		})
	}

	/// One frame of scripted logic and animation, before rendering:
	/// chase, camera sweep, animator ticking, then the door clamps so no
	/// slide ever leaves its rails.
	pub fn advance(&mut self, elapsed: f32, dt: f32) {
		self.prowler
			.update(&mut self.scene, self.left_door.is_closed(), elapsed, dt);
		self.feeds.update(dt);
		self.scene.tick(dt);
		self.left_door.clamp(&mut self.scene);
		self.right_door.clamp(&mut self.scene);
	}

	pub fn toggle_left_door(&mut self) {
		self.left_door.toggle(&mut self.scene);
	}

	pub fn toggle_right_door(&mut self) {
		self.right_door.toggle(&mut self.scene);
	}
}
