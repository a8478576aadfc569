mod node;

pub use node::{NodePath, SpatialNode};

use glam::Mat4;

use crate::anim::Animator;
use crate::render::{Lighting, MeshRenderer};

/// Everything that makes up one level: a forest of root nodes, the
/// animators that drive them, and the scene's light uniforms.
///
/// Roots and animators are addressed by the index returned at insertion;
/// runtime control code (door toggles, the chase script) relies on those
/// indices staying fixed for the life of the scene.
#[derive(Default)]
pub struct Scene {
	pub lighting: Lighting,
	roots: Vec<SpatialNode>,
	animators: Vec<Animator>,
}

impl Scene {
	pub fn new() -> Self {
		Self::default()
	}

	/// Moves `node` into the scene and returns its root index.
	pub fn add_root(&mut self, node: SpatialNode) -> usize {
		self.roots.push(node);
		self.roots.len() - 1
	}

	pub fn root_count(&self) -> usize {
		self.roots.len()
	}

	/// Panics if `index` is out of bounds.
	pub fn root(&self, index: usize) -> &SpatialNode {
		match self.roots.get(index) {
			Some(root) => root,
			None => panic!("root index {index} out of bounds for scene with {} roots", self.roots.len()),
		}
	}

	/// Mutable variant of [`root`](Scene::root). Panics if `index` is out
	/// of bounds.
	pub fn root_mut(&mut self, index: usize) -> &mut SpatialNode {
		let count = self.roots.len();
		match self.roots.get_mut(index) {
			Some(root) => root,
			None => panic!("root index {index} out of bounds for scene with {count} roots"),
		}
	}

	/// Resolves a node path anywhere in the forest. Panics if the path is
	/// dangling.
	pub fn node_mut(&mut self, path: &NodePath) -> &mut SpatialNode {
		path.resolve_mut(&mut self.roots)
	}

	/// Moves `animator` into the scene and returns its index.
	pub fn add_animator(&mut self, animator: Animator) -> usize {
		self.animators.push(animator);
		self.animators.len() - 1
	}

	pub fn animator(&self, index: usize) -> &Animator {
		match self.animators.get(index) {
			Some(animator) => animator,
			None => panic!("animator index {index} out of bounds for scene with {} animators", self.animators.len()),
		}
	}

	/// Restarts the animator at `index` from the head of its queue.
	pub fn start_animator(&mut self, index: usize) {
		let count = self.animators.len();
		match self.animators.get_mut(index) {
			Some(animator) => animator.start(),
			None => panic!("animator index {index} out of bounds for scene with {count} animators"),
		}
	}

	/// Advances every animator by `dt` seconds. Dormant and exhausted
	/// animators tick as no-ops.
	pub fn tick(&mut self, dt: f32) {
		let Self { roots, animators, .. } = self;
		for animator in animators.iter_mut() {
			animator.tick(dt, roots);
		}
	}

	/// Draws every root subtree into `renderer`.
	pub fn render<R: MeshRenderer>(&self, renderer: &mut R) {
		for root in &self.roots {
			root.render(Mat4::IDENTITY, renderer);
		}
	}
}
