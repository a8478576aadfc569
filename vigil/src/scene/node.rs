use glam::{Mat4, Vec3, Vec4};

use crate::math::transform::Transform;
use crate::mesh::MeshId;
use crate::render::MeshRenderer;

/// A node in the scene's transform hierarchy.
///
/// A node stores only its local transform; world transforms are composed
/// parents-first during [`render`](SpatialNode::render). Animating a parent
/// therefore carries every descendant along without the descendants knowing
/// about it.
#[derive(Default)]
pub struct SpatialNode {
	transform: Transform,
	material: Option<Vec4>,
	meshes: Vec<MeshId>,
	children: Vec<SpatialNode>,
}

impl SpatialNode {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn from_meshes(meshes: Vec<MeshId>) -> Self {
		Self {
			meshes,
			..Default::default()
		}
	}

	pub fn add_mesh(&mut self, mesh: MeshId) {
		self.meshes.push(mesh);
	}

	/// Adds `delta` to the local position.
	pub fn translate(&mut self, delta: Vec3) {
		self.transform.translation += delta;
	}

	/// Component-wise multiplies the local scale by `factor`.
	pub fn grow(&mut self, factor: Vec3) {
		self.transform.scale *= factor;
	}

	/// Adds `delta` to the local Euler orientation (X-Y-Z composition
	/// order, see [`Transform`]).
	pub fn rotate(&mut self, delta: Vec3) {
		self.transform.rotation += delta;
	}

	pub fn set_position(&mut self, position: Vec3) {
		self.transform.translation = position;
	}

	pub fn set_orientation(&mut self, orientation: Vec3) {
		self.transform.rotation = orientation;
	}

	pub fn position(&self) -> Vec3 {
		self.transform.translation
	}

	pub fn orientation(&self) -> Vec3 {
		self.transform.rotation
	}

	/// Sets a base color applied to every mesh owned directly by this
	/// node. Children are unaffected and keep the renderer's default.
	pub fn set_material(&mut self, color: Vec4) {
		self.material = Some(color);
	}

	pub fn material(&self) -> Option<Vec4> {
		self.material
	}

	/// Transfers ownership of `child` into this node's child list.
	///
	/// The child's accumulated local transform is preserved as-is; it is
	/// not re-baked relative to the new parent, so its world position
	/// becomes `parent world transform * child local transform`.
	pub fn add_child(&mut self, child: SpatialNode) {
		self.children.push(child);
	}

	pub fn child_count(&self) -> usize {
		self.children.len()
	}

	/// Panics if `index` is out of bounds; child indices are call-site
	/// constants, not user input.
	pub fn child(&self, index: usize) -> &SpatialNode {
		match self.children.get(index) {
			Some(child) => child,
			None => panic!(
				"child index {index} out of bounds for node with {} children",
				self.children.len()
			),
		}
	}

	/// Mutable variant of [`child`](SpatialNode::child). Panics if `index`
	/// is out of bounds.
	pub fn child_mut(&mut self, index: usize) -> &mut SpatialNode {
		let count = self.children.len();
		match self.children.get_mut(index) {
			Some(child) => child,
			None => panic!("child index {index} out of bounds for node with {count} children"),
		}
	}

	pub fn local_matrix(&self) -> Mat4 {
		self.transform.to_matrix()
	}

	/// Recursively draws this subtree. Composes this node's local
	/// transform onto `parent`, emits one draw call per directly owned
	/// mesh, then recurses with the composed transform as the children's
	/// parent transform.
	pub fn render<R: MeshRenderer>(&self, parent: Mat4, renderer: &mut R) {
		let world = parent * self.transform.to_matrix();
		for &mesh in &self.meshes {
			renderer.draw_mesh(mesh, world, self.material);
		}
		for child in &self.children {
			child.render(world, renderer);
		}
	}
}

/// Index address of a node inside a [`Scene`](crate::scene::Scene): a root
/// index plus a path of child indices. Lets animations and game logic keep
/// referring to a node after ownership has moved into the scene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodePath {
	root: usize,
	steps: Vec<usize>,
}

impl NodePath {
	pub fn root(index: usize) -> Self {
		Self {
			root: index,
			steps: Vec::new(),
		}
	}

	/// Extends the path one level down.
	pub fn child(mut self, index: usize) -> Self {
		self.steps.push(index);
		self
	}

	/// Panics if the path does not address a live node.
	pub(crate) fn resolve_mut<'a>(&self, roots: &'a mut [SpatialNode]) -> &'a mut SpatialNode {
		let count = roots.len();
		let mut node = match roots.get_mut(self.root) {
			Some(node) => node,
			None => panic!("root index {} out of bounds for scene with {count} roots", self.root),
		};
		for &step in &self.steps {
			node = node.child_mut(step);
		}
		node
	}
}
