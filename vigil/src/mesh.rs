use glam::{vec2, vec3, Vec2, Vec3};

use crate::texture::TextureId;

/// Handle into the mesh list of an [`Assets`](crate::assets::Assets) store.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MeshId(pub(crate) usize);

impl MeshId {
	pub fn raw(&self) -> usize {
		self.0
	}
}

/// Where a mesh's base color comes from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TextureRef {
	/// A decoded image in the asset store.
	Image(TextureId),
	/// The color buffer of the offscreen security pass. Must only be
	/// sampled after that pass has been drawn for the frame.
	OffscreenColor,
}

/// CPU-side triangle mesh. Uploaded once by the render backend; the scene
/// graph only ever refers to it through a [`MeshId`].
pub struct MeshData {
	pub positions: Vec<Vec3>,
	pub normals: Vec<Vec3>,
	pub uvs: Vec<Vec2>,
	pub indices: Vec<u32>,
	pub texture: Option<TextureRef>,
}

impl MeshData {
	/// Unit square in the XY plane, facing +Z, centered on the origin.
	pub fn quad(texture: Option<TextureRef>) -> Self {
		Self {
			positions: vec![
				vec3(-0.5, -0.5, 0.0),
				vec3(0.5, -0.5, 0.0),
				vec3(0.5, 0.5, 0.0),
				vec3(-0.5, 0.5, 0.0),
			],
			normals: vec![Vec3::Z; 4],
			uvs: vec![
				vec2(0.0, 1.0),
				vec2(1.0, 1.0),
				vec2(1.0, 0.0),
				vec2(0.0, 0.0),
			],
			indices: vec![0, 1, 2, 0, 2, 3],
			texture,
		}
	}
}
