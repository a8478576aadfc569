use std::collections::HashMap;
use std::path::{Path, PathBuf};

use glam::{vec2, vec3, Vec2, Vec3};
use tracing::{info, warn};

use crate::mesh::{MeshData, MeshId, TextureRef};
use crate::scene::SpatialNode;
use crate::texture::{TextureData, TextureId, TextureLoadError};

#[derive(Debug, thiserror::Error)]
pub enum ModelLoadError {
	#[error("Could not load model: {0}")]
	Obj(#[from] tobj::LoadError),
	#[error(transparent)]
	Texture(#[from] TextureLoadError),
}

/// CPU-side mesh and texture storage, shared by every model in a scene.
///
/// Loads accumulate: scene construction imports any number of models into
/// one store, then the render backend uploads the whole store once.
/// Diffuse textures are decoded once per path, however many meshes share
/// them.
#[derive(Default)]
pub struct Assets {
	meshes: Vec<MeshData>,
	textures: Vec<TextureData>,
	texture_paths: HashMap<PathBuf, TextureId>,
}

impl Assets {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert_mesh(&mut self, mesh: MeshData) -> MeshId {
		self.meshes.push(mesh);
		MeshId(self.meshes.len() - 1)
	}

	pub fn insert_texture(&mut self, texture: TextureData) -> TextureId {
		self.textures.push(texture);
		TextureId(self.textures.len() - 1)
	}

	pub fn meshes(&self) -> &[MeshData] {
		&self.meshes
	}

	pub fn textures(&self) -> &[TextureData] {
		&self.textures
	}

	/// Imports a Wavefront OBJ and returns a node owning one mesh per OBJ
	/// group, with each group's diffuse texture resolved relative to the
	/// OBJ's directory.
	///
	/// `flip_v` flips the V texture coordinate for assets authored with
	/// the origin in the lower-left corner. If a model renders with
	/// scrambled textures, try the other value.
	pub fn load_model(&mut self, path: impl AsRef<Path>, flip_v: bool) -> Result<SpatialNode, ModelLoadError> {
		let path = path.as_ref();
		info!("Loading model {}", path.display());

		let (models, materials) = tobj::load_obj(
			path,
			&tobj::LoadOptions {
				triangulate: true,
				single_index: true,
				..Default::default()
			},
		)?;
		let materials = match materials {
			Ok(materials) => materials,
			Err(e) => {
				warn!("No materials for {}: {e}", path.display());
				Vec::new()
			}
		};
		let base_dir = path.parent().unwrap_or(Path::new("."));

		let mut node = SpatialNode::new();
		for model in models {
			let mesh = model.mesh;

			let texture = match mesh.material_id.and_then(|id| materials.get(id)) {
				Some(material) => match &material.diffuse_texture {
					Some(texture) => Some(TextureRef::Image(self.load_texture(base_dir.join(texture))?)),
					None => None,
				},
				None => None,
			};

			let vertex_count = mesh.positions.len() / 3;
			let positions: Vec<Vec3> = mesh
				.positions
				.chunks_exact(3)
				.map(|p| vec3(p[0], p[1], p[2]))
				.collect();
			let normals: Vec<Vec3> = if mesh.normals.is_empty() {
				vec![Vec3::Y; vertex_count]
			} else {
				mesh.normals.chunks_exact(3).map(|n| vec3(n[0], n[1], n[2])).collect()
			};
			let uvs: Vec<Vec2> = if mesh.texcoords.is_empty() {
				vec![Vec2::ZERO; vertex_count]
			} else {
				mesh.texcoords
					.chunks_exact(2)
					.map(|t| vec2(t[0], if flip_v { 1.0 - t[1] } else { t[1] }))
					.collect()
			};

			let id = self.insert_mesh(MeshData {
				positions,
				normals,
				uvs,
				indices: mesh.indices,
				texture,
			});
			node.add_mesh(id);
		}

		Ok(node)
	}

	fn load_texture(&mut self, path: PathBuf) -> Result<TextureId, TextureLoadError> {
		if let Some(&id) = self.texture_paths.get(&path) {
			return Ok(id);
		}
		let id = self.insert_texture(TextureData::open(&path)?);
		self.texture_paths.insert(path, id);
		Ok(id)
	}
}
