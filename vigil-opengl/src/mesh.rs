use glow::HasContext;

use vigil::mesh::{MeshData, TextureRef};

use super::RendererError;

/// Create and BIND an OpenGL buffer and upload data.
///
/// # Safety
///
/// `target` and `usage` must be valid OpenGL constants.
unsafe fn upload_array_to_gl<T>(
	gl: &glow::Context,
	array: &[T],
	target: u32,
	usage: u32,
) -> Result<glow::Buffer, RendererError> {
	// Safety:
	// - array is already a &[T], satisfying all pointer and size requirements.
	// - data only accessed immutably in this function, satisfying lifetime requirements.
	let bytes: &[u8] = core::slice::from_raw_parts(array.as_ptr() as *const u8, std::mem::size_of_val(array));
	let buffer = gl.create_buffer().map_err(RendererError::Opengl)?;
	gl.bind_buffer(target, Some(buffer));
	gl.buffer_data_u8_slice(target, bytes, usage);

	Ok(buffer)
}

/// A mesh resident on the GPU: one vertex array with position, normal and
/// uv attributes plus an element buffer.
pub struct GlMesh {
	vao: glow::VertexArray,
	index_count: i32,
	texture: Option<TextureRef>,
}

impl GlMesh {
	pub fn upload(gl: &glow::Context, mesh: &MeshData) -> Result<Self, RendererError> {
		unsafe {
			let vao = gl.create_vertex_array().map_err(RendererError::Opengl)?;
			gl.bind_vertex_array(Some(vao));

			upload_array_to_gl(gl, &mesh.positions, glow::ARRAY_BUFFER, glow::STATIC_DRAW)?;
			gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, 0, 0);
			gl.enable_vertex_attrib_array(0);

			upload_array_to_gl(gl, &mesh.normals, glow::ARRAY_BUFFER, glow::STATIC_DRAW)?;
			gl.vertex_attrib_pointer_f32(1, 3, glow::FLOAT, false, 0, 0);
			gl.enable_vertex_attrib_array(1);

			upload_array_to_gl(gl, &mesh.uvs, glow::ARRAY_BUFFER, glow::STATIC_DRAW)?;
			gl.vertex_attrib_pointer_f32(2, 2, glow::FLOAT, false, 0, 0);
			gl.enable_vertex_attrib_array(2);

			upload_array_to_gl(gl, &mesh.indices, glow::ELEMENT_ARRAY_BUFFER, glow::STATIC_DRAW)?;

			gl.bind_vertex_array(None);

			Ok(Self {
				vao,
				index_count: mesh.indices.len() as i32,
				texture: mesh.texture,
			})
		}
	}

	pub fn texture(&self) -> Option<TextureRef> {
		self.texture
	}

	pub fn draw(&self, gl: &glow::Context) {
		unsafe {
			gl.bind_vertex_array(Some(self.vao));
			gl.draw_elements(glow::TRIANGLES, self.index_count, glow::UNSIGNED_INT, 0);
		}
	}
}
