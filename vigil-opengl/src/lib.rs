mod mesh;
mod shader;
mod target;
mod texture;

use glam::{uvec2, vec2, Mat4, UVec2, Vec4};
use glow::HasContext;
use tracing::debug;

use vigil::assets::Assets;
use vigil::math::camera::{perspective, Camera};
use vigil::mesh::{MeshId, TextureRef};
use vigil::render::{Lighting, MeshRenderer};
use vigil::scene::Scene;

use self::mesh::GlMesh;
use self::shader::{SceneShader, ShaderCompileError};
use self::target::RenderTarget;
use self::texture::{Texture, TextureError};

/// Resolution of the offscreen security feed.
const FEED_SIZE: u32 = 256;

#[derive(Debug, thiserror::Error)]
#[error("Could not initialize OpenGL renderer: {0}")]
pub enum RendererError {
	ShaderCompile(#[from] ShaderCompileError),
	Texture(#[from] TextureError),
	Opengl(String),
}

/// OpenGL renderer for a [`Scene`].
///
/// Each frame draws two passes over the same object list: first
/// [`render_feed`](OpenglRenderer::render_feed) into the offscreen target,
/// then [`render_main`](OpenglRenderer::render_main) to the window. The
/// order matters: the monitor mesh samples the feed's color buffer, so the
/// feed pass must be complete before the main pass draws it.
pub struct OpenglRenderer {
	gl: glow::Context,
	shader: SceneShader,
	viewport: UVec2,
	feed: RenderTarget,
	meshes: Vec<GlMesh>,
	textures: Vec<Texture>,
	fallback: Texture,
	default_material: Vec4,
}

impl OpenglRenderer {
	pub fn new(gl: glow::Context) -> Result<Self, RendererError> {
		let shader = SceneShader::new(&gl)?;
		let feed = RenderTarget::new(&gl, FEED_SIZE, FEED_SIZE)?;
		let fallback = Texture::white(&gl)?;

		unsafe {
			gl.enable(glow::DEPTH_TEST);
		}

		Ok(Self {
			gl,
			shader,
			viewport: UVec2::ZERO,
			feed,
			meshes: Vec::new(),
			textures: Vec::new(),
			fallback,
			default_material: Vec4::ONE,
		})
	}

	/// Uploads every mesh and texture in `assets`. Call once, after scene
	/// construction and before the first frame.
	pub fn upload(&mut self, assets: &Assets) -> Result<(), RendererError> {
		for data in assets.textures() {
			self.textures.push(Texture::from_data(&self.gl, data)?);
		}
		for data in assets.meshes() {
			self.meshes.push(GlMesh::upload(&self.gl, data)?);
		}
		debug!(
			meshes = self.meshes.len(),
			textures = self.textures.len(),
			"uploaded scene assets"
		);
		Ok(())
	}

	pub fn resize(&mut self, width: u32, height: u32) {
		self.viewport = uvec2(width, height);
	}

	/// Draws `scene` from `camera` into the offscreen feed target.
	pub fn render_feed(&mut self, scene: &Scene, camera: &Camera, lighting: &Lighting) {
		self.feed.bind(&self.gl);
		self.clear();
		let (w, h) = self.feed.size();
		self.draw_scene(scene, camera, lighting, uvec2(w, h));
		RenderTarget::unbind(&self.gl);
	}

	/// Draws `scene` from `camera` to the default framebuffer. The feed
	/// pass must already have run this frame for the monitor to show a
	/// current picture.
	pub fn render_main(&mut self, scene: &Scene, camera: &Camera, lighting: &Lighting) {
		unsafe {
			self.gl.viewport(0, 0, self.viewport.x as i32, self.viewport.y as i32);
		}
		self.clear();
		self.draw_scene(scene, camera, lighting, self.viewport);
	}

	fn clear(&self) {
		unsafe {
			self.gl.clear_color(0.0, 0.0, 0.0, 1.0);
			self.gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
		}
	}

	fn draw_scene(&mut self, scene: &Scene, camera: &Camera, lighting: &Lighting, viewport: UVec2) {
		let gl = &self.gl;
		unsafe {
			gl.use_program(Some(*self.shader));
		}

		self.shader.set_view(gl, camera.view());
		self.shader
			.set_projection(gl, perspective(vec2(viewport.x as f32, viewport.y as f32)));
		self.shader.set_camera_pos(gl, camera.position);
		self.shader.set_directional_light(gl, lighting.direction);
		self.shader.set_directional_color(gl, lighting.directional_color);
		self.shader.set_ambient_color(gl, lighting.ambient_color);
		self.shader.set_base_texture(gl, 0);

		scene.render(self);
	}
}

impl MeshRenderer for OpenglRenderer {
	fn draw_mesh(&mut self, mesh: MeshId, world: Mat4, material: Option<Vec4>) {
		let gl = &self.gl;
		let mesh = &self.meshes[mesh.raw()];

		self.shader.set_model(gl, world);
		self.shader
			.set_material(gl, material.unwrap_or(self.default_material));

		match mesh.texture() {
			Some(TextureRef::Image(id)) => self.textures[id.raw()].bind_on(gl, 0),
			Some(TextureRef::OffscreenColor) => unsafe {
				gl.active_texture(glow::TEXTURE0);
				gl.bind_texture(glow::TEXTURE_2D, Some(self.feed.color()));
			},
			None => self.fallback.bind_on(gl, 0),
		}

		mesh.draw(gl);
	}
}
