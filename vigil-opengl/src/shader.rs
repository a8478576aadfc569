use std::ops::Deref;

use glam::{Mat4, Vec3, Vec4};
use glow::HasContext;
use tracing::debug;

#[derive(thiserror::Error, Debug)]
#[error("Could not compile shader: {0}")]
pub struct ShaderCompileError(String);

/// Compiles a shader program composed of a vertex and fragment shader.
pub(crate) fn compile(gl: &glow::Context, vertex: &str, fragment: &str) -> Result<glow::Program, ShaderCompileError> {
	unsafe {
		let program = gl.create_program().map_err(ShaderCompileError)?;

		let shader = gl.create_shader(glow::VERTEX_SHADER).map_err(ShaderCompileError)?;
		gl.shader_source(shader, vertex);
		gl.compile_shader(shader);
		verify_shader(gl, shader)?;
		gl.attach_shader(program, shader);

		let shader = gl.create_shader(glow::FRAGMENT_SHADER).map_err(ShaderCompileError)?;
		gl.shader_source(shader, fragment);
		gl.compile_shader(shader);
		verify_shader(gl, shader)?;
		gl.attach_shader(program, shader);

		gl.link_program(program);
		verify_program(gl, program)?;

		Ok(program)
	}
}

unsafe fn verify_shader(gl: &glow::Context, shader: glow::Shader) -> Result<(), ShaderCompileError> {
	if gl.get_shader_compile_status(shader) {
		Ok(())
	} else {
		Err(ShaderCompileError(gl.get_shader_info_log(shader)))
	}
}

unsafe fn verify_program(gl: &glow::Context, program: glow::Program) -> Result<(), ShaderCompileError> {
	if gl.get_program_link_status(program) {
		Ok(())
	} else {
		Err(ShaderCompileError(gl.get_program_info_log(program)))
	}
}

const SCENE_VERT: &str = include_str!("shaders/scene.vert");
const SCENE_FRAG: &str = include_str!("shaders/scene.frag");

/// The one program both render passes use: perspective transform plus a
/// directional light over a textured, tintable surface.
pub struct SceneShader {
	program: glow::Program,
	u_model: Option<glow::UniformLocation>,
	u_view: Option<glow::UniformLocation>,
	u_projection: Option<glow::UniformLocation>,
	u_camera_pos: Option<glow::UniformLocation>,
	u_material: Option<glow::UniformLocation>,
	u_directional_light: Option<glow::UniformLocation>,
	u_directional_color: Option<glow::UniformLocation>,
	u_ambient_color: Option<glow::UniformLocation>,
	u_base_texture: Option<glow::UniformLocation>,
}

impl Deref for SceneShader {
	type Target = glow::Program;

	fn deref(&self) -> &Self::Target {
		&self.program
	}
}

impl SceneShader {
	pub fn new(gl: &glow::Context) -> Result<Self, ShaderCompileError> {
		debug!("Compiling scene shader");
		let program = compile(gl, SCENE_VERT, SCENE_FRAG)?;

		Ok(Self {
			program,
			u_model: unsafe { gl.get_uniform_location(program, "model") },
			u_view: unsafe { gl.get_uniform_location(program, "view") },
			u_projection: unsafe { gl.get_uniform_location(program, "projection") },
			u_camera_pos: unsafe { gl.get_uniform_location(program, "cameraPos") },
			u_material: unsafe { gl.get_uniform_location(program, "material") },
			u_directional_light: unsafe { gl.get_uniform_location(program, "directionalLight") },
			u_directional_color: unsafe { gl.get_uniform_location(program, "directionalColor") },
			u_ambient_color: unsafe { gl.get_uniform_location(program, "ambientColor") },
			u_base_texture: unsafe { gl.get_uniform_location(program, "baseTexture") },
		})
	}

	/// Sets the `model` uniform of the shader.
	#[inline]
	pub fn set_model(&self, gl: &glow::Context, model: Mat4) {
		unsafe { gl.uniform_matrix_4_f32_slice(self.u_model.as_ref(), false, model.as_ref()) };
	}

	/// Sets the `view` uniform of the shader.
	#[inline]
	pub fn set_view(&self, gl: &glow::Context, view: Mat4) {
		unsafe { gl.uniform_matrix_4_f32_slice(self.u_view.as_ref(), false, view.as_ref()) };
	}

	/// Sets the `projection` uniform of the shader.
	#[inline]
	pub fn set_projection(&self, gl: &glow::Context, projection: Mat4) {
		unsafe { gl.uniform_matrix_4_f32_slice(self.u_projection.as_ref(), false, projection.as_ref()) };
	}

	/// Sets the `cameraPos` uniform of the shader.
	#[inline]
	pub fn set_camera_pos(&self, gl: &glow::Context, camera_pos: Vec3) {
		unsafe { gl.uniform_3_f32_slice(self.u_camera_pos.as_ref(), camera_pos.as_ref()) };
	}

	/// Sets the `material` uniform of the shader.
	#[inline]
	pub fn set_material(&self, gl: &glow::Context, material: Vec4) {
		unsafe { gl.uniform_4_f32_slice(self.u_material.as_ref(), material.as_ref()) };
	}

	/// Sets the `directionalLight` uniform of the shader.
	#[inline]
	pub fn set_directional_light(&self, gl: &glow::Context, direction: Vec3) {
		unsafe { gl.uniform_3_f32_slice(self.u_directional_light.as_ref(), direction.as_ref()) };
	}

	/// Sets the `directionalColor` uniform of the shader.
	#[inline]
	pub fn set_directional_color(&self, gl: &glow::Context, color: Vec3) {
		unsafe { gl.uniform_3_f32_slice(self.u_directional_color.as_ref(), color.as_ref()) };
	}

	/// Sets the `ambientColor` uniform of the shader.
	#[inline]
	pub fn set_ambient_color(&self, gl: &glow::Context, color: Vec3) {
		unsafe { gl.uniform_3_f32_slice(self.u_ambient_color.as_ref(), color.as_ref()) };
	}

	/// Sets the `baseTexture` sampler slot of the shader.
	#[inline]
	pub fn set_base_texture(&self, gl: &glow::Context, slot: i32) {
		unsafe { gl.uniform_1_i32(self.u_base_texture.as_ref(), slot) };
	}
}
