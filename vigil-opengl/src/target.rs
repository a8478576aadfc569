use glow::HasContext;

use super::RendererError;

/// Offscreen framebuffer the security pass renders into: an RGBA8 color
/// attachment plus a depth texture. The color attachment is later sampled
/// by the monitor mesh, so it lives for the renderer's whole lifetime.
pub struct RenderTarget {
	framebuffer: glow::Framebuffer,
	color: glow::Texture,
	width: u32,
	height: u32,
}

impl RenderTarget {
	pub fn new(gl: &glow::Context, width: u32, height: u32) -> Result<Self, RendererError> {
		unsafe {
			let color = gl.create_texture().map_err(RendererError::Opengl)?;
			gl.bind_texture(glow::TEXTURE_2D, Some(color));
			gl.tex_image_2d(
				glow::TEXTURE_2D,
				0,
				glow::RGBA8 as i32,
				width as i32,
				height as i32,
				0,
				glow::RGBA,
				glow::UNSIGNED_BYTE,
				None,
			);
			gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MIN_FILTER, glow::NEAREST as i32);
			gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MAG_FILTER, glow::NEAREST as i32);

			let depth = gl.create_texture().map_err(RendererError::Opengl)?;
			gl.bind_texture(glow::TEXTURE_2D, Some(depth));
			gl.tex_image_2d(
				glow::TEXTURE_2D,
				0,
				glow::DEPTH_COMPONENT24 as i32,
				width as i32,
				height as i32,
				0,
				glow::DEPTH_COMPONENT,
				glow::FLOAT,
				None,
			);
			gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MIN_FILTER, glow::NEAREST as i32);
			gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MAG_FILTER, glow::NEAREST as i32);
			gl.bind_texture(glow::TEXTURE_2D, None);

			let framebuffer = gl.create_framebuffer().map_err(RendererError::Opengl)?;
			gl.bind_framebuffer(glow::FRAMEBUFFER, Some(framebuffer));
			gl.framebuffer_texture_2d(
				glow::FRAMEBUFFER,
				glow::COLOR_ATTACHMENT0,
				glow::TEXTURE_2D,
				Some(color),
				0,
			);
			gl.framebuffer_texture_2d(
				glow::FRAMEBUFFER,
				glow::DEPTH_ATTACHMENT,
				glow::TEXTURE_2D,
				Some(depth),
				0,
			);
			gl.bind_framebuffer(glow::FRAMEBUFFER, None);

			Ok(Self {
				framebuffer,
				color,
				width,
				height,
			})
		}
	}

	/// Binds the target and points the viewport at it.
	pub fn bind(&self, gl: &glow::Context) {
		unsafe {
			gl.bind_framebuffer(glow::FRAMEBUFFER, Some(self.framebuffer));
			gl.viewport(0, 0, self.width as i32, self.height as i32);
		}
	}

	/// Rebinds the default framebuffer.
	pub fn unbind(gl: &glow::Context) {
		unsafe {
			gl.bind_framebuffer(glow::FRAMEBUFFER, None);
		}
	}

	pub fn color(&self) -> glow::Texture {
		self.color
	}

	pub fn size(&self) -> (u32, u32) {
		(self.width, self.height)
	}
}
