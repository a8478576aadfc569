use glow::HasContext;

use vigil::texture::TextureData;

#[derive(thiserror::Error, Debug)]
#[error("Could not create texture: {0}")]
pub struct TextureError(String);

/// A GL texture uploaded from decoded RGBA8 pixels.
pub struct Texture {
	tex: glow::Texture,
	width: u32,
	height: u32,
}

impl Texture {
	pub fn from_data(gl: &glow::Context, data: &TextureData) -> Result<Self, TextureError> {
		Self::from_raw_pixels(gl, data.pixels(), data.width(), data.height())
	}

	/// A 1x1 white texture, bound for meshes that have no texture of
	/// their own so the material tint alone decides their color.
	pub fn white(gl: &glow::Context) -> Result<Self, TextureError> {
		Self::from_raw_pixels(gl, &[0xff, 0xff, 0xff, 0xff], 1, 1)
	}

	pub fn from_raw_pixels(gl: &glow::Context, pixels: &[u8], width: u32, height: u32) -> Result<Self, TextureError> {
		let tex = unsafe { gl.create_texture().map_err(TextureError)? };
		unsafe {
			gl.bind_texture(glow::TEXTURE_2D, Some(tex));
			gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MIN_FILTER, glow::LINEAR as i32);
			gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MAG_FILTER, glow::LINEAR as i32);
			gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_S, glow::REPEAT as i32);
			gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_T, glow::REPEAT as i32);
			gl.tex_image_2d(
				glow::TEXTURE_2D,
				0,
				glow::RGBA8 as i32,
				width as i32,
				height as i32,
				0,
				glow::RGBA,
				glow::UNSIGNED_BYTE,
				Some(pixels),
			);
			gl.bind_texture(glow::TEXTURE_2D, None);
		}

		Ok(Texture { tex, width, height })
	}

	pub fn bind_on(&self, gl: &glow::Context, slot: u32) {
		unsafe {
			gl.active_texture(glow::TEXTURE0 + slot);
			gl.bind_texture(glow::TEXTURE_2D, Some(self.tex));
		}
	}

	pub fn width(&self) -> u32 {
		self.width
	}

	pub fn height(&self) -> u32 {
		self.height
	}
}
