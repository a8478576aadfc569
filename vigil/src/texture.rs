use std::path::Path;

use image::ImageError;
use tracing::debug;

/// Handle into the texture list of an [`Assets`](crate::assets::Assets) store.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TextureId(pub(crate) usize);

impl TextureId {
	pub fn raw(&self) -> usize {
		self.0
	}
}

#[derive(Debug, thiserror::Error)]
#[error("Could not load texture: {0}")]
pub struct TextureLoadError(#[from] ImageError);

/// Decoded RGBA8 pixel data, ready for upload by a render backend.
pub struct TextureData {
	pixels: Vec<u8>,
	width: u32,
	height: u32,
}

impl TextureData {
	/// Decodes the image at `path` into RGBA8.
	pub fn open(path: impl AsRef<Path>) -> Result<Self, TextureLoadError> {
		let path = path.as_ref();
		debug!("Decoding texture {}", path.display());
		let rgba = image::open(path)?.into_rgba8();
		Ok(Self {
			width: rgba.width(),
			height: rgba.height(),
			pixels: rgba.into_raw(),
		})
	}

	pub fn pixels(&self) -> &[u8] {
		&self.pixels
	}

	pub fn width(&self) -> u32 {
		self.width
	}

	pub fn height(&self) -> u32 {
		self.height
	}
}
