//! Texture decoding into CPU-side pixel data.
//! Images with an alpha channel decode to RGBA8, everything else to RGB8.

use std::path::Path;

use crate::error::TextureError;

/// Texture data in CPU-friendly format before GPU upload.
#[derive(Clone, Debug)]
pub struct TextureData {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub format: TextureFormat,
}

/// Supported texture formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextureFormat {
    Rgb8,
    Rgba8,
}

impl TextureFormat {
    pub fn from_channels(channels: u8) -> Result<Self, TextureError> {
        match channels {
            1..=3 => Ok(Self::Rgb8),
            4 => Ok(Self::Rgba8),
            other => Err(TextureError::UnsupportedChannels(other)),
        }
    }

    pub fn bytes_per_pixel(self) -> usize {
        match self {
            Self::Rgb8 => 3,
            Self::Rgba8 => 4,
        }
    }
}

impl TextureData {
    pub fn new(
        width: u32,
        height: u32,
        format: TextureFormat,
        data: Vec<u8>,
    ) -> Result<Self, TextureError> {
        let expected = width as usize * height as usize * format.bytes_per_pixel();
        if data.len() != expected {
            return Err(TextureError::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            format,
        })
    }

    /// Decode an image file. With `flip_vertically` the first row in memory is
    /// the bottom of the image, matching GL texture coordinates.
    pub fn load(path: impl AsRef<Path>, flip_vertically: bool) -> Result<Self, TextureError> {
        let path = path.as_ref();
        log::info!("Loading texture from {:?}", path);

        let mut img = image::open(path).map_err(|source| TextureError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        if flip_vertically {
            img = img.flipv();
        }

        let format = TextureFormat::from_channels(img.color().channel_count())?;
        let (width, height, data) = match format {
            TextureFormat::Rgba8 => {
                let rgba = img.to_rgba8();
                let (w, h) = rgba.dimensions();
                (w, h, rgba.into_raw())
            }
            TextureFormat::Rgb8 => {
                let rgb = img.to_rgb8();
                let (w, h) = rgb.dimensions();
                (w, h, rgb.into_raw())
            }
        };

        log::info!(
            "Loaded texture {}x{} ({:?}) with {} bytes",
            width,
            height,
            format,
            data.len()
        );

        Self::new(width, height, format, data)
    }

    /// Opaque checkerboard used when a texture file is missing.
    pub fn checkerboard(size: u32) -> Self {
        let mut data = Vec::with_capacity(size as usize * size as usize * 4);

        for y in 0..size {
            for x in 0..size {
                let v = if ((x / 8) + (y / 8)) % 2 == 0 { 255 } else { 128 };
                data.extend_from_slice(&[v, v, v, 255]);
            }
        }

        Self {
            data,
            width: size,
            height: size,
            format: TextureFormat::Rgba8,
        }
    }

    /// Row-major pixel at (x, y), `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<&[u8]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let bpp = self.format.bytes_per_pixel();
        let start = (y as usize * self.width as usize + x as usize) * bpp;
        self.data.get(start..start + bpp)
    }

    pub fn is_valid(&self) -> bool {
        let expected = self.width as usize * self.height as usize * self.format.bytes_per_pixel();
        self.data.len() == expected && self.width > 0 && self.height > 0
    }
}
