use std::path::{Path, PathBuf};

use image::{DynamicImage, RgbaImage};
use log::debug;
use quicksilver::geom::Vector;
use quicksilver::graphics::{Image, PixelFormat};
use thiserror::Error;

pub const AVATAR_PATH: &str = "static/bird.png";
pub const SEGMENT_PATH: &str = "static/block.png";
/// Hot pink is transparent in sprites that carry no alpha channel.
pub const COLOR_KEY: [u8; 3] = [255, 0, 255];

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to load sprite {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("obstacle segment {} must be square, found {width}x{height}", .path.display())]
    NotSquare {
        path: PathBuf,
        width: u32,
        height: u32,
    },
}

/// Decoded RGBA pixels, kept on the CPU until a GL context exists.
#[derive(Clone, Debug)]
pub struct SpriteData {
    pixels: RgbaImage,
}

impl SpriteData {
    pub fn load(path: impl AsRef<Path>, color_key: Option<[u8; 3]>) -> Result<SpriteData, AssetError> {
        let path = path.as_ref();
        let decoded = image::open(path).map_err(|source| AssetError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        let sprite = SpriteData::from_image(decoded, color_key);
        debug!("loaded {} ({}x{})", path.display(), sprite.width(), sprite.height());
        Ok(sprite)
    }

    /// The colour key only applies when the source has no alpha channel of
    /// its own.
    pub fn from_image(image: DynamicImage, color_key: Option<[u8; 3]>) -> SpriteData {
        let keyed = !image.color().has_alpha();
        let mut pixels = image.to_rgba8();
        if let (true, Some(key)) = (keyed, color_key) {
            for pixel in pixels.pixels_mut() {
                if pixel.0[..3] == key {
                    pixel.0[3] = 0;
                }
            }
        }
        SpriteData { pixels }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn size(&self) -> Vector {
        Vector::new(self.width() as f32, self.height() as f32)
    }

    pub fn is_square(&self) -> bool {
        self.width() == self.height()
    }

    pub fn upload(&self) -> quicksilver::Result<Image> {
        Image::from_raw(self.pixels.as_raw(), self.width(), self.height(), PixelFormat::RGBA)
    }
}

/// Both sprites the game needs, decoded and validated.
#[derive(Clone, Debug)]
pub struct Assets {
    pub avatar: SpriteData,
    pub segment: SpriteData,
}

impl Assets {
    pub fn load() -> Result<Assets, AssetError> {
        Assets::load_from(AVATAR_PATH, SEGMENT_PATH)
    }

    pub fn load_from(avatar: impl AsRef<Path>, segment: impl AsRef<Path>) -> Result<Assets, AssetError> {
        let avatar = SpriteData::load(avatar, Some(COLOR_KEY))?;
        let segment_path = segment.as_ref();
        let segment = SpriteData::load(segment_path, None)?;
        if !segment.is_square() {
            return Err(AssetError::NotSquare {
                path: segment_path.to_path_buf(),
                width: segment.width(),
                height: segment.height(),
            });
        }
        Ok(Assets { avatar, segment })
    }

    pub fn segment_size(&self) -> f32 {
        self.segment.width() as f32
    }
}
