//! ICO/PNG encoding

use std::path::Path;

use super::raster::PixelBuffer;
use crate::assets::AssetSpec;
use crate::error::GenerateError;

/// Writes a pixel buffer to disk in the asset's container format,
/// replacing whatever is already at `path`
pub trait ImageWriter {
    fn write(&self, spec: &AssetSpec, pixels: PixelBuffer, path: &Path)
    -> Result<(), GenerateError>;
}

#[cfg(feature = "encode")]
pub use self::image_backend::ImageCrateWriter;

#[cfg(feature = "encode")]
mod image_backend {
    use std::path::Path;

    use image::{ImageFormat, RgbaImage};

    use super::ImageWriter;
    use crate::assets::{AssetFormat, AssetSpec};
    use crate::error::GenerateError;
    use crate::generate::raster::PixelBuffer;

    /// Encoder backed by the `image` crate
    #[derive(Debug, Default, Clone, Copy)]
    pub struct ImageCrateWriter;

    fn image_format(format: AssetFormat) -> ImageFormat {
        match format {
            AssetFormat::Ico => ImageFormat::Ico,
            AssetFormat::Png => ImageFormat::Png,
        }
    }

    impl ImageWriter for ImageCrateWriter {
        fn write(
            &self,
            spec: &AssetSpec,
            pixels: PixelBuffer,
            path: &Path,
        ) -> Result<(), GenerateError> {
            if pixels.size != spec.size {
                return Err(GenerateError::encode(
                    spec.file_name,
                    format!("rendered {} but expected {}", pixels.size, spec.size),
                ));
            }

            let actual_len = pixels.rgba.len();
            let PixelBuffer { size, rgba } = pixels;
            let img = RgbaImage::from_raw(size.width, size.height, rgba).ok_or_else(|| {
                GenerateError::encode(
                    spec.file_name,
                    format!(
                        "buffer holds {} bytes, {} needs {}",
                        actual_len,
                        size,
                        size.rgba_len()
                    ),
                )
            })?;

            img.save_with_format(path, image_format(spec.format))
                .map_err(|source| GenerateError::write(path, source))
        }
    }
}
