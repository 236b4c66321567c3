//! SVG rasterizing
//!
//! The resvg backend is only compiled with the `render` feature; without it
//! [`Toolchain::detect`](super::Toolchain::detect) reports the capability as
//! missing.

use crate::assets::{AssetSpec, PixelSize};
use crate::error::GenerateError;

/// Straight (non-premultiplied) RGBA8 pixels, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    pub size: PixelSize,
    pub rgba: Vec<u8>,
}

impl PixelBuffer {
    /// Fully transparent buffer
    pub fn transparent(size: PixelSize) -> Self {
        Self {
            size,
            rgba: vec![0; size.rgba_len()],
        }
    }

    /// RGBA of the pixel at (x, y)
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        let offset = (y as usize * self.size.width as usize + x as usize) * 4;
        let px = self.rgba.get(offset..offset + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// Turns an asset's markup into pixels at the asset's target size
pub trait Rasterizer {
    fn rasterize(&self, spec: &AssetSpec) -> Result<PixelBuffer, GenerateError>;
}

#[cfg(feature = "render")]
pub use self::resvg_backend::ResvgRasterizer;

#[cfg(feature = "render")]
mod resvg_backend {
    use std::path::Path;

    use resvg::{tiny_skia, usvg};
    use tracing::{debug, info, warn};

    use super::{PixelBuffer, Rasterizer};
    use crate::assets::{AssetSpec, PixelSize};
    use crate::error::GenerateError;
    use crate::settings::FontSettings;

    /// resvg renderer with a font database loaded once per run
    pub struct ResvgRasterizer {
        options: usvg::Options<'static>,
    }

    impl ResvgRasterizer {
        pub fn new(fonts: &FontSettings, install_root: &Path) -> Self {
            let mut options = usvg::Options {
                font_family: fonts.default_family.clone(),
                ..usvg::Options::default()
            };

            let fontdb = options.fontdb_mut();
            if fonts.load_system_fonts {
                fontdb.load_system_fonts();
            }
            for dir in fonts.resolved_font_dirs(install_root) {
                if dir.is_dir() {
                    fontdb.load_fonts_dir(&dir);
                } else {
                    warn!("Font directory {} does not exist, skipping", dir.display());
                }
            }

            let faces = options.fontdb.len();
            if faces == 0 {
                warn!("No fonts loaded; text in the artwork will not be drawn");
            } else {
                info!("Loaded {} font faces", faces);
            }

            Self { options }
        }
    }

    impl Rasterizer for ResvgRasterizer {
        fn rasterize(&self, spec: &AssetSpec) -> Result<PixelBuffer, GenerateError> {
            let tree = usvg::Tree::from_str(spec.markup, &self.options)
                .map_err(|source| GenerateError::markup(spec.file_name, source))?;

            let PixelSize { width, height } = spec.size;
            let mut pixmap = tiny_skia::Pixmap::new(width, height)
                .ok_or_else(|| GenerateError::pixmap(spec.file_name, width, height))?;

            // Stretch the document onto the target canvas
            let tree_size = tree.size();
            let scale_x = width as f32 / tree_size.width();
            let scale_y = height as f32 / tree_size.height();
            debug!(
                "{}: document {}x{}, scale {:.3}x{:.3}",
                spec.file_name,
                tree_size.width(),
                tree_size.height(),
                scale_x,
                scale_y
            );

            resvg::render(
                &tree,
                tiny_skia::Transform::from_scale(scale_x, scale_y),
                &mut pixmap.as_mut(),
            );

            // tiny-skia stores premultiplied alpha; encoders expect straight
            let rgba = pixmap
                .pixels()
                .iter()
                .flat_map(|px| {
                    let c = px.demultiply();
                    [c.red(), c.green(), c.blue(), c.alpha()]
                })
                .collect();

            Ok(PixelBuffer {
                size: spec.size,
                rgba,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_lookup() {
        let mut buffer = PixelBuffer::transparent(PixelSize::square(2));
        buffer.rgba[12..16].copy_from_slice(&[1, 2, 3, 4]);
        assert_eq!(buffer.pixel(1, 1), Some([1, 2, 3, 4]));
        assert_eq!(buffer.pixel(0, 0), Some([0, 0, 0, 0]));
        assert_eq!(buffer.pixel(2, 0), None);
    }

    #[cfg(feature = "render")]
    mod with_resvg {
        use super::super::*;
        use crate::assets::{AssetFormat, BRAND_ASSETS};
        use crate::settings::FontSettings;
        use std::path::Path;

        fn rasterizer() -> ResvgRasterizer {
            let fonts = FontSettings {
                load_system_fonts: false,
                ..FontSettings::default()
            };
            ResvgRasterizer::new(&fonts, Path::new(env!("CARGO_MANIFEST_DIR")))
        }

        #[test]
        fn test_favicon_has_white_center() {
            let buffer = rasterizer().rasterize(&BRAND_ASSETS[0]).unwrap();
            assert_eq!(buffer.size, PixelSize::square(32));
            assert_eq!(buffer.rgba.len(), 32 * 32 * 4);

            // Center dot is solid white, corners are transparent
            let center = buffer.pixel(16, 16).unwrap();
            assert_eq!(center[3], 255);
            assert!(center[0] > 200 && center[1] > 200 && center[2] > 200);
            assert_eq!(buffer.pixel(0, 0).unwrap()[3], 0);
        }

        #[test]
        fn test_app_icon_background_is_opaque() {
            let buffer = rasterizer().rasterize(&BRAND_ASSETS[1]).unwrap();
            assert_eq!(buffer.size, PixelSize::square(192));
            // Inside the rounded rect, away from the artwork
            assert_eq!(buffer.pixel(40, 170).unwrap()[3], 255);
            // Outside the rounded corner
            assert_eq!(buffer.pixel(0, 0).unwrap()[3], 0);
        }

        #[test]
        fn test_scales_to_target_size() {
            let spec = AssetSpec {
                size: PixelSize::square(64),
                ..BRAND_ASSETS[0]
            };
            let buffer = rasterizer().rasterize(&spec).unwrap();
            assert_eq!(buffer.rgba.len(), 64 * 64 * 4);
            assert_eq!(buffer.pixel(32, 32).unwrap()[3], 255);
        }

        #[test]
        fn test_garbage_markup_is_markup_error() {
            let spec = AssetSpec {
                markup: "<svg this is not markup",
                file_name: "broken.png",
                size: PixelSize::square(16),
                format: AssetFormat::Png,
            };
            let err = rasterizer().rasterize(&spec).unwrap_err();
            assert!(matches!(err, GenerateError::Markup { asset: "broken.png", .. }));
        }

        #[test]
        fn test_zero_size_is_pixmap_error() {
            let spec = AssetSpec {
                size: PixelSize::square(0),
                ..BRAND_ASSETS[0]
            };
            let err = rasterizer().rasterize(&spec).unwrap_err();
            assert!(matches!(err, GenerateError::Pixmap { width: 0, .. }));
        }
    }
}
