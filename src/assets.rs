//! Embedded brand artwork and the fixed output catalog
//!
//! The markup is compiled into the binary; the catalog order is the order
//! files are produced in.

use std::fmt;

use crate::constants::{APPLE_TOUCH_ICON_FILE, FAVICON_FILE, ICON_192_FILE, ICON_512_FILE};

const FAVICON_SVG: &str = include_str!("../assets/brand/favicon.svg");
const ICON_192_SVG: &str = include_str!("../assets/brand/icon-192x192.svg");
const ICON_512_SVG: &str = include_str!("../assets/brand/icon-512x512.svg");
const APPLE_TOUCH_ICON_SVG: &str = include_str!("../assets/brand/apple-touch-icon.svg");

/// Raster container written for an asset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetFormat {
    /// Windows icon container (single 32-bit frame)
    Ico,
    Png,
}

impl AssetFormat {
    pub fn name(self) -> &'static str {
        match self {
            AssetFormat::Ico => "ICO",
            AssetFormat::Png => "PNG",
        }
    }
}

impl fmt::Display for AssetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Output dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelSize {
    pub width: u32,
    pub height: u32,
}

impl PixelSize {
    pub const fn square(side: u32) -> Self {
        Self {
            width: side,
            height: side,
        }
    }

    /// Number of bytes in a tightly packed RGBA8 buffer of this size
    pub fn rgba_len(self) -> usize {
        self.width as usize * self.height as usize * 4
    }
}

impl fmt::Display for PixelSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// One file to produce: what to draw, where to put it, how big, which container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetSpec {
    pub markup: &'static str,
    pub file_name: &'static str,
    pub size: PixelSize,
    pub format: AssetFormat,
}

/// The favicon plus the three web app icons, in generation order
pub const BRAND_ASSETS: [AssetSpec; 4] = [
    AssetSpec {
        markup: FAVICON_SVG,
        file_name: FAVICON_FILE,
        size: PixelSize::square(32),
        format: AssetFormat::Ico,
    },
    AssetSpec {
        markup: ICON_192_SVG,
        file_name: ICON_192_FILE,
        size: PixelSize::square(192),
        format: AssetFormat::Png,
    },
    AssetSpec {
        markup: ICON_512_SVG,
        file_name: ICON_512_FILE,
        size: PixelSize::square(512),
        format: AssetFormat::Png,
    },
    AssetSpec {
        markup: APPLE_TOUCH_ICON_SVG,
        file_name: APPLE_TOUCH_ICON_FILE,
        size: PixelSize::square(180),
        format: AssetFormat::Png,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    /// Pull `name="value"` off the root <svg> element
    fn root_attr<'a>(markup: &'a str, name: &str) -> Option<&'a str> {
        let start = markup.find("<svg")?;
        let end = start + markup[start..].find('>')?;
        let root = &markup[start..end];
        let needle = format!(" {}=\"", name);
        let value_start = root.find(&needle)? + needle.len();
        let value_len = root[value_start..].find('"')?;
        Some(&root[value_start..value_start + value_len])
    }

    #[test]
    fn test_catalog_matches_published_files() {
        let expected = [
            ("favicon.ico", AssetFormat::Ico, 32),
            ("icon-192x192.png", AssetFormat::Png, 192),
            ("icon-512x512.png", AssetFormat::Png, 512),
            ("apple-touch-icon.png", AssetFormat::Png, 180),
        ];
        assert_eq!(BRAND_ASSETS.len(), expected.len());
        for (spec, (name, format, side)) in BRAND_ASSETS.iter().zip(expected) {
            assert_eq!(spec.file_name, name);
            assert_eq!(spec.format, format);
            assert_eq!(spec.size, PixelSize::square(side));
        }
    }

    #[test]
    fn test_file_names_unique() {
        let names: HashSet<_> = BRAND_ASSETS.iter().map(|s| s.file_name).collect();
        assert_eq!(names.len(), BRAND_ASSETS.len());
    }

    #[test]
    fn test_markup_declares_target_size() {
        for spec in &BRAND_ASSETS {
            let width = root_attr(spec.markup, "width").expect("width attribute");
            let height = root_attr(spec.markup, "height").expect("height attribute");
            assert_eq!(width, spec.size.width.to_string(), "{}", spec.file_name);
            assert_eq!(height, spec.size.height.to_string(), "{}", spec.file_name);
        }
    }

    #[test]
    fn test_extension_matches_format() {
        for spec in &BRAND_ASSETS {
            let ext = spec.file_name.rsplit('.').next().unwrap();
            assert_eq!(ext.to_ascii_uppercase(), spec.format.name());
        }
    }

    #[test]
    fn test_pixel_size_display_and_len() {
        let size = PixelSize::square(32);
        assert_eq!(size.to_string(), "32x32");
        assert_eq!(size.rgba_len(), 32 * 32 * 4);
    }
}
