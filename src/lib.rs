//! Brand assets - renders the site's favicon and web app icons
//!
//! The artwork is embedded SVG; this crate rasterizes it with resvg and
//! encodes the results with `image` into `public/`.

pub mod assets;
pub mod constants;
pub mod error;
pub mod generate;
pub mod logging;
pub mod settings;

pub use assets::{AssetFormat, AssetSpec, BRAND_ASSETS, PixelSize};
pub use constants::*;
pub use error::{Capability, GenerateError};
pub use generate::encode::ImageWriter;
pub use generate::raster::{PixelBuffer, Rasterizer};
pub use generate::{
    GeneratedAsset, GenerationReport, RunStatus, Toolchain, ensure_output_dir, generate_assets,
    generate_brand_assets, generate_into, install_root, missing_capabilities, output_dir,
    report_outcome,
};
pub use logging::init_logging;
pub use settings::{FontSettings, GeneratorSettings, LoggingSettings, SettingsError};
