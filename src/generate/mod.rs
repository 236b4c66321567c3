//! Brand asset generation
//!
//! Renders the embedded artwork into the favicon and web app icons:
//! - `favicon.ico` (32x32, ICO container)
//! - `icon-192x192.png`, `icon-512x512.png`
//! - `apple-touch-icon.png` (180x180)
//!
//! Assets are produced in catalog order and written over whatever is already
//! on disk. The first failure stops the run; files written before it stay.

pub mod encode;
pub mod raster;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use tracing::debug;

use crate::assets::{AssetFormat, AssetSpec, BRAND_ASSETS, PixelSize};
use crate::constants::OUTPUT_DIR_NAME;
use crate::error::{Capability, GenerateError};
use crate::settings::GeneratorSettings;

use self::encode::ImageWriter;
use self::raster::Rasterizer;

/// Crate root; generated files land in a sibling `public/` of `src/`.
///
/// Fixed at compile time from `CARGO_MANIFEST_DIR`: a copied or installed
/// binary still writes into the checkout it was built from.
pub fn install_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

pub fn output_dir(install_root: &Path) -> PathBuf {
    install_root.join(OUTPUT_DIR_NAME)
}

/// Create the output directory if needed. Existing contents are left alone.
pub fn ensure_output_dir(dir: &Path) -> Result<(), GenerateError> {
    fs::create_dir_all(dir).map_err(|source| GenerateError::create_dir(dir, source))
}

/// Capabilities this build was compiled without
pub fn missing_capabilities() -> Vec<Capability> {
    let mut missing = Vec::new();
    if !cfg!(feature = "render") {
        missing.push(Capability::Rasterize);
    }
    if !cfg!(feature = "encode") {
        missing.push(Capability::Encode);
    }
    missing
}

/// The rasterizer/encoder pair used for a run
pub struct Toolchain {
    rasterizer: Box<dyn Rasterizer>,
    writer: Box<dyn ImageWriter>,
}

impl Toolchain {
    pub fn new(rasterizer: Box<dyn Rasterizer>, writer: Box<dyn ImageWriter>) -> Self {
        Self { rasterizer, writer }
    }

    /// Build the compiled-in backends, or report which ones are missing
    #[cfg(all(feature = "render", feature = "encode"))]
    pub fn detect(settings: &GeneratorSettings) -> Result<Self, GenerateError> {
        let rasterizer = raster::ResvgRasterizer::new(&settings.fonts, &settings.install_root);
        Ok(Self::new(Box::new(rasterizer), Box::new(encode::ImageCrateWriter)))
    }

    /// Build the compiled-in backends, or report which ones are missing
    #[cfg(not(all(feature = "render", feature = "encode")))]
    pub fn detect(_settings: &GeneratorSettings) -> Result<Self, GenerateError> {
        Err(GenerateError::MissingCapability {
            missing: missing_capabilities(),
        })
    }
}

/// One file written during a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedAsset {
    pub path: PathBuf,
    pub file_name: &'static str,
    pub size: PixelSize,
    pub format: AssetFormat,
}

/// Everything a successful run produced, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub output_dir: PathBuf,
    pub assets: Vec<GeneratedAsset>,
}

impl GenerationReport {
    fn new(output_dir: &Path) -> Self {
        Self {
            output_dir: output_dir.to_path_buf(),
            assets: Vec::new(),
        }
    }

    pub fn summary(&self) -> String {
        let mut text = String::from("\nAll brand assets generated successfully!\n");
        text.push_str(&format!(
            "\nGenerated files in {}:\n",
            self.output_dir.display()
        ));
        for asset in &self.assets {
            text.push_str(&format!("   - {} ({})\n", asset.file_name, asset.size));
        }
        text
    }
}

/// Render and write `specs` into an existing `output_dir`, in order
pub fn generate_assets(
    toolchain: &Toolchain,
    specs: &[AssetSpec],
    output_dir: &Path,
) -> Result<GenerationReport, GenerateError> {
    let mut report = GenerationReport::new(output_dir);

    for spec in specs {
        let started = Instant::now();
        let pixels = toolchain.rasterizer.rasterize(spec)?;
        let rendered = started.elapsed();

        let path = output_dir.join(spec.file_name);
        toolchain.writer.write(spec, pixels, &path)?;
        debug!(
            "{}: rendered in {:?}, written in {:?}",
            spec.file_name,
            rendered,
            started.elapsed() - rendered
        );

        println!("  Created: {} ({})", path.display(), spec.size);
        report.assets.push(GeneratedAsset {
            path,
            file_name: spec.file_name,
            size: spec.size,
            format: spec.format,
        });
    }

    Ok(report)
}

/// Create `output_dir` if needed, then generate `specs` into it
pub fn generate_into(
    toolchain: &Toolchain,
    specs: &[AssetSpec],
    output_dir: &Path,
) -> Result<GenerationReport, GenerateError> {
    ensure_output_dir(output_dir)?;
    println!("Saving files to: {}\n", output_dir.display());
    generate_assets(toolchain, specs, output_dir)
}

/// Produce the four brand assets under `<install root>/public`.
///
/// The toolchain is checked before anything touches the disk, so a build
/// without a backend leaves the tree untouched.
pub fn generate_brand_assets(
    settings: &GeneratorSettings,
) -> Result<GenerationReport, GenerateError> {
    let toolchain = Toolchain::detect(settings)?;
    generate_into(&toolchain, &BRAND_ASSETS, &output_dir(&settings.install_root))
}

/// How a run ended, as far as the process exit is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Completed,
    /// A backend was not compiled in; nothing was written
    CapabilityMissing,
    Failed,
}

impl RunStatus {
    pub fn exit_code(self) -> ExitCode {
        match self {
            RunStatus::Completed | RunStatus::CapabilityMissing => ExitCode::SUCCESS,
            RunStatus::Failed => ExitCode::FAILURE,
        }
    }
}

/// Print the outcome of a run: the summary to `out` on success, otherwise
/// an `Error:` report to `err`. A missing capability gets install
/// instructions; any other error gets its cause chain and the backtrace
/// captured where it was raised.
pub fn report_outcome(
    result: Result<GenerationReport, GenerateError>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> RunStatus {
    // Write failures on the report streams don't change the status
    match result {
        Ok(report) => {
            let _ = write!(out, "{}", report.summary());
            RunStatus::Completed
        }
        Err(e) if e.is_missing_capability() => {
            let _ = writeln!(err, "Error: {}", e);
            if let Some(remediation) = e.remediation() {
                let _ = writeln!(err, "\n{}", remediation);
            }
            RunStatus::CapabilityMissing
        }
        Err(e) => {
            let backtrace = e.backtrace().map(ToString::to_string);
            let error = anyhow::Error::from(e);
            let _ = writeln!(err, "Error: {}", error);
            for cause in error.chain().skip(1) {
                let _ = writeln!(err, "  caused by: {}", cause);
            }
            if let Some(backtrace) = backtrace {
                let _ = writeln!(err, "\nStack backtrace:\n{}", backtrace);
            }
            RunStatus::Failed
        }
    }
}
