//! Generator errors
//!
//! Two tiers matter to callers: a missing capability (a backend that was not
//! compiled in) and everything else. Errors of the second tier carry a
//! backtrace captured where they were raised.

use std::backtrace::Backtrace;
use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

// Alias keeps thiserror from treating the field as a nightly-only `provide` source
type CapturedBacktrace = Backtrace;

/// Optional backend the generator needs at run time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// SVG to pixels
    Rasterize,
    /// Pixels to ICO/PNG
    Encode,
}

impl Capability {
    pub const ALL: [Capability; 2] = [Capability::Rasterize, Capability::Encode];

    pub fn crate_name(self) -> &'static str {
        match self {
            Capability::Rasterize => "resvg",
            Capability::Encode => "image",
        }
    }

    /// Cargo feature that compiles the backend in
    pub fn feature(self) -> &'static str {
        match self {
            Capability::Rasterize => "render",
            Capability::Encode => "encode",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Capability::Rasterize => "SVG rasterizing",
            Capability::Encode => "ICO/PNG encoding",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, feature `{}`)",
            self.description(),
            self.crate_name(),
            self.feature()
        )
    }
}

fn list_capabilities(missing: &[Capability]) -> String {
    missing
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("missing rendering capabilities: {}", list_capabilities(.missing))]
    MissingCapability { missing: Vec<Capability> },

    #[error("could not create output directory {}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
        backtrace: CapturedBacktrace,
    },

    #[cfg(feature = "render")]
    #[error("could not parse markup for {asset}")]
    Markup {
        asset: &'static str,
        #[source]
        source: resvg::usvg::Error,
        backtrace: CapturedBacktrace,
    },

    #[error("could not allocate a {width}x{height} canvas for {asset}")]
    Pixmap {
        asset: &'static str,
        width: u32,
        height: u32,
        backtrace: CapturedBacktrace,
    },

    #[error("could not encode {asset}: {reason}")]
    Encode {
        asset: &'static str,
        reason: String,
        backtrace: CapturedBacktrace,
    },

    #[cfg(feature = "encode")]
    #[error("could not write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
        backtrace: CapturedBacktrace,
    },
}

impl GenerateError {
    pub fn create_dir(path: impl Into<PathBuf>, source: io::Error) -> Self {
        GenerateError::CreateDir {
            path: path.into(),
            source,
            backtrace: Backtrace::force_capture(),
        }
    }

    pub fn pixmap(asset: &'static str, width: u32, height: u32) -> Self {
        GenerateError::Pixmap {
            asset,
            width,
            height,
            backtrace: Backtrace::force_capture(),
        }
    }

    pub fn encode(asset: &'static str, reason: impl Into<String>) -> Self {
        GenerateError::Encode {
            asset,
            reason: reason.into(),
            backtrace: Backtrace::force_capture(),
        }
    }

    #[cfg(feature = "render")]
    pub fn markup(asset: &'static str, source: resvg::usvg::Error) -> Self {
        GenerateError::Markup {
            asset,
            source,
            backtrace: Backtrace::force_capture(),
        }
    }

    #[cfg(feature = "encode")]
    pub fn write(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        GenerateError::Write {
            path: path.into(),
            source,
            backtrace: Backtrace::force_capture(),
        }
    }

    pub fn is_missing_capability(&self) -> bool {
        matches!(self, GenerateError::MissingCapability { .. })
    }

    /// Stack at the point the error was raised
    pub fn backtrace(&self) -> Option<&Backtrace> {
        match self {
            GenerateError::MissingCapability { .. } => None,
            GenerateError::CreateDir { backtrace, .. }
            | GenerateError::Pixmap { backtrace, .. }
            | GenerateError::Encode { backtrace, .. } => Some(backtrace),
            #[cfg(feature = "render")]
            GenerateError::Markup { backtrace, .. } => Some(backtrace),
            #[cfg(feature = "encode")]
            GenerateError::Write { backtrace, .. } => Some(backtrace),
        }
    }

    /// Install instructions for a missing capability, `None` for other errors.
    /// Both capabilities are always listed, with the absent ones marked.
    pub fn remediation(&self) -> Option<String> {
        let GenerateError::MissingCapability { missing } = self else {
            return None;
        };

        let mut text = String::from("This build of the icon generator cannot produce images.\n");
        text.push_str("\nRequired capabilities:\n");
        for capability in Capability::ALL {
            let state = if missing.contains(&capability) {
                "MISSING"
            } else {
                "available"
            };
            text.push_str(&format!("   - {} [{}]\n", capability, state));
        }
        let features: Vec<_> = Capability::ALL.iter().map(|c| c.feature()).collect();
        text.push_str("\nRebuild with the default features enabled:\n");
        text.push_str("   cargo run --bin generate_icons\n");
        text.push_str("\nOr enable them explicitly:\n");
        text.push_str(&format!(
            "   cargo run --bin generate_icons --features {}\n",
            features.join(",")
        ));
        Some(text)
    }
}
