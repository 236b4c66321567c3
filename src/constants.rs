//! Fixed names and paths for the icon generator
//!
//! Every output filename lives here so the catalog, the summary and the
//! tests agree on them.

// =============================================================================
// OUTPUT LOCATION
// =============================================================================

/// Directory (under the crate root) that receives the generated files
pub const OUTPUT_DIR_NAME: &str = "public";

/// Optional settings file, relative to the crate root
pub const SETTINGS_FILE: &str = "config/generate_icons.toml";

// =============================================================================
// OUTPUT FILES
// =============================================================================

pub const FAVICON_FILE: &str = "favicon.ico";
pub const ICON_192_FILE: &str = "icon-192x192.png";
pub const ICON_512_FILE: &str = "icon-512x512.png";
pub const APPLE_TOUCH_ICON_FILE: &str = "apple-touch-icon.png";

// =============================================================================
// RENDERING DEFAULTS
// =============================================================================

/// usvg fallback family when none of the families named in the markup resolve
pub const DEFAULT_FONT_FAMILY: &str = "Arial";
pub const DEFAULT_LOG_FILTER: &str = "info";
