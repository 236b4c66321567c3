//! Brand icon generator
//!
//! Renders the favicon and web app icons into `public/`.
//!
//! Usage:
//!   cargo run --bin generate_icons
//!
//! Takes no arguments. `config/generate_icons.toml` (optional) controls font
//! sources and log verbosity only.

use std::io;
use std::process::ExitCode;

use brand_assets::{
    GeneratorSettings, SETTINGS_FILE, generate_brand_assets, init_logging, install_root,
    report_outcome,
};
use tracing::warn;

fn main() -> ExitCode {
    let root = install_root();
    let (settings, settings_err) =
        GeneratorSettings::load_or_default(&root.join(SETTINGS_FILE), &root);
    init_logging(&settings.logging.filter);

    if let Some(e) = settings_err {
        warn!("{:#}; using default settings", anyhow::Error::from(e));
    }
    if std::env::args().len() > 1 {
        warn!("generate_icons takes no arguments; ignoring them");
    }

    println!("=== Brand Icon Generator ===\n");

    let result = generate_brand_assets(&settings);
    report_outcome(result, &mut io::stdout(), &mut io::stderr()).exit_code()
}
