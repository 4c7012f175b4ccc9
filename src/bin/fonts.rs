//! Asset-preparation step: copies the Vazirmatn font files from the
//! installed package into `public/fonts`, skipping up-to-date files.
//! A missing package is fatal and exits non-zero; the UI never runs this.

use std::path::PathBuf;

use log::{error, info};

fn main() {
    env_logger::init();

    let package_root = std::env::var("VAZIRMATN_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("node_modules/vazirmatn"));
    let dest_dir = PathBuf::from("public/fonts");

    match deepsearch::fonts::provision(&package_root, &dest_dir) {
        Ok(copied) => info!("Vazirmatn fonts are ready ({} file(s) copied).", copied),
        Err(err) => {
            error!("Failed to prepare Vazirmatn fonts: {:#}", err);
            std::process::exit(1);
        }
    }
}
