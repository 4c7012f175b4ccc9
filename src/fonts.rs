use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use log::{debug, info};
use sha2::{Digest, Sha256};

struct FontSource {
    source_path: &'static str,
    file_name: &'static str,
    description: &'static str,
}

const FONT_SOURCES: &[FontSource] = &[
    FontSource {
        source_path: "fonts/webfonts/Vazirmatn[wght].woff2",
        file_name: "Vazirmatn[wght].woff2",
        description: "Vazirmatn variable weight (woff2)",
    },
    FontSource {
        source_path: "fonts/variable/Vazirmatn[wght].ttf",
        file_name: "Vazirmatn-VariableFont_wght.ttf",
        description: "Vazirmatn variable weight (ttf fallback)",
    },
];

/// File name of the provisioned font the UI can load at startup.
pub const UI_FONT_FILE: &str = "Vazirmatn-VariableFont_wght.ttf";

/// Writes `data` to `dest` unless an identical file is already there.
/// Returns true when the file was (re)written.
pub fn write_if_changed(dest: &Path, data: &[u8]) -> Result<bool> {
    match fs::read(dest) {
        Ok(existing) => {
            if existing.len() == data.len() && Sha256::digest(&existing) == Sha256::digest(data) {
                debug!("font already up to date: {}", dest.display());
                return Ok(false);
            }
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to read {}", dest.display()));
        }
    }

    fs::write(dest, data).with_context(|| format!("Failed to write {}", dest.display()))?;
    Ok(true)
}

/// Copies the Vazirmatn font files from the installed package at
/// `package_root` into `dest_dir`, skipping files that are already
/// up to date. Returns the number of files written.
pub fn provision(package_root: &Path, dest_dir: &Path) -> Result<usize> {
    fs::create_dir_all(dest_dir)
        .with_context(|| format!("Failed to create {}", dest_dir.display()))?;

    let mut copied = 0;
    for source in FONT_SOURCES {
        info!("preparing {}...", source.description);
        let source_path = package_root.join(source.source_path);
        let data = fs::read(&source_path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                anyhow!(
                    "Font source not found at {}. Ensure the 'vazirmatn' package is installed before running the build.",
                    source_path.display()
                )
            } else {
                anyhow!("Failed to read {}: {}", source_path.display(), e)
            }
        })?;

        let dest = dest_dir.join(source.file_name);
        if write_if_changed(&dest, &data)? {
            info!("prepared {} ({} bytes)", source.file_name, data.len());
            copied += 1;
        } else {
            info!("font already up to date: {}", source.file_name);
        }
    }

    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fake_package(root: &Path) {
        fs::create_dir_all(root.join("fonts/webfonts")).unwrap();
        fs::create_dir_all(root.join("fonts/variable")).unwrap();
        fs::write(root.join("fonts/webfonts/Vazirmatn[wght].woff2"), b"woff2-bytes").unwrap();
        fs::write(root.join("fonts/variable/Vazirmatn[wght].ttf"), b"ttf-bytes").unwrap();
    }

    #[test]
    fn test_provision_copies_both_fonts() {
        let package = tempfile::tempdir().unwrap();
        let dest = tempfile::tempdir().unwrap();
        fake_package(package.path());

        let copied = provision(package.path(), dest.path()).unwrap();
        assert_eq!(copied, 2);
        assert_eq!(
            fs::read(dest.path().join("Vazirmatn[wght].woff2")).unwrap(),
            b"woff2-bytes"
        );
        assert_eq!(
            fs::read(dest.path().join(UI_FONT_FILE)).unwrap(),
            b"ttf-bytes"
        );
    }

    #[test]
    fn test_provision_skips_unchanged() {
        let package = tempfile::tempdir().unwrap();
        let dest = tempfile::tempdir().unwrap();
        fake_package(package.path());

        assert_eq!(provision(package.path(), dest.path()).unwrap(), 2);
        assert_eq!(provision(package.path(), dest.path()).unwrap(), 0);
    }

    #[test]
    fn test_provision_recopies_on_content_change() {
        let package = tempfile::tempdir().unwrap();
        let dest = tempfile::tempdir().unwrap();
        fake_package(package.path());
        provision(package.path(), dest.path()).unwrap();

        // Same length, different bytes: the hash check must catch it
        fs::write(package.path().join("fonts/variable/Vazirmatn[wght].ttf"), b"ttf-BYTES").unwrap();
        assert_eq!(provision(package.path(), dest.path()).unwrap(), 1);
        assert_eq!(
            fs::read(dest.path().join(UI_FONT_FILE)).unwrap(),
            b"ttf-BYTES"
        );
    }

    #[test]
    fn test_provision_missing_package_is_fatal() {
        let package = tempfile::tempdir().unwrap();
        let dest = tempfile::tempdir().unwrap();

        let err = provision(package.path(), dest.path()).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Font source not found"), "unexpected: {}", message);
        assert!(message.contains("vazirmatn"), "unexpected: {}", message);
    }

    #[test]
    fn test_write_if_changed_reports_writes() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("font.ttf");

        assert!(write_if_changed(&dest, b"abc").unwrap());
        assert!(!write_if_changed(&dest, b"abc").unwrap());
        assert!(write_if_changed(&dest, b"abcd").unwrap());
    }
}
