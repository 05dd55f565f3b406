//! Persisting an icon inside an application bundle.
//!
//! Finder's icon attribute alone can be wiped by reinstalls or cache
//! rebuilds; replacing the bundle's own icon resource makes the
//! customization durable.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use plist::Value;

use crate::icon::ICNS_SUFFIX;

/// Errors from reading a bundle's manifest.
#[derive(Debug)]
pub enum BundleError {
    /// No Info.plist under Contents/.
    ManifestMissing(PathBuf),
    /// Info.plist exists but could not be parsed.
    ManifestUnreadable(PathBuf, plist::Error),
    /// Info.plist has no CFBundleIconFile string.
    NoIconEntry(PathBuf),
}

impl fmt::Display for BundleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BundleError::ManifestMissing(path) => {
                write!(f, "no Info.plist at '{}'", path.display())
            }
            BundleError::ManifestUnreadable(path, e) => {
                write!(f, "cannot read '{}': {}", path.display(), e)
            }
            BundleError::NoIconEntry(path) => {
                write!(f, "'{}' has no CFBundleIconFile entry", path.display())
            }
        }
    }
}

impl std::error::Error for BundleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BundleError::ManifestUnreadable(_, e) => Some(e),
            _ => None,
        }
    }
}

/// Replace the icon resource named by the bundle's manifest with a copy
/// of `icon`, returning the resource path.
///
/// The manifest is read-only; a bare `CFBundleIconFile` value gets the
/// `.icns` extension appended, per bundle convention. The delete and the
/// copy are both best-effort: a failed copy leaves the bundle without an
/// icon resource until retried.
pub fn replace_icon(bundle: &Path, icon: &Path) -> Result<PathBuf, BundleError> {
    let manifest = bundle.join("Contents").join("Info.plist");
    if !manifest.is_file() {
        return Err(BundleError::ManifestMissing(manifest));
    }

    let value = Value::from_file(&manifest)
        .map_err(|e| BundleError::ManifestUnreadable(manifest.clone(), e))?;
    let icon_file = value
        .as_dictionary()
        .and_then(|dict| dict.get("CFBundleIconFile"))
        .and_then(|v| v.as_string())
        .ok_or(BundleError::NoIconEntry(manifest))?;

    let mut name = icon_file.to_string();
    if !name.ends_with(ICNS_SUFFIX) {
        name.push_str(ICNS_SUFFIX);
    }
    let dest = bundle.join("Contents").join("Resources").join(name);

    let _ = fs::remove_file(&dest);
    let _ = fs::copy(icon, &dest);

    Ok(dest)
}
