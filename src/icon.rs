use std::fmt;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use icns::IconFamily;

/// File suffix that marks an icon container.
pub const ICNS_SUFFIX: &str = ".icns";

/// Whether an argument names an icon file.
pub fn is_icns(arg: &str) -> bool {
    arg.ends_with(ICNS_SUFFIX)
}

/// Target name for an icon file: its final path component with the
/// `.icns` suffix stripped. `None` if the path does not end in `.icns`.
pub fn target_name(path: &Path) -> Option<&str> {
    path.file_name()?.to_str()?.strip_suffix(ICNS_SUFFIX)
}

/// Errors from validating an icon file.
#[derive(Debug)]
pub enum IconError {
    /// Failed to open the file.
    Open(PathBuf, io::Error),
    /// The file is not a decodable icns container.
    Decode(PathBuf, io::Error),
    /// The container holds no images.
    Empty(PathBuf),
}

impl fmt::Display for IconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IconError::Open(path, e) => {
                write!(f, "cannot open icon '{}': {}", path.display(), e)
            }
            IconError::Decode(path, e) => {
                write!(f, "cannot decode icon '{}': {}", path.display(), e)
            }
            IconError::Empty(path) => {
                write!(f, "icon '{}' contains no images", path.display())
            }
        }
    }
}

impl std::error::Error for IconError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IconError::Open(_, e) | IconError::Decode(_, e) => Some(e),
            IconError::Empty(_) => None,
        }
    }
}

/// An `.icns` file verified to decode as a non-empty icon family.
pub struct IconSource {
    path: PathBuf,
}

impl IconSource {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Validate an icon file before any write is attempted.
pub fn load(path: &Path) -> Result<IconSource, IconError> {
    let file = File::open(path).map_err(|e| IconError::Open(path.to_path_buf(), e))?;
    let family = IconFamily::read(BufReader::new(file))
        .map_err(|e| IconError::Decode(path.to_path_buf(), e))?;
    if family.elements.is_empty() {
        return Err(IconError::Empty(path.to_path_buf()));
    }
    Ok(IconSource {
        path: path.to_path_buf(),
    })
}

/// Write a minimal valid icns file, for tests in this crate.
#[cfg(test)]
pub(crate) fn write_test_icns(path: &Path) {
    use icns::{Image, PixelFormat};

    let image = Image::new(PixelFormat::RGBA, 16, 16);
    let mut family = IconFamily::new();
    family.add_icon(&image).unwrap();
    let file = File::create(path).unwrap();
    family.write(file).unwrap();
}
