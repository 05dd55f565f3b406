//! Desktop-shell services behind a narrow trait.
//!
//! Everything that needs a live desktop environment (the application
//! registry, the scripting bridge, Finder's icon attribute) goes through
//! [`Workspace`] so the resolver and applier can be tested with an
//! in-memory fake.

use std::fmt;
use std::path::{Path, PathBuf};

/// OS-bound lookups and the icon metadata write.
pub trait Workspace {
    /// Bundle identifier of an installed application with the given
    /// display name, via the desktop shell's scripting bridge.
    fn app_id_for_name(&self, name: &str) -> Option<String>;

    /// Install path for a bundle identifier, via the application registry.
    fn app_path_for_id(&self, bundle_id: &str) -> Option<PathBuf>;

    /// Set the desktop shell's custom-icon attribute on `file`.
    fn set_file_icon(&self, icon: &Path, file: &Path) -> Result<(), WorkspaceError>;
}

/// Errors from the live desktop-shell calls.
#[derive(Debug)]
pub enum WorkspaceError {
    /// The shell's image loader refused the icon file.
    BadIcon(PathBuf),
    /// The shell declined to set the icon attribute.
    Rejected(PathBuf),
    /// Not running on macOS.
    Unsupported,
}

impl fmt::Display for WorkspaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkspaceError::BadIcon(path) => {
                write!(f, "desktop shell could not load icon '{}'", path.display())
            }
            WorkspaceError::Rejected(path) => {
                write!(f, "could not set icon for '{}'", path.display())
            }
            WorkspaceError::Unsupported => {
                write!(f, "setting Finder icons requires macOS")
            }
        }
    }
}

impl std::error::Error for WorkspaceError {}

/// The live implementation.
///
/// On macOS this talks to NSWorkspace and runs `osascript` for the
/// name-to-identifier query (a synchronous out-of-process round trip with
/// no timeout). On other platforms every lookup misses and the metadata
/// write reports [`WorkspaceError::Unsupported`].
pub struct DesktopWorkspace;

#[cfg(target_os = "macos")]
impl Workspace for DesktopWorkspace {
    fn app_id_for_name(&self, name: &str) -> Option<String> {
        use std::process::Command;

        let script = format!("id of app \"{}\"", name.replace('"', "\\\""));
        let output = Command::new("osascript")
            .arg("-e")
            .arg(&script)
            .output()
            .ok()?;
        if !output.status.success() {
            return None;
        }
        let id = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if id.is_empty() { None } else { Some(id) }
    }

    fn app_path_for_id(&self, bundle_id: &str) -> Option<PathBuf> {
        use objc2_app_kit::NSWorkspace;
        use objc2_foundation::NSString;

        let id = NSString::from_str(bundle_id);
        let url = unsafe {
            NSWorkspace::sharedWorkspace().URLForApplicationWithBundleIdentifier(&id)
        }?;
        let path = unsafe { url.path() }?;
        Some(PathBuf::from(path.to_string()))
    }

    fn set_file_icon(&self, icon: &Path, file: &Path) -> Result<(), WorkspaceError> {
        use objc2::AllocAnyThread;
        use objc2_app_kit::{NSImage, NSWorkspace, NSWorkspaceIconCreationOptions};
        use objc2_foundation::NSString;

        let icon_str = NSString::from_str(&icon.to_string_lossy());
        let image = unsafe { NSImage::initWithContentsOfFile(NSImage::alloc(), &icon_str) }
            .ok_or_else(|| WorkspaceError::BadIcon(icon.to_path_buf()))?;

        let file_str = NSString::from_str(&file.to_string_lossy());
        let ok = unsafe {
            NSWorkspace::sharedWorkspace().setIcon_forFile_options(
                Some(&image),
                &file_str,
                NSWorkspaceIconCreationOptions(0),
            )
        };
        if ok {
            Ok(())
        } else {
            Err(WorkspaceError::Rejected(file.to_path_buf()))
        }
    }
}

#[cfg(not(target_os = "macos"))]
impl Workspace for DesktopWorkspace {
    fn app_id_for_name(&self, _name: &str) -> Option<String> {
        None
    }

    fn app_path_for_id(&self, _bundle_id: &str) -> Option<PathBuf> {
        None
    }

    fn set_file_icon(&self, _icon: &Path, _file: &Path) -> Result<(), WorkspaceError> {
        Err(WorkspaceError::Unsupported)
    }
}
