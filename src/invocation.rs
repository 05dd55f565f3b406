use std::path::{Path, PathBuf};

use crate::apply::apply_icon;
use crate::icon::{is_icns, target_name};
use crate::scan::icns_files;
use crate::workspace::Workspace;

/// How a non-empty argument list is to be interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// One icon applied to one named target.
    Single { icon: PathBuf, target: String },
    /// Each `.icns` argument applied to its same-named target; every
    /// other argument scanned as a directory of `.icns` files.
    Bulk(Vec<String>),
}

/// Classify the argument list (program name excluded, never empty).
pub fn classify(args: &[String]) -> Invocation {
    if let [icon, target] = args {
        if is_icns(icon) && !is_icns(target) {
            return Invocation::Single {
                icon: PathBuf::from(icon),
                target: target.clone(),
            };
        }
    }
    Invocation::Bulk(args.to_vec())
}

/// Execute the invocation. Each icon/target pair is processed to
/// completion (or skipped with a diagnostic) before the next begins.
pub fn run(args: &[String], workspace: &dyn Workspace) {
    match classify(args) {
        Invocation::Single { icon, target } => {
            apply_icon(&icon, &target, workspace);
        }
        Invocation::Bulk(args) => {
            for arg in &args {
                let path = Path::new(arg);
                // The raw argument string decides the branch; a trailing
                // slash makes an .icns-suffixed name a directory to scan.
                if is_icns(arg) {
                    if let Some(name) = target_name(path) {
                        apply_icon(path, name, workspace);
                    }
                } else {
                    for (icon, name) in icns_files(path) {
                        apply_icon(&icon, &name, workspace);
                    }
                }
            }
        }
    }
}
