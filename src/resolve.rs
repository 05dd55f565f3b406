use std::path::{Path, PathBuf};

use crate::workspace::Workspace;

/// Map a target name to a filesystem path.
///
/// A name that is already an existing path is used directly, without
/// consulting the application registry. Otherwise the name is tried as an
/// application display name (scripting bridge gives the bundle identifier,
/// the registry gives its install path) and, independently, as a bundle
/// identifier itself; the display-name result wins when both succeed.
pub fn resolve_target(name: &str, workspace: &dyn Workspace) -> Option<PathBuf> {
    let direct = Path::new(name);
    if direct.exists() {
        return Some(direct.to_path_buf());
    }

    let by_name = workspace
        .app_id_for_name(name)
        .and_then(|id| workspace.app_path_for_id(&id));
    let by_id = workspace.app_path_for_id(name);
    by_name.or(by_id)
}
