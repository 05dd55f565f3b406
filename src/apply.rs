//! The per-target pipeline: resolve path, validate icon, persist into the
//! bundle when the target is one, set the Finder icon attribute.
//!
//! Nothing here is fatal. Every failure is reported on stdout and the
//! caller moves on to the next target.

use std::path::Path;

use crate::bundle;
use crate::icon;
use crate::resolve::resolve_target;
use crate::workspace::Workspace;

/// Apply one icon file to one named target.
pub fn apply_icon(icon_path: &Path, target: &str, workspace: &dyn Workspace) {
    let Some(resolved) = resolve_target(target, workspace) else {
        println!("file {} not found", target);
        return;
    };

    let icon = match icon::load(icon_path) {
        Ok(icon) => icon,
        Err(e) => {
            println!("{}", e);
            return;
        }
    };

    println!("setting icon for {}", target);

    // Bundle persistence runs before the metadata write. Only
    // directories can be bundles.
    if resolved.is_dir() {
        if let Err(e) = bundle::replace_icon(&resolved, icon.path()) {
            println!("{}", e);
        }
    }

    if let Err(e) = workspace.set_file_icon(icon.path(), &resolved) {
        println!("{}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::write_test_icns;
    use crate::workspace::fake::FakeWorkspace;
    use plist::Value;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[test]
    fn unresolved_target_writes_no_metadata() {
        let dir = tempdir().unwrap();
        let icon = dir.path().join("App.icns");
        write_test_icns(&icon);
        let workspace = FakeWorkspace::new();

        apply_icon(&icon, "NoSuchApp", &workspace);

        assert!(workspace.icons_set.borrow().is_empty());
    }

    #[test]
    fn undecodable_icon_writes_nothing() {
        let dir = tempdir().unwrap();
        let icon = dir.path().join("bogus.icns");
        fs::write(&icon, b"garbage").unwrap();
        let target = dir.path().join("target.txt");
        fs::write(&target, b"t").unwrap();
        let workspace = FakeWorkspace::new();

        apply_icon(&icon, target.to_str().unwrap(), &workspace);

        assert!(workspace.icons_set.borrow().is_empty());
    }

    #[test]
    fn plain_file_target_gets_one_metadata_write() {
        let dir = tempdir().unwrap();
        let icon = dir.path().join("App.icns");
        write_test_icns(&icon);
        let target = dir.path().join("target.txt");
        fs::write(&target, b"t").unwrap();
        let workspace = FakeWorkspace::new();

        apply_icon(&icon, target.to_str().unwrap(), &workspace);

        let set = workspace.icons_set.borrow();
        assert_eq!(set.len(), 1);
        assert_eq!(set[0], (icon.clone(), target.clone()));
    }

    #[test]
    fn registry_resolved_target_gets_metadata_write() {
        let dir = tempdir().unwrap();
        let icon = dir.path().join("App.icns");
        write_test_icns(&icon);
        let app_path = dir.path().join("installed.txt");
        fs::write(&app_path, b"a").unwrap();
        let workspace = FakeWorkspace::new().with_app("Demo", "com.example.demo", &app_path);

        apply_icon(&icon, "Demo", &workspace);

        let set = workspace.icons_set.borrow();
        assert_eq!(set.len(), 1);
        assert_eq!(set[0].1, app_path);
    }

    #[test]
    fn bundle_target_gets_resource_replaced_and_metadata_set() {
        let dir = tempdir().unwrap();
        let icon = dir.path().join("App.icns");
        write_test_icns(&icon);

        let bundle: PathBuf = dir.path().join("Demo.app");
        fs::create_dir_all(bundle.join("Contents/Resources")).unwrap();
        let mut dict = plist::Dictionary::new();
        dict.insert(
            "CFBundleIconFile".to_string(),
            Value::String("AppIcon".to_string()),
        );
        Value::Dictionary(dict)
            .to_file_xml(bundle.join("Contents/Info.plist"))
            .unwrap();
        let workspace = FakeWorkspace::new();

        apply_icon(&icon, bundle.to_str().unwrap(), &workspace);

        let resource = bundle.join("Contents/Resources/AppIcon.icns");
        assert_eq!(fs::read(&resource).unwrap(), fs::read(&icon).unwrap());
        let set = workspace.icons_set.borrow();
        assert_eq!(set.len(), 1);
        assert_eq!(set[0].1, bundle);
    }

    #[test]
    fn plain_directory_still_gets_metadata_write() {
        let dir = tempdir().unwrap();
        let icon = dir.path().join("App.icns");
        write_test_icns(&icon);
        let target = dir.path().join("folder");
        fs::create_dir(&target).unwrap();
        let workspace = FakeWorkspace::new();

        apply_icon(&icon, target.to_str().unwrap(), &workspace);

        assert_eq!(workspace.icons_set.borrow().len(), 1);
    }
}
