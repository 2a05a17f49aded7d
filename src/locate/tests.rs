use std::fs;
use std::path::Path;

use super::*;
use crate::editor::EditorKind;
use crate::error::LaunchError;

fn place_command(dir: &Path, name: &str) {
    let path = dir.join(name);
    fs::write(&path, "#!/bin/sh\n").unwrap();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    }
}

fn path_value(dirs: &[&Path]) -> std::ffi::OsString {
    std::env::join_paths(dirs.iter().copied()).unwrap()
}

#[test]
fn test_scan_takes_the_first_directory_with_a_command() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    place_command(second.path(), "code");

    let editor = EditorKind::VsCode.editor();
    let found = scan_path(editor, &path_value(&[first.path(), second.path()])).unwrap();
    assert_eq!(found, second.path().join("code"));

    place_command(first.path(), "code");
    let found = scan_path(editor, &path_value(&[first.path(), second.path()])).unwrap();
    assert_eq!(found, first.path().join("code"));
}

#[test]
fn test_scan_comes_up_empty_without_a_command() {
    let dir = tempfile::tempdir().unwrap();
    place_command(dir.path(), "subl");

    let editor = EditorKind::VsCode.editor();
    assert_eq!(scan_path(editor, &path_value(&[dir.path()])), None);
}

#[cfg(unix)]
#[test]
fn test_scan_skips_non_executable_files() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    fs::write(first.path().join("code"), "").unwrap();
    place_command(second.path(), "code");

    let editor = EditorKind::VsCode.editor();
    let found = scan_path(editor, &path_value(&[first.path(), second.path()])).unwrap();
    assert_eq!(found, second.path().join("code"));
}

#[test]
fn test_directories_are_not_commands() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("code")).unwrap();

    let editor = EditorKind::VsCode.editor();
    assert_eq!(command_in(editor, &dir.path().join("missing")), None);
    assert_eq!(command_in(editor, dir.path()), None);
}

#[cfg(not(target_os = "windows"))]
#[test]
fn test_windows_shim_names_are_ignored_off_windows() {
    let dir = tempfile::tempdir().unwrap();
    place_command(dir.path(), "code.cmd");

    let editor = EditorKind::VsCode.editor();
    assert_eq!(command_in(editor, dir.path()), None);
}

#[test]
fn test_not_found_error_names_the_editor_and_stem() {
    let err = LaunchError::NotFound {
        editor: "Visual Studio Code",
        stem: "code",
    };
    assert_eq!(err.to_string(), "code for Visual Studio Code not found on this system");
    assert_eq!(err.exit_code(), 1);
}
