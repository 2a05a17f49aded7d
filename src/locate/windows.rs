//! Editor discovery through the Windows uninstall registry.
//!
//! Installers record themselves under the `Uninstall` key. Entries are
//! matched against the editor's publisher/display-name fingerprint and the
//! command file is then looked up below the recorded install location.
//! Registry access shells out to `reg query`; a missing or unreadable key
//! is simply a non-match.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::editor::{Editor, RegistryFingerprint};

const UNINSTALL_KEY: &str = r"Software\Microsoft\Windows\CurrentVersion\Uninstall";

/// Try both registry roots, per-user installs first.
pub fn discover(editor: &dyn Editor) -> Option<PathBuf> {
    let fingerprint = editor.registry_fingerprint()?;
    ["HKCU", "HKLM"]
        .into_iter()
        .find_map(|root| discover_under(editor, &fingerprint, root))
}

fn discover_under(
    editor: &dyn Editor,
    fingerprint: &RegistryFingerprint,
    root: &str,
) -> Option<PathBuf> {
    for key in subkeys(&format!(r"{root}\{UNINSTALL_KEY}")) {
        let Some(location) = install_location(&key, fingerprint) else {
            continue;
        };
        let bin_dir = Path::new(&location).join(fingerprint.install_subdir);
        if let Some(cmd) = super::command_in(editor, &bin_dir) {
            return Some(cmd);
        }
    }
    None
}

/// The `InstallLocation` of `key`, provided the entry matches the editor's
/// fingerprint: `Publisher` equal, `DisplayName` starting with the prefix.
fn install_location(key: &str, fingerprint: &RegistryFingerprint) -> Option<String> {
    if string_value(key, "Publisher")? != fingerprint.publisher {
        return None;
    }
    if !string_value(key, "DisplayName")?.starts_with(fingerprint.display_prefix) {
        return None;
    }
    string_value(key, "InstallLocation")
}

/// Subkeys of `key`, as full key paths. Failures mean no subkeys.
fn subkeys(key: &str) -> Vec<String> {
    let Ok(output) = Command::new("reg").args(["query", key]).output() else {
        return Vec::new();
    };
    if !output.status.success() {
        return Vec::new();
    }
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with("HKEY_"))
        .map(str::to_owned)
        .collect()
}

/// Read a named string value from a registry key. Only plain `REG_SZ`
/// values count; any other type (and any `reg` failure) reads as absent.
fn string_value(key: &str, name: &str) -> Option<String> {
    let output = Command::new("reg")
        .args(["query", key, "/v", name])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    parse_value(&String::from_utf8_lossy(&output.stdout), name)
}

/// Pull `name`'s data out of `reg query /v` output.
///
/// Value lines look like `    DisplayName    REG_SZ    Microsoft Visual
/// Studio Code`, indented under a key-path header line.
fn parse_value(output: &str, name: &str) -> Option<String> {
    for line in output.lines() {
        let line = line.trim();
        let Some(rest) = line.strip_prefix(name) else {
            continue;
        };
        // The name must end at a field boundary, not mid-token.
        if !rest.starts_with(char::is_whitespace) {
            continue;
        }
        let mut fields = rest.trim_start().splitn(2, char::is_whitespace);
        if fields.next() != Some("REG_SZ") {
            return None;
        }
        return fields.next().map(|data| data.trim().to_owned());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUERY_OUTPUT: &str = concat!(
        "\r\n",
        "HKEY_CURRENT_USER\\Software\\Microsoft\\Windows\\CurrentVersion\\Uninstall\\{771FD6B0-FA20-440A-A002-3B3BAC16DC50}_is1\r\n",
        "    DisplayName    REG_SZ    Microsoft Visual Studio Code (User)\r\n",
        "    Publisher    REG_SZ    Microsoft Corporation\r\n",
        "    InstallLocation    REG_SZ    C:\\Users\\me\\AppData\\Local\\Programs\\Microsoft VS Code\\\r\n",
    );

    #[test]
    fn test_parses_the_named_value() {
        assert_eq!(
            parse_value(QUERY_OUTPUT, "Publisher").as_deref(),
            Some("Microsoft Corporation")
        );
        assert_eq!(
            parse_value(QUERY_OUTPUT, "DisplayName").as_deref(),
            Some("Microsoft Visual Studio Code (User)")
        );
        assert_eq!(
            parse_value(QUERY_OUTPUT, "InstallLocation").as_deref(),
            Some("C:\\Users\\me\\AppData\\Local\\Programs\\Microsoft VS Code\\")
        );
    }

    #[test]
    fn test_missing_values_read_as_absent() {
        assert_eq!(parse_value(QUERY_OUTPUT, "UninstallString"), None);
        assert_eq!(parse_value("", "Publisher"), None);
    }

    #[test]
    fn test_only_reg_sz_values_count() {
        let output = "    InstallLocation    REG_EXPAND_SZ    %LocalAppData%\\Code\r\n";
        assert_eq!(parse_value(output, "InstallLocation"), None);
    }

    #[test]
    fn test_value_name_must_end_at_a_field_boundary() {
        let output = "    DisplayNameLocalized    REG_SZ    whatever\r\n";
        assert_eq!(parse_value(output, "DisplayName"), None);
    }

    #[test]
    fn test_data_keeps_internal_whitespace() {
        let output = "    DisplayName    REG_SZ    Microsoft Visual Studio Code\r\n";
        assert_eq!(
            parse_value(output, "DisplayName").as_deref(),
            Some("Microsoft Visual Studio Code")
        );
    }
}
