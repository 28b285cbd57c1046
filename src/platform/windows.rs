//! Windows extension database.
//!
//! Reads file extension associations from the Windows registry.

use crate::extension::ExtensionTable;
use tracing::debug;
use winreg::enums::*;
use winreg::RegKey;

/// Reads HKEY_CLASSES_ROOT for extension associations and their Content-Type values.
pub(super) fn load_windows(table: &mut ExtensionTable) {
    let hkcr = RegKey::predef(HKEY_CLASSES_ROOT);
    let mut added = 0usize;

    for name in hkcr.enum_keys().flatten() {
        // Only extension keys (".ext")
        if name.len() < 2 || !name.starts_with('.') {
            continue;
        }

        let key = match hkcr.open_subkey_with_flags(&name, KEY_READ) {
            Ok(k) => k,
            Err(_) => continue,
        };

        let content_type: String = match key.get_value("Content Type") {
            Ok(v) => v,
            Err(_) => continue,
        };

        // Windows sometimes maps .js to text/plain (Go issue #32350)
        if name == ".js" && (content_type == "text/plain" || content_type == "text/plain; charset=utf-8") {
            continue;
        }

        if table.add_discovered(&name, &content_type) {
            added += 1;
        }
    }

    debug!(added, "loaded registry extension associations");
}
