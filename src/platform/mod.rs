//! Platform-specific extension databases.

#[cfg(unix)]
mod unix;

#[cfg(windows)]
mod windows;

use crate::extension::ExtensionTable;

/// Adds the host's extension mappings to `table` without replacing existing ones.
///
/// On Unix systems, reads from:
/// - /usr/share/mime/globs2 (FreeDesktop Shared MIME-info Database)
/// - /etc/mime.types, /etc/apache2/mime.types, etc.
///
/// On Windows, reads from:
/// - Registry HKEY_CLASSES_ROOT for extension associations
pub(crate) fn load_system(table: &mut ExtensionTable) {
    #[cfg(unix)]
    {
        unix::load_unix(table);
    }

    #[cfg(windows)]
    {
        windows::load_windows(table);
    }

    #[cfg(not(any(unix, windows)))]
    {
        // Unsupported platform, use builtin types only
        let _ = table;
    }
}
