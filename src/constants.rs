/// Well-known resource types and action names.
///
/// Resource types are fully-qualified model names. Each one namespaces its own
/// set of action bits, so the same action name may carry a different bit value
/// under different resource types.
pub const MDL_BOOKMARKS: &str = "com.liferay.bookmarks";
pub const MDL_BOOKMARKS_ENTRY: &str = "com.liferay.bookmarks.model.BookmarksEntry";
pub const MDL_BOOKMARKS_FOLDER: &str = "com.liferay.bookmarks.model.BookmarksFolder";

pub const PRM_ACCESS: &str = "ACCESS";
pub const PRM_ADD_ENTRY: &str = "ADD_ENTRY";
pub const PRM_ADD_FOLDER: &str = "ADD_FOLDER";
pub const PRM_ADD_SUBFOLDER: &str = "ADD_SUBFOLDER";
pub const PRM_DELETE: &str = "DELETE";
pub const PRM_PERMISSIONS: &str = "PERMISSIONS";
pub const PRM_SUBSCRIBE: &str = "SUBSCRIBE";
pub const PRM_UPDATE: &str = "UPDATE";
pub const PRM_VIEW: &str = "VIEW";

/// Short names accepted wherever a resource type is expected.
pub const RESOURCE_TYPE_ALIASES: &[(&str, &str)] = &[
    ("bookmarks", MDL_BOOKMARKS),
    ("bookmarks-entry", MDL_BOOKMARKS_ENTRY),
    ("bookmarks-folder", MDL_BOOKMARKS_FOLDER),
    ("BookmarksEntry", MDL_BOOKMARKS_ENTRY),
    ("BookmarksFolder", MDL_BOOKMARKS_FOLDER),
];

/// Highest bit value an action may own. Table files are TOML, whose integers
/// are signed 64-bit, so bit 63 is unavailable.
pub const MAX_BIT_VALUE: u64 = 1 << 62;

/// Highest record id a table file can carry.
pub const MAX_RECORD_ID: u64 = i64::MAX as u64;

/// Composite value used by the CLI when run without a subcommand.
pub const DEMO_COMPOSITE: u64 = 144;

/// Maps a short alias to its fully-qualified resource type. Unknown names are
/// returned unchanged.
pub fn resolve_resource_type(name: &str) -> &str {
    RESOURCE_TYPE_ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map_or(name, |(_, model)| *model)
}
