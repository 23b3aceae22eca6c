//! The action table shipped with the crate.
//!
//! Declaration order within a resource type is the order in which resolved
//! action names are reported.

use crate::constants::*;
use crate::permissions::types::ActionRecord;

pub fn builtin_records() -> Vec<ActionRecord> {
    vec![
        ActionRecord::new(404, MDL_BOOKMARKS, PRM_VIEW, 1),
        ActionRecord::new(401, MDL_BOOKMARKS, PRM_ADD_ENTRY, 2),
        ActionRecord::new(402, MDL_BOOKMARKS, PRM_PERMISSIONS, 4),
        ActionRecord::new(403, MDL_BOOKMARKS, PRM_SUBSCRIBE, 8),
        ActionRecord::new(405, MDL_BOOKMARKS, PRM_ADD_FOLDER, 16),
        ActionRecord::new(410, MDL_BOOKMARKS_ENTRY, PRM_VIEW, 1),
        ActionRecord::new(406, MDL_BOOKMARKS_ENTRY, PRM_DELETE, 2),
        ActionRecord::new(407, MDL_BOOKMARKS_ENTRY, PRM_PERMISSIONS, 4),
        ActionRecord::new(408, MDL_BOOKMARKS_ENTRY, PRM_UPDATE, 8),
        ActionRecord::new(409, MDL_BOOKMARKS_ENTRY, PRM_SUBSCRIBE, 16),
        ActionRecord::new(417, MDL_BOOKMARKS_FOLDER, PRM_VIEW, 1),
        ActionRecord::new(411, MDL_BOOKMARKS_FOLDER, PRM_ADD_ENTRY, 2),
        ActionRecord::new(412, MDL_BOOKMARKS_FOLDER, PRM_DELETE, 4),
        ActionRecord::new(413, MDL_BOOKMARKS_FOLDER, PRM_PERMISSIONS, 8),
        ActionRecord::new(414, MDL_BOOKMARKS_FOLDER, PRM_ADD_SUBFOLDER, 16),
        ActionRecord::new(415, MDL_BOOKMARKS_FOLDER, PRM_UPDATE, 32),
        ActionRecord::new(416, MDL_BOOKMARKS_FOLDER, PRM_SUBSCRIBE, 64),
        ActionRecord::new(418, MDL_BOOKMARKS_FOLDER, PRM_ACCESS, 128),
    ]
}
