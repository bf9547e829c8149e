/// Application name and metadata constants
pub const APP_QUALIFIER: &str = "com";
pub const APP_ORGANIZATION: &str = "revision-diff";
pub const APP_NAME: &str = "revision-diff";

/// Largest LCS table the checked differencers build by default, enough for
/// two 5,000-line documents
pub const DEFAULT_MAX_TABLE_CELLS: usize = 25_000_000;

/// Revision store layout
pub const BLOB_DIR: &str = "blobs";
pub const HISTORY_DIR: &str = "history";
