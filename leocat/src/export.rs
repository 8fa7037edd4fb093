//! Export artifact naming

use tletypes::prelude::UtcTimestamp;

/// Timestamp layout baked into artifact names
pub const ARTIFACT_STAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// File name for an export artifact generated at `stamp`
pub fn artifact_name(basename: &str, stamp: UtcTimestamp) -> String {
    format!("{}_{}.txt", basename, stamp.format(ARTIFACT_STAMP_FORMAT))
}
