//! Dated artifact naming.
//!
//! Output files carry the run date the way the registry uploads always
//! have: `<feed>[_part]_<YYYYMMDD>.<ext>`.

use chrono::Local;

/// Today's date stamp for output names.
pub fn today_stamp() -> String {
    Local::now().format("%Y%m%d").to_string()
}

/// Build an artifact file name from its parts.
pub fn artifact_name(feed: &str, part: Option<&str>, stamp: &str, ext: &str) -> String {
    match part {
        Some(part) => format!("{feed}_{part}_{stamp}.{ext}"),
        None => format!("{feed}_{stamp}.{ext}"),
    }
}
