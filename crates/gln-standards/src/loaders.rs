#![deny(unsafe_code)]

use std::path::Path;

use gln_model::Feed;

use crate::descriptor::Descriptor;
use crate::error::StandardsError;
use crate::paths::fields_path;

/// Load a single feed descriptor file.
pub fn load_descriptor(path: &Path) -> Result<Feed, StandardsError> {
    let text = std::fs::read_to_string(path).map_err(|e| StandardsError::io(path, e))?;
    let descriptor: Descriptor = toml::from_str(&text).map_err(|source| StandardsError::Toml {
        path: path.to_path_buf(),
        source,
    })?;
    descriptor
        .check()
        .map_err(|message| StandardsError::InvalidDescriptor {
            path: path.to_path_buf(),
            message,
        })?;
    Ok(descriptor.into_feed())
}

/// Load every feed descriptor found in a directory.
///
/// Results are sorted by feed code so listings and reports are stable.
pub fn load_feeds_from(dir: &Path) -> Result<Vec<Feed>, StandardsError> {
    let entries = std::fs::read_dir(dir).map_err(|e| StandardsError::io(dir, e))?;
    let mut feeds = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| StandardsError::io(dir, e))?;
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("toml") {
            continue;
        }
        feeds.push(load_descriptor(&path)?);
    }
    feeds.sort_by(|a, b| a.code.cmp(&b.code));
    Ok(feeds)
}

/// Load all feed descriptors from the default standards directory.
pub fn load_default_feeds() -> Result<Vec<Feed>, StandardsError> {
    load_feeds_from(&fields_path())
}

/// Load one feed by code from the default standards directory.
pub fn load_feed(code: &str) -> Result<Feed, StandardsError> {
    let feeds = load_default_feeds()?;
    feeds
        .into_iter()
        .find(|feed| feed.code.eq_ignore_ascii_case(code))
        .ok_or_else(|| StandardsError::UnknownFeed {
            feed: code.to_string(),
        })
}
