//! Feed descriptors: the versioned data contract for each registry feed.
//!
//! A descriptor names a feed, the source-document pattern it is fetched
//! under, its export settings, and the per-column field rules (character
//! class + maximum length). Descriptors live under `standards/fields/` and
//! are data: amending one is a contract change, not a code change.

pub mod descriptor;
pub mod error;
pub mod loaders;
pub mod paths;

pub use descriptor::{Descriptor, FeedHeader, FieldEntry};
pub use error::StandardsError;
pub use loaders::{load_default_feeds, load_descriptor, load_feed, load_feeds_from};
pub use paths::{STANDARDS_ENV_VAR, standards_root};
