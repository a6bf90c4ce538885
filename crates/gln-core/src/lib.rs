//! Field normalization core.
//!
//! Business rules for the registry feeds: row-level transforms, identifier
//! repair, Active/Expired partitioning, and the per-feed step pipelines that
//! string them together.

pub mod data_utils;
pub mod feeds;
pub mod notation;
pub mod partition;
pub mod pipeline;
pub mod steps;
pub mod transforms;

pub use feeds::{build_feed_pipeline, registered_feeds};
pub use notation::{repair_exponent_column, repair_exponent_notation};
pub use partition::{Partitioned, partition_by_presence};
pub use pipeline::{FeedPipeline, NormalizeStep};
