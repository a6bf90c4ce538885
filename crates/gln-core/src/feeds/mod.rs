//! Per-feed normalization sequences.
//!
//! Each feed's business rules are a fixed, ordered list of configurable
//! steps. The descriptor supplies the data contract (columns, export order,
//! partitioning); the sequences here supply the behavior.

mod company;
mod edibulb;
mod location;
mod plantion;

use gln_model::Feed;

use crate::pipeline::FeedPipeline;

/// Build the normalization pipeline for a feed, if one is registered.
pub fn build_feed_pipeline(feed: &Feed) -> Option<FeedPipeline> {
    match feed.code.to_lowercase().as_str() {
        "company" => Some(company::pipeline(feed)),
        "location" => Some(location::pipeline(feed)),
        "plantion" => Some(plantion::pipeline(feed)),
        "edibulb" => Some(edibulb::pipeline(feed)),
        _ => None,
    }
}

/// Feed codes with a registered normalization sequence.
pub fn registered_feeds() -> Vec<&'static str> {
    vec!["company", "edibulb", "location", "plantion"]
}
