//! Location coding registry rules.
//!
//! Locations keep their expiry dates: the run is partitioned into active
//! and expired sets at export, so nothing is cleared here.

use gln_model::Feed;

use crate::pipeline::FeedPipeline;
use crate::steps::{AlignHeaders, FlagDelimiter, FlagDuplicates, SetConstant, ZeroPad};

pub fn pipeline(feed: &Feed) -> FeedPipeline {
    let declared: Vec<String> = feed.rules.iter().map(|rule| rule.column.clone()).collect();
    FeedPipeline::new()
        .add_step(Box::new(AlignHeaders::new(declared)))
        .add_step(Box::new(FlagDelimiter::new(feed.export_delimiter)))
        .add_step(Box::new(ZeroPad::new("chamber_registration_number", 8)))
        .add_step(Box::new(ZeroPad::new("FH_registration_nr", 8)))
        .add_step(Box::new(FlagDuplicates::new("FH_registration_nr")))
        .add_step(Box::new(SetConstant::new("Sector_code", "1")))
}
