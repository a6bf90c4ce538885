//! Company coding registry rules.

use gln_model::Feed;

use crate::pipeline::FeedPipeline;
use crate::steps::{
    AlignHeaders, CheckRegistrationFormat, ConditionalClear, FlagDelimiter, FlagDuplicates,
    RequireCompanions, SetConstant, ZeroPad,
};

/// A filled GLN address code must come with a deliverable address.
const GLN_COMPANIONS: [&str; 4] = [
    "street_name",
    "street_number",
    "postal_identification_code",
    "city_name",
];

pub fn pipeline(feed: &Feed) -> FeedPipeline {
    let declared: Vec<String> = feed.rules.iter().map(|rule| rule.column.clone()).collect();
    FeedPipeline::new()
        .add_step(Box::new(AlignHeaders::new(declared)))
        .add_step(Box::new(FlagDelimiter::new(feed.export_delimiter)))
        .add_step(Box::new(RequireCompanions::new(
            "GLN_company_address_code",
            &GLN_COMPANIONS,
        )))
        .add_step(Box::new(ZeroPad::new("chamber_registration_number", 8)))
        .add_step(Box::new(CheckRegistrationFormat::new(
            "chamber_registration_number",
            8,
        )))
        .add_step(Box::new(FlagDuplicates::new("FH_registration_nr")))
        .add_step(Box::new(SetConstant::new("Sector_code", "1")))
        .add_step(Box::new(ConditionalClear::new(
            "expiry_date",
            &["FH_registration_nr", "expiry_date"],
        )))
}
