//! EDIBULB mutation rules.
//!
//! Several sender mailboxes are merged into one run before this sequence.
//! Rows without a company name are attachment padding and are dropped; the
//! remaining rows get their level/role codes, identifier repairs, and the
//! export column order from the descriptor.

use gln_model::Feed;

use crate::pipeline::FeedPipeline;
use crate::steps::{
    AlignHeaders, DefaultEmptyColumn, DeriveFlag, DropRowsWhereEmpty, EnsureColumns,
    FlagDelimiter, RepairExponentNotation, SelectColumns, ZeroPad,
};

pub fn pipeline(feed: &Feed) -> FeedPipeline {
    let declared: Vec<String> = feed.rules.iter().map(|rule| rule.column.clone()).collect();
    FeedPipeline::new()
        .add_step(Box::new(AlignHeaders::new(declared.clone())))
        .add_step(Box::new(EnsureColumns {
            columns: declared.clone(),
        }))
        .add_step(Box::new(DeriveFlag::new(
            "company_name",
            "company_level_code",
            "2",
        )))
        .add_step(Box::new(DeriveFlag::new(
            "company_name",
            "company_role_code",
            "O",
        )))
        .add_step(Box::new(DropRowsWhereEmpty::new("company_name")))
        .add_step(Box::new(DefaultEmptyColumn::new(
            "postal_identification_code",
            "0",
        )))
        .add_step(Box::new(DefaultEmptyColumn::new("street_name", "0")))
        .add_step(Box::new(RepairExponentNotation::new("GLN")))
        .add_step(Box::new(ZeroPad::new("chamber_registration_number", 8)))
        .add_step(Box::new(FlagDelimiter::new(feed.export_delimiter)))
        .add_step(Box::new(SelectColumns::new(declared)))
}
