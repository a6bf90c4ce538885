//! Plantion GLN mutation rules.
//!
//! The packed mail feed arrives with a partial column set; the descriptor's
//! field list names every column the export template expects. Requester
//! rows get the sector code, and the production country mirrors the address
//! country.

use gln_model::Feed;

use crate::pipeline::FeedPipeline;
use crate::steps::{
    AlignHeaders, CopyColumn, EnsureColumns, FlagDelimiter, RepairExponentNotation, SetConstant,
};

pub fn pipeline(feed: &Feed) -> FeedPipeline {
    let declared: Vec<String> = feed.rules.iter().map(|rule| rule.column.clone()).collect();
    FeedPipeline::new()
        .add_step(Box::new(AlignHeaders::new(declared.clone())))
        .add_step(Box::new(EnsureColumns { columns: declared }))
        .add_step(Box::new(RepairExponentNotation::new("GLN_code_requester")))
        .add_step(Box::new(RepairExponentNotation::new(
            "GLN_company_address_code",
        )))
        .add_step(Box::new(RepairExponentNotation::new(
            "GLN_company_address_code_organisation",
        )))
        .add_step(Box::new(
            SetConstant::new("Sector_code", "1").where_present("GLN_code_requester"),
        ))
        .add_step(Box::new(CopyColumn::new(
            "country_name_code",
            "country_prod_code",
        )))
        .add_step(Box::new(FlagDelimiter::new(feed.export_delimiter)))
}
