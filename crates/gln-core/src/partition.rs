//! Active/Expired partitioning.

use anyhow::Result;
use polars::prelude::{BooleanChunked, DataFrame, NewChunkedArray};

use crate::data_utils::cell_present;

/// The two output sets of a partitioned feed.
#[derive(Debug, Clone)]
pub struct Partitioned {
    /// Rows without a value in the partition column (still active).
    pub active: DataFrame,
    /// Rows with a value in the partition column (expired).
    pub expired: DataFrame,
}

/// Split a frame by presence of a value in `column`.
///
/// Every input row lands in exactly one of the two outputs. A frame without
/// the column partitions entirely into `active`.
pub fn partition_by_presence(df: &DataFrame, column: &str) -> Result<Partitioned> {
    if df.column(column).is_err() {
        return Ok(Partitioned {
            active: df.clone(),
            expired: df.head(Some(0)),
        });
    }
    let expired_rows: Vec<bool> = (0..df.height())
        .map(|idx| cell_present(df, column, idx))
        .collect();
    let active_rows: Vec<bool> = expired_rows.iter().map(|hit| !hit).collect();
    let expired_mask = BooleanChunked::from_slice("expired".into(), &expired_rows);
    let active_mask = BooleanChunked::from_slice("active".into(), &active_rows);
    Ok(Partitioned {
        active: df.filter(&active_mask)?,
        expired: df.filter(&expired_mask)?,
    })
}
