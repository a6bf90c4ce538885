pub mod delimited;
pub mod discovery;
pub mod error;
pub mod frame;
pub mod packed;

pub use delimited::{DelimitedTable, read_delimited_table, read_delimited_table_str, sniff_delimiter};
pub use discovery::{find_all_sources, find_latest_source};
pub use error::{IngestError, Result};
pub use frame::{build_frame, build_merged_frame};
pub use packed::{explode_packed_lines, read_packed_table};
