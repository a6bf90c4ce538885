pub mod delimited;
pub mod findings;
pub mod naming;

pub use delimited::write_delimited;
pub use findings::write_findings;
pub use naming::{artifact_name, today_stamp};
