pub mod feed;
pub mod report;
pub mod rules;

pub use feed::Feed;
pub use report::{Advisory, RunReport, Violation, ViolationKind};
pub use rules::{CharClass, FieldRule, RuleTable};
