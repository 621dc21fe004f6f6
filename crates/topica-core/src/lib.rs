pub mod rules;
pub mod types;

pub use rules::{CategoryRule, RuleTable, RuleTableError};
pub use types::*;
