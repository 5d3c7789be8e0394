pub mod grouping;
pub mod logic;
pub mod merge;
pub mod parser;
pub mod rules;

pub use logic::{Core, Roster};
pub use rules::RosterRules;
