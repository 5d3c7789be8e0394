use crate::core::grouping::group_trips;
use crate::core::merge::merge;
use crate::core::parser::parse_roster;
use crate::core::rules::RosterRules;
use crate::errors::AppResult;
use crate::export::message::trips_to_message;
use crate::export::rows::trips_to_sheet_rows;
use crate::models::{DutyEntry, SheetRow, Trip};
use crate::ocr::{TextExtractor, read_document};
use std::path::Path;
use tracing::info;

/// Merged duty entries of one roster document plus the rules they were
/// parsed with.
#[derive(Debug, Clone)]
pub struct Roster {
    pub entries: Vec<DutyEntry>,
    pub rules: RosterRules,
}

impl Roster {
    pub fn trips(&self) -> Vec<Trip<'_>> {
        group_trips(&self.entries, &self.rules.home_base)
    }

    pub fn summary(&self) -> String {
        trips_to_message(&self.trips(), &self.rules.home_base)
    }

    pub fn sheet_rows(&self) -> Vec<SheetRow> {
        trips_to_sheet_rows(&self.trips(), &self.rules.home_base)
    }
}

pub struct Core;

impl Core {
    /// Text → parsed rows → merged entries.
    pub fn process(text: &str, rules: &RosterRules) -> AppResult<Roster> {
        let parsed = parse_roster(text, rules)?;
        let parsed_count = parsed.len();
        let entries = merge(parsed);

        info!(
            parsed = parsed_count,
            merged = entries.len(),
            "roster processed"
        );

        Ok(Roster {
            entries,
            rules: rules.clone(),
        })
    }

    /// Read a document through the text extractor and process it.
    pub fn load(
        path: &Path,
        extractor: &dyn TextExtractor,
        rules: &RosterRules,
    ) -> AppResult<Roster> {
        let text = read_document(path, extractor)?;
        Self::process(&text, rules)
    }
}
