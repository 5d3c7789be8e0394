pub mod config;
pub mod entries;
pub mod export;
pub mod init;
pub mod summary;

use crate::config::Config;
use crate::core::{Core, Roster, RosterRules};
use crate::errors::AppResult;
use crate::ocr::PlainTextExtractor;
use crate::utils::path::expand_tilde;

/// Read and process the roster named on the command line.
pub(crate) fn load_roster(input: &str, cfg: &Config) -> AppResult<Roster> {
    let path = expand_tilde(input);
    Core::load(&path, &PlainTextExtractor, &RosterRules::from(cfg))
}
