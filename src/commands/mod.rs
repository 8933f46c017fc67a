//! Command implementations for the Yahoo Fantasy data CLI

pub mod data;


use serde::Serialize;
use std::path::PathBuf;

use crate::{cli::DirArgs, storage::YahooData, yahoo::records::season_dir, Result, YahooError};

/// Resolve the directory override of a record command.
///
/// `--dir` is used as given; `--season` maps to the season sub-directory of the
/// data directory; neither means the data directory itself.
pub fn resolve_dir(data: &YahooData, args: &DirArgs) -> Option<PathBuf> {
    args.dir
        .clone()
        .or_else(|| args.season.map(|season| season_dir(data.data_dir(), season)))
}

/// Pretty-print structured data the way it is stored on disk.
pub fn prettify_data<T: Serialize + ?Sized>(data: &T) -> Result<String> {
    serde_json::to_string_pretty(data).map_err(YahooError::from)
}
