use std::{io::BufReader, path::Path};

use bar_sat::{builder::ParserInfo, context::Context, types::err::ErrorKind};

pub(super) enum ReadError {
    FailedToOpen(std::io::Error),
    Parse(ErrorKind),
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            Self::FailedToOpen(e) => write!(f, "Failed to open formula file: {e}"),
            Self::Parse(e) => write!(f, "Parse error: {e}"),
        }
    }
}

/// Reads the formula file at `path` to `context`.
pub(super) fn read_formula(path: &Path, context: &mut Context) -> Result<ParserInfo, ReadError> {
    log::info!("Reading formula from {path:?}");

    let file = std::fs::File::open(path).map_err(ReadError::FailedToOpen)?;
    let info = context
        .read_formula(BufReader::new(&file))
        .map_err(ReadError::Parse)?;

    log::info!("Read {} clauses on {} atoms", info.clauses, info.atoms);
    Ok(info)
}
