//! Reads raw target lines from a targets file.
//!
//! The file is a headerless, single-column CSV. Only the first field of each
//! record is used; blank records and `#` comments are skipped.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};

use crate::error::InputError;

pub fn read_targets(path: &Path) -> Result<Vec<String>, InputError> {
    let file = File::open(path).map_err(|source| InputError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    parse_targets(file)
}

pub fn parse_targets<R: Read>(reader: R) -> Result<Vec<String>, InputError> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut targets = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        if let Some(first) = record.get(0)
            && !first.is_empty()
        {
            targets.push(first.to_string());
        }
    }
    Ok(targets)
}
