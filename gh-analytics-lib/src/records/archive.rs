//! Decoding of CSV tables stored inside a `.tar.gz` archive.

use crate::Result;
use camino::{Utf8Path, Utf8PathBuf};
use core::fmt::{Display, Formatter, Result as FmtResult};
use csv::{Reader, StringRecord};
use flate2::bufread::GzDecoder;
use ohno::IntoAppError;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::time::Instant;
use tar::Archive;

/// Log target for archive decoding
const LOG_TARGET: &str = "   archive";

/// The requested CSV table is not present in the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableNotFound {
    pub table: String,

    /// Path of the archive that was searched, when it was read from a file.
    pub archive: Option<Utf8PathBuf>,
}

impl Display for TableNotFound {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match &self.archive {
            Some(archive) => write!(f, "no such file '{}' in archive '{archive}'", self.table),
            None => write!(f, "no such file '{}' in archive", self.table),
        }
    }
}

impl core::error::Error for TableNotFound {}

/// Decode the CSV table `csv_name` from the `.tar.gz` archive at `archive_path`.
pub fn decode_table_by_path<T: DeserializeOwned>(archive_path: &Utf8Path, csv_name: &str) -> Result<Vec<T>> {
    let file = File::open(archive_path).into_app_err_with(|| format!("unable to open archive '{archive_path}'"))?;

    let rows = find_table(BufReader::new(file), csv_name).into_app_err_with(|| format!("unable to load '{csv_name}' from '{archive_path}'"))?;
    rows.ok_or_else(|| TableNotFound {
        table: csv_name.to_string(),
        archive: Some(archive_path.to_path_buf()),
    })
    .into_app_err_with(|| format!("unable to find '{csv_name}' in archive '{archive_path}'"))
}

/// Decode the CSV table `csv_name` from a gzip-compressed tar stream.
///
/// Entries are scanned in archive order and the first entry whose path equals `csv_name` is
/// decoded. A leading `./` on entry paths is ignored, since some tar tools add one.
pub fn decode_table<T: DeserializeOwned>(reader: impl BufRead, csv_name: &str) -> Result<Vec<T>> {
    find_table(reader, csv_name)?
        .ok_or_else(|| TableNotFound {
            table: csv_name.to_string(),
            archive: None,
        })
        .into_app_err_with(|| format!("unable to find '{csv_name}' in archive"))
}

fn find_table<T: DeserializeOwned>(reader: impl BufRead, csv_name: &str) -> Result<Option<Vec<T>>> {
    let mut archive = Archive::new(GzDecoder::new(reader));

    for entry in archive.entries().into_app_err("unable to read archive")? {
        let entry = entry.into_app_err("unable to read archive entry")?;
        let matches = entry_matches(&entry.path().into_app_err("invalid entry path in archive")?, csv_name);
        if !matches {
            continue;
        }

        let start = Instant::now();
        log::debug!(target: LOG_TARGET, "Decoding '{csv_name}'");

        let rows = decode_csv(entry).into_app_err_with(|| format!("unable to decode CSV file '{csv_name}'"))?;

        log::info!(
            target: LOG_TARGET,
            "Decoded {} rows from '{csv_name}' in {:.3}s",
            rows.len(),
            start.elapsed().as_secs_f64()
        );

        return Ok(Some(rows));
    }

    Ok(None)
}

fn entry_matches(path: &Path, csv_name: &str) -> bool {
    let wanted = Path::new(csv_name.strip_prefix("./").unwrap_or(csv_name));
    path.strip_prefix("./").unwrap_or(path) == wanted
}

fn decode_csv<T: DeserializeOwned>(csv_entry: impl Read) -> Result<Vec<T>> {
    let mut csv_reader = Reader::from_reader(csv_entry);

    let headers = csv_reader.headers()?.clone();
    let mut record = StringRecord::new();
    let mut rows = Vec::new();
    while csv_reader.read_record(&mut record)? {
        let row = record
            .deserialize(Some(&headers))
            .into_app_err_with(|| format!("malformed row at line {}", record.position().map_or(0, csv::Position::line)))?;
        rows.push(row);
    }

    Ok(rows)
}
