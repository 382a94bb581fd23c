use crate::{LoadError, LoadOptions, MalformedPolicy, Record};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, warn};

pub fn load_file(path: impl AsRef<Path>, options: LoadOptions) -> Result<Vec<Record>, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    let records = load_reader(BufReader::new(file), options)?;
    debug!(path = %path.display(), records = records.len(), "loaded tick records");
    Ok(records)
}

pub fn load_reader<R: BufRead>(reader: R, options: LoadOptions) -> Result<Vec<Record>, LoadError> {
    let mut records = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|source| LoadError::Read {
            line: line_no,
            source,
        })?;

        match parse_line(&line, line_no) {
            Ok(Some(record)) => records.push(record),
            Ok(None) => {}
            Err(err) => match options.malformed {
                MalformedPolicy::Fail => return Err(err),
                MalformedPolicy::Skip => warn!(line = line_no, %err, "skipping malformed line"),
            },
        }
    }
    Ok(records)
}

/// Parses one `symbol interval volume high low` line. Blank lines yield `None`.
pub fn parse_line(line: &str, line_no: usize) -> Result<Option<Record>, LoadError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let &[symbol, interval, volume, high, low] = fields.as_slice() else {
        if fields.is_empty() {
            return Ok(None);
        }
        return Err(LoadError::FieldCount {
            line: line_no,
            found: fields.len(),
        });
    };

    Ok(Some(Record {
        symbol: symbol.to_string(),
        interval: parse_field(interval, "interval", line_no)?,
        volume: parse_finite(volume, "volume", line_no)?,
        high: parse_finite(high, "high", line_no)?,
        low: parse_finite(low, "low", line_no)?,
    }))
}

fn parse_field<T: FromStr>(value: &str, field: &'static str, line: usize) -> Result<T, LoadError> {
    value.parse::<T>().map_err(|_| invalid_number(value, field, line))
}

/// Like `parse_field`, but `nan` and infinities are invalid.
fn parse_finite(value: &str, field: &'static str, line: usize) -> Result<f64, LoadError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| invalid_number(value, field, line))
}

fn invalid_number(value: &str, field: &'static str, line: usize) -> LoadError {
    LoadError::InvalidNumber {
        line,
        field,
        value: value.to_string(),
    }
}
