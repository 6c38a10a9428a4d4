//! Line-oriented port file reader.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use sn_core::Point;
use sn_sim::World;
use tracing::{debug, info};

use crate::{LoadError, LoadResult, parse_point, take_point};

/// One parsed line of the port file.
#[derive(Clone, Debug, PartialEq)]
pub struct PortRecord {
    /// 1-based line number the record came from.
    pub line:         usize,
    pub name:         String,
    pub location:     Point,
    pub initial_fuel: f64,
    pub fuel_rate:    f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Read every port record from the file at `path`.
pub fn load_ports_file(path: &Path, max_name_len: usize) -> LoadResult<Vec<PortRecord>> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let records = load_ports_reader(file, max_name_len)?;
    info!(path = %path.display(), ports = records.len(), "port file loaded");
    Ok(records)
}

/// Like [`load_ports_file`] but accepts any `Read` source.
///
/// Stops at the first malformed line.
pub fn load_ports_reader<R: Read>(reader: R, max_name_len: usize) -> LoadResult<Vec<PortRecord>> {
    let mut records = Vec::new();
    for (idx, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        if let Some(record) = parse_line(idx + 1, &line, max_name_len)? {
            records.push(record);
        }
    }
    Ok(records)
}

/// Add every record to `world` in file order.
///
/// Stops at the first record the world rejects (typically a name clash);
/// records before it stay registered.
pub fn register_ports(world: &mut World, records: &[PortRecord]) -> LoadResult<()> {
    for r in records {
        world
            .add_port(&r.name, r.location, r.initial_fuel, r.fuel_rate)
            .map_err(|source| LoadError::Register { line: r.line, source })?;
    }
    Ok(())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_line(line: usize, text: &str, max_name_len: usize) -> LoadResult<Option<PortRecord>> {
    let mut tokens = text.split_whitespace();
    let Some(name) = tokens.next() else {
        return Ok(None);
    };
    if name.chars().count() > max_name_len {
        return Err(LoadError::NameTooLong { line, name: name.to_owned(), max: max_name_len });
    }

    let coords = take_point(&mut tokens).ok_or(LoadError::MissingCoordinates { line })?;
    let location = parse_point(&coords).ok_or(LoadError::BadCoordinates { line, text: coords })?;

    let (Some(fuel), Some(rate)) = (tokens.next(), tokens.next()) else {
        return Err(LoadError::MissingFuel { line });
    };
    let initial_fuel = parse_amount(line, fuel)?;
    let fuel_rate = parse_amount(line, rate)?;
    if initial_fuel < 0.0 || fuel_rate < 0.0 {
        return Err(LoadError::NegativeFuel { line });
    }

    debug!(line, port = name, at = %location, "port record");
    Ok(Some(PortRecord {
        line,
        name: name.to_owned(),
        location,
        initial_fuel,
        fuel_rate,
    }))
}

fn parse_amount(line: usize, text: &str) -> LoadResult<f64> {
    match text.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(LoadError::BadNumber { line, text: text.to_owned() }),
    }
}
