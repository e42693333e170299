use crate::core::io::traits::StructureFile;
use crate::core::models::atom::{AtomRecord, RecordType};
use nalgebra::Point3;
use std::io::{self, BufRead};
use std::str::FromStr;
use thiserror::Error;
use tracing::warn;

const MIN_ATOM_LINE_LENGTH: usize = 54;

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse { line: usize, kind: PdbParseErrorKind },
    #[error("No ATOM/HETATM records found, check the file format")]
    NoAtomRecords,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PdbParseErrorKind {
    #[error("Invalid integer format in columns {columns} (value: '{value}')")]
    InvalidInt { columns: &'static str, value: String },
    #[error("Invalid float format in columns {columns} (value: '{value}')")]
    InvalidFloat { columns: &'static str, value: String },
    #[error("Required field in columns {columns} is empty")]
    MissingRequiredField { columns: &'static str },
    #[error("Line is too short for ATOM/HETATM record (must be at least 54 chars)")]
    LineTooShort,
}

fn slice_and_trim(line: &str, start: usize, end: usize) -> &str {
    line.get(start..end).unwrap_or("").trim()
}

fn parse_field<T: FromStr>(
    line: &str,
    start: usize,
    end: usize,
    columns: &'static str,
    on_error: fn(&'static str, String) -> PdbParseErrorKind,
) -> Result<T, PdbParseErrorKind> {
    let raw = slice_and_trim(line, start, end);
    if raw.is_empty() {
        return Err(PdbParseErrorKind::MissingRequiredField { columns });
    }
    raw.parse().map_err(|_| on_error(columns, raw.to_string()))
}

/// Reads the serial column: plain decimal, or hybrid-36 as written for structures with
/// more than 99,999 atoms.
fn parse_serial(raw: &str) -> Option<usize> {
    raw.parse().ok().or_else(|| decode_hybrid36(raw))
}

fn decode_hybrid36(raw: &str) -> Option<usize> {
    let width = u32::try_from(raw.len()).ok()?;
    let first = raw.chars().next()?;
    let offset = if raw.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase())
        && first.is_ascii_uppercase()
    {
        0
    } else if raw.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase())
        && first.is_ascii_lowercase()
    {
        26 * 36usize.checked_pow(width - 1)?
    } else {
        return None;
    };
    let value = usize::from_str_radix(raw, 36).ok()?;
    let shift = 10 * 36usize.checked_pow(width - 1)?;
    let decimal_range = 10usize.checked_pow(width)?;
    Some(value.checked_sub(shift)? + decimal_range + offset)
}

fn invalid_int(columns: &'static str, value: String) -> PdbParseErrorKind {
    PdbParseErrorKind::InvalidInt { columns, value }
}

fn invalid_float(columns: &'static str, value: String) -> PdbParseErrorKind {
    PdbParseErrorKind::InvalidFloat { columns, value }
}

/// Fixed-column reader for the coordinate section of PDB files.
///
/// Only the first model is read. Alternate locations other than the blank or `A`
/// conformer are skipped so every atom appears once.
pub struct PdbFile;

impl PdbFile {
    fn parse_atom_line(line: &str, record_type: RecordType) -> Result<AtomRecord, PdbParseErrorKind> {
        if line.len() < MIN_ATOM_LINE_LENGTH {
            return Err(PdbParseErrorKind::LineTooShort);
        }

        let serial = parse_serial(slice_and_trim(line, 6, 11));
        let name = slice_and_trim(line, 12, 16);
        if name.is_empty() {
            return Err(PdbParseErrorKind::MissingRequiredField { columns: "13-16" });
        }
        let residue_name = slice_and_trim(line, 17, 20);
        if residue_name.is_empty() {
            return Err(PdbParseErrorKind::MissingRequiredField { columns: "18-20" });
        }
        let chain_id = slice_and_trim(line, 21, 22).chars().next().unwrap_or(' ');
        let residue_number: isize = parse_field(line, 22, 26, "23-26", invalid_int)?;
        let x: f64 = parse_field(line, 30, 38, "31-38", invalid_float)?;
        let y: f64 = parse_field(line, 38, 46, "39-46", invalid_float)?;
        let z: f64 = parse_field(line, 46, 54, "47-54", invalid_float)?;

        Ok(AtomRecord {
            record_type,
            serial,
            name: name.to_string(),
            residue_name: residue_name.to_string(),
            chain_id,
            residue_number,
            position: Point3::new(x, y, z),
        })
    }

    fn is_primary_location(line: &str) -> bool {
        matches!(line.get(16..17), None | Some(" ") | Some("A"))
    }
}

impl StructureFile for PdbFile {
    type Error = PdbError;

    fn read_from(reader: &mut impl BufRead) -> Result<Vec<AtomRecord>, Self::Error> {
        let mut records = Vec::new();

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;

            match slice_and_trim(&line, 0, 6) {
                keyword @ ("ATOM" | "HETATM") => {
                    if !Self::is_primary_location(&line) {
                        continue;
                    }
                    let record_type = RecordType::from_str(keyword).unwrap_or_default();
                    match Self::parse_atom_line(&line, record_type) {
                        Ok(record) => records.push(record),
                        // Hetero groups never become residue positions.
                        Err(kind) if record_type == RecordType::Hetatm => {
                            warn!(line = line_num, "Skipping malformed {} record: {}", record_type, kind);
                        }
                        Err(kind) => {
                            return Err(PdbError::Parse {
                                line: line_num,
                                kind,
                            });
                        }
                    }
                }
                "ENDMDL" | "END" => break,
                _ => {}
            }
        }

        if records.is_empty() {
            return Err(PdbError::NoAtomRecords);
        }
        Ok(records)
    }
}
