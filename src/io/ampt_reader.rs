//! Reader for AMPT parton lists in lab-frame light-cone coordinates.

use std::io::BufRead;
use std::path::Path;

use tracing::{debug, info};

use super::{EmitterFileError, EmitterList, data_rows, open_required, parse_columns};
use crate::source::Parton;

/// Read an AMPT parton file.
///
/// Rows outside the forward light cone, with non-positive mass², or that
/// do not decode are skipped.
///
/// # Errors
/// - `MissingFile` if the file cannot be opened
pub fn read_ampt_file(path: &Path) -> Result<EmitterList<Parton>, EmitterFileError> {
    let reader = open_required(path)?;
    let list = parse_ampt_partons(reader, path)?;
    info!(
        path = %path.display(),
        partons = list.len(),
        declared = ?list.declared,
        tau_max = list.max_formation_time,
        "read AMPT parton list"
    );
    if list.skipped > 0 {
        debug!(skipped = list.skipped, "dropped partons outside the forward light cone");
    }
    Ok(list)
}

/// Parse an AMPT parton list from any buffered reader.
pub fn parse_ampt_partons<R: BufRead>(
    reader: R,
    path: &Path,
) -> Result<EmitterList<Parton>, EmitterFileError> {
    let (header, rows) = data_rows(reader, path)?;
    let mut list = EmitterList::new();
    list.declared = header
        .split_whitespace()
        .next()
        .and_then(|token| token.parse().ok());

    for (_line, text) in rows {
        let parton = parse_columns::<8>(&text)
            .ok()
            .and_then(|[t, x, y, z, e, px, py, pz]| Parton::from_light_cone(t, x, y, z, e, px, py, pz));
        match parton {
            Some(p) => list.push(p, p.tau),
            None => list.skipped += 1,
        }
    }

    Ok(list)
}
