//! Reader for string-model dumps: QCD strings plus baryon-carrying partons.
//!
//! String rows must decode; a broken row is an error because every string
//! carries energy. Parton rows that do not decode are skipped.

use std::io::BufRead;
use std::path::Path;

use tracing::{debug, info};

use super::{EmitterFileError, EmitterList, data_rows, open_required, parse_columns};
use crate::source::{Parton, QcdString};

/// Read a QCD string list.
///
/// # Errors
/// - `MissingFile` if the file cannot be opened
/// - `Parse` for a row with fewer than nine numbers or violating
///   `tau_form > 0`, `eta_s_right >= eta_s_left`, `y_r >= y_l`
pub fn read_string_file(path: &Path) -> Result<EmitterList<QcdString>, EmitterFileError> {
    let reader = open_required(path)?;
    let list = parse_strings(reader, path)?;
    info!(
        path = %path.display(),
        strings = list.len(),
        tau_max = list.max_formation_time,
        "read QCD string list"
    );
    Ok(list)
}

/// Parse a QCD string list from any buffered reader.
///
/// `path` only labels errors.
pub fn parse_strings<R: BufRead>(
    reader: R,
    path: &Path,
) -> Result<EmitterList<QcdString>, EmitterFileError> {
    let (_header, rows) = data_rows(reader, path)?;
    let mut list = EmitterList::new();

    for (line, text) in rows {
        let parse_error = |message: String| EmitterFileError::Parse {
            path: path.to_path_buf(),
            line,
            message,
        };

        let [norm, delta_e, tau_form, x_perp, y_perp, eta_s_left, eta_s_right, y_l, y_r] =
            parse_columns::<9>(&text).map_err(parse_error)?;
        let string = QcdString {
            norm,
            delta_e,
            tau_form,
            x_perp,
            y_perp,
            eta_s_left,
            eta_s_right,
            y_l,
            y_r,
        };
        if !string.is_valid() {
            return Err(parse_error(format!(
                "invalid string: tau_form = {tau_form}, eta_s = [{eta_s_left}, {eta_s_right}], y = [{y_l}, {y_r}]"
            )));
        }
        list.push(string, tau_form);
    }

    Ok(list)
}

/// Read the baryon-carrying parton list of the string model.
///
/// Each parton carries baryon number 1. Rows that do not decode or have
/// τ ≤ 0 are skipped.
///
/// # Errors
/// - `MissingFile` if the file cannot be opened
pub fn read_baryon_parton_file(path: &Path) -> Result<EmitterList<Parton>, EmitterFileError> {
    let reader = open_required(path)?;
    let list = parse_baryon_partons(reader, path)?;
    info!(
        path = %path.display(),
        partons = list.len(),
        tau_max = list.max_formation_time,
        "read baryon parton list"
    );
    if list.skipped > 0 {
        debug!(skipped = list.skipped, "dropped unusable parton rows");
    }
    Ok(list)
}

/// Parse a string-model parton list from any buffered reader.
pub fn parse_baryon_partons<R: BufRead>(
    reader: R,
    path: &Path,
) -> Result<EmitterList<Parton>, EmitterFileError> {
    let (_header, rows) = data_rows(reader, path)?;
    let mut list = EmitterList::new();

    for (_line, text) in rows {
        match parse_columns::<5>(&text) {
            Ok([tau, x, y, eta_s, rapidity]) if tau > 0.0 => {
                list.push(Parton::baryon(tau, x, y, eta_s, rapidity), tau);
            }
            _ => list.skipped += 1,
        }
    }

    Ok(list)
}
