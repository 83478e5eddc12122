//! input — loading excitation records from text.
//!
//! Records arrive as plain text with one sample per line (for example the
//! `.dat` accelerogram exports of strong-motion databases). Each line is
//! trimmed and its longest leading decimal literal parsed; whatever follows
//! (a unit glued to the number, a separator, a time column, a comment) is
//! ignored, so `0.15g` reads as `0.15` and `1.5abc` as `1.5`.
//!
//! A literal is an optional sign, digits with at most one decimal point, and
//! an exponent only when exponent digits follow. The one non-decimal form
//! accepted is `Infinity` (optionally signed), which is kept so that
//! [`ExcitationRecord`] validation reports it with its index. Lines with no
//! leading literal, including `NaN`, `inf` and `infinity`, are skipped.
use crate::response::{
    core::record::{ExcitationKind, ExcitationRecord},
    errors::{ResponseError, ResponseResult},
};
use std::path::Path;

/// Parse one sample per line from `text`.
///
/// # Errors
/// - `ResponseError::NonFiniteExcitation` if a line starts with `Infinity`
///   or `-Infinity`.
///
/// # Examples
/// ```rust
/// # use rust_duhamel::input::parse_excitation;
/// # use rust_duhamel::response::core::record::ExcitationKind;
/// let record = parse_excitation("0.0\n0.15 g\nheader\n\n-0.2", ExcitationKind::BaseAcceleration).unwrap();
/// assert_eq!(record.samples().to_vec(), vec![0.0, 0.15, -0.2]);
/// ```
pub fn parse_excitation(text: &str, kind: ExcitationKind) -> ResponseResult<ExcitationRecord> {
    let samples: Vec<f64> = text.lines().filter_map(parse_line).collect();
    ExcitationRecord::from_vec(samples, kind)
}

/// Read `path` and parse it with [`parse_excitation`].
///
/// # Errors
/// - `ResponseError::Io { path, reason }` when the file cannot be read.
/// - Any error from [`parse_excitation`].
pub fn read_excitation_file<P: AsRef<Path>>(
    path: P, kind: ExcitationKind,
) -> ResponseResult<ExcitationRecord> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|err| ResponseError::Io {
        path: path.display().to_string(),
        reason: err.to_string(),
    })?;
    parse_excitation(&text, kind)
}

// ---- Helper Methods ----

fn parse_line(line: &str) -> Option<f64> {
    let text = line.trim_start();
    text[..numeric_prefix_len(text)?].parse::<f64>().ok()
}

/// Byte length of the longest decimal literal (or signed `Infinity`) at the
/// start of `text`, or `None` when there is none.
fn numeric_prefix_len(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..].iter().take_while(|b| b.is_ascii_digit()).count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    if text[end..].starts_with("Infinity") {
        return Some(end + "Infinity".len());
    }

    let int_digits = digits_from(end);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_from(end + 1);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exp_digits = digits_from(end + 1 + sign);
        if exp_digits > 0 {
            end += 1 + sign + exp_digits;
        }
    }
    Some(end)
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Leading-literal parsing with trailing columns, separators, and
    //   glued units.
    // - Skipping of blank, textual, NaN, and `inf` lines.
    // - `Infinity` samples surfacing as record validation errors.
    // - I/O failures mapping to `ResponseError::Io`.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Only the leading numeric token of each trimmed line is used.
    //
    // Given
    // -----
    // - Lines with surrounding whitespace, a trailing comma, and extra columns.
    //
    // Expect
    // ------
    // - Samples [1.5, -2e-3, 4, 0.25] in line order.
    fn parses_leading_tokens() {
        let text = "  1.5  \n-2e-3, 0.02\n4 m/s2\n\t0.25";

        let record = parse_excitation(text, ExcitationKind::Force).unwrap();

        assert_eq!(record.samples().to_vec(), vec![1.5, -2e-3, 4.0, 0.25]);
        assert_eq!(record.kind, ExcitationKind::Force);
    }

    #[test]
    // Purpose
    // -------
    // Non-numeric, empty, and NaN lines are dropped.
    fn skips_unparsable_and_nan_lines() {
        let text = "PEER NGA record\n\nNaN\n0.1\nnan\n# comment\n0.2\n";

        let record = parse_excitation(text, ExcitationKind::BaseAcceleration).unwrap();

        assert_eq!(record.samples().to_vec(), vec![0.1, 0.2]);
    }

    #[test]
    // Purpose
    // -------
    // The `Infinity` spelling is kept and rejected by record validation.
    //
    // Given
    // -----
    // - `Infinity` on the third line; `-Infinity` with a unit on the second.
    //
    // Expect
    // ------
    // - `NonFiniteExcitation` at the index of the first infinite sample.
    fn infinite_values_are_reported() {
        let err = parse_excitation("0.0\n1.0\nInfinity\n2.0", ExcitationKind::Force).unwrap_err();
        assert_eq!(err, ResponseError::NonFiniteExcitation { index: 2, value: f64::INFINITY });

        let err = parse_excitation("0.0\n-Infinity m/s2", ExcitationKind::Force).unwrap_err();
        assert_eq!(err, ResponseError::NonFiniteExcitation { index: 1, value: f64::NEG_INFINITY });
    }

    #[test]
    // Purpose
    // -------
    // A number followed directly by text keeps its numeric prefix.
    //
    // Given
    // -----
    // - `0.15g`, `1.5abc`, `2e`, `3.e-2x`, `.5,`, and `-7E+1;` lines.
    //
    // Expect
    // ------
    // - Samples [0.15, 1.5, 2, 0.03, 0.5, −70]; a dangling exponent marker is
    //   not part of the number.
    fn glued_suffixes_keep_numeric_prefix() {
        let text = "0.15g\n1.5abc\n2e\n3.e-2x\n.5,\n-7E+1;";

        let record = parse_excitation(text, ExcitationKind::BaseAcceleration).unwrap();

        assert_eq!(record.samples().to_vec(), vec![0.15, 1.5, 2.0, 0.03, 0.5, -70.0]);
    }

    #[test]
    // Purpose
    // -------
    // Lowercase infinity spellings and bare signs or points are not numbers.
    //
    // Given
    // -----
    // - `inf`, `-inf`, `infinity`, `+`, `.`, and `-.e3` lines around two samples.
    //
    // Expect
    // ------
    // - Only the two real samples survive and no error is raised.
    fn lowercase_infinity_and_bare_signs_are_skipped() {
        let text = "0.1\ninf\n-inf\ninfinity\n+\n.\n-.e3\n0.2";

        let record = parse_excitation(text, ExcitationKind::Force).unwrap();

        assert_eq!(record.samples().to_vec(), vec![0.1, 0.2]);
    }

    #[test]
    fn empty_text_gives_empty_record() {
        let record = parse_excitation("", ExcitationKind::Force).unwrap();

        assert!(record.is_empty());
    }

    #[test]
    // Purpose
    // -------
    // Reading a missing file is an `Io` error naming the path.
    fn missing_file_is_io_error() {
        let path = std::env::temp_dir().join("rust_duhamel_missing_record_4f1c.dat");

        let err = read_excitation_file(&path, ExcitationKind::Force).unwrap_err();

        match err {
            ResponseError::Io { path: reported, .. } => {
                assert!(reported.ends_with("rust_duhamel_missing_record_4f1c.dat"))
            }
            other => panic!("expected Io, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // A file on disk round-trips through `read_excitation_file`.
    fn reads_record_from_file() {
        let path = std::env::temp_dir()
            .join(format!("rust_duhamel_record_{}.dat", std::process::id()));
        std::fs::write(&path, "0.0\n0.5\n-0.5\n").unwrap();

        let record = read_excitation_file(&path, ExcitationKind::BaseAcceleration);
        let _ = std::fs::remove_file(&path);

        assert_eq!(record.unwrap().samples().to_vec(), vec![0.0, 0.5, -0.5]);
    }
}
