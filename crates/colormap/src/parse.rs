//! Ramp text format reader.
//!
//! ```text
//! <min> <max> <rMin> <gMin> <bMin> <rMax> <gMax> <bMax>
//! ```
//!
//! Tokens are read end to end across whitespace (line breaks included), eight
//! per entry. The scan stops for good at the first token that does not parse
//! or when the input runs out in the middle of an entry: entries read before
//! that point are kept, anything after it is ignored.
//!
//! Bounds must be finite decimal numbers (`nan` and `inf` spellings stop the
//! scan). Color components are integers clamped into `0..=255`. A token is
//! accepted or rejected whole: `255abc` is not read as `255`.

use crate::ramp::{Ramp, RampEntry};
use huemap_core::{Error, Result, Rgb};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, warn};

/// Why the token scan ended before a clean end of input.
enum ScanStop {
    Truncated,
    Malformed(String),
}

/// Parse a ramp from a text stream. Never fails; bad content shortens the ramp.
pub fn parse_ramp<R: BufRead>(reader: R) -> Ramp {
    let mut tokens = reader
        .lines()
        .map_while(|line| match line {
            Ok(line) => Some(line),
            Err(e) => {
                debug!(error = %e, "ramp stream read failed; treating as end of input");
                None
            }
        })
        .flat_map(|line| {
            line.split_whitespace()
                .map(str::to_owned)
                .collect::<Vec<_>>()
        });

    let mut ramp = Ramp::new();
    loop {
        match next_entry(&mut tokens) {
            Ok(Some(entry)) => ramp.push(entry),
            Ok(None) => break,
            Err(ScanStop::Truncated) => {
                debug!(entries = ramp.len(), "ramp ends inside an incomplete entry");
                break;
            }
            Err(ScanStop::Malformed(token)) => {
                debug!(
                    entries = ramp.len(),
                    token = %token,
                    "stopping ramp scan at unparseable token"
                );
                break;
            }
        }
    }

    debug!(entries = ramp.len(), "parsed color ramp");
    ramp
}

/// Parse a ramp held in memory
pub fn parse_ramp_str(text: &str) -> Ramp {
    parse_ramp(text.as_bytes())
}

/// Open and parse a ramp file.
///
/// A file that cannot be opened is a fatal configuration error
/// ([`Error::RampUnreadable`]); a file that opens but holds nothing usable
/// yields an empty ramp.
pub fn read_ramp_file<P: AsRef<Path>>(path: P) -> Result<Ramp> {
    let path = path.as_ref();
    let unreadable = |source: io::Error| Error::RampUnreadable {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(unreadable)?;
    if file.metadata().map_err(unreadable)?.is_dir() {
        return Err(unreadable(io::Error::other("is a directory")));
    }

    let ramp = parse_ramp(BufReader::new(file));
    if ramp.is_empty() {
        warn!(path = %path.display(), "color ramp has no entries; every pixel will be black");
    }
    Ok(ramp)
}

fn next_entry<I>(tokens: &mut I) -> std::result::Result<Option<RampEntry>, ScanStop>
where
    I: Iterator<Item = String>,
{
    let Some(first) = tokens.next() else {
        return Ok(None);
    };
    let min = bound(first)?;
    let max = bound(tokens.next().ok_or(ScanStop::Truncated)?)?;
    let min_color = Rgb::new(component(tokens)?, component(tokens)?, component(tokens)?);
    let max_color = Rgb::new(component(tokens)?, component(tokens)?, component(tokens)?);

    Ok(Some(RampEntry::new(min, max, min_color, max_color)))
}

fn bound(token: String) -> std::result::Result<f32, ScanStop> {
    match token.parse::<f32>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ScanStop::Malformed(token)),
    }
}

fn parse_token<T: FromStr>(token: String) -> std::result::Result<T, ScanStop> {
    token.parse().map_err(|_| ScanStop::Malformed(token))
}

fn take<T: FromStr, I: Iterator<Item = String>>(tokens: &mut I) -> std::result::Result<T, ScanStop> {
    parse_token(tokens.next().ok_or(ScanStop::Truncated)?)
}

/// Integer color component; values outside `0..=255` saturate.
fn component<I: Iterator<Item = String>>(tokens: &mut I) -> std::result::Result<u8, ScanStop> {
    let value: i64 = take(tokens)?;
    Ok(value.clamp(0, i64::from(u8::MAX)) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_ENTRIES: &str = "0 10 0 0 0 255 255 255\n10 20 255 0 0 0 255 0\n";

    #[test]
    fn parses_entries_in_file_order() {
        let ramp = parse_ramp_str(TWO_ENTRIES);
        assert_eq!(ramp.len(), 2);
        assert_eq!(
            ramp.entries()[0],
            RampEntry::new(0.0, 10.0, Rgb::new(0, 0, 0), Rgb::new(255, 255, 255))
        );
        assert_eq!(
            ramp.entries()[1],
            RampEntry::new(10.0, 20.0, Rgb::new(255, 0, 0), Rgb::new(0, 255, 0))
        );
    }

    #[test]
    fn malformed_line_ends_scan() {
        let text = format!("{TWO_ENTRIES}abc def\n20 30 1 2 3 4 5 6\n");
        let ramp = parse_ramp_str(&text);
        assert_eq!(ramp.len(), 2);
        assert_eq!(ramp.entries()[1].max, 20.0);
    }

    #[test]
    fn bad_token_mid_entry_drops_that_entry() {
        let ramp = parse_ramp_str("0 1 0 0 0 9 9 9\n1 2 3 x 5 6 7 8\n2 3 0 0 0 1 1 1\n");
        assert_eq!(ramp.len(), 1);
    }

    #[test]
    fn empty_and_blank_input() {
        assert!(parse_ramp_str("").is_empty());
        assert!(parse_ramp_str("\n  \n\t\n").is_empty());
    }

    #[test]
    fn incomplete_trailing_entry_is_dropped() {
        let ramp = parse_ramp_str("0 1 0 0 0 9 9 9\n1 2 3 4\n");
        assert_eq!(ramp.len(), 1);
    }

    #[test]
    fn tokens_flow_across_line_breaks() {
        let ramp = parse_ramp_str("0 1\n0 0 0\n9 9 9 1 2 3 3 3 4 4 4");
        assert_eq!(ramp.len(), 2);
        assert_eq!(ramp.entries()[1].min_color, Rgb::new(3, 3, 3));
    }

    #[test]
    fn float_bounds_and_extra_whitespace() {
        let ramp = parse_ramp_str("  -0.5\t0.25   10 20 30   40 50 60  \r\n");
        assert_eq!(ramp.len(), 1);
        let e = ramp.entries()[0];
        assert_eq!(e.min, -0.5);
        assert_eq!(e.max, 0.25);
        assert_eq!(e.max_color, Rgb::new(40, 50, 60));
    }

    #[test]
    fn oversized_components_saturate() {
        let ramp = parse_ramp_str("0 1 300 0 256 1000 255 0");
        assert_eq!(ramp.entries()[0].min_color, Rgb::new(255, 0, 255));
        assert_eq!(ramp.entries()[0].max_color, Rgb::new(255, 255, 0));
    }

    #[test]
    fn negative_components_saturate_to_zero() {
        let ramp = parse_ramp_str("0 1 -1 0 0 0 0 0\n2 3 1 1 1 1 1 1\n");
        assert_eq!(ramp.len(), 2);
        assert_eq!(ramp.entries()[0].min_color, Rgb::new(0, 0, 0));
        assert_eq!(ramp.entries()[1].min, 2.0);

        let ramp = parse_ramp_str("0 1 -300 +7 -0 0 0 0");
        assert_eq!(ramp.entries()[0].min_color, Rgb::new(0, 7, 0));
    }

    #[test]
    fn fractional_components_stop_scan() {
        assert!(parse_ramp_str("0 1 1.5 0 0 0 0 0\n2 3 1 1 1 1 1 1\n").is_empty());
    }

    #[test]
    fn non_finite_bounds_stop_scan() {
        assert!(parse_ramp_str("nan 1 0 0 0 0 0 0\n0 1 0 0 0 1 1 1\n").is_empty());
        for bad in ["inf", "-inf", "infinity", "NaN", "1e50"] {
            let text = format!("0 1 0 0 0 1 1 1\n1 {bad} 0 0 0 1 1 1\n5 6 0 0 0 1 1 1\n");
            assert_eq!(parse_ramp_str(&text).len(), 1, "bound {bad}");
        }
    }

    #[test]
    fn token_with_numeric_prefix_is_rejected_whole() {
        let ramp = parse_ramp_str("0 1 1 1 1 2 2 2\n0 10 0 0 0 255 255 255abc\n");
        assert_eq!(ramp.len(), 1);
        assert_eq!(ramp.entries()[0].max, 1.0);
    }

    #[test]
    fn no_validation_of_interval_order() {
        let ramp = parse_ramp_str("5 1 0 0 0 0 0 0\n");
        assert_eq!(ramp.len(), 1);
        assert_eq!(ramp.entries()[0].min, 5.0);
    }

    #[test]
    fn written_ramp_parses_back() {
        let ramp = parse_ramp_str("-1.25 0.1 1 2 3 4 5 6\n0.1 7.75 7 8 9 10 11 12\n");
        let again = parse_ramp_str(&ramp.to_string());
        assert_eq!(again, ramp);
        for entry in again.iter() {
            assert_eq!(again.color_at(f64::from(entry.min)), entry.min_color);
        }
    }

    #[test]
    fn read_error_ends_scan() {
        // invalid UTF-8 on the second line makes `lines()` fail there
        let bytes: &[u8] = b"0 1 0 0 0 9 9 9\n\xff\xfe\n1 2 0 0 0 9 9 9\n";
        let ramp = parse_ramp(bytes);
        assert_eq!(ramp.len(), 1);
    }
}
