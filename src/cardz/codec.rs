//! The filename grammar: `NNNNNNNNNNNN-NNNNNNNNNNNN-title.pdf`.
//!
//! Twelve zero-padded digits of wake-up time, a dash, twelve digits of
//! last-review time, a dash, then the title with its `.pdf` suffix. Both
//! stamps are raw Unix seconds; twelve digits last until the year 33658.
//!
//! This module is the exclusive holder of the grammar. Everything else in
//! the crate handles [`Card`]s, never raw name strings.

use crate::error::{CardzError, Result};
use crate::model::Card;

const STAMP_DIGITS: usize = 12;
const TITLE_START: usize = 2 * STAMP_DIGITS + 2;
const PDF_SUFFIX: &[u8] = b".pdf";

/// Builds the filename for a stamp pair and title.
pub fn encode(awake: u64, sleep: u64, title: &str) -> String {
    format!("{:012}-{:012}-{}", awake, sleep, title)
}

/// Parses a filename into a card. Anything that does not match the grammar
/// exactly is `MalformedName`.
pub fn decode(name: &str) -> Result<Card> {
    let malformed = || CardzError::MalformedName(name.to_string());

    let bytes = name.as_bytes();
    if bytes.len() < TITLE_START + PDF_SUFFIX.len() + 1 {
        return Err(malformed());
    }
    if bytes[STAMP_DIGITS] != b'-' || bytes[TITLE_START - 1] != b'-' {
        return Err(malformed());
    }
    // Stamp bytes are all ASCII, so the slicing below stays on char
    // boundaries.
    if !bytes[..STAMP_DIGITS].iter().all(u8::is_ascii_digit)
        || !bytes[STAMP_DIGITS + 1..TITLE_START - 1]
            .iter()
            .all(u8::is_ascii_digit)
    {
        return Err(malformed());
    }

    let title = &name[TITLE_START..];
    if !is_pdf(title) {
        return Err(malformed());
    }

    let awake = name[..STAMP_DIGITS].parse().map_err(|_| malformed())?;
    let sleep = name[STAMP_DIGITS + 1..TITLE_START - 1]
        .parse()
        .map_err(|_| malformed())?;
    Ok(Card::new(awake, sleep, title))
}

/// Case-insensitive `.pdf` suffix with a non-empty stem. Used by the bulk
/// commands to tell PDFs from everything else in the directory.
pub fn is_pdf(name: &str) -> bool {
    let bytes = name.as_bytes();
    bytes.len() > PDF_SUFFIX.len()
        && bytes[bytes.len() - PDF_SUFFIX.len()..].eq_ignore_ascii_case(PDF_SUFFIX)
}
