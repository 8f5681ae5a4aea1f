//! Text rendering of a Stop Monitoring response.

use std::io::{self, Write};

use crate::siri::SmResponse;

/// Banner printed above the body of a `200 OK` response.
pub const SUCCESS_BANNER: &str = "API Response:";

/// Write the report for `response` to `out`.
///
/// A `200` gets the success banner, anything else gets an `Error: <status>`
/// line. The raw body follows either way, then a newline.
pub fn write_report<W: Write>(response: &SmResponse, out: &mut W) -> io::Result<()> {
    if response.is_ok() {
        writeln!(out, "{SUCCESS_BANNER}")?;
    } else {
        writeln!(out, "Error: {}", response.status)?;
    }
    writeln!(out, "{}", response.body)?;
    out.flush()
}
