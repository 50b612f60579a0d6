//! Text report printed by the `emdofi` binary.

use std::io::{self, Write};

use crate::domain::Domain;

/// Attribution printed after a successful lookup.
pub const FOOTER: &str = "[=] EMDOFI, Made by aet\n    https://twitter.com/meakaaet";

/// Write the lookup report for `query`.
///
/// With matches: a header, one line per domain, then the footer. Without
/// matches: a single "not found" line.
pub fn write_report<W: Write>(out: &mut W, query: &str, found: &[Domain]) -> io::Result<()> {
    if found.is_empty() {
        return writeln!(out, "[x] No domains matching {} were found", query);
    }

    writeln!(out, "[+] Domains matching for {}:", query)?;
    for domain in found {
        writeln!(out, "[-] {}", domain)?;
    }
    writeln!(out, "{}", FOOTER)
}
