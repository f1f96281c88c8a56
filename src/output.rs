//! Output formatting for query results.

use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Bytes of context shown on each side of a highlighted match.
const CONTEXT_BYTES: usize = 24;

/// Print one query result: the pattern, its offset (or -1 for a miss),
/// and a context snippet with the match highlighted.
pub fn print_match(
    pattern: &str,
    source: &[u8],
    position: Option<usize>,
    color: bool,
) -> io::Result<()> {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    let Some(pos) = position else {
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
        write!(stdout, "{}", pattern)?;
        stdout.reset()?;
        writeln!(stdout, ": -1")?;
        return Ok(());
    };

    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
    write!(stdout, "{}", pattern)?;
    stdout.reset()?;
    writeln!(stdout, ": {}", pos)?;

    let end_of_match = pos + pattern.len();
    let start = pos.saturating_sub(CONTEXT_BYTES);
    let end = (end_of_match + CONTEXT_BYTES).min(source.len());

    write!(stdout, "  ")?;
    if start > 0 {
        write!(stdout, "...")?;
    }
    write!(stdout, "{}", String::from_utf8_lossy(&source[start..pos]))?;
    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
    write!(stdout, "{}", String::from_utf8_lossy(&source[pos..end_of_match]))?;
    stdout.reset()?;
    write!(stdout, "{}", String::from_utf8_lossy(&source[end_of_match..end]))?;
    if end < source.len() {
        write!(stdout, "...")?;
    }
    writeln!(stdout)?;

    Ok(())
}
