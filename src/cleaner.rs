use crate::error::Result;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Normalizes one raw row.
///
/// Tabs become spaces, double quotes are dropped and whitespace runs collapse
/// to a single space. Returns `None` when nothing is left, so blank rows do not
/// reach the cleaned file. Applying it to its own output is a no-op.
pub fn clean_line(raw: &str) -> Option<String> {
    let stripped: String = raw
        .chars()
        .filter(|c| *c != '"')
        .map(|c| if c == '\t' { ' ' } else { c })
        .collect();
    let cleaned = stripped.split_whitespace().collect::<Vec<_>>().join(" ");
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

/// Writes the cleaned form of every line in `input` to `output`.
pub fn clean_lines<R: BufRead, W: Write>(input: R, mut output: W) -> Result<usize> {
    let mut written = 0usize;
    for line in input.lines() {
        if let Some(cleaned) = clean_line(&line?) {
            writeln!(output, "{}", cleaned)?;
            written += 1;
        }
    }
    output.flush()?;
    Ok(written)
}

/// Derives the cleaned file at `clean` from the raw file at `raw`.
///
/// Output goes to a temp file next to `clean` and is moved into place only
/// once every row has been written; on any error the temp file is removed.
pub fn clean_file(raw: &Path, clean: &Path) -> Result<usize> {
    debug!("Cleaning {} into {}", raw.display(), clean.display());
    let reader = BufReader::new(File::open(raw)?);

    let dir = match clean.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    let written = clean_lines(reader, BufWriter::new(tmp.as_file_mut()))?;
    tmp.persist(clean).map_err(|e| e.error)?;

    info!("{} file created ({} rows)", clean.display(), written);
    Ok(written)
}
