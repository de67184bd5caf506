//! Line-oriented output of text instances.
//!
//! Each instance becomes one line, in order: either its label alone (an
//! empty line for unlabeled instances) or the full `L"w1 w2"` form that
//! [`super::parser`] reads back.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::document::TextInstance;
use crate::error::Result;

/// Write `instances` to `writer`, one per line.
pub fn write_instances<'a, W, I>(writer: &mut W, instances: I, include_words: bool) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a TextInstance>,
{
    for instance in instances {
        if include_words {
            writeln!(writer, "{instance}")?;
        } else {
            writeln!(writer, "{}", instance.label().unwrap_or(""))?;
        }
    }
    writer.flush()?;
    Ok(())
}

/// Write `instances` to the file at `path`, replacing its contents.
pub fn save_instances<'a, P, I>(path: P, instances: I, include_words: bool) -> Result<()>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = &'a TextInstance>,
{
    let mut writer = BufWriter::new(File::create(path)?);
    write_instances(&mut writer, instances, include_words)
}
