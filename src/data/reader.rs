use super::dataset::RawExample;
use super::label::convert_label;
use crate::error::{ConvertError, FormatError, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

const NUM_FIELDS: usize = 5;
const LABEL_FIELD: usize = 3;
const TEXT_FIELD: usize = 4;

/// Read every data line of a SemEval sentiment file. Line 0 is the header.
pub fn read_file(path: &Path) -> Result<Vec<RawExample>> {
    let file = File::open(path).map_err(|e| ConvertError::io(path, e))?;
    let examples = read_examples(file, path)?;

    tracing::info!("Read {} texts from {}", examples.len(), path.display());
    Ok(examples)
}

/// `path` is only used to give errors some context.
pub fn read_examples<R: Read>(mut reader: R, path: &Path) -> Result<Vec<RawExample>> {
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .map_err(|e| ConvertError::io(path, e))?;

    let mut examples = Vec::new();
    for (line_idx, line) in split_lines(&content).enumerate() {
        if line_idx == 0 {
            continue;
        }
        let example = parse_line(line_idx, line).map_err(|source| ConvertError::Format {
            path: path.to_path_buf(),
            source,
        })?;
        examples.push(example);
    }

    Ok(examples)
}

// `\n`, `\r\n` and a lone `\r` all end a line.
fn split_lines(content: &str) -> impl Iterator<Item = &str> {
    let mut rest = content;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let line = match rest.find(['\r', '\n']) {
            Some(end) => {
                let line = &rest[..end];
                let skip = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[end + skip..];
                line
            }
            None => std::mem::take(&mut rest),
        };
        Some(line)
    })
}

pub fn parse_line(line_idx: usize, line: &str) -> std::result::Result<RawExample, FormatError> {
    let pieces: Vec<&str> = line.splitn(NUM_FIELDS, ',').collect();
    if pieces.len() != NUM_FIELDS {
        return Err(FormatError::FieldCount {
            line_idx,
            found: pieces.len(),
            line: line.to_string(),
        });
    }

    let text = strip_quotes(pieces[TEXT_FIELD]);
    let sentiment = convert_label(pieces[LABEL_FIELD]).map_err(|source| FormatError::Label {
        line_idx,
        line: line.to_string(),
        source,
    })?;

    Ok(RawExample::new(sentiment, text.to_string()))
}

// Only one enclosing pair is removed; quotes inside the text are left alone.
fn strip_quotes(text: &str) -> &str {
    match text.split_once('"') {
        Some(("", rest)) => rest.rsplit_once('"').map_or(rest, |(inner, _)| inner),
        _ => text,
    }
}
