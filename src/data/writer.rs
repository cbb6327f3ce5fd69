use super::dataset::{DatasetSplits, Split, TokenizedExample};
use crate::error::{ConvertError, Result};
use serde::Serialize;
use serde_json::ser::Formatter;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

pub trait DatasetWriter {
    /// Persist the splits under `out_dir`, returning the files written.
    fn write_dataset(
        &self,
        splits: &DatasetSplits,
        out_dir: &Path,
        dataset_name: &str,
    ) -> Result<Vec<PathBuf>>;
}

/// Writes `<name>.<split>.json` files: a JSON array with one
/// `{"sentiment": 1, "text": [..]}` object per line.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonDatasetWriter;

impl JsonDatasetWriter {
    pub fn split_path(out_dir: &Path, dataset_name: &str, split: Split) -> PathBuf {
        out_dir.join(format!("{}.{}.json", dataset_name, split.name()))
    }
}

impl DatasetWriter for JsonDatasetWriter {
    fn write_dataset(
        &self,
        splits: &DatasetSplits,
        out_dir: &Path,
        dataset_name: &str,
    ) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(out_dir).map_err(|e| ConvertError::io(out_dir, e))?;

        let mut written = Vec::with_capacity(3);
        for (split, data) in splits.iter() {
            let path = Self::split_path(out_dir, dataset_name, split);
            write_list(&path, data)?;
            tracing::info!("Wrote {} items to {}", data.len(), path.display());
            written.push(path);
        }
        Ok(written)
    }
}

fn write_list(path: &Path, data: &[TokenizedExample]) -> Result<()> {
    let file = File::create(path).map_err(|e| ConvertError::io(path, e))?;
    let mut out = BufWriter::new(file);

    write_records(&mut out, data)
        .and_then(|_| out.flush())
        .map_err(|e| ConvertError::io(path, e))
}

fn write_records<W: Write>(out: &mut W, data: &[TokenizedExample]) -> io::Result<()> {
    out.write_all(b"[\n")?;
    for (idx, datum) in data.iter().enumerate() {
        out.write_all(b"  ")?;
        datum.serialize(&mut serde_json::Serializer::with_formatter(
            &mut *out,
            SpacedFormatter,
        ))?;
        if idx + 1 < data.len() {
            out.write_all(b",")?;
        }
        out.write_all(b"\n")?;
    }
    out.write_all(b"]\n")
}

/// Compact single-line JSON with `", "` and `": "` separators.
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b": ")
    }
}
