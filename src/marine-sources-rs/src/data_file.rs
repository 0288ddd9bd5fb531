use crate::{
    Error, Result,
    error::error::{IoSnafu, MissingCsvEntrySnafu, ZipSnafu},
};
use csv::DeserializeRecordsIntoIter;
use serde::de::DeserializeOwned;
use snafu::ResultExt;
use std::{
    io::Read,
    path::{Path, PathBuf},
};
use tracing::{debug, instrument};

/// A tabular source file on disk, ready to be deserialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataFile {
    file_path: PathBuf,
}

/// Lazily deserializes records from a csv reader.
///
/// Each item is either a record or the error of a single row. Rows that fail to deserialize do
/// not end the iteration, the caller decides whether to skip them or to stop.
pub struct RecordIter<R, D> {
    inner: DeserializeRecordsIntoIter<R, D>,
}

impl<R: Read, D: DeserializeOwned> Iterator for RecordIter<R, D> {
    type Item = Result<D>;

    fn next(&mut self) -> Option<Result<D>> {
        self.inner.next().map(|r| r.map_err(Error::from))
    }
}

/// Creates a record iterator over any reader containing comma separated data with a header
/// row.
pub fn deserialize_reader<R: Read, D: DeserializeOwned>(reader: R) -> RecordIter<R, D> {
    let csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Fields)
        .flexible(true)
        .from_reader(reader);

    RecordIter {
        inner: csv_reader.into_deserialize(),
    }
}

impl DataFile {
    pub fn new(file_path: PathBuf) -> DataFile {
        DataFile { file_path }
    }

    /// Opens `path` as a data file. For zip archives the lexicographically first csv entry is
    /// extracted into a sub directory of `work_dir`, other entries are left in the archive.
    pub fn open(path: &Path, work_dir: &Path) -> Result<DataFile> {
        let is_archive = path
            .extension()
            .is_some_and(|e| e.eq_ignore_ascii_case("zip"));

        if is_archive {
            DataFile::from_archive(path, work_dir)
        } else {
            Ok(DataFile::new(path.to_path_buf()))
        }
    }

    #[instrument]
    pub fn from_archive(archive_path: &Path, work_dir: &Path) -> Result<DataFile> {
        let file = std::fs::File::open(archive_path).context(IoSnafu)?;
        let mut archive = zip::ZipArchive::new(file).context(ZipSnafu)?;

        let Some(file_name) = archive
            .file_names()
            .filter(|n| n.to_ascii_lowercase().ends_with(".csv"))
            .min()
            .map(String::from)
        else {
            return MissingCsvEntrySnafu {
                path: archive_path.to_path_buf(),
            }
            .fail();
        };

        let extract_dir_name = archive_path
            .file_stem()
            .map(|s| s.to_os_string())
            .unwrap_or_else(|| "archive".into());
        let extract_path = work_dir.join(extract_dir_name);

        let mut entry = archive.by_name(&file_name).context(ZipSnafu)?;
        let Some(entry_path) = entry.enclosed_name() else {
            return MissingCsvEntrySnafu {
                path: archive_path.to_path_buf(),
            }
            .fail();
        };

        let file_path = extract_path.join(entry_path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).context(IoSnafu)?;
        }
        let mut output = std::fs::File::create(&file_path).context(IoSnafu)?;
        std::io::copy(&mut entry, &mut output).context(IoSnafu)?;

        debug!("extracted '{file_name}' to {}", file_path.display());

        Ok(DataFile { file_path })
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    pub fn into_deserialize<T: DeserializeOwned>(self) -> Result<RecordIter<std::fs::File, T>> {
        let file = std::fs::File::open(&self.file_path).context(IoSnafu)?;
        Ok(deserialize_reader(file))
    }
}
