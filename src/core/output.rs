//! Output artifact serialization.
//!
//! The manifest is written pretty-printed so it diffs cleanly; the
//! search data is written compact to keep it small. Each file is
//! first written to `<name>.tmp` next to its target and renamed into
//! place, so a crash mid-write never leaves a truncated artifact.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::core::config::OutputConfig;
use crate::core::error::{IndexError, Result};
use crate::core::types::{Group, SearchRecord};

/// JSON layout of an artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonStyle {
    Pretty,
    Compact,
}

/// Paths of the written artifacts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenArtifacts {
    pub manifest: PathBuf,
    pub search_data: PathBuf,
}

/// Write `value` as JSON to `path` via a temporary sibling file
pub fn write_json_atomic<T: Serialize + ?Sized>(
    path: &Path,
    value: &T,
    style: JsonStyle,
) -> Result<()> {
    let tmp_path = tmp_path_for(path);
    let write_failed = |source: std::io::Error| IndexError::WriteFailed {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(&tmp_path).map_err(write_failed)?;
    let mut writer = BufWriter::new(file);

    let serialized = match style {
        JsonStyle::Pretty => serde_json::to_writer_pretty(&mut writer, value),
        JsonStyle::Compact => serde_json::to_writer(&mut writer, value),
    };
    if let Err(e) = serialized {
        let _ = fs::remove_file(&tmp_path);
        return Err(e.into());
    }

    let flushed = writer
        .into_inner()
        .map_err(|e| e.into_error())
        .and_then(|file| file.sync_all());
    if let Err(e) = flushed {
        let _ = fs::remove_file(&tmp_path);
        return Err(write_failed(e));
    }

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        write_failed(e)
    })?;

    tracing::debug!("Wrote {:?}", path);
    Ok(())
}

/// Write both artifacts into `root`
pub fn write_artifacts(
    root: &Path,
    output: &OutputConfig,
    manifest: &[Group],
    records: &[SearchRecord],
) -> Result<WrittenArtifacts> {
    let manifest_path = root.join(&output.manifest_file);
    let search_data_path = root.join(&output.search_data_file);

    write_json_atomic(&manifest_path, manifest, JsonStyle::Pretty)?;
    write_json_atomic(&search_data_path, records, JsonStyle::Compact)?;

    Ok(WrittenArtifacts {
        manifest: manifest_path,
        search_data: search_data_path,
    })
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
