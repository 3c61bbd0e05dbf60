//! Scoped read/write of serde documents.
//!
//! # Responsibility
//! - Load one JSON document into memory, or report that it is absent.
//! - Overwrite one JSON document from the start and truncate the rest.
//!
//! # Invariants
//! - Handles are dropped on every exit path, including errors.
//! - A successful write is flushed and synced before returning.

use super::{StoreError, StoreResult};
use log::{error, info};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;
use std::time::Instant;

/// Reads and parses a JSON document.
///
/// Returns `Ok(None)` when the file does not exist.
///
/// # Errors
/// - `StoreError::Io` when the file exists but cannot be opened or read.
/// - `StoreError::Malformed` when the content is not valid for `T`.
pub fn read_document<T: DeserializeOwned>(path: &Path) -> StoreResult<Option<T>> {
    let started_at = Instant::now();

    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            info!(
                "event=document_read module=store status=missing path={}",
                path.display()
            );
            return Ok(None);
        }
        Err(err) => {
            error!(
                "event=document_read module=store status=error error_code=open_failed path={} error={}",
                path.display(),
                err
            );
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source: err,
            });
        }
    };

    match serde_json::from_reader(BufReader::new(file)) {
        Ok(value) => {
            info!(
                "event=document_read module=store status=ok path={} duration_ms={}",
                path.display(),
                started_at.elapsed().as_millis()
            );
            Ok(Some(value))
        }
        Err(err) => {
            error!(
                "event=document_read module=store status=error error_code=parse_failed path={} error={}",
                path.display(),
                err
            );
            // serde_json reports read failures through the same error type.
            if err.is_io() {
                return Err(StoreError::Io {
                    path: path.to_path_buf(),
                    source: err.into(),
                });
            }
            Err(StoreError::Malformed {
                path: path.to_path_buf(),
                source: err,
            })
        }
    }
}

/// Serializes `value` and replaces the whole document at `path`.
///
/// # Side effects
/// - Creates missing parent directories and the file itself.
/// - Truncates any bytes left over from a previous, longer document.
pub fn write_document<T: Serialize>(path: &Path, value: &T) -> StoreResult<()> {
    let started_at = Instant::now();

    match write_document_inner(path, value) {
        Ok(()) => {
            info!(
                "event=document_write module=store status=ok path={} duration_ms={}",
                path.display(),
                started_at.elapsed().as_millis()
            );
            Ok(())
        }
        Err(err) => {
            error!(
                "event=document_write module=store status=error path={} duration_ms={} error={}",
                path.display(),
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

fn write_document_inner<T: Serialize>(path: &Path, value: &T) -> StoreResult<()> {
    let io_err = |source: std::io::Error| StoreError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }

    // Serialize before opening so a serializer failure never truncates the file.
    let mut bytes = serde_json::to_vec_pretty(value).map_err(|source| StoreError::Malformed {
        path: path.to_path_buf(),
        source,
    })?;
    bytes.push(b'\n');

    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(io_err)?;

    let mut writer = BufWriter::new(file);
    writer.write_all(&bytes).map_err(io_err)?;
    let file = writer
        .into_inner()
        .map_err(|err| io_err(err.into_error()))?;
    file.sync_all().map_err(io_err)?;
    Ok(())
}
