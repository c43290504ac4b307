//! Match log persistence
//!
//! The log file is only touched on explicit request: appending the match
//! just logged, saving the whole log, reloading it, or archiving it on reset.

use chrono::Local;
use pairing_core::{Match, Scheduler};
use std::fs::{self, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use tempfile::NamedTempFile;
use std::path::{Path, PathBuf};

use crate::error::{Result, TournamentError};

/// Append one match to the log file, creating it if needed.
///
/// A hand-edited file missing its final newline gets one first, so the new
/// record always starts on its own line.
pub fn append_match(path: &Path, scheduler: &Scheduler, m: &Match) -> Result<()> {
    let line = scheduler.format_match(m)?;
    let mut file = OpenOptions::new()
        .create(true)
        .read(true)
        .append(true)
        .open(path)
        .map_err(|e| TournamentError::io(path, e))?;
    if !ends_with_newline(&mut file).map_err(|e| TournamentError::io(path, e))? {
        writeln!(file).map_err(|e| TournamentError::io(path, e))?;
    }
    writeln!(file, "{}", line).map_err(|e| TournamentError::io(path, e))?;
    tracing::debug!(path = %path.display(), %line, "match appended");
    Ok(())
}

/// Write the whole log, replacing the file only once it is fully written.
pub fn save_log(path: &Path, scheduler: &Scheduler) -> Result<()> {
    let text = scheduler.to_log_text()?;
    atomic_write(path, text.as_bytes())?;
    tracing::info!(path = %path.display(), matches = scheduler.log().len(), "match log saved");
    Ok(())
}

/// Replace the scheduler's log with the file's contents.
///
/// Nothing changes if the file cannot be read or any line fails to parse.
pub fn load_log(path: &Path, scheduler: &mut Scheduler) -> Result<usize> {
    let text = fs::read_to_string(path).map_err(|e| TournamentError::io(path, e))?;
    let count = scheduler.load_log_text(&text)?;
    tracing::info!(path = %path.display(), matches = count, "match log loaded");
    Ok(count)
}

/// Like [`load_log`], but a missing file just means no matches yet.
pub fn load_log_if_present(path: &Path, scheduler: &mut Scheduler) -> Result<usize> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no match log yet");
        return Ok(0);
    }
    load_log(path, scheduler)
}

/// Move the log file aside to a timestamped backup and clear the in-memory log.
///
/// Returns the backup path, or `None` when there was no file to archive.
pub fn backup_and_reset(path: &Path, scheduler: &mut Scheduler) -> Result<Option<PathBuf>> {
    let backup = if path.exists() {
        let backup = backup_path(path, &Local::now().format("%Y-%m-%d_%H-%M-%S").to_string());
        fs::rename(path, &backup).map_err(|e| TournamentError::io(path, e))?;
        tracing::info!(from = %path.display(), to = %backup.display(), "match log archived");
        Some(backup)
    } else {
        None
    };
    scheduler.reset_log();
    Ok(backup)
}

/// `main/matchlog.txt` -> `main/matchlog_backup-<stamp>.txt`
fn backup_path(path: &Path, stamp: &str) -> PathBuf {
    let stem = path.file_stem().map(|s| s.to_string_lossy()).unwrap_or_default();
    let name = match path.extension() {
        Some(ext) => format!("{}_backup-{}.{}", stem, stamp, ext.to_string_lossy()),
        None => format!("{}_backup-{}", stem, stamp),
    };
    path.with_file_name(name)
}

/// Empty files count as terminated.
fn ends_with_newline(file: &mut fs::File) -> std::io::Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(true);
    }
    let mut last = [0u8; 1];
    file.seek(SeekFrom::End(-1))?;
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}

// The temp file lives next to the target so the rename stays on one
// filesystem; it is removed on drop if anything fails before the rename.
fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(|e| TournamentError::io(dir, e))?;
    file.write_all(data).map_err(|e| TournamentError::io(file.path(), e))?;
    file.as_file().sync_all().map_err(|e| TournamentError::io(file.path(), e))?;

    file.persist(path).map_err(|e| TournamentError::io(path, e.error))?;
    Ok(())
}
