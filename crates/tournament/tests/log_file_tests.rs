//! Tests for match log persistence
//!
//! Covers:
//! - Save / load round trip into a fresh session
//! - Per-match append
//! - All-or-nothing reload
//! - Archive on reset

use pairing_core::{Participant, ParticipantId, Roster, Scheduler, SchedulerError};
use std::fs;
use tournament::{log_file, TournamentError};

fn roster() -> Roster {
    Roster::new(vec![
        Participant::new(1, "ヨッシー").with_secondary_name("Yossy").with_region("JP"),
        Participant::new(2, "Raven"),
        Participant::new(3, "Walter").with_region("Rubicon"),
        Participant::new(4, "Carla"),
    ])
    .unwrap()
}

fn played(rounds: usize) -> Scheduler {
    let mut scheduler = Scheduler::new(roster());
    for i in 0..rounds {
        let (a, b) = scheduler.suggest().unwrap().ids();
        scheduler.log_match(a, b, (i % 3) as u32, 1).unwrap();
    }
    scheduler
}

// =============================================================================
// Save / load
// =============================================================================

#[test]
fn test_save_then_load_on_fresh_instance() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("matchlog.txt");
    let original = played(8);

    log_file::save_log(&path, &original).unwrap();
    assert!(!path.with_extension("tmp").exists());

    let mut fresh = Scheduler::new(roster());
    assert_eq!(log_file::load_log(&path, &mut fresh).unwrap(), 8);
    assert_eq!(fresh.log(), original.log());
    assert_eq!(fresh.max_wait(), original.max_wait());
    assert_eq!(fresh.max_matchup_count(), original.max_matchup_count());
    assert_eq!(fresh.suggest(), original.suggest());
}

#[test]
fn test_save_overwrites_previous_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("matchlog.txt");
    fs::write(&path, "stale contents\n").unwrap();

    log_file::save_log(&path, &played(2)).unwrap();
    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().count(), 2);
    assert!(!text.contains("stale"));
}

#[test]
fn test_append_matches_one_line_each() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("matchlog.txt");
    let mut scheduler = Scheduler::new(roster());

    let first = scheduler.log_match(ParticipantId(1), ParticipantId(3), 2, 0).unwrap();
    log_file::append_match(&path, &scheduler, &first).unwrap();
    let second = scheduler.log_match(ParticipantId(4), ParticipantId(2), 1, 2).unwrap();
    log_file::append_match(&path, &scheduler, &second).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("1: ヨッシー/Yossy @JP vs. 3: Walter @Rubicon, 2-0, "));
    assert!(lines[1].starts_with("4: Carla vs. 2: Raven, 1-2, "));

    let mut fresh = Scheduler::new(roster());
    log_file::load_log(&path, &mut fresh).unwrap();
    assert_eq!(fresh.log().as_slice(), &[first, second]);
}

#[test]
fn test_failed_load_keeps_previous_log() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("matchlog.txt");
    fs::write(
        &path,
        "1: A vs. 2: B, 1-0, 2025-03-21 20:00:00\n1: A vs. 2: B, 1-zero, 2025-03-21 20:05:00\n",
    )
    .unwrap();

    let mut scheduler = played(3);
    let before = scheduler.log().clone();
    let err = log_file::load_log(&path, &mut scheduler).unwrap_err();
    assert!(matches!(
        err,
        TournamentError::Scheduler(SchedulerError::LogParse { line: 2, .. })
    ));
    assert_eq!(*scheduler.log(), before);
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.txt");
    let mut scheduler = played(1);

    assert!(matches!(
        log_file::load_log(&path, &mut scheduler),
        Err(TournamentError::Io { .. })
    ));
    assert_eq!(log_file::load_log_if_present(&path, &mut scheduler).unwrap(), 0);
    assert_eq!(scheduler.log().len(), 1);
}

#[test]
fn test_load_with_roster_missing_participant_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("matchlog.txt");
    log_file::save_log(&path, &played(4)).unwrap();

    let smaller = Roster::new(vec![Participant::new(1, "ヨッシー")]).unwrap();
    let mut scheduler = Scheduler::new(smaller);
    assert!(log_file::load_log(&path, &mut scheduler).is_err());
    assert!(scheduler.log().is_empty());
}

// =============================================================================
// Reset
// =============================================================================

#[test]
fn test_reset_archives_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("matchlog.txt");
    let mut scheduler = played(3);
    log_file::save_log(&path, &scheduler).unwrap();
    let saved = fs::read_to_string(&path).unwrap();

    let backup = log_file::backup_and_reset(&path, &mut scheduler).unwrap().unwrap();
    assert!(!path.exists());
    assert_eq!(fs::read_to_string(&backup).unwrap(), saved);
    let name = backup.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("matchlog_backup-") && name.ends_with(".txt"), "{name}");
    assert!(scheduler.log().is_empty());
    assert_eq!(scheduler.max_matchup_count(), 0);
}

#[test]
fn test_reset_without_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut scheduler = played(2);
    let backup = log_file::backup_and_reset(&dir.path().join("matchlog.txt"), &mut scheduler).unwrap();
    assert!(backup.is_none());
    assert!(scheduler.log().is_empty());
}

#[test]
fn test_removed_participant_history_still_saves() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("matchlog.txt");
    let mut scheduler = Scheduler::new(roster());
    scheduler
        .log_match(ParticipantId(4), ParticipantId(2), 2, 0)
        .unwrap();
    scheduler.replace_roster(
        Roster::new(vec![Participant::new(1, "ヨッシー"), Participant::new(2, "Raven")]).unwrap(),
    );

    log_file::save_log(&path, &scheduler).unwrap();
    assert!(fs::read_to_string(&path).unwrap().starts_with("4: Carla vs. 2: Raven"));
    // Reloading needs participant 4 in the roster again
    let mut fresh = Scheduler::new(roster());
    log_file::load_log(&path, &mut fresh).unwrap();
    assert_eq!(fresh.log().as_slice(), scheduler.log().as_slice());
}

#[test]
fn test_append_after_hand_edit_without_trailing_newline() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("matchlog.txt");
    fs::write(&path, "2: Raven vs. 4: Carla, 2-1, 2025-03-21 20:00:00").unwrap();

    let mut scheduler = Scheduler::new(roster());
    log_file::load_log(&path, &mut scheduler).unwrap();
    let m = scheduler.log_match(ParticipantId(1), ParticipantId(3), 0, 2).unwrap();
    log_file::append_match(&path, &scheduler, &m).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().count(), 2);
    let mut fresh = Scheduler::new(roster());
    assert_eq!(log_file::load_log(&path, &mut fresh).unwrap(), 2);
    assert_eq!(fresh.log(), scheduler.log());
}

#[test]
fn test_failed_save_leaves_no_temp_file() {
    let dir = tempfile::tempdir().unwrap();
    // A directory where the log should be makes the final rename fail
    let path = dir.path().join("matchlog.txt");
    fs::create_dir(&path).unwrap();

    let err = log_file::save_log(&path, &played(2)).unwrap_err();
    assert!(matches!(err, TournamentError::Io { .. }));

    let entries: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec![std::ffi::OsString::from("matchlog.txt")]);
}
