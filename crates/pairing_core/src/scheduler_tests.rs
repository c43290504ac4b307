use super::*;
use crate::error::SchedulerError;
use chrono::NaiveDate;

fn id(n: u32) -> ParticipantId {
    ParticipantId(n)
}

fn entries() -> Vec<Participant> {
    ["Yossy", "P1", "P2", "P3", "P4"]
        .iter()
        .enumerate()
        .map(|(i, name)| Participant::new(i as u32 + 1, name))
        .collect()
}

fn scheduler() -> Scheduler {
    Scheduler::new(Roster::new(entries()).unwrap())
}

#[test]
fn test_initial_state() {
    let sc = scheduler();
    assert_eq!(sc.universe().len(), 10);
    assert_eq!(sc.max_matchup_count(), 0);
    assert_eq!(sc.max_wait(), 0);

    for n in 1..=5 {
        assert_eq!(sc.wait_interval(id(n)).unwrap(), Wait::NeverPlayed);
        assert_eq!(sc.wait_score(id(n)).unwrap(), 1);
    }
}

#[test]
fn test_after_first_match() {
    let mut sc = scheduler();
    let m = sc.log_match(id(1), id(3), 0, 0).unwrap();
    assert_eq!(m.pairing(), Pairing::new(id(3), id(1)).unwrap());

    assert_eq!(sc.max_matchup_count(), 1);
    assert_eq!(sc.max_wait(), 0);
    assert_eq!(sc.matchup_count(id(1), id(3)).unwrap(), 1);
    assert_eq!(sc.matchup_count(id(3), id(1)).unwrap(), 1);
    assert_eq!(sc.wait_interval(id(1)).unwrap(), Wait::Played(0));
    assert_eq!(sc.wait_score(id(1)).unwrap(), 0);
    assert_eq!(sc.wait_interval(id(2)).unwrap(), Wait::NeverPlayed);
    assert_eq!(sc.wait_score(id(2)).unwrap(), 1);
}

#[test]
fn test_log_match_rejects_identical_players() {
    let mut sc = scheduler();
    assert_eq!(
        sc.log_match(id(2), id(2), 1, 0).unwrap_err(),
        SchedulerError::InvalidMatch(id(2))
    );
    assert!(sc.log().is_empty());
}

#[test]
fn test_log_match_rejects_unknown_participant() {
    let mut sc = scheduler();
    assert_eq!(
        sc.log_match(id(1), id(42), 1, 0).unwrap_err(),
        SchedulerError::UnknownParticipant(id(42))
    );
    assert!(sc.log().is_empty());
}

#[test]
fn test_queries_reject_unknown_participant() {
    let sc = scheduler();
    assert!(matches!(sc.wait_interval(id(9)), Err(SchedulerError::UnknownParticipant(_))));
    assert!(matches!(sc.wait_score(id(9)), Err(SchedulerError::UnknownParticipant(_))));
    assert!(matches!(sc.consecutive_run(id(9)), Err(SchedulerError::UnknownParticipant(_))));
    assert!(matches!(sc.score(id(1), id(9)), Err(SchedulerError::UnknownParticipant(_))));
    assert!(matches!(sc.matchup_count(id(1), id(1)), Err(SchedulerError::InvalidMatch(_))));
}

#[test]
fn test_replace_roster_is_idempotent_under_reordering() {
    let mut sc = scheduler();
    sc.replace_roster(Roster::new(entries()).unwrap());
    let first = sc.universe().clone();

    let mut reordered = entries();
    reordered.reverse();
    sc.replace_roster(Roster::new(reordered).unwrap());
    assert_eq!(*sc.universe(), first);
}

#[test]
fn test_replace_roster_keeps_history_of_removed_participants() {
    let mut sc = scheduler();
    sc.log_match(id(5), id(1), 1, 0).unwrap();
    sc.log_match(id(5), id(2), 1, 0).unwrap();

    let mut remaining = entries();
    remaining.pop();
    remaining.push(Participant::new(6, "P5"));
    sc.replace_roster(Roster::new(remaining).unwrap());

    // History survives and is still countable
    assert_eq!(sc.log().len(), 2);
    assert_eq!(sc.matchup_count(id(1), id(5)).unwrap(), 1);
    // ...but 5 can no longer be queried or suggested
    assert!(matches!(sc.wait_interval(id(5)), Err(SchedulerError::UnknownParticipant(_))));
    for _ in 0..10 {
        let pairing = sc.suggest().unwrap();
        assert!(!pairing.contains(id(5)));
        let (a, b) = pairing.ids();
        sc.log_match(a, b, 0, 0).unwrap();
    }
    // Removed participants still get labelled when saving
    assert!(sc.to_log_text().unwrap().contains("5: P4 vs. 1: Yossy"));
}

#[test]
fn test_reset_and_replace_log_recompute_aggregates() {
    let mut sc = scheduler();
    sc.log_match(id(1), id(2), 1, 0).unwrap();
    sc.log_match(id(3), id(4), 1, 0).unwrap();
    assert_eq!(sc.max_wait(), 1);

    let kept = sc.log().as_slice()[..1].to_vec();
    sc.replace_log(kept);
    assert_eq!(sc.log().len(), 1);
    assert_eq!(sc.max_wait(), 0);
    assert_eq!(sc.max_matchup_count(), 1);

    sc.reset_log();
    assert!(sc.log().is_empty());
    assert_eq!(sc.max_matchup_count(), 0);
    assert_eq!(sc.wait_interval(id(1)).unwrap(), Wait::NeverPlayed);
}

#[test]
fn test_suggest_on_small_rosters() {
    assert_eq!(Scheduler::new(Roster::empty()).suggest(), None);
    let single = Roster::new(vec![Participant::new(1, "Solo")]).unwrap();
    assert_eq!(Scheduler::new(single).suggest(), None);
}

#[test]
fn test_suggest_is_deterministic() {
    let mut sc = scheduler();
    sc.log_match(id(2), id(4), 2, 1).unwrap();
    sc.log_match(id(1), id(5), 0, 2).unwrap();
    assert_eq!(sc.suggest(), sc.suggest());
    assert_eq!(sc.clone().suggest(), sc.suggest());
}

#[test]
fn test_report_matrix() {
    let mut sc = scheduler();
    sc.log_match(id(1), id(3), 2, 0).unwrap();
    let report = sc.generate_report();

    assert_eq!(report.rows.len(), 5);
    assert_eq!(report.rows[0].label, "1: Yossy");
    assert_eq!(report.rows[0].wait, Wait::Played(0));
    assert_eq!(report.rows[1].wait, Wait::NeverPlayed);
    assert_eq!(report.cell(id(1), id(1)), None);

    let cell = report.cell(id(3), id(1)).unwrap();
    assert_eq!(cell.matchup_count, 1);
    assert_eq!(cell.score, sc.score(id(1), id(3)).unwrap());
    assert_eq!(report.cell(id(1), id(3)), report.cell(id(3), id(1)));
}

#[test]
fn test_load_log_text_is_all_or_nothing() {
    let mut sc = scheduler();
    sc.log_match(id(1), id(2), 1, 0).unwrap();
    let before = sc.log().clone();

    let text = "3: P2 vs. 4: P3, 1-0, 2025-03-21 20:00:00\n3: P2 vs. 99: Nobody, 1-0, 2025-03-21 20:05:00\n";
    let err = sc.load_log_text(text).unwrap_err();
    assert!(matches!(err, SchedulerError::LogParse { line: 2, .. }));
    assert_eq!(*sc.log(), before);
    assert_eq!(sc.max_matchup_count(), 1);
}

#[test]
fn test_text_round_trip_on_fresh_instance() {
    let mut sc = scheduler();
    let base = NaiveDate::from_ymd_opt(2025, 3, 21)
        .unwrap()
        .and_hms_opt(19, 0, 0)
        .unwrap();
    sc.record(Match::new(id(1), id(3), 2, 1, base).unwrap());
    sc.log_match(id(5), id(2), 0, 2).unwrap();
    let text = sc.to_log_text().unwrap();

    let mut fresh = scheduler();
    assert_eq!(fresh.load_log_text(&text).unwrap(), 2);
    assert_eq!(fresh.log(), sc.log());
    assert_eq!(fresh.suggest(), sc.suggest());
}

#[test]
fn test_report_serializes_never_played_wait() {
    let mut sc = scheduler();
    sc.log_match(id(2), id(4), 1, 1).unwrap();
    let json = serde_json::to_value(sc.generate_report()).unwrap();

    assert_eq!(json["rows"][0]["wait"], "never_played");
    assert_eq!(json["rows"][1]["wait"]["played"], 0);
    assert_eq!(json["rows"][0]["cells"][0], serde_json::Value::Null);
    assert_eq!(json["rows"][1]["cells"][3]["matchup_count"], 1);
}
