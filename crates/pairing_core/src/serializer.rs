//! Line-oriented text format for the match log
//!
//! One match per line:
//!
//! ```text
//! 1: Yossy/ヨッシー @JP vs. 3: Raven, 2-1, 2025-03-21 20:15:04
//! ```

use chrono::NaiveDateTime;

use crate::error::{Result, SchedulerError};
use crate::roster::Roster;
use crate::types::{Match, Participant, ParticipantId};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Also accepted when reading, for logs edited by hand
const ISO_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

const VERSUS: &str = " vs. ";

/// Format a single match, without the trailing newline.
///
/// `lookup` resolves identifiers to participants for labelling.
pub fn format_match<'a, F>(m: &Match, lookup: F) -> Result<String>
where
    F: Fn(ParticipantId) -> Option<&'a Participant>,
{
    let label = |id| lookup(id).map(Participant::label).ok_or(SchedulerError::UnknownParticipant(id));
    let (score1, score2) = m.scores();
    Ok(format!(
        "{}{}{}, {}-{}, {}",
        label(m.player1())?,
        VERSUS,
        label(m.player2())?,
        score1,
        score2,
        m.timestamp().format(TIMESTAMP_FORMAT)
    ))
}

/// Format a whole log, one newline-terminated line per match.
pub fn format_log<'a, 'b, I, F>(matches: I, lookup: F) -> Result<String>
where
    I: IntoIterator<Item = &'b Match>,
    F: Fn(ParticipantId) -> Option<&'a Participant> + Copy,
{
    let mut out = String::new();
    for m in matches {
        out.push_str(&format_match(m, lookup)?);
        out.push('\n');
    }
    Ok(out)
}

/// Parse one line, resolving labels against `roster`.
///
/// `line_no` is 1-based and only used for error reporting.
pub fn parse_match(line: &str, line_no: usize, roster: &Roster) -> Result<Match> {
    let fail = |reason: String| SchedulerError::LogParse { line: line_no, reason };

    // Labels may contain commas, scores and timestamps never do
    let mut fields = line.trim().rsplitn(3, ',');
    let (Some(timestamp), Some(scores), Some(labels)) = (fields.next(), fields.next(), fields.next()) else {
        return Err(fail(format!("expected 3 comma-separated fields in {:?}", line.trim())));
    };

    let (player1, player2) = resolve_labels(labels, roster).map_err(fail)?;

    let (score1, score2) = scores
        .trim()
        .split_once('-')
        .ok_or_else(|| fail(format!("score {:?} is not <n>-<n>", scores.trim())))?;
    let score1 = parse_score(score1).map_err(fail)?;
    let score2 = parse_score(score2).map_err(fail)?;

    let timestamp = parse_timestamp(timestamp.trim()).map_err(fail)?;

    Match::new(player1, player2, score1, score2, timestamp).map_err(|e| fail(e.to_string()))
}

/// Parse a whole log. Blank lines are skipped; the first bad line aborts.
pub fn parse_log(text: &str, roster: &Roster) -> Result<Vec<Match>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| parse_match(line, i + 1, roster))
        .collect()
}

/// Names may themselves contain the separator, so every split point is tried
/// until both sides resolve.
fn resolve_labels(labels: &str, roster: &Roster) -> std::result::Result<(ParticipantId, ParticipantId), String> {
    let mut last_err = format!("missing {:?} between labels in {:?}", VERSUS.trim(), labels);
    for (at, _) in labels.match_indices(VERSUS) {
        let (label1, label2) = (&labels[..at], &labels[at + VERSUS.len()..]);
        match (resolve_label(label1.trim(), roster), resolve_label(label2.trim(), roster)) {
            (Ok(player1), Ok(player2)) => return Ok((player1, player2)),
            (Err(e), _) | (_, Err(e)) => last_err = e,
        }
    }
    Err(last_err)
}

/// Only the identifier before the colon is significant; names may have been
/// edited since the line was written.
fn resolve_label(label: &str, roster: &Roster) -> std::result::Result<ParticipantId, String> {
    let (number, _) = label
        .split_once(':')
        .ok_or_else(|| format!("label {:?} has no '<id>:' prefix", label))?;
    let id = number
        .trim()
        .parse::<u32>()
        .map(ParticipantId)
        .map_err(|e| format!("invalid identifier {:?} in label {:?}: {}", number.trim(), label, e))?;
    if !roster.contains(id) {
        return Err(format!("participant {} in label {:?} is not in the roster", id, label));
    }
    Ok(id)
}

fn parse_score(text: &str) -> std::result::Result<u32, String> {
    text.trim()
        .parse()
        .map_err(|e| format!("invalid score {:?}: {}", text.trim(), e))
}

fn parse_timestamp(text: &str) -> std::result::Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(text, ISO_TIMESTAMP_FORMAT))
        .map_err(|e| format!("invalid timestamp {:?}: {}", text, e))
}

#[cfg(test)]
#[path = "serializer_tests.rs"]
mod serializer_tests;
