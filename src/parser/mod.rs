use tracing::warn;

use crate::error::{Result, StatLineError};
use crate::types::{FumbleStats, PassingStats, PenaltyStats, RushingStats, SackStats};

/// Splits a stat line on '-' and parses the first `N` segments as base-10
/// integers. Extra trailing segments are ignored; some box-score feeds append
/// long-play columns the team totals do not use.
fn int_segments<const N: usize>(stat: &'static str, line: &str) -> Result<[i32; N]> {
    let mut out = [0i32; N];
    let mut segments = line.split('-');
    for (found, slot) in out.iter_mut().enumerate() {
        let segment = segments.next().ok_or_else(|| {
            warn!(
                "{}: stat line '{}' has {} segments, expected {}",
                stat, line, found, N
            );
            StatLineError::MissingSegment {
                stat,
                expected: N,
                found,
            }
        })?;
        *slot = segment.trim().parse().map_err(|_| {
            warn!(
                "{}: non-numeric segment '{}' in stat line '{}'",
                stat, segment, line
            );
            StatLineError::InvalidNumber {
                stat,
                segment: segment.to_string(),
            }
        })?;
    }
    Ok(out)
}

/// Parses a rushing line of the form "attempts-yards-TDs", e.g. "16-34-0".
pub fn parse_rushing(line: &str) -> Result<RushingStats> {
    let [plays, yards, touchdowns] = int_segments("rushing", line)?;
    Ok(RushingStats {
        plays,
        yards,
        touchdowns,
    })
}

/// Parses a passing line of the form "Comp-Att-Yd-TD-INT", e.g.
/// "18-31-331-3-0". Attempts become the play count; completions land in
/// `successful`.
pub fn parse_passing(line: &str) -> Result<PassingStats> {
    let [successful, plays, yards, touchdowns, interceptions] = int_segments("passing", line)?;
    Ok(PassingStats {
        plays,
        yards,
        touchdowns,
        interceptions,
        successful,
    })
}

/// Parses a sack line of the form "sacked-yards", e.g. "1-7".
///
/// Sack yardage is a loss, so the stored yards are negated.
pub fn parse_sacks(line: &str) -> Result<SackStats> {
    let [plays, yards] = int_segments("sacks", line)?;
    Ok(SackStats {
        plays,
        yards: -yards,
    })
}

/// Parses a fumble line of the form "fumbles-lost", e.g. "2-1".
pub fn parse_fumbles(line: &str) -> Result<FumbleStats> {
    let [plays, lost] = int_segments("fumbles", line)?;
    Ok(FumbleStats { plays, lost })
}

/// Parses a penalty line of the form "penalties-yards", e.g. "2-15".
///
/// Penalty yardage is a loss, so the stored yards are negated.
pub fn parse_penalties(line: &str) -> Result<PenaltyStats> {
    let [plays, yards] = int_segments("penalties", line)?;
    Ok(PenaltyStats {
        plays,
        yards: -yards,
    })
}
