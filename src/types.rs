use serde::{Deserialize, Serialize};

/// Team rushing totals parsed from an "attempts-yards-TDs" line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RushingStats {
    pub plays: i32,
    pub yards: i32,
    pub touchdowns: i32,
}

/// Team passing totals parsed from a "Comp-Att-Yd-TD-INT" line.
///
/// Attempts are the play count; completions are carried in `successful`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassingStats {
    pub plays: i32,
    pub yards: i32,
    pub touchdowns: i32,
    pub interceptions: i32,
    pub successful: i32,
}

/// Times sacked and the yardage lost to those sacks.
///
/// `yards` is stored as a non-positive value for non-negative input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SackStats {
    pub plays: i32,
    pub yards: i32,
}

/// Fumbles and how many of them were lost to the defense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FumbleStats {
    pub plays: i32,
    pub lost: i32,
}

/// Penalty count and the yardage those penalties cost.
///
/// Same sign convention as [`SackStats`]: the stored yardage is a loss.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PenaltyStats {
    pub plays: i32,
    pub yards: i32,
}
