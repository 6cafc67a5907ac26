/// Canned score profiles
///
/// The three report templates ("excellent", "good", "needs attention") are
/// loaded once at startup into an immutable [`ProfileTable`]. The default
/// table is embedded in the binary; `CREDIT_PROFILES_PATH` can point at a
/// replacement file with the same shape.
use crate::models::{
    CreditProfile, Factors, Recommendation, ScoreHistory, ScoreRange, ScoreStatus,
};
use serde::Deserialize;
use std::fmt;
use std::path::Path;

/// Highest score a report may carry.
pub const MAX_SCORE: i32 = 850;
/// Lowest score a report may carry.
pub const MIN_SCORE: i32 = 0;

const EMBEDDED_PROFILES: &str = include_str!("../data/credit-profiles.json");

/// Position of a canned profile in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileIndex {
    Excellent = 0,
    Good = 1,
    NeedsAttention = 2,
}

impl ProfileIndex {
    pub const ALL: [ProfileIndex; 3] = [
        ProfileIndex::Excellent,
        ProfileIndex::Good,
        ProfileIndex::NeedsAttention,
    ];

    /// Maps a digit sum to its profile: `sum % 3` picks the slot.
    pub fn from_digit_sum(sum: u64) -> Self {
        match sum % 3 {
            0 => ProfileIndex::Excellent,
            1 => ProfileIndex::Good,
            _ => ProfileIndex::NeedsAttention,
        }
    }

    /// Status a well-formed table carries at this slot.
    pub fn expected_status(self) -> ScoreStatus {
        match self {
            ProfileIndex::Excellent => ScoreStatus::Excellent,
            ProfileIndex::Good => ScoreStatus::Good,
            ProfileIndex::NeedsAttention => ScoreStatus::NeedsAttention,
        }
    }
}

/// One pre-authored report template.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CannedProfile {
    pub score_range: ScoreRange,
    pub profile: ProfileBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileBody {
    pub score: i32,
    pub status: ScoreStatus,
    pub summary: String,
    pub analysis: ProfileAnalysis,
    pub history: ScoreHistory,
    pub recommendations: Vec<Recommendation>,
    pub credit_profile: CreditProfile,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProfileAnalysis {
    pub factors: Factors,
}

#[derive(Debug, Deserialize)]
struct ProfileFile {
    profiles: Vec<CannedProfile>,
}

/// Errors raised while loading a profile table.
#[derive(Debug)]
pub enum ProfileLoadError {
    Io(std::io::Error),
    Json(serde_json::Error),
    /// The file did not hold exactly three profiles.
    WrongCount(usize),
    /// A profile broke a table invariant.
    Invalid { index: usize, reason: String },
}

impl fmt::Display for ProfileLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileLoadError::Io(err) => write!(f, "failed to read profiles: {}", err),
            ProfileLoadError::Json(err) => write!(f, "failed to parse profiles: {}", err),
            ProfileLoadError::WrongCount(n) => {
                write!(f, "expected exactly 3 profiles, found {}", n)
            }
            ProfileLoadError::Invalid { index, reason } => {
                write!(f, "profile {} is invalid: {}", index, reason)
            }
        }
    }
}

impl std::error::Error for ProfileLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProfileLoadError::Io(err) => Some(err),
            ProfileLoadError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ProfileLoadError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for ProfileLoadError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Immutable table of the three canned profiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileTable {
    profiles: [CannedProfile; 3],
}

impl ProfileTable {
    /// Table compiled into the binary.
    pub fn embedded() -> Result<Self, ProfileLoadError> {
        Self::from_json_str(EMBEDDED_PROFILES)
    }

    /// Reads a replacement table from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ProfileLoadError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, ProfileLoadError> {
        let file: ProfileFile = serde_json::from_str(raw)?;
        let count = file.profiles.len();
        let profiles: [CannedProfile; 3] = file
            .profiles
            .try_into()
            .map_err(|_| ProfileLoadError::WrongCount(count))?;

        for (index, profile) in profiles.iter().enumerate() {
            check_profile(index, profile)?;
        }

        Ok(Self { profiles })
    }

    pub fn get(&self, index: ProfileIndex) -> &CannedProfile {
        &self.profiles[index as usize]
    }
}

fn check_profile(index: usize, canned: &CannedProfile) -> Result<(), ProfileLoadError> {
    let invalid = |reason: String| ProfileLoadError::Invalid { index, reason };
    let in_bounds = |score: i32| (MIN_SCORE..=MAX_SCORE).contains(&score);

    if !canned.score_range.is_ordered() {
        return Err(invalid(format!(
            "scoreRange must satisfy min <= average <= max, got {:?}",
            canned.score_range
        )));
    }

    let body = &canned.profile;
    if !in_bounds(body.score) {
        return Err(invalid(format!("score {} out of bounds", body.score)));
    }
    if body.history.months.len() != body.history.scores.len() {
        return Err(invalid(format!(
            "history has {} months but {} scores",
            body.history.months.len(),
            body.history.scores.len()
        )));
    }
    if let Some(score) = body.history.scores.iter().find(|s| !in_bounds(**s)) {
        return Err(invalid(format!("history score {} out of bounds", score)));
    }

    let expected = ProfileIndex::ALL[index].expected_status();
    if body.status != expected {
        tracing::warn!(
            "Profile {} has status {:?}, expected {:?} for its slot",
            index,
            body.status,
            expected
        );
    }

    Ok(())
}
