/// Score resolution
///
/// Maps a CPF to one of the canned profiles and builds the report:
/// 1. Strip non-digits and sum the remaining digits
/// 2. Pick the profile by `sum % 3`
/// 3. Shift score and history by one jitter draw in `-10..=10`, clamped
/// 4. Shift total debt by an independent draw in `-2500..=2500`
///
/// The random source is passed in so callers decide between `thread_rng`
/// and a seeded generator.
use crate::models::{Analysis, CreditProfile, CreditReport, ScoreHistory};
use crate::profiles::{ProfileIndex, ProfileTable, MAX_SCORE, MIN_SCORE};
use rand::Rng;
use sha2::{Digest, Sha256};
use std::sync::Arc;

/// Score jitter bound (inclusive, both directions).
pub const SCORE_JITTER: i32 = 10;
/// Debt jitter bound in BRL (inclusive, both directions).
pub const DEBT_JITTER: i64 = 2500;

/// Keeps only ASCII digits.
pub fn clean_document(document: &str) -> String {
    document.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Sum of the decimal digits in `document`, ignoring everything else.
pub fn digit_sum(document: &str) -> u64 {
    document
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(u64::from)
        .sum()
}

/// Profile slot a document resolves to.
pub fn profile_index(document: &str) -> ProfileIndex {
    ProfileIndex::from_digit_sum(digit_sum(document))
}

/// Short SHA-256 fingerprint of the document digits, safe to log.
pub fn document_fingerprint(document: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(clean_document(document).as_bytes());
    let mut digest = hex::encode(hasher.finalize());
    digest.truncate(12);
    digest
}

fn clamp_score(score: i32) -> i32 {
    score.clamp(MIN_SCORE, MAX_SCORE)
}

/// Resolves documents against a shared, read-only profile table.
#[derive(Debug, Clone)]
pub struct ScoreResolver {
    profiles: Arc<ProfileTable>,
}

impl ScoreResolver {
    pub fn new(profiles: Arc<ProfileTable>) -> Self {
        Self { profiles }
    }

    pub fn profiles(&self) -> &ProfileTable {
        &self.profiles
    }

    /// Builds a report for `document`.
    ///
    /// Never fails: a document without digits sums to zero and lands on the
    /// "excellent" profile. Rejecting such input is the validation gate's job.
    pub fn resolve<R: Rng + ?Sized>(&self, document: &str, rng: &mut R) -> CreditReport {
        let index = profile_index(document);
        let canned = self.profiles.get(index);
        let base = &canned.profile;

        let jitter = rng.gen_range(-SCORE_JITTER..=SCORE_JITTER);
        let debt_delta = rng.gen_range(-DEBT_JITTER..=DEBT_JITTER);

        tracing::debug!(
            "Resolved profile {:?} (jitter {}, debt delta {})",
            index,
            jitter,
            debt_delta
        );

        CreditReport {
            score: clamp_score(base.score + jitter),
            score_range: canned.score_range,
            analysis: Analysis {
                status: base.status,
                summary: base.summary.clone(),
                factors: base.analysis.factors.clone(),
            },
            history: ScoreHistory {
                months: base.history.months.clone(),
                scores: base
                    .history
                    .scores
                    .iter()
                    .map(|s| clamp_score(s + jitter))
                    .collect(),
            },
            recommendations: base.recommendations.clone(),
            credit_profile: CreditProfile {
                total_debt: base.credit_profile.total_debt + debt_delta,
                ..base.credit_profile.clone()
            },
        }
    }
}
