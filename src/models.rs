use serde::{Deserialize, Serialize};

// ============ Request Models ============

/// A validated applicant submission.
///
/// Only ever built by [`crate::validation::validate_applicant`]; lives for the
/// duration of a single request and is never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantRecord {
    /// Full name (at least 3 characters).
    pub name: String,
    /// CPF document number, possibly formatted (`000.000.000-00`).
    #[serde(rename = "cpf")]
    pub document_id: String,
    /// Birth date as typed in the form.
    pub birth_date: String,
    /// Contact email.
    pub email: String,
}

// ============ Report Models ============

/// Score report returned by `POST /credit-score`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditReport {
    /// Jittered score, always within `0..=850`.
    pub score: i32,
    pub score_range: ScoreRange,
    pub analysis: Analysis,
    pub history: ScoreHistory,
    pub recommendations: Vec<Recommendation>,
    pub credit_profile: CreditProfile,
}

/// Reference range shown on the gauge and trend chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRange {
    pub min: i32,
    pub max: i32,
    pub average: i32,
}

impl ScoreRange {
    /// True when `min <= average <= max`.
    pub fn is_ordered(&self) -> bool {
        self.min <= self.average && self.average <= self.max
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub status: ScoreStatus,
    pub summary: String,
    pub factors: Factors,
}

/// Headline classification of a canned profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScoreStatus {
    Excellent,
    Good,
    NeedsAttention,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Factors {
    #[serde(default)]
    pub positive: Vec<Factor>,
    #[serde(default)]
    pub negative: Vec<Factor>,
}

/// A single item in the "Fatores de Impacto" breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Factor {
    pub factor: String,
    pub impact: Impact,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Impact {
    #[serde(rename = "ALTO")]
    High,
    #[serde(rename = "MÉDIO")]
    Medium,
    #[serde(rename = "BAIXO")]
    Low,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub description: String,
    pub priority: Priority,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    #[serde(rename = "ALTA")]
    High,
    #[serde(rename = "MÉDIA")]
    Medium,
    #[serde(rename = "BAIXA")]
    Low,
}

/// Monthly score trend. `months` and `scores` are index-aligned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreHistory {
    pub months: Vec<String>,
    pub scores: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditProfile {
    pub total_accounts: u32,
    pub open_accounts: u32,
    /// Outstanding debt in BRL. Jittered per request.
    pub total_debt: i64,
    /// Percentage of available credit in use.
    pub credit_usage: u32,
    pub payment_history: PaymentHistory,
}

/// Share of payments made on time vs. late, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentHistory {
    pub on_time: u32,
    pub delayed: u32,
}

// ============ Error / Session Models ============

/// One violated rule in a submitted body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Dotted path of the offending field (empty for the body itself).
    pub field: String,
    /// Human-readable reason, shown next to the form input.
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Mock signed-in user. There are no credentials behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn applicant_uses_wire_field_names() {
        let record = ApplicantRecord {
            name: "Maria Souza".to_string(),
            document_id: "123.456.789-01".to_string(),
            birth_date: "1990-05-20".to_string(),
            email: "maria@example.com".to_string(),
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["cpf"], "123.456.789-01");
        assert_eq!(value["birthDate"], "1990-05-20");
        assert!(value.get("documentId").is_none());
    }

    #[test]
    fn enums_serialize_to_report_labels() {
        assert_eq!(
            serde_json::to_value(ScoreStatus::NeedsAttention).unwrap(),
            json!("NEEDS_ATTENTION")
        );
        assert_eq!(serde_json::to_value(Impact::Medium).unwrap(), json!("MÉDIO"));
        assert_eq!(serde_json::to_value(Priority::Medium).unwrap(), json!("MÉDIA"));
        assert_eq!(serde_json::to_value(Priority::High).unwrap(), json!("ALTA"));
    }

    #[test]
    fn credit_profile_is_camel_case() {
        let profile = CreditProfile {
            total_accounts: 4,
            open_accounts: 2,
            total_debt: 1500,
            credit_usage: 30,
            payment_history: PaymentHistory {
                on_time: 95,
                delayed: 5,
            },
        };

        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(value["totalAccounts"], 4);
        assert_eq!(value["paymentHistory"]["onTime"], 95);
    }

    #[test]
    fn score_range_ordering() {
        assert!(ScoreRange { min: 300, max: 850, average: 650 }.is_ordered());
        assert!(!ScoreRange { min: 300, max: 850, average: 900 }.is_ordered());
    }
}
