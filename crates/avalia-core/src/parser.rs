//! TOML questionnaire form parser.
//!
//! A filled-in form is a TOML file tagged by `kind`; parsing produces the
//! typed form, and [`EvaluationForm::into_payload`] computes the score and
//! classification and assembles the payload to persist.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;

use crate::criteria::{criteria_for, EvaluationKind};
use crate::model::{
    EvaluationPayload, LeaderFreq, LeaderInfo, LeaderKpi, LeaderPayload, LeaderQualit,
    TeamMemberIndic, TeamMemberInfo, TeamMemberPayload, TeamMemberQualit,
};
use crate::scoring::{average_score, classify};

/// A parsed questionnaire form, one variant per built-in kind.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum EvaluationForm {
    Lider(LeaderForm),
    Liderado(TeamMemberForm),
}

/// Leader questionnaire answers as written in the form file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeaderForm {
    #[serde(default)]
    pub info: LeaderInfo,
    #[serde(default)]
    pub scores: BTreeMap<String, i64>,
    #[serde(default)]
    pub qualit: LeaderQualit,
    #[serde(default)]
    pub kpi: LeaderKpi,
    #[serde(default)]
    pub freq: LeaderFreq,
}

/// Team-member questionnaire answers as written in the form file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TeamMemberForm {
    #[serde(default)]
    pub info: TeamMemberInfo,
    #[serde(default)]
    pub scores: BTreeMap<String, i64>,
    #[serde(default)]
    pub qualit: TeamMemberQualit,
    #[serde(default)]
    pub indic: TeamMemberIndic,
    #[serde(default)]
    pub feedback: String,
}

impl EvaluationForm {
    /// The store tag this form submits under.
    pub fn kind(&self) -> EvaluationKind {
        match self {
            EvaluationForm::Lider(_) => EvaluationKind::Lider,
            EvaluationForm::Liderado(_) => EvaluationKind::Liderado,
        }
    }

    /// Name of the person being evaluated.
    pub fn nome(&self) -> &str {
        match self {
            EvaluationForm::Lider(f) => &f.info.nome,
            EvaluationForm::Liderado(f) => &f.info.nome,
        }
    }

    fn scores(&self) -> &BTreeMap<String, i64> {
        match self {
            EvaluationForm::Lider(f) => &f.scores,
            EvaluationForm::Liderado(f) => &f.scores,
        }
    }

    /// Compute score and classification and assemble the payload to persist.
    ///
    /// `timestamp` is the caller-side submission time (ISO-8601); the store
    /// stamps its own `created_at` separately on insert.
    pub fn into_payload(self, timestamp: &str) -> (EvaluationKind, EvaluationPayload) {
        let ratings: serde_json::Map<String, Value> = self
            .scores()
            .iter()
            .map(|(k, v)| (k.clone(), Value::from(*v)))
            .collect();
        let score = average_score(&ratings);
        let classificacao = classify(score).label().to_string();

        match self {
            EvaluationForm::Lider(f) => (
                EvaluationKind::Lider,
                EvaluationPayload::Leader(LeaderPayload {
                    info: f.info,
                    scores: f.scores,
                    score,
                    classificacao,
                    qualit: f.qualit,
                    kpi: f.kpi,
                    freq: f.freq,
                    timestamp: timestamp.to_string(),
                }),
            ),
            EvaluationForm::Liderado(f) => (
                EvaluationKind::Liderado,
                EvaluationPayload::TeamMember(TeamMemberPayload {
                    info: f.info,
                    scores: f.scores,
                    score,
                    classificacao,
                    qualit: f.qualit,
                    indic: f.indic,
                    feedback: f.feedback,
                    timestamp: timestamp.to_string(),
                }),
            ),
        }
    }

    /// Presence and range checks, reported as human-readable problems.
    ///
    /// Intentionally shallow: a missing name and out-of-range ratings are the
    /// only hard problems. Criterion keys the catalog doesn't know are
    /// reported separately so typos are visible without being fatal.
    pub fn check(&self) -> FormCheck {
        let mut problems = Vec::new();
        let mut warnings = Vec::new();

        if self.nome().trim().is_empty() {
            problems.push("info.nome is required".to_string());
        }

        for (key, rating) in self.scores() {
            if !(1..=5).contains(rating) {
                problems.push(format!("score '{key}' is {rating}, must be between 1 and 5"));
            }
        }

        if let Some(catalog) = criteria_for(&self.kind().to_string()) {
            for key in self.scores().keys() {
                if !catalog.iter().any(|c| c.key == key) {
                    warnings.push(format!("score key '{key}' is not in the {} catalog", self.kind()));
                }
            }
        }

        FormCheck { problems, warnings }
    }
}

/// Outcome of [`EvaluationForm::check`].
#[derive(Debug, Clone, Default)]
pub struct FormCheck {
    /// Hard problems; the form should not be submitted.
    pub problems: Vec<String>,
    /// Non-fatal observations (unknown criterion keys).
    pub warnings: Vec<String>,
}

impl FormCheck {
    pub fn is_ok(&self) -> bool {
        self.problems.is_empty()
    }
}

/// Parse a single TOML form file.
pub fn parse_form(path: &Path) -> Result<EvaluationForm> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read form file: {}", path.display()))?;
    parse_form_str(&content, path)
}

/// Parse a TOML string into a form (useful for testing).
pub fn parse_form_str(content: &str, source_path: &Path) -> Result<EvaluationForm> {
    toml::from_str(content)
        .with_context(|| format!("failed to parse form TOML: {}", source_path.display()))
}
