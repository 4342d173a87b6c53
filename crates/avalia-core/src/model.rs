//! Typed evaluation payloads.
//!
//! Payloads are persisted as loosely-typed JSON and re-read by derived views,
//! so the model is a tagged union over the known questionnaire kinds with a
//! raw-JSON fallback for unknown kinds and legacy rows. Field spelling in the
//! serialized form is the stored payload contract (Portuguese keys, camelCase
//! where the original submissions used it) and must not change.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identity fields of a leader evaluation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeaderInfo {
    #[serde(default)]
    pub nome: String,
    #[serde(default)]
    pub area: String,
    #[serde(default)]
    pub periodo: String,
    #[serde(default)]
    pub avaliadores: String,
}

/// Qualitative free-text sections of a leader evaluation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeaderQualit {
    #[serde(default)]
    pub fortes: String,
    #[serde(default)]
    pub melhorias: String,
    #[serde(default)]
    pub acoes: String,
}

/// Production KPIs reported for a leader.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeaderKpi {
    #[serde(default)]
    pub oee: String,
    #[serde(default, rename = "horasExtras")]
    pub horas_extras: String,
    #[serde(default)]
    pub refugos: String,
    #[serde(default, rename = "atrasoPlanejado")]
    pub atraso_planejado: String,
    #[serde(default)]
    pub absenteismo: String,
}

/// Meeting/report participation answers for a leader.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeaderFreq {
    #[serde(default)]
    pub reunioes: String,
    #[serde(default)]
    pub prazos: String,
    #[serde(default)]
    pub priorizacao: String,
}

/// Full leader-evaluation payload as persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderPayload {
    #[serde(default)]
    pub info: LeaderInfo,
    #[serde(default)]
    pub scores: BTreeMap<String, i64>,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub classificacao: String,
    #[serde(default)]
    pub qualit: LeaderQualit,
    #[serde(default)]
    pub kpi: LeaderKpi,
    #[serde(default)]
    pub freq: LeaderFreq,
    /// Submission time stamped by the caller, distinct from the store's
    /// `created_at`.
    #[serde(default)]
    pub timestamp: String,
}

/// Identity fields of a team-member evaluation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamMemberInfo {
    #[serde(default)]
    pub nome: String,
    #[serde(default)]
    pub funcao: String,
    #[serde(default)]
    pub setor: String,
    #[serde(default)]
    pub periodo: String,
    #[serde(default)]
    pub lider: String,
}

/// Qualitative free-text sections of a team-member evaluation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamMemberQualit {
    #[serde(default)]
    pub fortes: String,
    #[serde(default)]
    pub melhorias: String,
    #[serde(default)]
    pub evolucao: String,
}

/// Objective indicators section of a team-member evaluation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamMemberIndic {
    #[serde(default)]
    pub dados: String,
}

/// Full team-member-evaluation payload as persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMemberPayload {
    #[serde(default)]
    pub info: TeamMemberInfo,
    #[serde(default)]
    pub scores: BTreeMap<String, i64>,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub classificacao: String,
    #[serde(default)]
    pub qualit: TeamMemberQualit,
    #[serde(default)]
    pub indic: TeamMemberIndic,
    #[serde(default)]
    pub feedback: String,
    #[serde(default)]
    pub timestamp: String,
}

/// A decoded evaluation payload.
///
/// Known kinds decode to their typed form via the `tipo` tag; anything else
/// that is valid JSON lands in `Other`. Reads never enforce a schema beyond
/// JSON well-formedness, so partial or legacy rows stay visible in history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "tipo")]
pub enum EvaluationPayload {
    #[serde(rename = "avaliacao_lider_producao")]
    Leader(LeaderPayload),
    #[serde(rename = "avaliacao_liderados")]
    TeamMember(TeamMemberPayload),
    #[serde(untagged)]
    Other(Value),
}

impl EvaluationPayload {
    /// Averaged score, if the payload carries one.
    pub fn score(&self) -> Option<f64> {
        match self {
            EvaluationPayload::Leader(p) => Some(p.score),
            EvaluationPayload::TeamMember(p) => Some(p.score),
            EvaluationPayload::Other(v) => v.get("score").and_then(Value::as_f64),
        }
    }

    /// Classification label, if the payload carries one.
    pub fn classification(&self) -> Option<&str> {
        match self {
            EvaluationPayload::Leader(p) => Some(&p.classificacao),
            EvaluationPayload::TeamMember(p) => Some(&p.classificacao),
            EvaluationPayload::Other(v) => v.get("classificacao").and_then(Value::as_str),
        }
    }

    /// Evaluated person's name: `info.nome`, falling back to
    /// `info.avaliado_nome` for older rows.
    pub fn nome(&self) -> Option<&str> {
        match self {
            EvaluationPayload::Leader(p) => Some(&p.info.nome),
            EvaluationPayload::TeamMember(p) => Some(&p.info.nome),
            EvaluationPayload::Other(v) => {
                let info = v.get("info")?;
                info.get("nome")
                    .and_then(Value::as_str)
                    .filter(|s| !s.is_empty())
                    .or_else(|| info.get("avaliado_nome").and_then(Value::as_str))
            }
        }
    }

    /// Sector or area: `info.setor`, falling back to `info.area`.
    pub fn setor_area(&self) -> Option<&str> {
        match self {
            EvaluationPayload::Leader(p) => Some(&p.info.area),
            EvaluationPayload::TeamMember(p) => Some(&p.info.setor),
            EvaluationPayload::Other(v) => {
                let info = v.get("info")?;
                info.get("setor")
                    .and_then(Value::as_str)
                    .filter(|s| !s.is_empty())
                    .or_else(|| info.get("area").and_then(Value::as_str))
            }
        }
    }

    /// Evaluated period, if present.
    pub fn periodo(&self) -> Option<&str> {
        match self {
            EvaluationPayload::Leader(p) => Some(&p.info.periodo),
            EvaluationPayload::TeamMember(p) => Some(&p.info.periodo),
            EvaluationPayload::Other(v) => {
                v.get("info").and_then(|i| i.get("periodo")).and_then(Value::as_str)
            }
        }
    }
}
