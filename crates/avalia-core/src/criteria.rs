//! Static criteria catalogs for the built-in questionnaire kinds.
//!
//! Each questionnaire kind rates ten named criteria from 1 to 5. The catalogs
//! are plain static tables so new kinds can be added without touching the
//! scoring logic; unknown kinds simply have no catalog.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One named, described rating category scored 1–5 within a questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Criterion {
    /// Stable key used in payloads and form files (e.g. "comunicacao").
    pub key: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Short description shown alongside the rating widget.
    pub description: &'static str,
}

/// The built-in questionnaire kinds.
///
/// The store itself accepts any kind string; this enum only covers the kinds
/// avalia ships criteria and typed payloads for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvaluationKind {
    /// Production leader evaluation.
    Lider,
    /// Team-member ("liderado") evaluation.
    Liderado,
}

impl EvaluationKind {
    /// The `tipo` tag embedded in payloads of this kind.
    pub fn payload_tag(&self) -> &'static str {
        match self {
            EvaluationKind::Lider => "avaliacao_lider_producao",
            EvaluationKind::Liderado => "avaliacao_liderados",
        }
    }
}

impl fmt::Display for EvaluationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvaluationKind::Lider => write!(f, "lider"),
            EvaluationKind::Liderado => write!(f, "liderado"),
        }
    }
}

impl FromStr for EvaluationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lider" => Ok(EvaluationKind::Lider),
            "liderado" | "liderados" => Ok(EvaluationKind::Liderado),
            other => Err(format!("unknown evaluation kind: {other}")),
        }
    }
}

/// Criteria for the production-leader questionnaire.
pub const CRITERIA_LIDER: &[Criterion] = &[
    Criterion {
        key: "gestaoEquipe",
        label: "Gestão da Equipe",
        description: "Lidera, desenvolve e motiva a equipe; lida bem com conflitos.",
    },
    Criterion {
        key: "resultados",
        label: "Compromisso com Resultados",
        description: "Entrega metas, cumpre prazos e mantém qualidade.",
    },
    Criterion {
        key: "comunicacao",
        label: "Comunicação",
        description: "Clareza nas informações; dá feedbacks.",
    },
    Criterion {
        key: "decisao",
        label: "Tomada de Decisão",
        description: "Age com agilidade e responsabilidade.",
    },
    Criterion {
        key: "recursos",
        label: "Gestão de Recursos",
        description: "Usa bem materiais, pessoas e tempo.",
    },
    Criterion {
        key: "disciplina",
        label: "Disciplina e Organização",
        description: "Mantém organização e rotinas.",
    },
    Criterion {
        key: "processos",
        label: "Conformidade com Processos",
        description: "Garante procedimentos, segurança e 5S.",
    },
    Criterion {
        key: "relatorios",
        label: "Relatórios e Indicadores",
        description: "Analisa OEE, produtividade, refugos, paradas.",
    },
    Criterion {
        key: "interacao",
        label: "Interação com outras áreas",
        description: "Colabora com PCP, manutenção, engenharia, logística.",
    },
    Criterion {
        key: "desenvolvimento",
        label: "Desenvolvimento Técnico",
        description: "Evolui tecnicamente e sugere melhorias.",
    },
];

/// Criteria for the team-member questionnaire.
pub const CRITERIA_LIDERADO: &[Criterion] = &[
    Criterion {
        key: "assiduidade",
        label: "Assiduidade e Pontualidade",
        description: "Comparece com regularidade e pontualidade.",
    },
    Criterion {
        key: "disciplina",
        label: "Disciplina e Normas",
        description: "Segue regras, procedimentos e orientações.",
    },
    Criterion {
        key: "comprometimento",
        label: "Comprometimento",
        description: "Mostra interesse e responsabilidade.",
    },
    Criterion {
        key: "produtividade",
        label: "Produtividade",
        description: "Agilidade, qualidade e metas.",
    },
    Criterion {
        key: "equipe",
        label: "Trabalho em Equipe",
        description: "Colabora e respeita.",
    },
    Criterion {
        key: "comunicacao",
        label: "Comunicação",
        description: "Expressa-se com clareza; escuta ativamente.",
    },
    Criterion {
        key: "organizacao",
        label: "Organização",
        description: "Posto limpo e organizado.",
    },
    Criterion {
        key: "iniciativa",
        label: "Iniciativa e Proatividade",
        description: "Atua sem ordens constantes.",
    },
    Criterion {
        key: "aprendizado",
        label: "Capacidade de Aprendizado",
        description: "Aprende e aplica novidades.",
    },
    Criterion {
        key: "seguranca",
        label: "Segurança do Trabalho",
        description: "Cumpre normas e usa EPIs.",
    },
];

/// Catalog lookup by kind. `None` for kinds avalia has no catalog for.
pub fn criteria_for(kind: &str) -> Option<&'static [Criterion]> {
    match kind.parse::<EvaluationKind>() {
        Ok(EvaluationKind::Lider) => Some(CRITERIA_LIDER),
        Ok(EvaluationKind::Liderado) => Some(CRITERIA_LIDERADO),
        Err(_) => None,
    }
}
