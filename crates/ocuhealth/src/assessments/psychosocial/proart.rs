//! Legacy four-scale PROART instrument.
//!
//! Unlike the COPSOQ domains, each scale sums its raw 1–5 answers and divides by a fixed,
//! scale-specific divisor rather than by the number of answered items.

use super::super::domain::{round_to, CatalogError};
use super::normalizer::{LIKERT_MAX, LIKERT_MIN};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

pub const PROART_CATALOG_VERSION: &str = "proart/1";

/// Upper bound of a PROART scale score.
pub const PROART_SCORE_CEILING: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ProartScaleId {
    #[serde(rename = "scale1")]
    OrganizationOfWork,
    #[serde(rename = "scale2")]
    ManagementStyles,
    #[serde(rename = "scale3")]
    MentalSuffering,
    #[serde(rename = "scale4")]
    WorkRelatedDamages,
}

impl ProartScaleId {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::OrganizationOfWork,
            Self::ManagementStyles,
            Self::MentalSuffering,
            Self::WorkRelatedDamages,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::OrganizationOfWork => "scale1",
            Self::ManagementStyles => "scale2",
            Self::MentalSuffering => "scale3",
            Self::WorkRelatedDamages => "scale4",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProartItem {
    pub id: String,
    pub text: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProartScale {
    pub id: ProartScaleId,
    pub title: &'static str,
    pub description: &'static str,
    pub declared_items: usize,
    pub divisor: u16,
    pub items: Vec<ProartItem>,
}

impl ProartScale {
    pub fn new(
        id: ProartScaleId,
        title: &'static str,
        description: &'static str,
        declared_items: usize,
        divisor: u16,
        texts: &[&'static str],
    ) -> Self {
        let prefix = match id {
            ProartScaleId::OrganizationOfWork => "s1",
            ProartScaleId::ManagementStyles => "s2",
            ProartScaleId::MentalSuffering => "s3",
            ProartScaleId::WorkRelatedDamages => "s4",
        };

        Self {
            id,
            title,
            description,
            declared_items,
            divisor,
            items: texts
                .iter()
                .enumerate()
                .map(|(idx, text)| ProartItem {
                    id: format!("{prefix}_q{}", idx + 1),
                    text,
                })
                .collect(),
        }
    }

    pub fn item(&self, id: &str) -> Option<&ProartItem> {
        self.items.iter().find(|item| item.id == id)
    }
}

#[derive(Debug, Clone)]
pub struct ProartCatalog {
    version: &'static str,
    scales: Vec<ProartScale>,
}

impl ProartCatalog {
    pub fn standard() -> Result<Self, CatalogError> {
        Self::new(PROART_CATALOG_VERSION, standard_scales())
    }

    /// Item counts are a declared property of each scale and must match the item list.
    pub fn new(version: &'static str, scales: Vec<ProartScale>) -> Result<Self, CatalogError> {
        for scale in &scales {
            if scale.items.is_empty() {
                return Err(CatalogError::EmptyGroup(scale.id.key().to_string()));
            }
            if scale.items.len() != scale.declared_items {
                return Err(CatalogError::ItemCountMismatch {
                    group: scale.id.key().to_string(),
                    declared: scale.declared_items,
                    found: scale.items.len(),
                });
            }
            if scale.divisor == 0 {
                return Err(CatalogError::ZeroDivisor(scale.id.key().to_string()));
            }
        }

        Ok(Self { version, scales })
    }

    pub fn version(&self) -> &'static str {
        self.version
    }

    pub fn scales(&self) -> &[ProartScale] {
        &self.scales
    }

    pub fn scale(&self, id: ProartScaleId) -> Option<&ProartScale> {
        self.scales.iter().find(|scale| scale.id == id)
    }
}

/// Raw answers per scale, keyed by item id (`s3_q12`).
pub type ProartResponses = BTreeMap<ProartScaleId, BTreeMap<String, i64>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProartLevel {
    Low,
    Medium,
    High,
}

impl ProartLevel {
    pub const MEDIUM_FLOOR: f64 = 2.30;
    pub const HIGH_FLOOR: f64 = 3.70;

    pub fn classify(score: f64) -> Self {
        if score >= Self::HIGH_FLOOR {
            Self::High
        } else if score >= Self::MEDIUM_FLOOR {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Baixo",
            Self::Medium => "Médio",
            Self::High => "Alto",
        }
    }

    pub const fn color(self) -> &'static str {
        match self {
            Self::Low => "#4caf50",
            Self::Medium => "#ffa726",
            Self::High => "#e53935",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProartScaleResult {
    pub scale: ProartScaleId,
    pub title: String,
    /// Sum of valid answers over the fixed divisor, two decimals, capped at 5.
    pub score: f64,
    pub level: ProartLevel,
    pub label: String,
    pub color: String,
    pub answered: usize,
    pub invalid_answers: usize,
    pub unknown_items: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProartResult {
    pub catalog_version: String,
    pub scales: Vec<ProartScaleResult>,
}

impl ProartResult {
    pub fn scale(&self, id: ProartScaleId) -> Option<&ProartScaleResult> {
        self.scales.iter().find(|scale| scale.scale == id)
    }
}

/// Divisor-based scorer, selectable independently of the percentage scale.
#[derive(Debug, Clone)]
pub struct ProartScorer {
    catalog: ProartCatalog,
}

impl ProartScorer {
    pub fn new(catalog: ProartCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &ProartCatalog {
        &self.catalog
    }

    pub fn score(&self, responses: &ProartResponses) -> ProartResult {
        let scales = self
            .catalog
            .scales()
            .iter()
            .map(|scale| score_scale(scale, responses.get(&scale.id)))
            .collect();

        ProartResult {
            catalog_version: self.catalog.version().to_string(),
            scales,
        }
    }
}

fn score_scale(scale: &ProartScale, answers: Option<&BTreeMap<String, i64>>) -> ProartScaleResult {
    let mut sum: i64 = 0;
    let mut answered = 0;
    let mut invalid_answers = 0;
    let mut unknown_items = 0;

    for (item_id, raw) in answers.into_iter().flatten() {
        if scale.item(item_id).is_none() {
            debug!(scale = scale.id.key(), item = %item_id, "ignoring unknown PROART item");
            unknown_items += 1;
            continue;
        }
        if !(LIKERT_MIN..=LIKERT_MAX).contains(raw) {
            debug!(scale = scale.id.key(), item = %item_id, raw, "excluding out-of-range answer");
            invalid_answers += 1;
            continue;
        }
        sum += raw;
        answered += 1;
    }

    let score = if answered == 0 {
        0.0
    } else {
        round_to(sum as f64 / f64::from(scale.divisor), 2).min(PROART_SCORE_CEILING)
    };
    let level = ProartLevel::classify(score);

    ProartScaleResult {
        scale: scale.id,
        title: scale.title.to_string(),
        score,
        level,
        label: level.label().to_string(),
        color: level.color().to_string(),
        answered,
        invalid_answers,
        unknown_items,
    }
}

fn standard_scales() -> Vec<ProartScale> {
    vec![
        ProartScale::new(
            ProartScaleId::OrganizationOfWork,
            "Escala 1: Organização do Trabalho",
            "Sobre o ritmo, prazos e autonomia.",
            19,
            13,
            &[
                "Número de trabalhadores suficiente",
                "Recursos de trabalho suficientes",
                "Espaço físico adequado",
                "Materiais adequados",
                "Ritmo de trabalho adequado",
                "Prazos flexíveis",
                "Condições para alcançar resultados",
                "Clareza na definição de tarefas",
                "Justiça na distribuição de tarefas",
                "Participação nas decisões",
                "Comunicação superior/subordinado adequada",
                "Autonomia na execução",
                "Qualidade na comunicação entre pessoas",
                "Informações claras para execução",
                "Avaliação além das obrigações",
                "Flexibilidade nas normas",
                "Orientações coerentes",
                "Tarefas variadas",
                "Liberdade para opinar",
            ],
        ),
        ProartScale::new(
            ProartScaleId::ManagementStyles,
            "Escala 2: Estilos de Gestão",
            "Sobre hierarquia, controle e autonomia.",
            21,
            21,
            &[
                "Incentivo à idolatria de superiores",
                "Representantes se consideram insubstituíveis",
                "Responsáveis preferem trabalho individual",
                "Superiores se consideram o centro do mundo",
                "Responsáveis buscam chamar atenção",
                "Importância excessiva às regras",
                "Valorização da hierarquia",
                "Laços afetivos fracos",
                "Forte controle do trabalho",
                "Desorganização com mudanças",
                "Compromisso sem reconhecimento",
                "Mérito das conquistas é de todos",
                "Trabalho coletivo valorizado",
                "Resultado visto como realização do grupo",
                "Decisões tomadas em grupo",
                "Incentivo a novos desafios",
                "Estímulo ao trabalho interativo entre áreas",
                "Valorização da competência",
                "Oportunidade de ascensão para todos",
                "Preocupação com bem-estar",
                "Valorização da inovação",
            ],
        ),
        ProartScale::new(
            ProartScaleId::MentalSuffering,
            "Escala 3: Sofrimento Mental",
            "Sentimentos de inutilidade, sobrecarga, etc.",
            28,
            28,
            &[
                "Sentimento de inutilidade",
                "Tarefas insignificantes",
                "Improdutividade",
                "Falta de identificação",
                "Desmotivação",
                "Trabalho irrelevante",
                "Trabalho sem sentido",
                "Tarefas banais",
                "Falta de oportunidade externa",
                "Cansaço",
                "Desgaste",
                "Frustração",
                "Sobrecarga",
                "Desânimo",
                "Revolta com decisões externas",
                "Sofrimento",
                "Insatisfação",
                "Desvalorização pela instituição",
                "Revolta com ordens superiores",
                "Desvalorização pelos colegas",
                "Falta de liberdade de expressão",
                "Indiferença de colegas",
                "Exclusão do planejamento",
                "Indiferença da liderança",
                "Dificuldade de convivência",
                "Desqualificação pela liderança",
                "Falta de diálogo com liderança",
                "Desconfiança",
            ],
        ),
        ProartScale::new(
            ProartScaleId::WorkRelatedDamages,
            "Escala 4: Danos Relacionados ao Trabalho",
            "Dores físicas, distúrbios, isolamento.",
            23,
            23,
            &[
                "Amargura",
                "Vazio",
                "Mau-humor",
                "Vontade de desistir",
                "Tristeza",
                "Perda de autoconfiança",
                "Solidão",
                "Insensibilidade",
                "Dificuldade em relações externas",
                "Vontade de ficar sozinho",
                "Conflitos familiares",
                "Agressividade",
                "Dificuldade com amigos",
                "Impaciência",
                "Dores no corpo",
                "Dores no braço",
                "Dores na cabeça",
                "Dores nas costas",
                "Dores nas pernas",
                "Distúrbios digestivos",
                "Distúrbios circulatórios",
                "Alterações no sono",
                "Alterações no apetite",
            ],
        ),
    ]
}
