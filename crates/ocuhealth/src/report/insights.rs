use super::views::{
    CategoryInsightEntry, CategoryStatus, DomainInsightEntry, ErgonomicInsights,
    PsychosocialInsights,
};
use crate::analytics::DomainAverage;
use crate::assessments::domain::{mean, round_to};
use crate::assessments::ergonomic::{AepCatalog, ComplianceResult};
use crate::assessments::psychosocial::{DomainResult, PsychosocialResult, RiskLevel};
use std::cmp::Ordering;

/// Upper bound of the priority list shown on dashboards and reports.
pub const PRIORITY_LIMIT: usize = 10;

const BELOW_TARGET_NOTE: &str = "A conformidade neste item está abaixo do nível desejado (>80%). Recomenda-se revisão imediata das condições ergonômicas.";

const PSYCHOSOCIAL_ACTIONS: [&str; 4] = [
    "Revisão dos fluxos de trabalho e distribuição de carga para reduzir as demandas quantitativas.",
    "Programas de treinamento para lideranças visando a melhoria da qualidade do suporte e feedback.",
    "Implementação de canais transparentes de comunicação para aumentar a previsibilidade e confiança na organização.",
    "Fortalecimento das políticas de reconhecimento e justiça interna.",
];

const ERGONOMIC_MAINTENANCE: [&str; 2] = [
    "Manter o monitoramento periódico das condições ergonômicas.",
    "Realizar treinamentos de reciclagem anuais.",
];

pub fn psychosocial_insights(result: &PsychosocialResult) -> PsychosocialInsights {
    let mut ranked: Vec<DomainInsightEntry> = result.answered_domains().map(entry).collect();
    ranked.sort_by(|a, b| a.mean.partial_cmp(&b.mean).unwrap_or(Ordering::Equal));

    let priorities: Vec<DomainInsightEntry> = ranked
        .iter()
        .filter(|domain| domain.mean < RiskLevel::SATISFACTORY_FLOOR)
        .take(PRIORITY_LIMIT)
        .cloned()
        .collect();
    let critical: Vec<DomainInsightEntry> = ranked
        .iter()
        .filter(|domain| domain.mean < RiskLevel::MODERATE_FLOOR)
        .cloned()
        .collect();

    let recommendations = if priorities.is_empty() {
        Vec::new()
    } else {
        PSYCHOSOCIAL_ACTIONS.iter().map(|action| action.to_string()).collect()
    };

    PsychosocialInsights {
        overall: result.overall,
        overall_risk: result.overall_risk,
        ranked,
        priorities,
        critical,
        recommendations,
    }
}

fn entry(domain: &DomainResult) -> DomainInsightEntry {
    DomainInsightEntry {
        key: domain.key.clone(),
        name: domain.name.clone(),
        mean: domain.mean,
        risk: domain.risk,
        classification: domain.risk.label(),
        color: domain.risk.color(),
        observation: domain.risk.observation(),
    }
}

/// Dashboard priority list: domains below the satisfactory floor, lowest first.
pub fn priority_domains(averages: &[DomainAverage]) -> Vec<DomainAverage> {
    let mut below: Vec<DomainAverage> = averages
        .iter()
        .filter(|average| average.mean < RiskLevel::SATISFACTORY_FLOOR)
        .cloned()
        .collect();
    below.sort_by(|a, b| a.mean.partial_cmp(&b.mean).unwrap_or(Ordering::Equal));
    below.truncate(PRIORITY_LIMIT);
    below
}

pub fn ergonomic_insights(result: &ComplianceResult, catalog: &AepCatalog) -> ErgonomicInsights {
    let categories: Vec<CategoryInsightEntry> = result
        .categories
        .iter()
        .filter(|category| category.is_applicable())
        .map(|category| {
            let status = CategoryStatus::classify(category.percentage);
            CategoryInsightEntry {
                category_id: category.category_id.clone(),
                title: catalog.category_title(&category.category_id).to_string(),
                percentage: category.percentage,
                status,
                status_label: status.label(),
                color: status.color(),
                note: (status != CategoryStatus::Adequate).then_some(BELOW_TARGET_NOTE),
            }
        })
        .collect();

    let needs_adjustment: Vec<String> = categories
        .iter()
        .filter(|category| category.status != CategoryStatus::Adequate)
        .map(|category| category.title.clone())
        .collect();

    let recommendations = if needs_adjustment.is_empty() {
        ERGONOMIC_MAINTENANCE
            .iter()
            .map(|line| line.to_string())
            .collect()
    } else {
        needs_adjustment
            .iter()
            .map(|title| {
                format!(
                    "Adequação de {title}: realizar análise detalhada dos postos de trabalho, \
ajustar equipamentos conforme a NR-17 e promover capacitação sobre ajustes ergonômicos."
                )
            })
            .collect()
    };

    let mean_percentage = mean(categories.iter().map(|category| category.percentage))
        .map(|value| round_to(value, 1))
        .unwrap_or(0.0);

    ErgonomicInsights {
        global: result.global,
        risk: result.risk,
        risk_label: result.risk.label(),
        categories,
        mean_percentage,
        needs_adjustment,
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessments::ergonomic::{ChecklistResponses, ComplianceScorer, RawChecklist};
    use crate::assessments::psychosocial::{CopsoqCatalog, PsychosocialResponses, PsychosocialScorer};

    fn psychosocial(answers: &[(u16, i64)]) -> PsychosocialResult {
        PsychosocialScorer::new(CopsoqCatalog::standard().expect("catalog"))
            .score(&answers.iter().copied().collect::<PsychosocialResponses>())
    }

    #[test]
    fn domains_are_ranked_lowest_first_with_priority_and_critical_lists() {
        // influence 100, work-family 25, recognition 75
        let result = psychosocial(&[(14, 5), (56, 4), (57, 5), (58, 3), (34, 4)]);
        let insights = psychosocial_insights(&result);

        let ranked: Vec<_> = insights.ranked.iter().map(|d| d.key.as_str()).collect();
        assert_eq!(
            ranked,
            vec!["conflito_trabalho_familia", "reconhecimento", "influencia_trabalho"]
        );
        assert_eq!(insights.priorities.len(), 1);
        assert_eq!(insights.critical[0].observation, RiskLevel::Elevated.observation());
        assert_eq!(insights.recommendations.len(), PSYCHOSOCIAL_ACTIONS.len());
    }

    #[test]
    fn satisfactory_results_need_no_recommendations() {
        let insights = psychosocial_insights(&psychosocial(&[(14, 5), (15, 4)]));
        assert!(insights.priorities.is_empty());
        assert!(insights.recommendations.is_empty());
    }

    #[test]
    fn priority_domains_are_capped_and_sorted() {
        let averages: Vec<DomainAverage> = (0..14)
            .map(|idx| DomainAverage {
                key: format!("d{idx}"),
                name: format!("D{idx}"),
                mean: 80.0 - f64::from(idx) * 4.0,
                evaluations: 1,
            })
            .collect();

        let priorities = priority_domains(&averages);
        assert_eq!(priorities.len(), PRIORITY_LIMIT);
        assert_eq!(priorities[0].key, "d13");
        assert!(priorities.iter().all(|average| average.mean < 75.0));
    }

    #[test]
    fn ergonomic_categories_get_report_bands() {
        let mut raw = RawChecklist::new();
        raw.insert("mesa".into(), vec!["Sim".into(), "Não".into(), "Não".into()]);
        raw.insert(
            "cadeira".into(),
            vec!["Sim".into(), "Sim".into(), "Sim".into(), "Não".into()],
        );
        raw.insert("monitor".into(), vec!["Sim".into()]);
        raw.insert("laptop".into(), vec!["NA".into()]);
        let result = ComplianceScorer::default().score(&ChecklistResponses::from_raw(&raw));
        let catalog = AepCatalog::standard().expect("catalog");

        let insights = ergonomic_insights(&result, &catalog);
        let bands: Vec<_> = insights
            .categories
            .iter()
            .map(|c| (c.title.as_str(), c.status_label))
            .collect();

        assert_eq!(
            bands,
            vec![
                ("Cadeira", "ATENÇÃO"),
                ("Mesa", "CRÍTICO"),
                ("Monitor (tela computador)", "ADEQUADO"),
            ]
        );
        assert_eq!(insights.needs_adjustment, vec!["Cadeira", "Mesa"]);
        assert!(insights.recommendations[0].starts_with("Adequação de Cadeira"));
        // (75.0 + 33.3 + 100.0) / 3
        assert_eq!(insights.mean_percentage, 69.4);
    }
}
