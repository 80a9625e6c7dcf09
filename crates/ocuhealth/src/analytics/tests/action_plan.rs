use super::common::*;
use crate::analytics::{ActionPriority, EvaluationFilter};
use crate::assessments::ergonomic::AepVariant;
use crate::assessments::EvaluationScores;

#[test]
fn every_no_answer_becomes_one_entry() {
    let evaluations = sample();
    let selected = EvaluationFilter::default().apply(&evaluations);

    let plan = analytics().action_plan(&selected);
    let summary: Vec<_> = plan
        .iter()
        .map(|entry| {
            (
                entry.evaluation_id.as_str(),
                entry.category.as_str(),
                entry.item_index,
                entry.question.as_str(),
            )
        })
        .collect();

    assert_eq!(
        summary,
        vec![
            (
                "a-1",
                "Ambiente Físico",
                3,
                "Piso regular, antiderrapante e sem acúmulo de resíduos"
            ),
            (
                "a-1",
                "Organização do trabalho",
                1,
                "Diversificação de tarefas (evita repetição contínua e sobrecarga muscular)"
            ),
            (
                "a-2",
                "Mesa",
                4,
                "Permite posicionamento ergonômicos dos equipamentos"
            ),
        ]
    );
    assert!(plan
        .iter()
        .all(|entry| entry.priority == ActionPriority::High));
}

#[test]
fn sector_falls_back_to_variant_then_configured_text() {
    let mut evaluations = sample();
    let legacy = evaluations.last_mut().expect("sample has evaluations");
    if let EvaluationScores::Ergonomic { variant, .. } = &mut legacy.scores {
        *variant = None;
    }

    let selected = EvaluationFilter::default().apply(&evaluations);
    let plan = analytics().action_plan(&selected);

    assert_eq!(plan[0].person_name, "Carla");
    assert_eq!(plan[0].sector, "Logística");
    let legacy_entry = plan
        .iter()
        .find(|entry| entry.evaluation_id == "a-2")
        .expect("entry for a-2");
    assert_eq!(legacy_entry.sector, "N/A");
    assert_eq!(legacy_entry.question, "Item #5");

    let evaluations = sample();
    let selected = EvaluationFilter::default().apply(&evaluations);
    let plan = analytics().action_plan(&selected);
    let administrative = plan
        .iter()
        .find(|entry| entry.evaluation_id == "a-2")
        .expect("entry for a-2");
    assert_eq!(administrative.sector, "administrativo");
}

#[test]
fn items_outside_the_variant_checklist_use_placeholders() {
    let evaluations = vec![aep(
        "o-1",
        respondent("Eva", Some("Doca"), "R", "F", None, on(2025, 6, 1, 8)),
        AepVariant::Operational,
        &[
            (
                "organizacao_trabalho",
                &["Sim", "Sim", "Sim", "Sim", "Sim", "Sim", "Sim", "Não"],
            ),
            ("mesa", &["Não"]),
        ],
    )];
    let selected: Vec<_> = evaluations.iter().collect();

    let plan = analytics().action_plan(&selected);
    let questions: Vec<_> = plan
        .iter()
        .map(|entry| (entry.category.as_str(), entry.question.as_str()))
        .collect();

    assert_eq!(
        questions,
        vec![("Mesa", "Item #1"), ("Organização do trabalho", "Item #8")]
    );
}

#[test]
fn entry_count_matches_no_answers_across_evaluations() {
    let evaluations = sample();
    let selected = EvaluationFilter::default().apply(&evaluations);

    let expected: usize = selected
        .iter()
        .filter_map(|evaluation| evaluation.checklist())
        .map(|(_, responses)| responses.non_conformities().count())
        .sum();

    assert_eq!(analytics().action_plan(&selected).len(), expected);
    assert_eq!(expected, 3);
}

#[test]
fn priority_serializes_as_uppercase_tag() {
    let json = serde_json::to_string(&ActionPriority::High).expect("serialize");
    assert_eq!(json, "\"HIGH\"");
}
