use crate::commands::DashboardOutput;
use ocuhealth::report::views::EvaluationReport;

pub(crate) fn render_report(report: &EvaluationReport) {
    println!(
        "{} evaluation {} ({})",
        report.instrument, report.evaluation_id, report.person_name
    );

    if let Some(psychosocial) = &report.psychosocial {
        println!(
            "Overall score: {:.2} ({})",
            psychosocial.overall,
            psychosocial.overall_risk.label()
        );
        println!("\nDomains (highest risk first)");
        for domain in &psychosocial.ranked {
            println!(
                "- {}: {:.2} | {}",
                domain.name, domain.mean, domain.classification
            );
        }
        if !psychosocial.recommendations.is_empty() {
            println!("\nRecommended actions");
            for line in &psychosocial.recommendations {
                println!("- {line}");
            }
        }
    }

    if let Some(proart) = &report.proart {
        println!("Catalog {}", proart.catalog_version);
        println!("\nScales");
        for scale in &proart.scales {
            println!(
                "- {}: {:.2} | {} ({} answered)",
                scale.title, scale.score, scale.label, scale.answered
            );
        }
    }

    if let Some(ergonomic) = &report.ergonomic {
        println!(
            "Global compliance: {:.1}% ({})",
            ergonomic.global, ergonomic.risk_label
        );
        println!("\nCategories");
        for category in &ergonomic.categories {
            println!(
                "- {}: {:.1}% | {}",
                category.title, category.percentage, category.status_label
            );
        }
        println!("\nRecommendations");
        for line in &ergonomic.recommendations {
            println!("- {line}");
        }
    }

    if report.alerts.is_empty() {
        println!("\nAlerts: none");
    } else {
        println!("\nAlerts");
        for alert in &report.alerts {
            println!("- [{:?}] {}", alert.level, alert.message);
        }
    }
}

pub(crate) fn render_dashboard(output: &DashboardOutput) {
    let snapshot = &output.snapshot;
    println!(
        "Dashboard: {} of {} evaluations matched",
        snapshot.matched, snapshot.total
    );

    match &snapshot.copsoq {
        Some(averages) if !averages.is_empty() => {
            println!("\nCOPSOQ II domain averages");
            for average in averages {
                println!(
                    "- {}: {:.2} ({} evaluations)",
                    average.name, average.mean, average.evaluations
                );
            }
        }
        _ => println!("\nCOPSOQ II domain averages: none"),
    }

    if !output.priorities.is_empty() {
        println!("\nPriority domains");
        for average in &output.priorities {
            println!("- {}: {:.2}", average.name, average.mean);
        }
    }

    match &snapshot.aep {
        Some(averages) if !averages.is_empty() => {
            println!("\nAEP category averages");
            for average in averages {
                println!(
                    "- {}: {:.1}% ({} evaluations)",
                    average.title, average.mean, average.evaluations
                );
            }
        }
        _ => println!("\nAEP category averages: none"),
    }

    if snapshot.action_plan.is_empty() {
        println!("\nAction plan: none");
    } else {
        println!("\nAction plan");
        for entry in &snapshot.action_plan {
            println!(
                "- {} | {} | {} #{} | {}",
                entry.person_name,
                entry.sector,
                entry.category,
                entry.item_index + 1,
                entry.question
            );
        }
    }
}
