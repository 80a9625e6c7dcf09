use crate::commands::{run_dashboard, run_score, DashboardArgs, ScoreCommand};
use crate::demo::{run_demo, DemoArgs};
use clap::{Parser, Subcommand};
use ocuhealth::assessments::AssessmentEngine;
use ocuhealth::config::AppConfig;
use ocuhealth::error::AppError;
use ocuhealth::telemetry;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "ocuhealth",
    about = "Score occupational-health questionnaires and roll them up into dashboards",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score a single questionnaire from an answers file
    Score {
        #[command(subcommand)]
        command: ScoreCommand,
    },
    /// Filter scored evaluations and print domain averages and the action plan
    Dashboard(DashboardArgs),
    /// Score a bundled set of sample questionnaires end to end
    Demo(DemoArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let engine = AssessmentEngine::standard(config.scoring.clone())?;
    info!(
        environment = ?config.environment,
        policy = config.scoring.not_applicable.label(),
        "assessment engine ready"
    );

    match cli.command {
        Command::Score { command } => run_score(&engine, command),
        Command::Dashboard(args) => run_dashboard(&engine, args),
        Command::Demo(args) => run_demo(&engine, args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_tree_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn aep_scoring_requires_exactly_one_input() {
        let both = Cli::try_parse_from([
            "ocuhealth",
            "score",
            "aep",
            "--variant",
            "operacional",
            "--answers",
            "a.json",
            "--sheet",
            "a.csv",
        ]);
        assert!(both.is_err());

        let neither = Cli::try_parse_from(["ocuhealth", "score", "aep", "--variant", "operacional"]);
        assert!(neither.is_err());

        let sheet = Cli::try_parse_from([
            "ocuhealth",
            "score",
            "aep",
            "--variant",
            "administrativo",
            "--sheet",
            "a.csv",
        ]);
        assert!(sheet.is_ok());
    }

    #[test]
    fn dashboard_accepts_every_filter_flag() {
        let parsed = Cli::try_parse_from([
            "ocuhealth",
            "dashboard",
            "--evaluations",
            "evaluations.json",
            "--sector",
            "log",
            "--role",
            "analista",
            "--gender",
            "F",
            "--min-tenure-years",
            "2",
            "--start-date",
            "2025-01-01",
            "--end-date",
            "2025-03-31",
            "--json",
        ]);
        assert!(parsed.is_ok(), "{parsed:?}");
    }
}
