use aura_meter::error::AppError;
use aura_meter::vision::{parse_vision_output, VisionReport};
use aura_meter::AuraAssessment;
use chrono::{DateTime, Utc};
use clap::Args;
use serde::Serialize;
use std::io::Read;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct ScoreArgs {
    /// Vision output to score (raw model text or bare JSON). Reads stdin when omitted.
    #[arg(long)]
    pub(crate) input: Option<PathBuf>,
    /// Print the report on a single line
    #[arg(long)]
    pub(crate) compact: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct ScoreReport {
    pub(crate) scored_at: DateTime<Utc>,
    pub(crate) vision: VisionReport,
    #[serde(flatten)]
    pub(crate) assessment: AuraAssessment,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs { input, compact } = args;

    let content = match input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let report = build_report(&content, Utc::now())?;
    println!("{}", render_report(&report, compact)?);
    Ok(())
}

pub(crate) fn build_report(
    content: &str,
    scored_at: DateTime<Utc>,
) -> Result<ScoreReport, AppError> {
    let vision = parse_vision_output(content)?;
    let assessment = AuraAssessment::from_analysis(vision.analysis());

    Ok(ScoreReport {
        scored_at,
        vision,
        assessment,
    })
}

pub(crate) fn render_report(report: &ScoreReport, compact: bool) -> Result<String, AppError> {
    let rendered = if compact {
        serde_json::to_string(report)?
    } else {
        serde_json::to_string_pretty(report)?
    };
    Ok(rendered)
}
