use clap::Args;
use fraud_detector::config::AppConfig;
use fraud_detector::error::AppError;
use fraud_detector::fraud::{
    RuleConfiguration, RulesCatalog, ScoringEngine, ScoringResult, TransactionPayload,
};
use std::io::Read;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct CheckArgs {
    /// Transaction JSON document to score. Reads stdin when omitted.
    #[arg(long)]
    pub(crate) file: Option<PathBuf>,
}

pub(crate) fn run_check(args: CheckArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;

    let raw = match args.file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let result = score_document(&raw, config.rules)?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

pub(crate) fn run_rules() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let catalog = RulesCatalog::from_config(&config.rules);
    println!("{}", serde_json::to_string_pretty(&catalog)?);
    Ok(())
}

pub(crate) fn score_document(raw: &str, rules: RuleConfiguration) -> Result<ScoringResult, AppError> {
    let payload: TransactionPayload = serde_json::from_str(raw)?;
    let request = payload.validate()?;
    Ok(ScoringEngine::new(rules).evaluate(&request))
}
