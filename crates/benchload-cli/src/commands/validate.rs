use std::path::PathBuf;

use benchload_core::{check_engagement_capacity, Config, EngagementDraft};
use chrono::NaiveDate;
use clap::Args;

use super::common::load_profile;

#[derive(Args)]
pub struct ValidateArgs {
    /// Member snapshot JSON file
    profile: PathBuf,
    /// Weekly hours of the candidate engagement
    #[arg(long, allow_hyphen_values = true)]
    hours: f64,
    /// Candidate start date (YYYY-MM-DD)
    #[arg(long)]
    start: Option<NaiveDate>,
    /// Candidate end date (YYYY-MM-DD)
    #[arg(long)]
    end: Option<NaiveDate>,
    /// ID of the engagement being edited, excluded from the committed total
    #[arg(long)]
    exclude: Option<String>,
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: ValidateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let profile = load_profile(&args.profile, &config)?;
    let draft = EngagementDraft::new(args.hours).with_dates(args.start, args.end);
    let violations = check_engagement_capacity(&profile, &draft, args.exclude.as_deref())?;
    let messages: Vec<String> = violations.iter().map(ToString::to_string).collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&messages)?);
    } else if messages.is_empty() {
        println!("ok");
    } else {
        for message in &messages {
            println!("- {message}");
        }
    }

    if !violations.is_empty() {
        std::process::exit(1);
    }
    Ok(())
}
