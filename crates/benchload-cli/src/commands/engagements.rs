use std::path::PathBuf;

use benchload_core::{Config, Engagement, EngagementHorizon};
use chrono::NaiveDate;
use clap::Args;

use super::common::{load_profile, resolve_now};

#[derive(Args)]
pub struct HorizonArgs {
    /// Member snapshot JSON file
    profile: PathBuf,
    /// Evaluate as of this date (YYYY-MM-DD, default: today)
    #[arg(long)]
    now: Option<NaiveDate>,
    /// Look-ahead in days (default from config)
    #[arg(long)]
    days: Option<u32>,
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub fn run_upcoming(args: HorizonArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let horizon = pick_horizon(config.upcoming_horizon(), args.days);
    let profile = load_profile(&args.profile, &config)?;
    let found = horizon.upcoming(&profile.engagements, resolve_now(args.now));
    print_engagements(&found, args.json, "No engagements starting", horizon.days())
}

pub fn run_ending(args: HorizonArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let horizon = pick_horizon(config.ending_horizon(), args.days);
    let profile = load_profile(&args.profile, &config)?;
    let found = horizon.ending(&profile.engagements, resolve_now(args.now));
    print_engagements(&found, args.json, "No engagements ending", horizon.days())
}

fn pick_horizon(configured: EngagementHorizon, days: Option<u32>) -> EngagementHorizon {
    match days {
        Some(days) => configured.with_days(days),
        None => configured,
    }
}

fn print_engagements(
    found: &[&Engagement],
    json: bool,
    empty_message: &str,
    days: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(found)?);
        return Ok(());
    }
    if found.is_empty() {
        println!("{empty_message} in the next {days} days");
        return Ok(());
    }
    for e in found {
        let end = e
            .end_date
            .map_or_else(|| "ongoing".to_string(), |d| d.to_string());
        let role = e.role.as_deref().unwrap_or("-");
        println!(
            "{:<12} {:<16} {:<12} {:>6}h  {} .. {}",
            e.id, e.project_id, role, e.hours_per_week, e.start_date, end
        );
    }
    Ok(())
}
