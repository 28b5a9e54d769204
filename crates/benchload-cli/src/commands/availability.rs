use std::path::PathBuf;

use benchload_core::presenter::format_hours;
use benchload_core::{
    calculate_aggregate_availability, calculate_period_availability, format_availability_summary,
    get_availability_status, Config,
};
use chrono::NaiveDate;
use clap::Args;
use serde_json::json;

use super::common::{load_profile, resolve_now};

#[derive(Args)]
pub struct AvailabilityArgs {
    /// Member snapshot JSON file
    profile: PathBuf,
    /// Evaluate as of this date (YYYY-MM-DD, default: today)
    #[arg(long)]
    now: Option<NaiveDate>,
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
pub struct PeriodArgs {
    /// Member snapshot JSON file
    profile: PathBuf,
    /// First day of the window (YYYY-MM-DD)
    #[arg(long)]
    from: NaiveDate,
    /// Last day of the window, inclusive (YYYY-MM-DD)
    #[arg(long)]
    to: NaiveDate,
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub fn run_aggregate(args: AvailabilityArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let profile = load_profile(&args.profile, &config)?;
    let result = calculate_aggregate_availability(&profile, resolve_now(args.now))?;
    let status = get_availability_status(&result);
    let summary = format_availability_summary(&result);

    if args.json {
        let out = json!({
            "availability": result,
            "status": status,
            "summary": summary,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{summary}");
        println!("Status: {}", status.label);
        if result.overallocated {
            println!("Overallocated by {}h", format_hours(result.engaged_hours - result.capacity));
        }
        if result.on_approved_time_off_now {
            println!("Currently on approved time off");
        }
    }
    Ok(())
}

pub fn run_period(args: PeriodArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let profile = load_profile(&args.profile, &config)?;
    let result = calculate_period_availability(&profile, args.from, args.to)?;
    let status = get_availability_status(&result);
    let summary = format_availability_summary(&result);

    if args.json {
        let out = json!({
            "availability": result,
            "status": status,
            "summary": summary,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{} .. {} ({} working days)", result.window_start, result.window_end, result.working_days);
        println!("{summary}");
        println!("Status: {}", status.label);
        if result.time_off_reduction > 0.0 {
            println!("Time off reduces capacity by {:.1}h", result.time_off_reduction);
        }
    }
    Ok(())
}
