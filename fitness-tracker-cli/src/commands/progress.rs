use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Args;
use colored::Colorize;
use dialoguer::Input;

use super::{success, text_or_prompt_optional, value_or_prompt, with_spinner, Session};
use crate::models::{ProgressForm, ProgressRow};
use crate::tracker::ProgressTracker;

#[derive(Args)]
pub struct TrackArgs {
    /// Date of the measurement (YYYY-MM-DD)
    #[arg(long)]
    date: Option<String>,

    /// Weight in kg
    #[arg(long)]
    weight: Option<f64>,

    #[arg(long)]
    body_measurements: Option<String>,

    #[arg(long)]
    notes: Option<String>,
}

pub async fn track(session: &Session, args: TrackArgs) -> Result<()> {
    let mut tracker = ProgressTracker::new(session.client()?);

    if let Err(e) = tracker.load().await {
        tracing::warn!("Could not load progress log: {:#}", e);
    }

    let form = ProgressForm {
        date: date_or_prompt(args.date)?,
        weight: value_or_prompt(args.weight, "Weight (in kg)")?,
        body_measurements: text_or_prompt_optional(args.body_measurements, "Body Measurements")?,
        notes: text_or_prompt_optional(args.notes, "Notes")?,
    };

    with_spinner("Tracking progress...", async {
        tracker.submit(&form).await;
        Ok::<_, anyhow::Error>(())
    })
    .await?;

    // main prints the returned error
    if let Some(message) = tracker.error() {
        anyhow::bail!("{}", message);
    }

    success("Progress tracked");
    println!();
    print_rows(&tracker.rows());

    Ok(())
}

/// Prompt for the date with today as the default, and check its format
fn date_or_prompt(value: Option<String>) -> Result<String> {
    let date = match value {
        Some(date) => date,
        None => Input::<String>::new()
            .with_prompt("Date")
            .default(Local::now().format("%Y-%m-%d").to_string())
            .interact_text()?,
    };

    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", date))?;

    Ok(date.trim().to_string())
}

pub async fn list(session: &Session) -> Result<()> {
    let mut tracker = ProgressTracker::new(session.client()?);
    with_spinner("Fetching progress...", tracker.load()).await?;

    if tracker.entries().is_empty() {
        println!("No progress entries yet. Add one with `fitness progress track`.");
        return Ok(());
    }

    print_rows(&tracker.rows());
    Ok(())
}

fn print_rows(rows: &[ProgressRow]) {
    println!(
        "{:<12} {:>10}  {:<30} {}",
        "Date".bold(),
        "Weight".bold(),
        "Body Measurements".bold(),
        "Notes".bold()
    );
    for row in rows {
        println!(
            "{:<12} {:>10}  {:<30} {}",
            row.date, row.weight, row.body_measurements, row.notes
        );
    }
}
