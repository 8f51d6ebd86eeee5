use anyhow::Result;
use clap::Args;
use colored::Colorize;
use dialoguer::Confirm;

use super::{failure, success, text_or_prompt_optional, value_or_prompt, with_spinner, Session};
use crate::models::{NewWorkoutPlan, WorkoutPlan};

#[derive(Args)]
pub struct PlanCreateArgs {
    /// Plan name
    #[arg(short, long)]
    name: Option<String>,

    /// What the plan is for
    #[arg(short, long)]
    goal: Option<String>,

    /// Duration, e.g. "8 weeks"
    #[arg(short, long)]
    duration: Option<String>,

    #[arg(long)]
    description: Option<String>,
}

pub async fn list_plans(session: &Session) -> Result<()> {
    let client = session.client()?;
    let plans = with_spinner("Fetching workout plans...", client.list_plans()).await?;

    if plans.is_empty() {
        println!("No workout plans yet. Create one with `fitness plans create`.");
        return Ok(());
    }

    println!("{}", "Workout Plans".bold());
    println!();
    for plan in &plans {
        print_plan(plan);
    }

    Ok(())
}

pub async fn create_plan(session: &Session, args: PlanCreateArgs) -> Result<()> {
    let plan = NewWorkoutPlan {
        plan_name: value_or_prompt(args.name, "Plan name")?,
        goal: value_or_prompt(args.goal, "Goal")?,
        duration: value_or_prompt(args.duration, "Duration")?,
        description: text_or_prompt_optional(args.description, "Description")?,
    };

    let client = session.client()?;
    match with_spinner("Creating workout plan...", client.create_plan(&plan)).await {
        Ok(created) => {
            success("Workout plan created");
            print_plan(&created);
            Ok(())
        }
        Err(e) => {
            failure(&format!("Failed to create workout plan: {}", e));
            Err(e)
        }
    }
}

pub async fn show_plan(session: &Session, id: &str) -> Result<()> {
    let client = session.client()?;
    let plan = with_spinner("Fetching workout plan...", client.get_plan(id)).await?;

    print_plan(&plan);
    if !plan.description.is_empty() {
        println!();
        println!("{}", plan.description);
    }
    Ok(())
}

pub async fn delete_plan(session: &Session, id: &str, force: bool) -> Result<()> {
    if !force
        && !Confirm::new()
            .with_prompt(format!("Delete workout plan {}?", id))
            .default(false)
            .interact()?
    {
        println!("Cancelled.");
        return Ok(());
    }

    let client = session.client()?;
    let response = with_spinner("Deleting workout plan...", client.delete_plan(id)).await?;

    success(&response.message);
    Ok(())
}

fn print_plan(plan: &WorkoutPlan) {
    println!("{}  {}", plan.id.dimmed(), plan.plan_name.bold());
    println!("    Goal:     {}", plan.goal);
    println!("    Duration: {}", plan.duration);
}
