use anyhow::Result;
use clap::Args;
use colored::Colorize;
use dialoguer::Confirm;

use super::{failure, success, value_or_prompt, with_spinner, Session};
use crate::models::{FitnessGoal, GoalUpdate, NewGoal};

#[derive(Args)]
pub struct GoalCreateArgs {
    /// Kind of goal, e.g. "Weight Loss"
    #[arg(short = 't', long)]
    goal_type: Option<String>,

    /// Numeric target
    #[arg(long)]
    target: Option<f64>,

    /// Timeline, e.g. "3 months"
    #[arg(long)]
    timeline: Option<String>,
}

#[derive(Args)]
pub struct GoalUpdateArgs {
    /// Goal ID
    id: String,

    #[arg(short = 't', long)]
    goal_type: Option<String>,

    #[arg(long)]
    target: Option<f64>,

    #[arg(long)]
    timeline: Option<String>,
}

pub async fn list_goals(session: &Session) -> Result<()> {
    let client = session.client()?;
    let goals = with_spinner("Fetching goals...", client.list_goals()).await?;

    if goals.is_empty() {
        println!("No fitness goals yet. Create one with `fitness goals create`.");
        return Ok(());
    }

    println!("{}", "Fitness Goals".bold());
    println!();
    for goal in &goals {
        print_goal(goal);
    }

    Ok(())
}

pub async fn create_goal(session: &Session, args: GoalCreateArgs) -> Result<()> {
    let goal = NewGoal {
        goal_type: value_or_prompt(args.goal_type, "Goal type")?,
        target: value_or_prompt(args.target, "Target")?,
        timeline: value_or_prompt(args.timeline, "Timeline")?,
    };

    let client = session.client()?;
    match with_spinner("Creating goal...", client.create_goal(&goal)).await {
        Ok(created) => {
            success("Goal created");
            print_goal(&created);
            Ok(())
        }
        Err(e) => {
            failure(&format!("Failed to create goal: {}", e));
            Err(e)
        }
    }
}

pub async fn show_goal(session: &Session, id: &str) -> Result<()> {
    let client = session.client()?;
    let goal = with_spinner("Fetching goal...", client.get_goal(id)).await?;

    print_goal(&goal);
    Ok(())
}

pub async fn update_goal(session: &Session, args: GoalUpdateArgs) -> Result<()> {
    let update = GoalUpdate {
        goal_type: args.goal_type,
        target: args.target,
        timeline: args.timeline,
    };

    if update.is_empty() {
        println!("Nothing to update. Pass --goal-type, --target or --timeline.");
        return Ok(());
    }

    let client = session.client()?;
    let updated = with_spinner("Updating goal...", client.update_goal(&args.id, &update)).await?;

    success("Goal updated");
    print_goal(&updated);
    Ok(())
}

pub async fn delete_goal(session: &Session, id: &str, force: bool) -> Result<()> {
    if !force
        && !Confirm::new()
            .with_prompt(format!("Delete goal {}?", id))
            .default(false)
            .interact()?
    {
        println!("Cancelled.");
        return Ok(());
    }

    let client = session.client()?;
    let response = with_spinner("Deleting goal...", client.delete_goal(id)).await?;

    success(&response.message);
    Ok(())
}

fn print_goal(goal: &FitnessGoal) {
    println!("{}  {}", goal.id.dimmed(), goal.goal_type.bold());
    println!("    Target:   {}", goal.target);
    println!("    Timeline: {}", goal.timeline);
}
