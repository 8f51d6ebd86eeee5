mod goals;
mod login;
mod logout;
mod plans;
mod progress;
mod signup;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::{Input, Password};
use indicatif::{ProgressBar, ProgressStyle};
use std::future::Future;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::api::ApiClient;
use crate::config::Config;

pub use goals::{GoalCreateArgs, GoalUpdateArgs};
pub use login::LoginCommand;
pub use logout::LogoutCommand;
pub use plans::PlanCreateArgs;
pub use progress::TrackArgs;
pub use signup::SignupCommand;

#[derive(Parser)]
#[command(name = "fitness")]
#[command(about = "Command-line client for the fitness tracker API", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to configuration file
    #[arg(long, global = true, env = "FITNESS_TRACKER_CONFIG")]
    config: Option<PathBuf>,

    /// Override the API base URL for this invocation
    #[arg(long, global = true, env = "FITNESS_TRACKER_API_URL")]
    api_url: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a user account
    Signup(SignupCommand),

    /// Log in as a user
    Login(LoginCommand),

    /// Forget stored user and trainer tokens
    Logout(LogoutCommand),

    /// Trainer account commands
    #[command(subcommand)]
    Trainer(TrainerSubcommands),

    /// Manage fitness goals
    #[command(subcommand)]
    Goals(GoalsSubcommands),

    /// Manage workout plans (trainer login required)
    #[command(subcommand)]
    Plans(PlansSubcommands),

    /// Track body progress
    #[command(subcommand)]
    Progress(ProgressSubcommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
enum TrainerSubcommands {
    /// Log in as a trainer
    Login(LoginCommand),
}

#[derive(Subcommand)]
enum GoalsSubcommands {
    /// List fitness goals
    List,

    /// Create a new goal
    Create(GoalCreateArgs),

    /// Show goal details
    Show {
        /// Goal ID
        id: String,
    },

    /// Update a goal
    Update(GoalUpdateArgs),

    /// Delete a goal
    Delete {
        /// Goal ID
        id: String,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Subcommand)]
enum PlansSubcommands {
    /// List workout plans
    List,

    /// Create a new workout plan
    Create(PlanCreateArgs),

    /// Show plan details
    Show {
        /// Plan ID
        id: String,
    },

    /// Delete a workout plan
    Delete {
        /// Plan ID
        id: String,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Subcommand)]
enum ProgressSubcommands {
    /// Record a progress entry
    Track(TrackArgs),

    /// Show the progress log
    List,
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        let session = Session::load(self.config, self.api_url)?;

        match self.command {
            Commands::Signup(cmd) => cmd.execute(&session).await,
            Commands::Login(cmd) => cmd.execute(session, false).await,
            Commands::Logout(cmd) => cmd.execute(session),
            Commands::Trainer(TrainerSubcommands::Login(cmd)) => cmd.execute(session, true).await,
            Commands::Goals(subcmd) => match subcmd {
                GoalsSubcommands::List => goals::list_goals(&session).await,
                GoalsSubcommands::Create(args) => goals::create_goal(&session, args).await,
                GoalsSubcommands::Show { id } => goals::show_goal(&session, &id).await,
                GoalsSubcommands::Update(args) => goals::update_goal(&session, args).await,
                GoalsSubcommands::Delete { id, force } => {
                    goals::delete_goal(&session, &id, force).await
                }
            },
            Commands::Plans(subcmd) => match subcmd {
                PlansSubcommands::List => plans::list_plans(&session).await,
                PlansSubcommands::Create(args) => plans::create_plan(&session, args).await,
                PlansSubcommands::Show { id } => plans::show_plan(&session, &id).await,
                PlansSubcommands::Delete { id, force } => {
                    plans::delete_plan(&session, &id, force).await
                }
            },
            Commands::Progress(subcmd) => match subcmd {
                ProgressSubcommands::Track(args) => progress::track(&session, args).await,
                ProgressSubcommands::List => progress::list(&session).await,
            },
            Commands::Completions { shell } => {
                generate_completions(shell);
                Ok(())
            }
        }
    }
}

/// Loaded config plus where it lives
pub struct Session {
    path: PathBuf,
    config: Config,
    api_url: Option<String>,
}

impl Session {
    pub fn load(path: Option<PathBuf>, api_url: Option<String>) -> Result<Self> {
        let path = match path {
            Some(path) => path,
            None => Config::config_file()?,
        };
        let config = Config::load_from(&path)?;

        Ok(Self {
            path,
            config,
            api_url,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    pub fn save(&self) -> Result<()> {
        self.config.save_to(&self.path)
    }

    /// API client for the configured (or overridden) base URL
    pub fn client(&self) -> Result<ApiClient> {
        match &self.api_url {
            Some(url) => {
                let mut config = self.config.clone();
                config.api.base_url = url.clone();
                ApiClient::new(&config)
            }
            None => ApiClient::new(&self.config),
        }
    }
}

/// Run a request behind a spinner
pub(crate) async fn with_spinner<T, F>(message: &str, future: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner());
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = future.await;
    spinner.finish_and_clear();

    result
}

/// Use the flag value when given, otherwise prompt for it
pub(crate) fn value_or_prompt<T>(value: Option<T>, prompt: &str) -> Result<T>
where
    T: Clone + ToString + FromStr,
    <T as FromStr>::Err: ToString,
{
    match value {
        Some(value) => Ok(value),
        None => Ok(Input::<T>::new().with_prompt(prompt).interact_text()?),
    }
}

/// Like `value_or_prompt`, but an empty answer is accepted
pub(crate) fn text_or_prompt_optional(value: Option<String>, prompt: &str) -> Result<String> {
    match value {
        Some(value) => Ok(value),
        None => Ok(Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?),
    }
}

pub(crate) fn password_or_prompt(value: Option<String>) -> Result<String> {
    match value {
        Some(value) => Ok(value),
        None => Ok(Password::new().with_prompt("Password").interact()?),
    }
}

pub(crate) fn success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

pub(crate) fn failure(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message);
}

fn generate_completions(shell: clap_complete::Shell) {
    use clap::CommandFactory;
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}
