use anyhow::Result;
use clap::Args;

use super::{failure, password_or_prompt, success, value_or_prompt, with_spinner, Session};
use crate::models::SignupPayload;

#[derive(Args)]
pub struct SignupCommand {
    /// Full name
    #[arg(short, long)]
    name: Option<String>,

    /// Account email
    #[arg(short, long)]
    email: Option<String>,

    /// Account password (prompted when omitted)
    #[arg(long, env = "FITNESS_TRACKER_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    #[arg(long)]
    age: Option<i32>,

    #[arg(long)]
    gender: Option<String>,

    /// Height in cm
    #[arg(long)]
    height: Option<f64>,

    /// Weight in kg
    #[arg(long)]
    weight: Option<f64>,

    #[arg(long)]
    contact_number: Option<String>,
}

impl SignupCommand {
    pub async fn execute(self, session: &Session) -> Result<()> {
        let payload = SignupPayload {
            name: value_or_prompt(self.name, "Name")?,
            email: value_or_prompt(self.email, "Email")?,
            password: password_or_prompt(self.password)?,
            age: self.age,
            gender: self.gender,
            height: self.height,
            weight: self.weight,
            contact_number: self.contact_number,
        };

        let client = session.client()?;

        match with_spinner("Creating account...", client.signup(&payload)).await {
            Ok(response) => {
                success(&response.message);
                println!("Run `fitness login --email {}` to continue.", payload.email);
                Ok(())
            }
            Err(e) => {
                failure(&format!("Signup failed: {}", e));
                Err(e)
            }
        }
    }
}
