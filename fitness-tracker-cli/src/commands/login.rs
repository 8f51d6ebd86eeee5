use anyhow::Result;
use clap::Args;

use super::{failure, password_or_prompt, success, value_or_prompt, with_spinner, Session};

#[derive(Args)]
pub struct LoginCommand {
    /// Account email
    #[arg(short, long)]
    email: Option<String>,

    /// Account password (prompted when omitted)
    #[arg(long, env = "FITNESS_TRACKER_PASSWORD", hide_env_values = true)]
    password: Option<String>,
}

impl LoginCommand {
    pub async fn execute(self, mut session: Session, as_trainer: bool) -> Result<()> {
        let email = value_or_prompt(self.email, "Email")?;
        let password = password_or_prompt(self.password)?;

        let client = session.client()?;
        let request = async {
            if as_trainer {
                client.trainer_login(&email, &password).await
            } else {
                client.login(&email, &password).await
            }
        };

        match with_spinner(&format!("Logging in as {}...", email), request).await {
            Ok(response) => {
                if as_trainer {
                    session.config_mut().set_trainer_token(response.token);
                } else {
                    session.config_mut().set_token(response.token);
                }
                session.save()?;

                success(&response.message);
                Ok(())
            }
            Err(e) => {
                failure(&format!("Login failed: {}", e));
                Err(e)
            }
        }
    }
}
