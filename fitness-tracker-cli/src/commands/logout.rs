use anyhow::Result;
use clap::Args;

use super::{success, Session};

#[derive(Args)]
pub struct LogoutCommand {}

impl LogoutCommand {
    pub fn execute(self, mut session: Session) -> Result<()> {
        let config = session.config();
        if !config.is_authenticated() && !config.is_trainer_authenticated() {
            println!("You are not logged in.");
            return Ok(());
        }

        session.config_mut().clear_tokens();
        session.save()?;

        success("Logged out successfully!");

        Ok(())
    }
}
