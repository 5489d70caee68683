use clap::Subcommand;
use uuid::Uuid;

use crate::client::ReviewSchedulerClient;
use crate::output::{self, OutputConfig};

/// Due-card lookup commands
#[derive(Subcommand, Debug)]
pub enum DueCardsCommands {
    /// List the cards due for a user by a given instant
    List {
        /// The user ID to list due cards for
        #[clap(long)]
        user_id: Uuid,
        /// RFC 3339 instant; defaults to now
        #[clap(long)]
        until: Option<String>,
    },
}

/// Executes a due-cards command
pub async fn execute(
    client: &ReviewSchedulerClient,
    cmd: DueCardsCommands,
    config: &OutputConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        DueCardsCommands::List { user_id, until } => {
            let until = until.unwrap_or_else(|| chrono::Utc::now().to_rfc3339());
            let response = client.list_due_cards(user_id, &until).await?;
            output::print_due_cards_response(&response, config);
        }
    }
    Ok(())
}
