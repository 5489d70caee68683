use clap::Subcommand;
use uuid::Uuid;

use crate::client::ReviewSchedulerClient;
use crate::output::{self, OutputConfig};

/// Review management commands
#[derive(Subcommand, Debug)]
pub enum ReviewCommands {
    /// Record a review outcome for a card
    Create {
        /// The user ID the review belongs to
        #[clap(long)]
        user_id: Uuid,
        /// The card ID being reviewed
        #[clap(long)]
        card_id: Uuid,
        /// The rating: 0 (again), 1 (good), or 2 (easy)
        #[clap(long)]
        rating: i32,
        /// Client-supplied key that makes a retried submission a no-op
        #[clap(long)]
        idempotency_key: String,
    },
}

/// Executes a review command
pub async fn execute(
    client: &ReviewSchedulerClient,
    cmd: ReviewCommands,
    config: &OutputConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        ReviewCommands::Create { user_id, card_id, rating, idempotency_key } => {
            let response = client.create_review(user_id, card_id, rating, &idempotency_key).await?;
            output::print_review_response(&response, config);
        }
    }
    Ok(())
}
