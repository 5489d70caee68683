use clap::ValueEnum;
use review_scheduler::dto::{DueCardsResponse, ReviewResponse};

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

/// Bundled output configuration passed to all print functions
#[derive(Debug, Clone, Copy)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// When true, print minimal output
    pub quiet: bool,
}

/// Prints the outcome of recording a review
pub fn print_review_response(review: &ReviewResponse, config: &OutputConfig) {
    match config.format {
        OutputFormat::Human => {
            if config.quiet {
                println!("{}", review.next_review_utc);
                return;
            }
            println!("Rating:        {}", review.rating_label);
            println!("Interval:      {}s", review.interval_seconds);
            println!("Next review:   {} ({} JST)", review.next_review_utc, review.next_review_jst);
            println!("Idempotent:    {}", review.idempotent);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(review).unwrap());
        }
    }
}

/// Prints a list of cards due for a user
pub fn print_due_cards_response(due: &DueCardsResponse, config: &OutputConfig) {
    match config.format {
        OutputFormat::Human => {
            if config.quiet {
                for id in &due.card_ids {
                    println!("{}", id);
                }
                return;
            }
            println!("User:  {}", due.user_id);
            println!("Until: {} ({} JST)", due.until_utc, due.until_jst);
            if due.card_ids.is_empty() {
                println!("No cards due.");
            } else {
                for id in &due.card_ids {
                    println!("- {}", id);
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(due).unwrap());
        }
    }
}
