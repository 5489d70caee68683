/// CLI subcommand modules
///
/// Each module owns one noun's subcommands and its `execute` entry point.
pub mod due_cards;
pub mod review;
