/// Web API Handlers
///
/// This module contains the handlers for the RESTful API endpoints.
/// Each handler is responsible for processing a specific type of HTTP request,
/// extracting the necessary data, calling the appropriate repository functions,
/// and returning a properly formatted response.
mod due_cards_handlers;
mod review_handlers;

// Re-export all handlers
pub use due_cards_handlers::*;
pub use review_handlers::*;
