//! services/api/src/web/state.rs
//!
//! Defines the application's shared state.

use portfolio_core::ports::{ChatLogStore, CompletionService, ContactNotifier, PortfolioStore};
use std::sync::Arc;

//=========================================================================================
// AppState (Shared Across All Requests)
//=========================================================================================

/// The shared application state, created once at startup and passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Entity collections, possibly behind the context cache.
    pub portfolio: Arc<dyn PortfolioStore>,
    pub chat_log: Arc<dyn ChatLogStore>,
    pub completion: Arc<dyn CompletionService>,
    pub contact: Arc<dyn ContactNotifier>,
}
