//! Application Context
//!
//! Shared settings and signals provided via Leptos Context API.

use kanban_core::KanbanConfig;
use leptos::prelude::*;

/// App-wide values provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Engine settings loaded at startup
    pub config: KanbanConfig,
    /// Message shown above the current view - read
    pub notice: ReadSignal<Option<String>>,
    /// Message shown above the current view - write
    set_notice: WriteSignal<Option<String>>,
}

impl AppContext {
    pub fn new(config: KanbanConfig, notice: (ReadSignal<Option<String>>, WriteSignal<Option<String>>)) -> Self {
        Self {
            config,
            notice: notice.0,
            set_notice: notice.1,
        }
    }

    /// Show a message to the user
    pub fn notify(&self, message: impl Into<String>) {
        self.set_notice.set(Some(message.into()));
    }

    pub fn clear_notice(&self) {
        self.set_notice.set(None);
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
