//! Student Growth Analysis - Frontend Rust/Leptos Application
//!
//! A WebAssembly page for entering or uploading benchmark scores and
//! seeing how program hours relate to fall-to-winter growth. All state
//! lives in the browser tab.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  ├── UploadSection + DataEntryForm                          │
//! │  ├── GrowthChart (scatter, correlation)                     │
//! │  ├── DataTable                                              │
//! │  └── LogsPanel                                              │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (LogEntry, AppError)
//! - [`components`] - UI components (Upload, Entry, Chart, Table, Logs)
//! - [`services`] - Browser file reading

use growth::AppState;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Logs
    LogEntry, LogLevel,
    // Errors
    AppError, AppResult,
};

// Components
pub use components::*;

// Services
pub use services::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // Global state for the application
    let (state, set_state) = create_signal(AppState::new());
    let (logs, set_logs) = create_signal(Vec::<LogEntry>::new());

    // Derived views, recomputed whenever the dataset changes
    let rows = create_memo(move |_| state.with(AppState::table_rows));
    let points = create_memo(move |_| state.with(|s| growth::scatter_points(s.records())));
    let correlation = create_memo(move |_| state.with(AppState::correlation));
    let summary = create_memo(move |_| state.with(AppState::summary));

    view! {
        <div class="container">
            <Hero/>

            <div class="controls">
                <UploadSection state=state set_state=set_state set_logs=set_logs/>
                <DataEntryForm set_state=set_state set_logs=set_logs/>
            </div>

            <div class="summary">
                {move || {
                    let s = summary.get();
                    match (s.mean_hours, s.mean_growth) {
                        (Some(h), Some(g)) => format!(
                            "{} students • mean hours {} • mean growth {}",
                            s.count,
                            growth::format_value(h),
                            growth::format_value(g)
                        ),
                        _ => "No students yet".to_string(),
                    }
                }}
            </div>

            <GrowthChart points=points correlation=correlation/>
            <DataTable rows=rows/>
            <LogsPanel logs=logs set_logs=set_logs/>
        </div>

        <Footer/>
    }
}
