pub mod app;
pub mod chart;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod projects;
pub mod report;
pub mod state;
pub mod submissions;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use state::AppState;
