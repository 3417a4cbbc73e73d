//! Web laboratory: REST API and static hosting for the pea cross simulator.

pub mod routes;
pub mod server;
pub mod state;

pub use server::run_server;
pub use state::{AppState, LabState};
