pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod session;

pub use session::{Session, SessionState};
