// ABOUTME: Library root for the job board client
// ABOUTME: Exposes the session, remote feed client, config and errors

pub mod board;
pub mod config;
pub mod error;
pub mod remote;

pub use board::JobBoardClient;
pub use config::BoardConfig;
pub use error::{BoardError, Result};
