// ABOUTME: Remote job feed access
// ABOUTME: HTTP client plus the job record and response envelope models

pub mod client;
pub mod models;

pub use client::RemoteClient;
pub use models::{normalize_feed, FeedSource, Job, JobFeed};
