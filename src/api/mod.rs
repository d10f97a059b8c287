//! Data loading: the results dataset client and its types.

pub mod client;
pub mod error;
pub mod types;

pub use client::ResultsClient;
