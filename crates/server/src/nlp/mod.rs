//! Cloud NLP entity extraction

pub mod client;

pub use client::{NlpClient, NlpError};
