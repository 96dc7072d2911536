pub mod config;
pub mod logging;

// Extraction pipeline
pub mod decode;
pub mod deep_link;
pub mod extract;
pub mod thread_id;

// Side effects for the CLI embedding
pub mod clipboard;
pub mod opener;
