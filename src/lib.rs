//! PC budget assistant: answers hardware questions and proposes a priced
//! component build from a remote product catalog or a built-in fallback.

pub mod assistant;
pub mod catalog;
pub mod composer;
pub mod config;
pub mod knowledge;
pub mod model;
pub mod normalizer;
pub mod parser;
pub mod retriever;
pub mod selector;
pub mod server;
pub mod utils;
