pub mod config;

pub use config::TokenConfig;
