pub mod cli;
pub mod config;
pub mod paths;
pub mod scaffold;
pub mod templates;
pub mod types;
