pub mod commands;
pub mod instance;
