pub mod cli;
pub mod commands;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod report;
pub mod services;
pub mod test_helpers;
