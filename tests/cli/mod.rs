pub mod analyze;
pub mod config;
pub mod errors;
pub mod logging;
pub mod show;
pub mod similar;
pub mod support;
pub mod tracks;
