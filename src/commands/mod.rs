//! CLI commands for trackscope

pub mod analyze;
pub mod dispatch;
pub mod format;
pub mod show;
pub mod similar;
pub mod tracks;
