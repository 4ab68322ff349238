//! Code shared by every shell process type

mod content_client;
pub mod shell_switches;

pub use content_client::{shell_user_agent, ShellContentClient};
