mod init;
mod interactive;

pub use init::cmd_init;
pub use interactive::{SessionSettings, cmd_interactive};
