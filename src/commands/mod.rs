mod handlers;
mod parser;

pub use handlers::{HELP_TEXT, handle_command, render_listing};
pub use parser::{Command, CommandResult, CommandStatus, parse_command};
