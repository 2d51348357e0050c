//! Command handlers
//!
//! Maps each parsed command onto the session API and renders the
//! human-readable response the shell prints.

use log::debug;

use crate::commands::parser::{Command, CommandResult, CommandStatus};
use crate::session::Session;
use crate::storage::{EntryKind, ListResult};

pub const HELP_TEXT: &str = "\
Available commands:
  mkdir <name>         - Create a new directory
  touch <name>         - Create a new empty file
  ls                   - List contents of current directory
  cd <path>            - Change directory (.., /, ~, or a path)
  pwd                  - Print current working directory
  rm <name>            - Remove file or directory
  write <name> [text]  - Replace the content of a file
  cat <name>           - Print the content of a file
  stat <name>          - Describe a file or directory
  help                 - Show this help message
  exit/quit            - Exit the simulator
";

/// Dispatches a parsed command to its handler.
///
/// # Arguments
///
/// * `session` - Mutable reference to the session the command runs against.
/// * `command` - Reference to the parsed command.
///
/// # Returns
///
/// * `CommandResult` - Status plus the text to print, if any.
pub fn handle_command(session: &mut Session, command: &Command) -> CommandResult {
    debug!("Dispatching {:?}", command);

    match command {
        Command::Mkdir(name) => handle_cmd_mkdir(session, name),
        Command::Touch(name) => handle_cmd_touch(session, name),
        Command::Ls => handle_cmd_ls(session),
        Command::Cd(path) => handle_cmd_cd(session, path),
        Command::Pwd => CommandResult::success(Some(format!("{}\n", session.pwd()))),
        Command::Rm(name) => handle_cmd_rm(session, name),
        Command::Write(name, content) => handle_cmd_write(session, name, content),
        Command::Cat(name) => handle_cmd_cat(session, name),
        Command::Stat(name) => handle_cmd_stat(session, name),
        Command::Help => CommandResult::success(Some(HELP_TEXT.to_string())),
        Command::Exit => CommandResult {
            status: CommandStatus::Exit,
            message: Some("Goodbye!\n".into()),
        },
        Command::Empty => CommandResult::success(None),
        Command::Usage(usage) => CommandResult::failure("Wrong arguments", format!("{}\n", usage)),
        Command::Unknown(cmd) => CommandResult::failure(
            "Unknown command",
            format!(
                "Unknown command: {}\nType 'help' for available commands.\n",
                cmd
            ),
        ),
    }
}

fn failure(err: impl std::fmt::Display) -> CommandResult {
    let text = err.to_string();
    CommandResult::failure(text.clone(), format!("{}\n", text))
}

fn handle_cmd_mkdir(session: &mut Session, name: &str) -> CommandResult {
    match session.mkdir(name) {
        Ok(()) => CommandResult::success(Some(format!("Directory '{}' created\n", name))),
        Err(e) => failure(e),
    }
}

fn handle_cmd_touch(session: &mut Session, name: &str) -> CommandResult {
    match session.touch(name) {
        Ok(()) => CommandResult::success(Some(format!("File '{}' created\n", name))),
        Err(e) => failure(e),
    }
}

fn handle_cmd_ls(session: &Session) -> CommandResult {
    CommandResult::success(Some(render_listing(&session.ls())))
}

fn handle_cmd_cd(session: &mut Session, path: &str) -> CommandResult {
    match session.cd(path) {
        Ok(()) => CommandResult::success(None),
        Err(e) => failure(e),
    }
}

fn handle_cmd_rm(session: &mut Session, name: &str) -> CommandResult {
    match session.rm(name) {
        Ok(()) => CommandResult::success(Some(format!("Removed '{}'\n", name))),
        Err(e) => failure(e),
    }
}

fn handle_cmd_write(session: &mut Session, name: &str, content: &str) -> CommandResult {
    match session.write(name, content.as_bytes()) {
        Ok(size) => CommandResult::success(Some(format!("Wrote {} bytes to '{}'\n", size, name))),
        Err(e) => failure(e),
    }
}

fn handle_cmd_cat(session: &Session, name: &str) -> CommandResult {
    match session.cat(name) {
        Ok(content) if content.is_empty() => CommandResult::success(None),
        Ok(content) => CommandResult::success(Some(format!(
            "{}\n",
            String::from_utf8_lossy(content)
        ))),
        Err(e) => failure(e),
    }
}

fn handle_cmd_stat(session: &Session, name: &str) -> CommandResult {
    match session.stat(name) {
        Ok(summary) => CommandResult::success(Some(format!("{}\n", summary))),
        Err(e) => failure(e),
    }
}

/// Renders a listing, one line per entry
pub fn render_listing(listing: &ListResult) -> String {
    if listing.is_empty() {
        return "Directory is empty\n".to_string();
    }

    listing
        .entries
        .iter()
        .map(|entry| match entry.kind {
            EntryKind::Directory => format!("[DIR]  {}\n", entry.name),
            EntryKind::File => format!("[FILE] {} ({} bytes)\n", entry.name, entry.size),
        })
        .collect()
}
