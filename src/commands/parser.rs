//! Module `parser`
//!
//! Turns an input line into a [`Command`], checking argument counts.

/// A shell command parsed from one input line.
#[derive(Debug, PartialEq)]
pub enum Command {
    Mkdir(String),
    Touch(String),
    Ls,
    Cd(String),
    Pwd,
    Rm(String),
    Write(String, String), // file name, content
    Cat(String),
    Stat(String),
    Help,
    Exit,
    Empty,
    Usage(&'static str), // known command, wrong number of arguments
    Unknown(String),
}

/// Represents the outcome status of executing a command.
#[derive(Debug, PartialEq)]
pub enum CommandStatus {
    Success,
    Failure(String),
    Exit,
}

/// Struct encapsulating the full result of a command execution.
#[derive(Debug)]
pub struct CommandResult {
    pub status: CommandStatus,
    pub message: Option<String>,
}

impl CommandResult {
    pub fn success(message: Option<String>) -> Self {
        Self {
            status: CommandStatus::Success,
            message,
        }
    }

    pub fn failure(reason: impl Into<String>, message: String) -> Self {
        Self {
            status: CommandStatus::Failure(reason.into()),
            message: Some(message),
        }
    }
}

pub const USAGE_MKDIR: &str = "Usage: mkdir <directory_name>";
pub const USAGE_TOUCH: &str = "Usage: touch <file_name>";
pub const USAGE_CD: &str = "Usage: cd <directory_path>";
pub const USAGE_RM: &str = "Usage: rm <file_or_directory_name>";
pub const USAGE_WRITE: &str = "Usage: write <file_name> [text...]";
pub const USAGE_CAT: &str = "Usage: cat <file_name>";
pub const USAGE_STAT: &str = "Usage: stat <file_or_directory_name>";

/// Parses a raw input line into the `Command` enum.
///
/// Tokens are separated by whitespace and the command name is case-sensitive.
pub fn parse_command(raw: &str) -> Command {
    let tokens: Vec<&str> = raw.split_whitespace().collect();
    let Some((&cmd, args)) = tokens.split_first() else {
        return Command::Empty;
    };

    let single = |build: fn(String) -> Command, usage: &'static str| match args {
        [arg] => build(arg.to_string()),
        _ => Command::Usage(usage),
    };

    match cmd {
        "mkdir" => single(Command::Mkdir, USAGE_MKDIR),
        "touch" => single(Command::Touch, USAGE_TOUCH),
        "cd" => single(Command::Cd, USAGE_CD),
        "rm" => single(Command::Rm, USAGE_RM),
        "cat" => single(Command::Cat, USAGE_CAT),
        "stat" => single(Command::Stat, USAGE_STAT),
        "write" => match args {
            [name, content @ ..] => Command::Write(name.to_string(), content.join(" ")),
            [] => Command::Usage(USAGE_WRITE),
        },
        "ls" => Command::Ls,
        "pwd" => Command::Pwd,
        "help" => Command::Help,
        "exit" | "quit" if args.is_empty() => Command::Exit,
        other => Command::Unknown(other.to_string()),
    }
}
