//! Line commands understood by the terminal front end.

use notekeeper_core::types::DbId;

pub const HELP: &str = "\
Commands:
  list                  show the current view
  toggle                switch between active and archived notes
  title <text>          set the form title
  content <text>        set the form content
  categories <a, b>     set the form categories
  save                  create the note, or save the one being edited
  edit <id>             load a note into the form
  cancel                stop editing and clear the form
  archive <id>          archive or unarchive a note
  delete <id>           delete a note (asks first)
  filter [text]         filter by category; no text clears the filter
  help                  show this message
  quit                  exit";

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    List,
    ToggleView,
    SetTitle(String),
    SetContent(String),
    SetCategories(String),
    Save,
    Edit(DbId),
    Cancel,
    ToggleArchive(DbId),
    Delete(DbId),
    Filter(String),
    Quit,
}

/// Why a line could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Unknown command: {0} (type `help`)")]
    Unknown(String),

    #[error("`{0}` needs a note id")]
    MissingId(&'static str),

    #[error("Invalid note id: {0}")]
    InvalidId(String),
}

impl Command {
    /// Parse one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, ParseError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_lowercase().as_str() {
            "help" | "?" => Command::Help,
            "list" | "ls" => Command::List,
            "toggle" => Command::ToggleView,
            "title" => Command::SetTitle(rest.to_string()),
            "content" => Command::SetContent(rest.to_string()),
            "categories" | "cats" => Command::SetCategories(rest.to_string()),
            "save" => Command::Save,
            "edit" => Command::Edit(parse_id("edit", rest)?),
            "cancel" => Command::Cancel,
            "archive" => Command::ToggleArchive(parse_id("archive", rest)?),
            "delete" | "rm" => Command::Delete(parse_id("delete", rest)?),
            "filter" => Command::Filter(rest.to_string()),
            "quit" | "exit" => Command::Quit,
            other => return Err(ParseError::Unknown(other.to_string())),
        };
        Ok(Some(command))
    }
}

fn parse_id(command: &'static str, arg: &str) -> Result<DbId, ParseError> {
    if arg.is_empty() {
        return Err(ParseError::MissingId(command));
    }
    arg.trim_start_matches('#')
        .parse()
        .map_err(|_| ParseError::InvalidId(arg.to_string()))
}
