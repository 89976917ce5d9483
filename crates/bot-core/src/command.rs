//! The bot's command grammar.

/// A parsed bot command.
///
/// Commands are a prefix (usually `!`) followed by a command word and an
/// optional free-text argument. Anything that does not match a known
/// command parses to `None` and is ignored rather than answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `!animal <name>` - random sighting for a free-text animal name.
    /// The name may be blank; responders reject that with a usage reply.
    Animal { query: String },

    /// `!deer` - hardcoded alias for `!animal deer` with its own flavor.
    Deer,

    /// `!taxonhelp <name>` - list taxa matches so the user can refine.
    TaxonHelp { query: String },
}

impl Command {
    /// Parse a raw message into a command.
    ///
    /// Returns `None` for plain chatter, a missing prefix, or an unknown
    /// command word. The query argument is trimmed but otherwise kept
    /// verbatim, multi-word names included.
    pub fn parse(text: &str, prefix: &str) -> Option<Command> {
        let rest = text.trim().strip_prefix(prefix)?;

        let (word, arg) = match rest.split_once(char::is_whitespace) {
            Some((word, arg)) => (word, arg.trim()),
            None => (rest, ""),
        };

        match word.to_lowercase().as_str() {
            "animal" => Some(Command::Animal {
                query: arg.to_string(),
            }),
            "deer" => Some(Command::Deer),
            "taxonhelp" => Some(Command::TaxonHelp {
                query: arg.to_string(),
            }),
            _ => None,
        }
    }

    /// Usage line for commands that take a name argument, shown when the
    /// argument is blank.
    pub fn usage(&self, prefix: &str) -> Option<String> {
        match self {
            Command::Animal { .. } => Some(format!("Usage: {prefix}animal <animal name>")),
            Command::TaxonHelp { .. } => Some(format!("Usage: {prefix}taxonhelp <animal name>")),
            Command::Deer => None,
        }
    }
}
