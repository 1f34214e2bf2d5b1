//! Command classification: the leading `/command[@botname]` token of a message's text or caption.

/// Reply used when the content cannot be handled (non-text model input, uncopyable message).
pub const FALLBACK_REPLY: &str = "Nice try!";
/// Reply after the history has been cleared.
pub const CLEAR_REPLY: &str = "memory flushed!";
/// Reply to `/ask` without a question.
pub const ASK_USAGE: &str = "Usage: /ask <question>";

/// A classified message. Priority when matching: Start, Ask, Clear; anything else is Other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `/start`, `/hi`
    Start,
    /// `/ask <question>`; the question may be empty.
    Ask(String),
    /// `/flush`, `/clear`
    Clear,
    /// No command for this bot; echoed back.
    Other,
}

/// Variant tag of [`Command`], used as the dispatch key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Start,
    Ask,
    Clear,
    Other,
}

/// The parts of a leading command token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandToken<'a> {
    /// Command name without the slash.
    pub name: &'a str,
    /// `botname` from `/cmd@botname`.
    pub mention: Option<&'a str>,
    /// Rest of the text, trimmed.
    pub args: &'a str,
}

/// Splits `text` into its leading command token and arguments; None when it does not start with `/`.
pub fn split_command(text: &str) -> Option<CommandToken<'_>> {
    let rest = text.trim_start().strip_prefix('/')?;
    let (token, args) = match rest.find(char::is_whitespace) {
        Some(i) => (&rest[..i], rest[i..].trim()),
        None => (rest, ""),
    };
    let (name, mention) = match token.split_once('@') {
        Some((name, mention)) => (name, Some(mention)),
        None => (token, None),
    };
    if name.is_empty() {
        return None;
    }
    Some(CommandToken {
        name,
        mention,
        args,
    })
}

impl Command {
    /// Classifies `text`. A `@mention` naming another bot is not a command for us; when our own
    /// username is unknown any mention is accepted. Names are case-sensitive, mentions are not.
    pub fn parse(text: &str, bot_username: Option<&str>) -> Self {
        let Some(token) = split_command(text) else {
            return Command::Other;
        };
        if let (Some(mention), Some(me)) = (token.mention, bot_username) {
            if !mention.eq_ignore_ascii_case(me) {
                return Command::Other;
            }
        }
        match token.name {
            "start" | "hi" => Command::Start,
            "ask" => Command::Ask(token.args.to_string()),
            "flush" | "clear" => Command::Clear,
            _ => Command::Other,
        }
    }

    pub fn kind(&self) -> CommandKind {
        match self {
            Command::Start => CommandKind::Start,
            Command::Ask(_) => CommandKind::Ask,
            Command::Clear => CommandKind::Clear,
            Command::Other => CommandKind::Other,
        }
    }
}
