#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Zero-based cell index; the player types 1-9.
    Place(usize),
    Restart,
    ResetAll,
    Help,
    Quit,
    /// A pasted peer message, passed on undecoded.
    Peer(String),
    Unknown(String),
}

/// `None` for a blank line.
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    if line.starts_with('{') {
        return Some(Command::Peer(line.to_string()));
    }

    let command = match line.to_ascii_lowercase().as_str() {
        "r" | "restart" => Command::Restart,
        "s" | "scores" => Command::ResetAll,
        "h" | "help" | "?" => Command::Help,
        "q" | "quit" | "exit" => Command::Quit,
        other => match other.parse::<usize>() {
            Ok(cell @ 1..=9) => Command::Place(cell - 1),
            _ => Command::Unknown(line.to_string()),
        },
    };
    Some(command)
}
