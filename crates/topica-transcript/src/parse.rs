use topica_core::{Message, Role};

/// Speaker names that open a user turn.
pub const USER_ALIASES: &[&str] = &["User", "Human", "You"];

/// Speaker names that open an assistant turn.
pub const ASSISTANT_ALIASES: &[&str] = &["Assistant", "AI", "Bot", "Claude", "GPT"];

/// Match a `Name:` speaker header at the start of `line`.
///
/// The alias must sit at column 0 and is compared case-insensitively; any
/// whitespace may separate it from the colon. Returns the role and the rest of
/// the line with surrounding whitespace removed. User aliases win if both
/// lists could match.
pub fn match_speaker_header(line: &str) -> Option<(Role, &str)> {
    let candidates = USER_ALIASES
        .iter()
        .map(|a| (Role::User, *a))
        .chain(ASSISTANT_ALIASES.iter().map(|a| (Role::Assistant, *a)));

    for (role, alias) in candidates {
        let Some(head) = line.get(..alias.len()) else {
            continue;
        };
        if !head.eq_ignore_ascii_case(alias) {
            continue;
        }
        if let Some(rest) = line[alias.len()..].trim_start().strip_prefix(':') {
            return Some((role, rest.trim()));
        }
    }
    None
}

/// Accumulates the fragments of the message currently being read.
struct OpenMessage {
    role: Role,
    fragments: Vec<String>,
}

impl OpenMessage {
    fn new(role: Role, first: &str) -> Self {
        let mut open = Self {
            role,
            fragments: Vec::new(),
        };
        open.push(first);
        open
    }

    fn push(&mut self, fragment: &str) {
        if !fragment.is_empty() {
            self.fragments.push(fragment.to_string());
        }
    }

    /// Close the message. Nothing is emitted when no fragment carried text.
    fn finish(self) -> Option<Message> {
        if self.fragments.is_empty() {
            return None;
        }
        Some(Message::new(self.role, self.fragments.join(" ")))
    }
}

/// Parse raw transcript text into ordered speaker-tagged messages.
///
/// Recognized forms:
/// ```text
/// User: ...          Assistant: ...
/// Human: ...         AI: ...
/// You: ...           Bot: / Claude: / GPT: ...
/// ```
///
/// Lines after a header continue that message and are joined with single
/// spaces. Blank lines are ignored. Text before the first header is dropped.
pub fn parse_transcript(text: &str) -> Vec<Message> {
    let mut messages = Vec::new();
    let mut open: Option<OpenMessage> = None;
    let mut dropped = 0usize;

    for line in text.split('\n') {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if let Some((role, rest)) = match_speaker_header(line) {
            if let Some(msg) = open.take().and_then(OpenMessage::finish) {
                messages.push(msg);
            }
            open = Some(OpenMessage::new(role, rest));
        } else if let Some(current) = open.as_mut() {
            current.push(trimmed);
        } else {
            dropped += 1;
        }
    }

    if let Some(msg) = open.and_then(OpenMessage::finish) {
        messages.push(msg);
    }

    if dropped > 0 {
        tracing::debug!(dropped, "ignored lines before the first speaker header");
    }
    tracing::debug!(messages = messages.len(), "parsed transcript");
    messages
}
