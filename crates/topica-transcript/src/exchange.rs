use topica_core::{Message, Role};

/// Minimal conversational unit: a lead message and, for a user prompt, the
/// assistant reply that immediately follows it.
///
/// Holds indices into the parsed message slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exchange {
    pub lead: usize,
    pub reply: Option<usize>,
}

impl Exchange {
    pub fn single(lead: usize) -> Self {
        Self { lead, reply: None }
    }

    pub fn pair(lead: usize, reply: usize) -> Self {
        Self {
            lead,
            reply: Some(reply),
        }
    }

    /// Message indices in transcript order.
    pub fn indices(&self) -> impl Iterator<Item = usize> {
        std::iter::once(self.lead).chain(self.reply)
    }

    pub fn len(&self) -> usize {
        1 + usize::from(self.reply.is_some())
    }

    /// Always false; an exchange holds at least its lead message.
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Partition messages into exchanges with a single forward scan.
///
/// A user message claims the next message if it is an assistant reply.
/// An assistant message with no pending user prompt stands alone.
pub fn group_exchanges(messages: &[Message]) -> Vec<Exchange> {
    let mut exchanges = Vec::new();
    let mut i = 0;
    while i < messages.len() {
        let exchange = match messages[i].role {
            Role::User => match messages.get(i + 1) {
                Some(next) if next.role == Role::Assistant => Exchange::pair(i, i + 1),
                _ => Exchange::single(i),
            },
            Role::Assistant => Exchange::single(i),
        };
        i += exchange.len();
        exchanges.push(exchange);
    }
    tracing::debug!(
        messages = messages.len(),
        exchanges = exchanges.len(),
        "grouped exchanges"
    );
    exchanges
}
