use topica_core::{block_id, CategoryRule, Message, SemanticBlock};
use topica_transcript::Exchange;

/// An exchange paired with the rule it was classified under.
#[derive(Debug, Clone, Copy)]
pub struct ClassifiedExchange<'r> {
    pub exchange: Exchange,
    pub rule: &'r CategoryRule,
}

/// Block under construction: the winning rule and the message indices so far.
struct PendingBlock<'r> {
    rule: &'r CategoryRule,
    indices: Vec<usize>,
}

impl PendingBlock<'_> {
    fn finish(self, position: usize, messages: &[Message]) -> SemanticBlock {
        SemanticBlock {
            id: block_id(position),
            category: self.rule.category.clone(),
            emoji: self.rule.emoji.clone(),
            color: self.rule.color.clone(),
            messages: self.indices.iter().map(|&i| messages[i].clone()).collect(),
            keywords: self.rule.keywords.clone(),
        }
    }
}

/// Coalesce consecutive exchanges with the same category label into blocks.
///
/// Labels are compared exactly. Block IDs follow output position.
pub fn merge_exchanges(
    messages: &[Message],
    classified: &[ClassifiedExchange<'_>],
) -> Vec<SemanticBlock> {
    let mut pending: Vec<PendingBlock<'_>> = Vec::new();
    for item in classified {
        if let Some(last) = pending
            .last_mut()
            .filter(|last| last.rule.category == item.rule.category)
        {
            last.indices.extend(item.exchange.indices());
            continue;
        }
        pending.push(PendingBlock {
            rule: item.rule,
            indices: item.exchange.indices().collect(),
        });
    }

    pending
        .into_iter()
        .enumerate()
        .map(|(position, block)| block.finish(position, messages))
        .collect()
}
