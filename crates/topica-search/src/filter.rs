use topica_core::SemanticBlock;

/// Whether a block's category label or any message content contains the
/// (already lowercased) query.
pub fn block_matches(block: &SemanticBlock, query_lower: &str) -> bool {
    block.category.to_lowercase().contains(query_lower)
        || block
            .messages
            .iter()
            .any(|m| m.content.to_lowercase().contains(query_lower))
}

/// Keep the blocks that mention `query`, case-insensitively, in their
/// original order. A blank query keeps everything.
pub fn filter_blocks(blocks: &[SemanticBlock], query: &str) -> Vec<SemanticBlock> {
    if query.trim().is_empty() {
        return blocks.to_vec();
    }
    let lower = query.to_lowercase();
    blocks
        .iter()
        .filter(|b| block_matches(b, &lower))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use topica_core::{block_id, Message, Role};

    fn block(i: usize, category: &str, contents: &[&str]) -> SemanticBlock {
        SemanticBlock {
            id: block_id(i),
            category: category.to_string(),
            emoji: String::new(),
            color: "gray-500".into(),
            messages: contents.iter().map(|c| Message::new(Role::User, *c)).collect(),
            keywords: Vec::new(),
        }
    }

    fn sample() -> Vec<SemanticBlock> {
        vec![
            block(0, "Pricing Strategy", &["What tier?", "The Pro one."]),
            block(1, "Marketing", &["Run a campaign", "On social"]),
            block(2, "General Discussion", &["thanks, the PRO plan is great"]),
        ]
    }

    #[test]
    fn matches_category_case_insensitively() {
        let hits = filter_blocks(&sample(), "MARKET");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "block-1");
    }

    #[test]
    fn matches_message_content_and_keeps_order() {
        let hits = filter_blocks(&sample(), "pro");
        let ids: Vec<&str> = hits.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["block-0", "block-2"]);
    }

    #[test]
    fn blank_query_returns_everything() {
        assert_eq!(filter_blocks(&sample(), "   "), sample());
        assert_eq!(filter_blocks(&sample(), ""), sample());
    }

    #[test]
    fn no_match_returns_empty() {
        assert!(filter_blocks(&sample(), "zebra").is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        let once = filter_blocks(&sample(), "pro");
        let twice = filter_blocks(&once, "pro");
        assert_eq!(once, twice);
    }

    #[test]
    fn input_is_untouched() {
        let blocks = sample();
        let _ = filter_blocks(&blocks, "campaign");
        assert_eq!(blocks, sample());
    }
}
