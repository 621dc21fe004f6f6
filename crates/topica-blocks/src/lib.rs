mod classify;
mod merge;

pub use classify::{classify, classify_text, score_text};
pub use merge::{merge_exchanges, ClassifiedExchange};

use topica_core::{RuleTable, SemanticBlock};
use topica_transcript::{group_exchanges, parse_transcript};

/// Turn raw transcript text into topic blocks.
///
/// Parses, groups into exchanges, classifies each exchange against `rules`,
/// then merges neighbors that share a category. Never fails: input with no
/// recognizable speaker turns yields an empty list.
pub fn build_blocks(text: &str, rules: &RuleTable) -> Vec<SemanticBlock> {
    let messages = parse_transcript(text);
    if messages.is_empty() {
        return Vec::new();
    }

    let classified: Vec<ClassifiedExchange<'_>> = group_exchanges(&messages)
        .into_iter()
        .map(|exchange| ClassifiedExchange {
            rule: classify(&exchange, &messages, rules),
            exchange,
        })
        .collect();

    let blocks = merge_exchanges(&messages, &classified);
    tracing::debug!(
        messages = messages.len(),
        exchanges = classified.len(),
        blocks = blocks.len(),
        "built semantic blocks"
    );
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use topica_core::{CategoryRule, Message, Role};

    const SALES_CALL: &str = "\
User: How should we price the Pro tier?
Assistant: Consider value-based pricing with an annual discount.
User: And the cost per seat?
Assistant: Keep the fee flat for the first ten seats.
User: How do we build brand awareness?
Assistant: Start a newsletter and an SEO content campaign.
";

    #[test]
    fn empty_and_headerless_input_yield_no_blocks() {
        let rules = RuleTable::builtin();
        assert!(build_blocks("", &rules).is_empty());
        assert!(build_blocks("no headers at all", &rules).is_empty());
        assert!(build_blocks("User:\nAssistant:", &rules).is_empty());
    }

    #[test]
    fn pricing_pricing_marketing_gives_two_blocks() {
        let rules = RuleTable::builtin();
        let blocks = build_blocks(SALES_CALL, &rules);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].category, "Pricing Strategy");
        assert_eq!(blocks[0].messages.len(), 4);
        assert_eq!(blocks[1].category, "Marketing");
        assert_eq!(blocks[1].messages.len(), 2);
        assert_eq!(blocks[1].id, "block-1");
    }

    #[test]
    fn sample_transcript_splits_into_four_topics() {
        let blocks = build_blocks(topica_transcript::SAMPLE_TRANSCRIPT, &RuleTable::builtin());
        let categories: Vec<&str> = blocks.iter().map(|b| b.category.as_str()).collect();
        assert_eq!(
            categories,
            vec![
                "Pricing Strategy",
                "Competitor Analysis",
                "Free Trial & Onboarding",
                "Team Building",
            ]
        );
        let sizes: Vec<usize> = blocks.iter().map(|b| b.messages.len()).collect();
        assert_eq!(sizes, vec![4, 2, 2, 2]);
    }

    #[test]
    fn unmatched_chatter_lands_in_fallback() {
        let rules = RuleTable::builtin();
        let blocks = build_blocks("User: hi there\nBot: hello, how are you?", &rules);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].category, "General Discussion");
        assert!(blocks[0].keywords.is_empty());
    }

    #[test]
    fn substitute_rule_table_is_honored() {
        let rules = RuleTable::new(
            vec![CategoryRule::new("Weather", "☀", "teal-500", &["rain", "sun"])],
            CategoryRule::new("Other", "·", "gray-500", &[]),
        )
        .unwrap();
        let blocks = build_blocks("User: will it rain?\nAI: sun all week", &rules);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].category, "Weather");
        assert_eq!(
            blocks[0].messages,
            vec![
                Message::new(Role::User, "will it rain?"),
                Message::new(Role::Assistant, "sun all week"),
            ]
        );
    }

    fn transcript_line() -> impl Strategy<Value = String> {
        let speaker = prop::sample::select(vec![
            "User: ", "Human: ", "You: ", "Assistant: ", "AI: ", "Bot: ", "Claude: ", "GPT: ", "",
            "  ",
        ]);
        let word = prop::sample::select(vec![
            "price", "brand", "hire", "roadmap", "trial", "support", "market", "churn", "hello",
            "weather", "", "repricing", ":",
        ]);
        (speaker, prop::collection::vec(word, 0..6))
            .prop_map(|(s, words)| format!("{s}{}", words.join(" ")))
    }

    fn transcript() -> impl Strategy<Value = String> {
        prop::collection::vec(transcript_line(), 0..24).prop_map(|lines| lines.join("\n"))
    }

    proptest! {
        #[test]
        fn pipeline_is_deterministic(text in transcript()) {
            let rules = RuleTable::builtin();
            prop_assert_eq!(build_blocks(&text, &rules), build_blocks(&text, &rules));
        }

        #[test]
        fn blocks_partition_parsed_messages(text in transcript()) {
            let rules = RuleTable::builtin();
            let flattened: Vec<Message> = build_blocks(&text, &rules)
                .into_iter()
                .flat_map(|b| b.messages)
                .collect();
            prop_assert_eq!(flattened, parse_transcript(&text));
        }

        #[test]
        fn adjacent_blocks_differ_in_category(text in transcript()) {
            let rules = RuleTable::builtin();
            let blocks = build_blocks(&text, &rules);
            for pair in blocks.windows(2) {
                prop_assert_ne!(&pair[0].category, &pair[1].category);
            }
            for (i, block) in blocks.iter().enumerate() {
                prop_assert_eq!(&block.id, &format!("block-{i}"));
                prop_assert!(!block.messages.is_empty());
            }
        }
    }
}
