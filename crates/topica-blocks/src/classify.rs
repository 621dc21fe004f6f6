use std::collections::HashSet;
use topica_core::{CategoryRule, Message, RuleTable};
use topica_transcript::Exchange;

/// Count the distinct keywords that occur in `text`.
///
/// Matching is case-insensitive substring containment; a keyword listed twice
/// or occurring many times still counts once.
pub fn score_text(text: &str, keywords: &[String]) -> usize {
    let lower = text.to_lowercase();
    let mut hits = HashSet::new();
    for kw in keywords {
        let kw = kw.to_lowercase();
        if lower.contains(kw.as_str()) {
            hits.insert(kw);
        }
    }
    hits.len()
}

/// Pick the winning rule for a piece of text.
///
/// The highest score wins and the earlier rule keeps a tie. When no rule
/// scores above zero the table's fallback wins.
pub fn classify_text<'r>(text: &str, rules: &'r RuleTable) -> &'r CategoryRule {
    let mut best_score = 0;
    let mut best = rules.fallback();
    for rule in rules.rules() {
        let score = score_text(text, &rule.keywords);
        tracing::trace!(category = %rule.category, score, "scored rule");
        if score > best_score {
            best_score = score;
            best = rule;
        }
    }
    best
}

/// Classify one exchange by the combined content of its messages.
pub fn classify<'r>(
    exchange: &Exchange,
    messages: &[Message],
    rules: &'r RuleTable,
) -> &'r CategoryRule {
    let combined = exchange
        .indices()
        .map(|i| messages[i].content.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    classify_text(&combined, rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use topica_core::Role;

    fn kws(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn table(rules: Vec<CategoryRule>) -> RuleTable {
        RuleTable::new(rules, CategoryRule::new("Other", "o", "gray-500", &[])).unwrap()
    }

    #[test]
    fn score_counts_distinct_keywords_once() {
        assert_eq!(score_text("price price PRICE", &kws(&["price"])), 1);
        assert_eq!(score_text("price and fee", &kws(&["price", "fee", "tier"])), 2);
        assert_eq!(score_text("price", &kws(&["price", "Price"])), 1);
    }

    #[test]
    fn score_is_substring_not_word_match() {
        assert_eq!(score_text("We are repricing", &kws(&["pricing"])), 1);
        assert_eq!(score_text("nothing here", &kws(&["pricing"])), 0);
    }

    #[test]
    fn zero_score_everywhere_yields_fallback() {
        let t = RuleTable::builtin();
        let rule = classify_text("the weather is nice today", &t);
        assert_eq!(rule.category, "General Discussion");
    }

    #[test]
    fn single_keyword_selects_that_rule() {
        let t = table(vec![
            CategoryRule::new("A", "a", "c", &["alpha"]),
            CategoryRule::new("B", "b", "c", &["beta"]),
        ]);
        assert_eq!(classify_text("just beta", &t).category, "B");
    }

    #[test]
    fn tie_goes_to_earlier_rule() {
        let t = table(vec![
            CategoryRule::new("A", "a", "c", &["alpha"]),
            CategoryRule::new("B", "b", "c", &["beta"]),
        ]);
        assert_eq!(classify_text("beta alpha", &t).category, "A");
    }

    #[test]
    fn higher_score_beats_table_order() {
        let t = table(vec![
            CategoryRule::new("A", "a", "c", &["alpha"]),
            CategoryRule::new("B", "b", "c", &["beta", "gamma"]),
        ]);
        assert_eq!(classify_text("alpha beta gamma", &t).category, "B");
    }

    #[test]
    fn empty_rule_table_always_falls_back() {
        let t = table(Vec::new());
        assert_eq!(classify_text("anything", &t).category, "Other");
    }

    #[test]
    fn builtin_pricing_example() {
        let t = RuleTable::builtin();
        let rule = classify_text("What subscription tier should we charge for?", &t);
        assert_eq!(rule.category, "Pricing Strategy");
        assert_eq!(rule.emoji, "💰");
    }

    #[test]
    fn classify_joins_exchange_messages() {
        let t = table(vec![
            CategoryRule::new("A", "a", "c", &["alpha"]),
            CategoryRule::new("B", "b", "c", &["beta", "gamma"]),
        ]);
        let messages = vec![
            Message::new(Role::User, "alpha beta"),
            Message::new(Role::Assistant, "gamma"),
        ];
        assert_eq!(classify(&Exchange::pair(0, 1), &messages, &t).category, "B");
        assert_eq!(classify(&Exchange::single(0), &messages, &t).category, "A");
    }
}
