use std::fmt::Write;
use topica_core::{RuleTable, SemanticBlock};
use topica_search::highlight;

// ── Colors ──

/// ANSI foreground code for a rule color token. Unknown tokens render gray.
fn ansi_code(color: &str) -> &'static str {
    match color {
        "accent-primary" => "31",
        "accent-secondary" => "32",
        "accent-gold" => "33",
        "blue-500" => "34",
        "purple-500" => "35",
        "pink-500" => "95",
        "teal-500" => "36",
        "yellow-500" => "93",
        _ => "90",
    }
}

fn paint(text: &str, code: &str, color: bool) -> String {
    if color {
        format!("\x1b[{code}m{text}\x1b[0m")
    } else {
        text.to_string()
    }
}

/// Emphasize occurrences of `query` inside `text`.
fn emphasize(text: &str, query: &str, color: bool) -> String {
    highlight(text, query)
        .into_iter()
        .map(|seg| match (seg.is_match, color) {
            (false, _) => seg.text,
            (true, true) => format!("\x1b[7m{}\x1b[27m", seg.text),
            (true, false) => format!("**{}**", seg.text),
        })
        .collect()
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

// ── Cards ──

/// Render one block as a text card. `position` is 0-based; the badge is 1-based.
pub fn render_block(block: &SemanticBlock, position: usize, query: &str, color: bool) -> String {
    let code = ansi_code(&block.color);
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} {}  {}",
        block.emoji,
        paint(&emphasize(&block.category, query, color), code, color),
        paint(&format!("#{:02}", position + 1), "90", color),
    );
    let _ = writeln!(out, "   {}", plural(block.messages.len(), "message"));
    for msg in &block.messages {
        let label = format!("{:<9}", msg.role.as_str().to_uppercase());
        let label = if color && msg.role == topica_core::Role::User {
            paint(&label, code, true)
        } else {
            label
        };
        let _ = writeln!(out, "   {label}  {}", emphasize(&msg.content, query, color));
    }
    out
}

/// Render a list of blocks separated by blank lines.
pub fn render_blocks(blocks: &[SemanticBlock], query: &str, color: bool) -> String {
    blocks
        .iter()
        .enumerate()
        .map(|(i, b)| render_block(b, i, query, color))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Footer line summarizing a search, or the plain total without one.
pub fn render_summary(total: usize, matched: usize, query: &str) -> String {
    if query.trim().is_empty() {
        return format!("{} total", plural(total, "block"));
    }
    let mut line = format!("{matched} of {} match", plural(total, "block"));
    if matched == 0 {
        line.push_str(", no results found");
    }
    line
}

/// Render the active rule table, fallback last.
pub fn render_rules(rules: &RuleTable, color: bool) -> String {
    let mut out = String::new();
    let fallback_at = rules.rules().len();
    for (i, rule) in rules.iter().enumerate() {
        let tag = if i == fallback_at { ", fallback" } else { "" };
        let _ = writeln!(
            out,
            "{} {}  ({}{tag})",
            rule.emoji,
            paint(&rule.category, ansi_code(&rule.color), color),
            rule.color
        );
        if !rule.keywords.is_empty() {
            let _ = writeln!(out, "   {}", rule.keywords.join(", "));
        }
    }
    out
}
