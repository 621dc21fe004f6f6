use crate::context::Context;
use crate::render;
use anyhow::Context as _;
use std::io::Read;
use std::path::Path;
use topica_core::SemanticBlock;

pub struct SplitParams<'a> {
    pub input: Option<&'a Path>,
    pub sample: bool,
    pub json: bool,
    pub save: bool,
    pub slot: Option<&'a str>,
    pub rules: Option<&'a Path>,
}

/// Read the transcript from a file, or stdin when absent or `-`.
fn read_input(input: Option<&Path>) -> anyhow::Result<String> {
    match input {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read transcript {}", path.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read transcript from stdin")?;
            Ok(buf)
        }
    }
}

/// Sanity check run before the pipeline touches anything.
///
/// Blank input is refused. Input with no colon anywhere cannot hold a speaker
/// header and is refused too.
pub fn check_input(text: &str) -> anyhow::Result<()> {
    if text.trim().is_empty() {
        anyhow::bail!("Paste a conversation first: the transcript is empty.");
    }
    if !text.contains(':') {
        anyhow::bail!("Conversation should contain \"User:\" and \"Assistant:\" prefixes.");
    }
    Ok(())
}

/// Execute `topica split [FILE]` or `topica split --sample`.
pub fn execute(ctx: &Context, params: &SplitParams<'_>) -> anyhow::Result<()> {
    let text = if params.sample {
        topica_transcript::SAMPLE_TRANSCRIPT.to_string()
    } else {
        read_input(params.input)?
    };
    check_input(&text)?;

    let rules = ctx.rule_table(params.rules)?;
    let blocks = topica_blocks::build_blocks(&text, &rules);

    if params.save {
        let slot = ctx.slot(params.slot);
        let path = topica_store::save_blocks(&ctx.root, slot, &blocks)?;
        eprintln!(
            "Saved {} block(s) to slot '{slot}' ({})",
            blocks.len(),
            path.display()
        );
    }

    print_blocks(&blocks, params.json, ctx.color())
}

pub(crate) fn print_blocks(blocks: &[SemanticBlock], json: bool, color: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(blocks)?);
        return Ok(());
    }
    if blocks.is_empty() {
        println!("No conversation turns recognized.");
        return Ok(());
    }
    println!("{}", render::render_blocks(blocks, "", color));
    println!("{}", render::render_summary(blocks.len(), blocks.len(), ""));
    Ok(())
}
