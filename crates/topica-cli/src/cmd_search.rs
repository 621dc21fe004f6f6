use crate::cmd_show::load_saved;
use crate::context::Context;
use crate::render;
use topica_search::filter_blocks;

/// Execute `topica search <query>` over a saved slot.
pub fn execute(ctx: &Context, query: &str, slot: Option<&str>, json: bool) -> anyhow::Result<()> {
    let slot = ctx.slot(slot);
    let Some(blocks) = load_saved(ctx, slot)? else {
        eprintln!("Nothing saved in slot '{slot}'. Run `topica split --save` first.");
        return Ok(());
    };

    let hits = filter_blocks(&blocks, query);
    tracing::debug!(query, total = blocks.len(), matched = hits.len(), "filtered blocks");

    if json {
        println!("{}", serde_json::to_string_pretty(&hits)?);
        return Ok(());
    }

    let color = ctx.color();
    if !hits.is_empty() {
        println!("{}", render::render_blocks(&hits, query, color));
    }
    println!("{}", render::render_summary(blocks.len(), hits.len(), query));
    Ok(())
}
