use crate::cmd_split::print_blocks;
use crate::context::Context;
use topica_core::SemanticBlock;

/// Load a slot for display. An unreadable slot counts as "no blocks".
pub(crate) fn load_saved(ctx: &Context, slot: &str) -> anyhow::Result<Option<Vec<SemanticBlock>>> {
    topica_store::validate_slot_key(slot)?;
    match topica_store::load_blocks(&ctx.root, slot) {
        Ok(blocks) => Ok(blocks),
        Err(e) => {
            tracing::warn!(slot, error = %format!("{e:#}"), "ignoring unreadable slot");
            eprintln!("warning: saved blocks in slot '{slot}' could not be read ({e:#})");
            Ok(Some(Vec::new()))
        }
    }
}

/// Execute `topica show`.
pub fn execute(ctx: &Context, slot: Option<&str>, json: bool) -> anyhow::Result<()> {
    let slot = ctx.slot(slot);
    match load_saved(ctx, slot)? {
        Some(blocks) => print_blocks(&blocks, json, ctx.color()),
        None => {
            eprintln!("Nothing saved in slot '{slot}'. Run `topica split --save` first.");
            Ok(())
        }
    }
}
