use crate::context::Context;

/// Execute `topica clear`.
pub fn execute(ctx: &Context, slot: Option<&str>) -> anyhow::Result<()> {
    let slot = ctx.slot(slot);
    if topica_store::clear_blocks(&ctx.root, slot)? {
        println!("Cleared slot '{slot}'");
    } else {
        println!("Slot '{slot}' was already empty");
    }
    Ok(())
}
