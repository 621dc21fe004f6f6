use crate::context::Context;
use crate::render;
use std::path::Path;

/// Execute `topica rules`: print the rule table that `split` would use.
pub fn execute(ctx: &Context, rules: Option<&Path>, json: bool) -> anyhow::Result<()> {
    let table = ctx.rule_table(rules)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&table)?);
    } else {
        print!("{}", render::render_rules(&table, ctx.color()));
    }
    Ok(())
}
