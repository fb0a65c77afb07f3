use cloudman_core::Context;
use colored::Colorize;

pub async fn handle_estimate(ctx: &Context) -> anyhow::Result<()> {
    println!(
        "{}",
        format!("Estimating costs for {} environment...", ctx.environment).blue()
    );
    // TODO: wire up Cost Explorer once per-environment pricing lands
    println!("Cost estimation feature coming soon!");

    Ok(())
}
