use clap::ValueEnum;
use cloudman_aws::{ResourceInventory, ResourceQuery};
use cloudman_core::Context;
use colored::Colorize;
use std::fmt::Write;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

pub async fn handle(ctx: &Context, format: OutputFormat) -> anyhow::Result<()> {
    println!(
        "{}",
        format!("Getting status for {} environment...", ctx.environment).blue()
    );

    tracing::debug!(region = %ctx.aws_region, "Querying resource inventory");
    let query = ResourceQuery::new(&ctx.aws_region, ctx.environment.as_str()).await;
    let inventory = query.list_resources().await;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&inventory)?),
        OutputFormat::Table => print!("{}", render_table(&inventory)),
    }

    Ok(())
}

/// Human-readable listing grouped by category, with a placeholder line
/// for empty categories. Kept free of color codes so lines stay greppable.
fn render_table(inventory: &ResourceInventory) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "\nEC2 Instances:");
    if inventory.ec2_instances.is_empty() {
        let _ = writeln!(out, "  No instances found");
    } else {
        for instance in &inventory.ec2_instances {
            let _ = writeln!(
                out,
                "  - {} ({}): {} [{}]",
                instance.name, instance.id, instance.state, instance.instance_type
            );
        }
    }

    let _ = writeln!(out, "\nS3 Buckets:");
    if inventory.s3_buckets.is_empty() {
        let _ = writeln!(out, "  No buckets found");
    } else {
        for bucket in &inventory.s3_buckets {
            let _ = writeln!(out, "  - {} (created: {})", bucket.name, bucket.created);
        }
    }

    out
}
