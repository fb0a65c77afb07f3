use cloudman_core::Context;
use cloudman_terraform::Terraform;
use colored::Colorize;

pub async fn handle(ctx: &Context) -> anyhow::Result<()> {
    println!(
        "{}",
        format!(
            "Validating Terraform configuration for {}...",
            ctx.environment
        )
        .blue()
    );

    let project_root = cloudman_core::find_project_root()?;
    let terraform = Terraform::new(cloudman_core::terraform_dir(&project_root, &ctx.environment));

    let init = terraform.init().await?;
    if !init.success() {
        eprintln!(
            "{} {}",
            "✗ Terraform init failed:".red().bold(),
            init.stderr.trim()
        );
        std::process::exit(1);
    }

    let validate = terraform.validate().await?;
    if validate.success() {
        println!("{}", "✓ Configuration is valid!".green().bold());
        if validate.stderr.contains("Warning") {
            println!("{} {}", "⚠ Warnings:".yellow(), validate.stderr.trim());
        }
    } else {
        eprintln!(
            "{} {}",
            "✗ Validation failed:".red().bold(),
            validate.stderr.trim()
        );
        std::process::exit(1);
    }

    Ok(())
}
