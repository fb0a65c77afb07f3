use crate::utils;
use cloudman_core::Context;
use cloudman_terraform::Terraform;
use colored::Colorize;

pub async fn handle(ctx: &Context, force: bool) -> anyhow::Result<()> {
    if !force {
        println!(
            "{}",
            format!(
                "⚠ WARNING: This will destroy all resources in {}!",
                ctx.environment
            )
            .red()
            .bold()
        );
        if !utils::confirm("Are you sure you want to continue?")? {
            println!("Destroy cancelled.");
            return Ok(());
        }
    }

    println!(
        "{}",
        format!("Destroying {} environment...", ctx.environment)
            .yellow()
            .bold()
    );

    let project_root = cloudman_core::find_project_root()?;
    let terraform = Terraform::new(cloudman_core::terraform_dir(&project_root, &ctx.environment));

    let destroy = terraform.destroy().await?;
    if destroy.success() {
        println!("{}", "✓ Resources destroyed successfully!".green().bold());
    } else {
        eprintln!(
            "{} {}",
            "✗ Destroy failed:".red().bold(),
            destroy.stderr.trim()
        );
        std::process::exit(1);
    }

    Ok(())
}
