use crate::utils;
use cloudman_core::Context;
use cloudman_terraform::{PlanOutcome, Terraform};
use colored::Colorize;

pub async fn handle(ctx: &Context, auto_approve: bool) -> anyhow::Result<()> {
    println!(
        "{}",
        format!("Deploying to {} environment...", ctx.environment)
            .blue()
            .bold()
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

    let plan = terraform.plan().await?;
    match PlanOutcome::from_result(&plan) {
        PlanOutcome::Error => {
            eprintln!(
                "{} {}",
                "✗ Terraform plan failed:".red().bold(),
                plan.stderr.trim()
            );
            std::process::exit(1);
        }
        PlanOutcome::NoChanges => {
            println!(
                "{}",
                "✓ Terraform plan succeeded - no changes needed".green()
            );
            println!("Infrastructure is already up to date!");
            return Ok(());
        }
        PlanOutcome::ChangesPending => {
            println!("{}", "✓ Terraform plan succeeded - changes detected".green());
        }
        PlanOutcome::Other(code) => {
            // Not in the documented exit-code contract: surface everything
            // and keep going rather than guessing it was fatal.
            println!(
                "{}",
                format!("⚠ Terraform plan returned unexpected code {}", code).yellow()
            );
            println!("Output: {}", plan.stdout.trim_end());
            if !plan.stderr.is_empty() {
                println!("Warnings/Messages: {}", plan.stderr.trim_end());
            }
        }
    }

    if auto_approve || utils::confirm("Do you want to apply these changes?")? {
        let apply = terraform.apply().await?;
        if apply.success() {
            println!("{}", "✓ Deployment successful!".green().bold());
        } else {
            eprintln!(
                "{} {}",
                "✗ Deployment failed:".red().bold(),
                apply.stderr.trim()
            );
            std::process::exit(1);
        }
    } else {
        println!("Deployment cancelled.");
    }

    Ok(())
}
