use cloudman_core::Context;
use cloudman_terraform::Terraform;
use colored::Colorize;

pub async fn handle(ctx: &Context, output_name: &str) -> anyhow::Result<()> {
    let project_root = cloudman_core::find_project_root()?;
    let terraform = Terraform::new(cloudman_core::terraform_dir(&project_root, &ctx.environment));

    let output = terraform.output(output_name).await?;
    if output.success() {
        println!("{}", output.stdout.trim());
    } else {
        eprintln!(
            "{} {}",
            "✗ Failed to get output:".red().bold(),
            output.stderr.trim()
        );
        std::process::exit(1);
    }

    Ok(())
}
