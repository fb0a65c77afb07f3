mod commands;
mod utils;

use clap::{Parser, Subcommand};
use cloudman_core::{Context, Environment};
use commands::status::OutputFormat;

#[derive(Parser)]
#[command(name = "cloudman")]
#[command(version)]
#[command(about = "Manage cloud infrastructure with ease", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Deploy infrastructure to the target environment
    Deploy {
        /// Target environment (dev/staging/prod)
        #[arg(short, long, default_value = "dev")]
        environment: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        auto_approve: bool,
    },
    /// Destroy infrastructure in the target environment
    Destroy {
        /// Target environment (dev/staging/prod)
        #[arg(short, long, default_value = "dev")]
        environment: String,
        /// Force destroy without confirmation
        #[arg(long)]
        force: bool,
    },
    /// Show status of resources in the target environment
    Status {
        /// Target environment (dev/staging/prod)
        #[arg(short, long, default_value = "dev")]
        environment: String,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Validate the Terraform configuration
    Validate {
        /// Target environment (dev/staging/prod)
        #[arg(short, long, default_value = "dev")]
        environment: String,
    },
    /// Print a Terraform output value
    Output {
        /// Target environment (dev/staging/prod)
        #[arg(short, long, default_value = "dev")]
        environment: String,
        /// Name of the Terraform output
        output_name: String,
    },
    /// Cost management commands
    #[command(subcommand)]
    Cost(CostCommands),
}

#[derive(Subcommand)]
enum CostCommands {
    /// Estimate monthly costs for the environment
    Estimate {
        /// Target environment (dev/staging/prod)
        #[arg(short, long, default_value = "dev")]
        environment: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    cloudman_core::load_env_file()?;
    init_logging(cli.debug);

    match cli.command {
        Commands::Deploy {
            environment,
            auto_approve,
        } => {
            let ctx = Context::new(Environment::new(environment));
            commands::deploy::handle(&ctx, auto_approve).await?;
        }
        Commands::Destroy { environment, force } => {
            let ctx = Context::new(Environment::new(environment));
            commands::destroy::handle(&ctx, force).await?;
        }
        Commands::Status {
            environment,
            format,
        } => {
            let ctx = Context::new(Environment::new(environment));
            commands::status::handle(&ctx, format).await?;
        }
        Commands::Validate { environment } => {
            let ctx = Context::new(Environment::new(environment));
            commands::validate::handle(&ctx).await?;
        }
        Commands::Output {
            environment,
            output_name,
        } => {
            let ctx = Context::new(Environment::new(environment));
            commands::output::handle(&ctx, &output_name).await?;
        }
        Commands::Cost(CostCommands::Estimate { environment }) => {
            let ctx = Context::new(Environment::new(environment));
            commands::cost::handle_estimate(&ctx).await?;
        }
    }

    Ok(())
}

/// Logging goes to stderr so command output stays machine-readable.
/// RUST_LOG wins over the --debug flag when set.
fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
