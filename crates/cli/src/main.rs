use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use durable_viewer_core::{Credentials, ViewerConfig};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "durable-viewer")]
#[command(about = "Browse Durable Object namespaces and objects of a Cloudflare account", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the dashboard HTTP server
    Serve {
        #[arg(short, long, default_value = "8787")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Print every namespace in the account as JSON
    Namespaces {
        #[command(flatten)]
        account: AccountArgs,
    },
    /// Print the objects of one namespace as JSON
    Objects {
        #[command(flatten)]
        account: AccountArgs,
        namespace_id: String,
    },
}

#[derive(Args)]
struct AccountArgs {
    #[arg(long, env = "DURABLE_VIEWER_ACCOUNT_ID")]
    account_id: String,
    #[arg(long, env = "DURABLE_VIEWER_API_KEY", hide_env_values = true)]
    api_key: String,
}

impl AccountArgs {
    fn into_credentials(self) -> Credentials {
        Credentials::new(self.account_id, self.api_key)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();
    let config = ViewerConfig::from_env();

    match cli.command {
        Commands::Serve { port, host } => commands::serve::run(config, port, host).await?,
        Commands::Namespaces { account } => {
            commands::listing::run_namespaces(&config, &account.into_credentials()).await?;
        },
        Commands::Objects { account, namespace_id } => {
            commands::listing::run_objects(&config, &account.into_credentials(), &namespace_id)
                .await?;
        },
    }

    Ok(())
}
