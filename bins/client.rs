use clap::{Args, Parser, Subcommand};
use client::{UsersClient, DEFAULT_BASE_URL};

/// Command-line client for the users API
#[derive(Debug, Parser)]
#[command(name = "client", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Args)]
struct Connection {
    /// API key sent in the Authorization header
    #[arg(long = "apikey")]
    api_key: Option<String>,
    /// Server base URL
    #[arg(long, env = "USERS_API_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List every user
    ListUsers {
        #[command(flatten)]
        conn: Connection,
    },
    /// Show one user by id
    GetUser {
        #[arg(long)]
        id: i64,
        #[command(flatten)]
        conn: Connection,
    },
}

async fn execute(cli: Cli) -> Result<(), client::ClientError> {
    match cli.command {
        Command::ListUsers { conn } => {
            let c = UsersClient::new(conn.base_url, conn.api_key);
            let fetched = c.list_users().await?;
            println!("{}", fetched.pretty);
            for user in &fetched.value {
                println!("{}", user.display_name());
            }
        }
        Command::GetUser { id, conn } => {
            let c = UsersClient::new(conn.base_url, conn.api_key);
            let fetched = c.get_user(id).await?;
            println!("{}", fetched.pretty);
            println!("{}", fetched.value.display_name());
        }
    }
    Ok(())
}

fn main() -> std::process::ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let rt = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("failed to build tokio runtime: {e}");
            return std::process::ExitCode::FAILURE;
        }
    };

    match rt.block_on(execute(cli)) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            std::process::ExitCode::FAILURE
        }
    }
}
