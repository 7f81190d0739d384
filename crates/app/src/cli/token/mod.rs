use clap::{Args, Subcommand};
use savvy_app::{auth::PgAuthService, database};

mod create;
mod revoke;

#[derive(Debug, Args)]
pub(crate) struct TokenCommand {
    #[command(subcommand)]
    command: TokenSubcommand,
}

#[derive(Debug, Subcommand)]
enum TokenSubcommand {
    /// Issue a new API token for a user
    Create(create::CreateTokenArgs),

    /// Revoke an API token
    Revoke(revoke::RevokeTokenArgs),
}

pub(crate) async fn run(command: TokenCommand) -> Result<(), String> {
    match command.command {
        TokenSubcommand::Create(args) => create::run(args).await,
        TokenSubcommand::Revoke(args) => revoke::run(args).await,
    }
}

async fn auth_service(database_url: &str) -> Result<PgAuthService, String> {
    let pool = database::connect(database_url, 1)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    Ok(PgAuthService::new(pool))
}
