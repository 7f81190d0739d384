use clap::Args;
use savvy_app::domain::users::UserUuid;
use uuid::Uuid;

#[derive(Debug, Args)]
pub(crate) struct CreateTokenArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// UUID of the user that should own the token
    #[arg(long)]
    user: Uuid,
}

pub(crate) async fn run(args: CreateTokenArgs) -> Result<(), String> {
    let service = super::auth_service(&args.database_url).await?;

    let issued = service
        .issue_api_token(UserUuid::from_uuid(args.user))
        .await
        .map_err(|error| format!("failed to create token: {error}"))?;

    println!("token_uuid: {}", issued.record.uuid);
    println!("user_uuid: {}", issued.record.user);
    println!("token_created_at: {}", issued.record.created_at);
    println!("api_token: {}", issued.token);
    println!("store this token now; it is only shown once");

    Ok(())
}
