//! Database Config

use clap::Args;

/// Price database settings.
#[derive(Debug, Args)]
pub struct DatabaseConfig {
    /// `PostgreSQL` connection string for the prices database
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,

    /// Upper bound on pooled connections shared by all requests
    #[arg(
        long,
        env = "DATABASE_MAX_CONNECTIONS",
        default_value_t = 10,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub database_max_connections: u32,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Debug, Parser)]
    struct Cli {
        #[command(flatten)]
        database: DatabaseConfig,
    }

    #[test]
    fn zero_max_connections_is_rejected() {
        let result = Cli::try_parse_from([
            "savvy-json",
            "--database-url",
            "postgres://localhost/savvy",
            "--database-max-connections",
            "0",
        ]);

        assert!(result.is_err(), "expected a zero pool size to fail");
    }
}
