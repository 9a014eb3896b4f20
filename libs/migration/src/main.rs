//! Migration CLI. Reads `DATABASE_URL`; run `migration --help` for subcommands.

use migration::Migrator;
use sea_orm_migration::cli;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
