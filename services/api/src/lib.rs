mod cli;
mod dashboard;
mod demo;
mod infra;
mod routes;
mod server;

use teamsfit::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
