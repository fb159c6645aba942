mod cli;
mod demo;
mod infra;
mod routes;
mod server;

use marine_guardian::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
