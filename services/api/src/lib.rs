mod ask;
mod cli;
mod infra;
mod routes;
mod server;

use campus_bot::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
