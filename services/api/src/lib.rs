mod cli;
mod demo;
mod infra;
mod page;
mod routes;
mod server;

use outturn::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
