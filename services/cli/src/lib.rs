mod cli;
mod commands;
mod demo;
mod infra;
mod render;

use ocuhealth::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
