use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Input error: {0}")]
    Units(#[from] tj_units::UnitError),

    #[error("Atmosphere error: {0}")]
    Atmosphere(#[from] tj_atmosphere::AtmosphereError),

    #[error("Cycle error: {0}")]
    Cycle(#[from] tj_cycle::CycleError),

    #[error("Sweep error: {0}")]
    Sweep(#[from] tj_sweep::SweepError),

    #[error("Config error in {path}: {message}")]
    Config { path: String, message: String },

    #[error("Output error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CliResult<T> = Result<T, CliError>;
