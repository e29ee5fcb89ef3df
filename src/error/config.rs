use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined, either in
    /// the process environment or in a `.env` file in the working directory.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Required environment variable is set but blank.
    ///
    /// Treated the same as a missing variable: the run stops before connecting.
    #[error("Environment variable {0} is set but empty")]
    EmptyEnvVar(String),
}
