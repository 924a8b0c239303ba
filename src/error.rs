use thiserror::Error;

/// Errors that can occur while loading, querying or persisting recipes
#[derive(Error, Debug)]
pub enum FinderError {
    /// Failed to read or write a file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to (de)serialize recipes or stored values
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// A recipe violates the catalogue invariants
    #[error("Invalid recipe: {0}")]
    InvalidRecipe(String),

    /// No recipe with the requested id exists in the store
    #[error("No recipe with id {0}")]
    RecipeNotFound(u32),

    /// A command line could not be turned into an input event
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
}
