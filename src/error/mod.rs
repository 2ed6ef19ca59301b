mod context;
mod exit_codes;
mod format;

pub use context::ErrorContext;
pub use exit_codes::get_exit_code;
pub use format::format_error_chain;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TweakdexError {
    #[error("Template file '{0}' was not found")]
    TemplateNotFound(String),

    #[error("Placeholder '{placeholder}' not found in '{template}'")]
    PlaceholderMissing {
        placeholder: String,
        template: String,
    },

    #[error("Configuration file error: {0}")]
    ConfigFile(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TweakdexError>;
