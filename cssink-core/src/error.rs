use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The configured insertion mode was not recognized when a flush tried to
    /// resolve it. Configuration itself accepts any value.
    #[error("invalid insertion mode: {0:?}")]
    InvalidConfiguration(String),
    /// Brace counts of a style block disagree. Only checked in debug mode.
    #[error("malformed style block: {open} opening vs {close} closing braces")]
    MalformedStyle { open: usize, close: usize },
    /// An element wrapper was built without any style text.
    #[error("no style text provided")]
    MissingStyles,
    /// The sink failed to commit styles to the document.
    #[error("failed to insert styles: {0}")]
    Insertion(String),
}
