use miette::{Diagnostic, NamedSource, SourceSpan};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("{message}")]
pub struct ParseError {
    #[source_code]
    pub src: NamedSource<String>,
    #[label("here")]
    pub bad_bit: SourceSpan,
    pub message: String,
}

impl ParseError {
    pub fn new(path: &Path, content: String, offset: usize, message: String) -> Self {
        Self {
            src: NamedSource::new(path.display().to_string(), content),
            bad_bit: SourceSpan::new(offset.into(), 0),
            message,
        }
    }
}
