use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeckError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: field `{field}` is empty")]
    Validation { line: u64, field: &'static str },
    #[error("line {line}: missing id")]
    MissingId { line: u64 },
    #[error("duplicate entry id: {0}")]
    DuplicateId(u32),
    #[error("no entry with id {0}")]
    UnknownId(u32),
    #[error("entry ids overflowed u32")]
    IdOverflow,
}
