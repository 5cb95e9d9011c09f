use thiserror::Error;

pub type SpResult<T> = Result<T, SpError>;

#[derive(Error, Debug)]
pub enum SpError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Unknown reference: {what}")]
    UnknownReference { what: &'static str },
}
