//! Error taxonomy for the experience component. Validation failures carry
//! the user-facing message; storage failures pass through untouched.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExpError {
    /// The supplied amount is not a usable whole number of experience.
    #[error("{0}")]
    InvalidAmount(String),
    #[error("Usernames are required to be less than 19 characters long.")]
    UsernameTooLong,
    #[error("The target user could not be found.")]
    UnknownAccount,
    #[error("You are not permitted to use this command.")]
    PermissionDenied,
    #[error(transparent)]
    Db(#[from] sqlx::Error),
}

pub type ExpResult<T> = Result<T, ExpError>;
