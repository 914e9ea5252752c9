// errors.rs
use astra::Response;
use thiserror::Error;

/// Errors originating from either the server logic
/// (routing, missing resources, etc.) or downstream layers (DB, hashing).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Method Not Allowed")]
    MethodNotAllowed,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Database Error: {0}")]
    DbError(String),
    #[error("Password Error: {0}")]
    PasswordError(String),
    #[error("Internal Server Error")]
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

/// Signup outcomes that are reported back to the form instead of an error page.
#[derive(Debug, Error)]
pub enum SignupError {
    #[error("Please fill in all fields.")]
    MissingFields,
    #[error("Username or email already exists!")]
    Conflict,
    #[error(transparent)]
    Server(#[from] ServerError),
}

/// Rental submission outcomes. Everything but `Server` becomes a flash message.
#[derive(Debug, Error)]
pub enum RentError {
    #[error("House not found.")]
    NotFound,
    #[error("This house is already rented.")]
    AlreadyRented,
    #[error("Please fill in all required fields.")]
    MissingFields,
    #[error(transparent)]
    Server(#[from] ServerError),
}
