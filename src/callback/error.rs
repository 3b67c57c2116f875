use thiserror::Error;

/// Reasons a callback request is rejected before it reaches the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("name is required")]
    EmptyName,
    #[error("mobile number must be exactly 10 digits")]
    InvalidMobile,
    #[error("a callback time slot is required")]
    MissingTimeSlot,
}

/// Failure delivering a lead to the form sink.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeliveryError {
    #[error("form sink answered with status {status}")]
    Rejected { status: u16 },
    #[error("request failed: {0}")]
    Transport(String),
}
