//! Request validation strategy.

use tiercast_common::error::AppError;
use tiercast_common::types::NotifyRequest;

#[cfg_attr(test, mockall::automock)]
pub trait RequestValidator: Send + Sync {
    fn validate(&self, request: &NotifyRequest) -> Result<(), AppError>;
}

/// Delegates to the request's own field checks.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultValidator;

impl RequestValidator for DefaultValidator {
    fn validate(&self, request: &NotifyRequest) -> Result<(), AppError> {
        request.validate()
    }
}
