//! Optional checks in front of [`make_content`]
//!
//! The encoder accepts anything and silently writes broken length subfields
//! for values it cannot represent. [`try_make_content`] rejects those requests instead.

use thiserror::Error;

use crate::{encoder::make_content, protocol::*};

/// Largest length a 2 digit subfield can declare
pub const MAX_LEN: usize = 99;

/// Fixed overhead of the merchant account block around bank and account
const MERCHANT_ACCOUNT_OVERHEAD: usize = 38;
/// Fixed overhead of the additional data block around the description
const ADDITIONAL_DATA_OVERHEAD: usize = 4;

#[derive(Debug, PartialEq, Error)]
pub enum ValidationError {
    #[error("`{field}` must not be empty")]
    EmptyField { field: &'static str },
    #[error("`{field}` is {len} characters long, at most 99 fit in a field")]
    OversizedField { field: &'static str, len: usize },
    #[error("block `{tag}` would be {len} characters long, at most 99 fit in a field")]
    OversizedBlock { tag: &'static str, len: usize },
    #[error("`{field}` contains non ASCII characters")]
    NonAsciiInput { field: &'static str },
    #[error("amount {0} is not a finite non-negative number")]
    InvalidAmount(f64),
}

fn check_field(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if !value.is_ascii() {
        return Err(ValidationError::NonAsciiInput { field });
    }
    let len = char_len(value);
    if len > MAX_LEN {
        return Err(ValidationError::OversizedField { field, len });
    }
    Ok(())
}

fn check_required(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    check_field(field, value)
}

fn check_request(request: &EncodingRequest) -> Result<(), ValidationError> {
    check_required("bank_id", &request.bank_id)?;
    check_required("account_id", &request.account_id)?;

    let len = char_len(&request.bank_id) + char_len(&request.account_id) + MERCHANT_ACCOUNT_OVERHEAD;
    if len > MAX_LEN {
        return Err(ValidationError::OversizedBlock {
            tag: MERCHANT_ACCOUNT_TAG,
            len,
        });
    }

    // Zero stays valid, it is simply left out of the payload
    if let Some(amount) = request.amount {
        if !amount.is_finite() || amount < 0.0 {
            return Err(ValidationError::InvalidAmount(amount));
        }
    }
    if let Some(amount) = request.amount_field() {
        check_field("amount", &amount)?;
    }

    if let Some(description) = request.description_field() {
        check_field("description", description)?;
        let len = char_len(description) + ADDITIONAL_DATA_OVERHEAD;
        if len > MAX_LEN {
            return Err(ValidationError::OversizedBlock {
                tag: ADDITIONAL_DATA_TAG,
                len,
            });
        }
    }

    Ok(())
}

/// Checks that every length subfield of `request` fits in 2 digits
///
/// # Errors
///
/// - [`ValidationError::EmptyField`] for an empty bank or account
/// - [`ValidationError::NonAsciiInput`] for any value outside ASCII
/// - [`ValidationError::OversizedField`] for a value over [`MAX_LEN`]
/// - [`ValidationError::OversizedBlock`] when a nested block would exceed [`MAX_LEN`]
/// - [`ValidationError::InvalidAmount`] for negative, infinite or NaN amounts
pub fn validate(request: &EncodingRequest) -> Result<(), ValidationError> {
    check_request(request).map_err(|e| {
        log::warn!("Rejected VietQR request for bank {:?}: {e}", request.bank_id);
        e
    })
}

/// [`validate`] then [`make_content`]
///
/// Output is identical to [`make_content`] for every request that passes.
pub fn try_make_content(request: &EncodingRequest) -> Result<String, ValidationError> {
    validate(request)?;
    Ok(make_content(request))
}
