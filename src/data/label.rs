use crate::error::LabelError;

pub const NEGATIVE: u8 = 0;
pub const POSITIVE: u8 = 1;

/// negative/positive or error
pub fn convert_label(label: &str) -> Result<u8, LabelError> {
    match label {
        "negative" => Ok(NEGATIVE),
        "positive" => Ok(POSITIVE),
        other => Err(LabelError(other.to_string())),
    }
}
