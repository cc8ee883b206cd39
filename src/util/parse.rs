use crate::error::{internal::InternalError, AppError};

/// Parses a u64 value from a String
///
/// # Arguments
/// - `value` - The String to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed String to `u64`
/// - `Err(AppError::InternalErr(ParseStringId))` - Failed to parse
///   the string as a u64
pub fn parse_u64_from_string(value: String) -> Result<u64, AppError> {
    let result = value
        .parse::<u64>()
        .map_err(|source| InternalError::ParseStringId { value, source })?;

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_id() {
        assert_eq!(
            parse_u64_from_string("123456789012345678".to_string()).unwrap(),
            123456789012345678
        );
    }

    #[test]
    fn rejects_non_numeric_id() {
        let err = parse_u64_from_string("all".to_string()).unwrap_err();
        assert!(matches!(
            err,
            AppError::InternalErr(InternalError::ParseStringId { .. })
        ));
    }
}
