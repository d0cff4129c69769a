pub mod category;
pub mod event;
pub mod registration;
pub mod ticket;
pub mod user;
pub mod venue;

use crate::utils::error::AppError;

/// Presence check for a required payload field.
pub(crate) fn require<T>(value: Option<T>, field: &str) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::Validation(format!("Campo obligatorio faltante: {}", field)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_names_the_missing_field() {
        let err = require::<String>(None, "email").unwrap_err();
        match err {
            AppError::Validation(message) => {
                assert_eq!(message, "Campo obligatorio faltante: email");
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn require_passes_present_values_through() {
        assert_eq!(require(Some(5), "capacity").unwrap(), 5);
    }
}
