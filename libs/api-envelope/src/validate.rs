//! Bridge from `validator` derive results to [`ValidationError`] lists.

use validator::{ValidationErrors, ValidationErrorsKind};

use crate::response::ApiResponse;
use crate::validation::ValidationError;

/// Flatten `validator` errors into field errors.
///
/// Nested structs become dotted paths (`address.city`), list items get an
/// index (`items[1].name`). The message is the validator's message, or its
/// code when none was given; the validator's `value` param becomes the
/// rejected value. Output is sorted by field.
pub fn validation_errors_from(errors: &ValidationErrors) -> Vec<ValidationError> {
    let mut out = Vec::new();
    collect("", errors, &mut out);
    out.sort_by(|a, b| a.field().cmp(b.field()));
    out
}

fn collect(prefix: &str, errors: &ValidationErrors, out: &mut Vec<ValidationError>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                out.extend(field_errors.iter().map(|e| convert(&path, e)));
            }
            ValidationErrorsKind::Struct(nested) => collect(&path, nested, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect(&format!("{path}[{index}]"), nested, out);
                }
            }
        }
    }
}

fn convert(path: &str, error: &validator::ValidationError) -> ValidationError {
    let message = match &error.message {
        Some(message) => message.to_string(),
        None => error.code.to_string(),
    };
    match error.params.get("value") {
        Some(value) => ValidationError::with_json_value(path, message, value.clone()),
        None => ValidationError::new(path, message),
    }
}

impl From<ValidationErrors> for ApiResponse<Vec<ValidationError>> {
    fn from(errors: ValidationErrors) -> Self {
        Self::validation_error(validation_errors_from(&errors))
    }
}
