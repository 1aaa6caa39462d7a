use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One failed input constraint.
///
/// `field` names the offending input and may use dotted path notation
/// (`address.city`, `items[1].name`). `rejected_value` is omitted from the
/// wire when unset; an explicit JSON `null` is kept as `null`.
#[cfg_attr(feature = "with-utoipa", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "with-utoipa", schema(title = "ValidationError"))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    field: String,
    message: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "explicit_null"
    )]
    rejected_value: Option<Value>,
}

impl ValidationError {
    /// A single error without a rejected value.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rejected_value: None,
        }
    }

    /// A single error carrying the value that failed validation.
    pub fn rejected(
        field: impl Into<String>,
        message: impl Into<String>,
        value: impl Serialize,
    ) -> Self {
        Self::with_json_value(field, message, to_json(&value))
    }

    pub(crate) fn with_json_value(
        field: impl Into<String>,
        message: impl Into<String>,
        value: Value,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rejected_value: Some(value),
        }
    }

    /// One-element list, ready for [`ApiResponse::validation_error`].
    ///
    /// [`ApiResponse::validation_error`]: crate::ApiResponse::validation_error
    pub fn of(field: impl Into<String>, message: impl Into<String>) -> Vec<Self> {
        vec![Self::new(field, message)]
    }

    /// One-element list with the rejected value set.
    pub fn of_with_value(
        field: impl Into<String>,
        message: impl Into<String>,
        value: impl Serialize,
    ) -> Vec<Self> {
        vec![Self::rejected(field, message, value)]
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn rejected_value(&self) -> Option<&Value> {
        self.rejected_value.as_ref()
    }
}

fn to_json(value: &impl Serialize) -> Value {
    serde_json::to_value(value).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "rejected value is not representable as JSON, using null");
        Value::Null
    })
}

// A present `null` must survive as `Some(Value::Null)`; only a missing key maps to `None`.
fn explicit_null<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}
