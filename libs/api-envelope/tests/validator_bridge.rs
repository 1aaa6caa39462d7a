#![cfg(feature = "with-validator")]

use api_envelope::{validation_errors_from, ValidationResponse, VALIDATION_FAILED_MESSAGE};
use serde_json::json;
use validator::Validate;

#[derive(Debug, Validate)]
struct Address {
    #[validate(length(min = 1, message = "city is required"))]
    city: String,
}

#[derive(Debug, Validate)]
struct Line {
    #[validate(range(min = 1))]
    quantity: u32,
}

#[derive(Debug, Validate)]
struct SignUp {
    #[validate(email(message = "이메일 형식이 올바르지 않습니다"))]
    email: String,
    #[validate(length(min = 8))]
    password: String,
    #[validate(nested)]
    address: Address,
    #[validate(nested)]
    lines: Vec<Line>,
}

fn invalid_signup() -> SignUp {
    SignUp {
        email: "invalid-email".to_string(),
        password: "short".to_string(),
        address: Address {
            city: String::new(),
        },
        lines: vec![Line { quantity: 2 }, Line { quantity: 0 }],
    }
}

#[test]
fn flattens_nested_errors_into_sorted_paths() {
    let errors = invalid_signup().validate().unwrap_err();
    let flat = validation_errors_from(&errors);

    let fields: Vec<&str> = flat.iter().map(|e| e.field()).collect();
    assert_eq!(
        fields,
        vec!["address.city", "email", "lines[1].quantity", "password"]
    );
}

#[test]
fn uses_message_or_code_and_keeps_rejected_value() {
    let errors = invalid_signup().validate().unwrap_err();
    let flat = validation_errors_from(&errors);

    let email = flat.iter().find(|e| e.field() == "email").unwrap();
    assert_eq!(email.message(), "이메일 형식이 올바르지 않습니다");
    assert_eq!(email.rejected_value(), Some(&json!("invalid-email")));

    let password = flat.iter().find(|e| e.field() == "password").unwrap();
    assert_eq!(password.message(), "length");
    assert_eq!(password.rejected_value(), Some(&json!("short")));
}

#[test]
fn converts_into_validation_envelope() {
    let errors = invalid_signup().validate().unwrap_err();
    let resp: ValidationResponse = errors.into();
    assert!(!resp.is_success());
    assert_eq!(resp.status(), 400);
    assert_eq!(resp.message(), Some(VALIDATION_FAILED_MESSAGE));
    assert_eq!(resp.data().map(Vec::len), Some(4));
}
