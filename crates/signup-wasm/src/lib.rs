//! Sign-up Form WASM
//!
//! WebAssembly bindings for the sign-up form. Exposes the field validators to
//! JavaScript and, in the browser, wires blur and submit events to a
//! [`FormCoordinator`](signup_form::FormCoordinator) rendering into the DOM.

use serde::Serialize;
use signup_form::validation::{self as rules, SignupForm, Validate, Verdict};
use std::collections::BTreeMap;
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod dom;

#[cfg(target_arch = "wasm32")]
pub use dom::{attach, DomPresenter, DomSource};

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Pass/fail result handed to JavaScript
#[wasm_bindgen]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldVerdict {
    valid: bool,
    message: String,
}

#[wasm_bindgen]
impl FieldVerdict {
    #[wasm_bindgen(getter)]
    pub fn valid(&self) -> bool {
        self.valid
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

impl From<Verdict> for FieldVerdict {
    fn from(verdict: Verdict) -> Self {
        Self {
            valid: verdict.is_valid(),
            message: verdict.message,
        }
    }
}

#[wasm_bindgen(js_name = validateName)]
pub fn validate_name_js(value: &str) -> FieldVerdict {
    rules::validate_name(value).into()
}

#[wasm_bindgen(js_name = validateEmail)]
pub fn validate_email_js(value: &str) -> FieldVerdict {
    rules::validate_email(value).into()
}

#[wasm_bindgen(js_name = validatePassword)]
pub fn validate_password_js(value: &str) -> FieldVerdict {
    rules::validate_password(value).into()
}

#[wasm_bindgen(js_name = validateConfirmPassword)]
pub fn validate_confirm_password_js(
    value: &str,
    password: &str,
    password_is_valid: bool,
) -> FieldVerdict {
    rules::validate_confirm_password(value, password, password_is_valid).into()
}

#[derive(Serialize)]
struct FormErrors {
    valid: bool,
    errors: BTreeMap<String, Vec<String>>,
}

/// Validate a whole submission
///
/// # Example (JavaScript)
/// ```javascript
/// const { valid, errors } = validateForm({
///     name: 'Ada',
///     email: 'ada@example.com',
///     password: 'engine42',
///     'confirm-password': 'engine42',
/// });
/// ```
#[wasm_bindgen(js_name = validateForm)]
pub fn validate_form(values: JsValue) -> Result<JsValue, JsValue> {
    let form: SignupForm = serde_wasm_bindgen::from_value(values)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse form values: {}", e)))?;

    let errors = form.validate().err().unwrap_or_default();
    let result = FormErrors {
        valid: errors.is_empty(),
        errors,
    };
    // plain objects rather than `Map`s on the JS side
    Ok(result.serialize(&serde_wasm_bindgen::Serializer::json_compatible())?)
}
