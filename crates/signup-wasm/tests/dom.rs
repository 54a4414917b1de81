//! Browser tests; run with `wasm-pack test --headless --firefox`
#![cfg(target_arch = "wasm32")]

use serde::Deserialize;
use signup_form::{FieldId, FieldSource, SignupForm, StatusPresenter, ThemeConfig, Verdict};
use signup_wasm::{attach, validate_form, DomPresenter, DomSource};
use std::collections::BTreeMap;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Document, Element, Event, EventInit, HtmlElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

const FORM_HTML: &str = r#"
<div class="container"><div class="row"><div>
  <form id="registration-form">
    <div><input id="name" name="Name" class="form-control"></div><small></small>
    <div><input id="email" name="Email" class="form-control"></div><small></small>
    <div><input id="password" name="Password" class="form-control"></div><small></small>
    <div><input id="confirm-password" name="Confirm password" class="form-control"></div>
    <small></small>
  </form>
</div></div></div>
"#;

fn document() -> Document {
    let document = web_sys::window().unwrap().document().unwrap();
    document.body().unwrap().set_inner_html(FORM_HTML);
    document
}

fn input(document: &Document, field: FieldId) -> HtmlInputElement {
    document
        .get_element_by_id(field.dom_id())
        .unwrap()
        .dyn_into()
        .unwrap()
}

#[wasm_bindgen_test]
fn test_source_reads_input_values() {
    let document = document();
    input(&document, FieldId::Email).set_value("a@b.com");

    let source = DomSource::find(&document).unwrap();
    assert_eq!(source.value(FieldId::Email), "a@b.com");
    assert_eq!(source.value(FieldId::Name), "");
}

#[wasm_bindgen_test]
fn test_presenter_marks_input_and_help() {
    let document = document();
    let source = DomSource::find(&document).unwrap();
    let mut presenter = DomPresenter::new(&document, source, ThemeConfig::default()).unwrap();

    presenter.present(FieldId::Name, &Verdict::fail("Name must not be empty"));

    let name = input(&document, FieldId::Name);
    assert_eq!(name.class_name(), "form-control is-invalid");
    let help: HtmlElement = name
        .parent_element()
        .unwrap()
        .next_element_sibling()
        .unwrap()
        .dyn_into()
        .unwrap();
    assert_eq!(help.text_content().unwrap(), "Name must not be empty");
    assert_eq!(help.style().get_property_value("display").unwrap(), "block");

    presenter.present(FieldId::Name, &Verdict::pass());
    assert_eq!(name.class_name(), "form-control is-valid");
    assert_eq!(help.style().get_property_value("display").unwrap(), "none");
}

fn help(input: &HtmlInputElement) -> HtmlElement {
    input
        .parent_element()
        .unwrap()
        .next_element_sibling()
        .unwrap()
        .dyn_into()
        .unwrap()
}

fn banner(document: &Document) -> Element {
    document
        .query_selector(".container .row > div")
        .unwrap()
        .unwrap()
        .last_element_child()
        .unwrap()
}

fn fill(document: &Document, form: &SignupForm) {
    for field in FieldId::ALL {
        input(document, field).set_value(form.value(field));
    }
}

/// Returns whether the submit handler cancelled the event
fn submit(document: &Document) -> bool {
    let init = EventInit::new();
    init.set_cancelable(true);
    let event = Event::new_with_event_init_dict("submit", &init).unwrap();
    document
        .get_element_by_id("registration-form")
        .unwrap()
        .dispatch_event(&event)
        .unwrap();
    event.default_prevented()
}

fn valid_form() -> SignupForm {
    SignupForm {
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        password: "engine42".to_string(),
        confirm_password: "engine42".to_string(),
    }
}

#[wasm_bindgen_test]
fn test_attached_form_accepts_valid_submission() {
    let document = document();
    attach(JsValue::UNDEFINED).unwrap();
    fill(&document, &valid_form());

    assert!(submit(&document));

    let banner = banner(&document);
    assert_eq!(banner.class_name(), "alert alert-success rounded-0 mt-1");
    assert_eq!(
        banner.text_content().unwrap(),
        "Sign up successful, welcome Ada Lovelace"
    );
    for field in FieldId::ALL {
        assert_eq!(input(&document, field).class_name(), "form-control is-valid");
    }
}

#[wasm_bindgen_test]
fn test_attached_form_rejects_invalid_submission() {
    let document = document();
    attach(JsValue::UNDEFINED).unwrap();
    fill(
        &document,
        &SignupForm {
            confirm_password: "engine43".to_string(),
            ..valid_form()
        },
    );

    assert!(submit(&document));

    let banner = banner(&document);
    assert_eq!(banner.class_name(), "alert alert-danger rounded-0 mt-1");
    assert_eq!(banner.text_content().unwrap(), "Make sure all fields are valid");

    let confirm = input(&document, FieldId::ConfirmPassword);
    assert_eq!(confirm.class_name(), "form-control is-invalid");
    assert_eq!(help(&confirm).text_content().unwrap(), "Passwords must match");
}

#[wasm_bindgen_test]
fn test_attached_form_validates_on_focusout() {
    let document = document();
    attach(JsValue::UNDEFINED).unwrap();

    let name = input(&document, FieldId::Name);
    name.set_value("John123");
    name.dispatch_event(&Event::new("focusout").unwrap()).unwrap();

    assert_eq!(name.class_name(), "form-control is-invalid");
    let help = help(&name);
    assert_eq!(help.text_content().unwrap(), "Name must contain only letters");
    assert_eq!(help.style().get_property_value("display").unwrap(), "block");

    name.set_value("John");
    name.dispatch_event(&Event::new("focusout").unwrap()).unwrap();
    assert_eq!(name.class_name(), "form-control is-valid");
    assert_eq!(help.style().get_property_value("display").unwrap(), "none");

    // other fields are not touched by a name blur
    assert_eq!(input(&document, FieldId::Email).class_name(), "form-control");
}

#[wasm_bindgen_test]
fn test_attach_requires_the_form() {
    let document = web_sys::window().unwrap().document().unwrap();
    document.body().unwrap().set_inner_html("<div></div>");

    assert!(attach(JsValue::UNDEFINED).is_err());
}

#[derive(Debug, Deserialize)]
struct FormCheck {
    valid: bool,
    errors: BTreeMap<String, Vec<String>>,
}

fn check(form: &SignupForm) -> FormCheck {
    let values = serde_wasm_bindgen::to_value(form).unwrap();
    serde_wasm_bindgen::from_value(validate_form(values).unwrap()).unwrap()
}

#[wasm_bindgen_test]
fn test_validate_form_reports_errors_by_field() {
    let ok = check(&valid_form());
    assert!(ok.valid);
    assert!(ok.errors.is_empty());

    let failed = check(&SignupForm {
        name: "R2D2".to_string(),
        ..valid_form()
    });
    assert!(!failed.valid);
    assert_eq!(
        failed.errors.get("name"),
        Some(&vec!["Name must contain only letters".to_string()])
    );
    assert_eq!(failed.errors.len(), 1);
}
