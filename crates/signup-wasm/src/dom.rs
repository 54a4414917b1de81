// DOM presenter, value source and event wiring

use signup_form::{
    apply_status_class, Banner, FieldId, FieldSource, FormConfig, FormCoordinator, HelpText,
    StatusPresenter, ThemeConfig, Verdict,
};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Document, Element, Event, HtmlElement, HtmlInputElement};

const FORM_ID: &str = "registration-form";
const BANNER_CONTAINER: &str = ".container .row > div";

/// Reads field values straight from the input elements
#[derive(Clone)]
pub struct DomSource {
    inputs: BTreeMap<FieldId, HtmlInputElement>,
}

impl DomSource {
    /// Look up every field input by id
    pub fn find(document: &Document) -> Result<Self, JsValue> {
        let mut inputs = BTreeMap::new();
        for field in FieldId::ALL {
            let input = document
                .get_element_by_id(field.dom_id())
                .ok_or_else(|| JsValue::from_str(&format!("missing input #{}", field.dom_id())))?
                .dyn_into::<HtmlInputElement>()
                .map_err(|_| JsValue::from_str(&format!("#{} is not an input", field.dom_id())))?;
            inputs.insert(field, input);
        }
        Ok(Self { inputs })
    }

    pub fn input(&self, field: FieldId) -> Option<&HtmlInputElement> {
        self.inputs.get(&field)
    }
}

impl FieldSource for DomSource {
    fn value(&self, field: FieldId) -> String {
        self.input(field).map(|input| input.value()).unwrap_or_default()
    }
}

/// Renders verdicts onto the inputs and their help elements
pub struct DomPresenter {
    inputs: DomSource,
    banner: Element,
    theme: ThemeConfig,
}

impl DomPresenter {
    /// Creates the banner element inside the form's column
    pub fn new(
        document: &Document,
        inputs: DomSource,
        theme: ThemeConfig,
    ) -> Result<Self, JsValue> {
        let container = document.query_selector(BANNER_CONTAINER)?.ok_or_else(|| {
            JsValue::from_str(&format!("missing banner container '{}'", BANNER_CONTAINER))
        })?;
        let banner = document.create_element("div")?;
        container.append_child(&banner)?;

        Ok(Self {
            inputs,
            banner,
            theme,
        })
    }
}

/// The help element follows the input's wrapper
fn help_element(input: &HtmlInputElement) -> Option<HtmlElement> {
    input
        .parent_element()?
        .next_element_sibling()?
        .dyn_into::<HtmlElement>()
        .ok()
}

impl StatusPresenter for DomPresenter {
    fn present(&mut self, field: FieldId, verdict: &Verdict) {
        let Some(input) = self.inputs.input(field) else {
            return;
        };
        input.set_class_name(&apply_status_class(&input.class_name(), verdict.status));

        let Some(help) = help_element(input) else {
            console::warn_1(&format!("no help element for #{}", field.dom_id()).into());
            return;
        };
        let text = HelpText::for_verdict(verdict, &self.theme);
        help.set_text_content(Some(&text.text));
        let style = help.style();
        if let Err(err) = style
            .set_property("color", &text.color)
            .and_then(|_| style.set_property("display", text.display.as_css()))
        {
            console::warn_2(&format!("could not style help for #{}", field.dom_id()).into(), &err);
        }
    }

    fn show_banner(&mut self, banner: &Banner) {
        self.banner.set_class_name(&banner.class_name);
        self.banner.set_text_content(Some(&banner.text));
    }
}

/// Bind blur and submit handlers on the registration form
///
/// `config` may be `undefined` or an object shaped like `signup.toml`.
#[wasm_bindgen(js_name = attachSignupForm)]
pub fn attach(config: JsValue) -> Result<(), JsValue> {
    let config: FormConfig = if config.is_undefined() || config.is_null() {
        FormConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse config: {}", e)))?
    };

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let form = document
        .get_element_by_id(FORM_ID)
        .ok_or_else(|| JsValue::from_str(&format!("missing form #{}", FORM_ID)))?;

    let source = DomSource::find(&document)?;
    let presenter = DomPresenter::new(&document, source.clone(), config.theme.clone())?;
    let coordinator = FormCoordinator::from_config(source.clone(), presenter, &config)
        .map_err(|e| JsValue::from_str(&format!("{:#}", e)))?;
    let coordinator = Rc::new(RefCell::new(coordinator));

    for field in FieldId::ALL {
        let Some(input) = source.input(field) else {
            continue;
        };
        let handler = Rc::clone(&coordinator);
        let on_focusout = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            handler.borrow_mut().on_blur(field);
        });
        input.add_event_listener_with_callback("focusout", on_focusout.as_ref().unchecked_ref())?;
        // listeners live as long as the page
        on_focusout.forget();
    }

    let handler = Rc::clone(&coordinator);
    let on_submit = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        event.prevent_default();
        handler.borrow_mut().on_submit();
    });
    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    on_submit.forget();

    Ok(())
}
