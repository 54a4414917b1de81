// File: src/presenter.rs
// Purpose: Rendering verdicts into field views and the submission banner

use crate::config::{MessagesConfig, ThemeConfig};
use once_cell::sync::Lazy;
use regex::Regex;
use signup_validation::{FieldId, FieldStatus, Verdict};
use std::collections::BTreeMap;

static STATUS_CLASS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"is-\w*").expect("status class pattern is valid"));

/// Anything that can show field verdicts and the form banner
pub trait StatusPresenter {
    fn present(&mut self, field: FieldId, verdict: &Verdict);

    fn show_banner(&mut self, banner: &Banner);
}

/// Swap the first `is-*` class for the status class, or append it
///
/// `Unset` leaves the class string untouched.
pub fn apply_status_class(class_name: &str, status: FieldStatus) -> String {
    let Some(status_class) = status.class_name() else {
        return class_name.to_string();
    };

    if STATUS_CLASS.is_match(class_name) {
        STATUS_CLASS.replace(class_name, status_class).into_owned()
    } else if class_name.trim().is_empty() {
        status_class.to_string()
    } else {
        format!("{} {}", class_name.trim_end(), status_class)
    }
}

/// CSS `display` value for a help element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    #[default]
    None,
    Block,
}

impl Display {
    pub fn as_css(self) -> &'static str {
        match self {
            Display::None => "none",
            Display::Block => "block",
        }
    }
}

/// Content and style of the help element beside a field
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HelpText {
    pub text: String,
    pub color: String,
    pub display: Display,
}

impl HelpText {
    /// Valid verdicts are green and hidden, invalid ones red and shown
    pub fn for_verdict(verdict: &Verdict, theme: &ThemeConfig) -> Self {
        let (color, display) = if verdict.is_valid() {
            (&theme.valid_color, Display::None)
        } else {
            (&theme.invalid_color, Display::Block)
        };

        Self {
            text: verdict.message.clone(),
            color: color.clone(),
            display,
        }
    }
}

/// Which banner is shown after a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Failure,
}

/// Form-level message shown after submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub class_name: String,
    pub text: String,
}

impl Banner {
    pub fn success(name: &str, messages: &MessagesConfig) -> Self {
        Self {
            kind: BannerKind::Success,
            class_name: messages.success_class.clone(),
            text: messages.success_for(name),
        }
    }

    pub fn failure(messages: &MessagesConfig) -> Self {
        Self {
            kind: BannerKind::Failure,
            class_name: messages.failure_class.clone(),
            text: messages.failure.clone(),
        }
    }
}

/// One input and its help element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub class_name: String,
    pub help: HelpText,
}

impl Default for FieldView {
    fn default() -> Self {
        Self {
            class_name: "form-control".to_string(),
            help: HelpText::default(),
        }
    }
}

/// Presenter that keeps the rendered form in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryPresenter {
    theme: ThemeConfig,
    views: BTreeMap<FieldId, FieldView>,
    banner: Option<Banner>,
}

impl MemoryPresenter {
    pub fn new(theme: ThemeConfig) -> Self {
        Self {
            theme,
            views: BTreeMap::new(),
            banner: None,
        }
    }

    /// Start a field from an existing class attribute
    pub fn with_class(mut self, field: FieldId, class_name: impl Into<String>) -> Self {
        self.views.entry(field).or_default().class_name = class_name.into();
        self
    }

    pub fn view(&self, field: FieldId) -> FieldView {
        self.views.get(&field).cloned().unwrap_or_default()
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }
}

impl StatusPresenter for MemoryPresenter {
    fn present(&mut self, field: FieldId, verdict: &Verdict) {
        let view = self.views.entry(field).or_default();
        view.class_name = apply_status_class(&view.class_name, verdict.status);
        view.help = HelpText::for_verdict(verdict, &self.theme);
    }

    fn show_banner(&mut self, banner: &Banner) {
        self.banner = Some(banner.clone());
    }
}
