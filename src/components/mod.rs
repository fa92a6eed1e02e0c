pub mod alerts;
pub mod config;
pub mod dashboard;
pub mod editor;

use yew::{html, Html};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Error,
    Info,
}

/// One-line status message rendered under a view's controls.
#[derive(Debug, Clone, PartialEq)]
pub struct Feedback {
    pub message: String,
    pub level: Level,
}

impl Feedback {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: Level::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: Level::Error,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: Level::Info,
        }
    }

    fn class(&self) -> &'static str {
        match self.level {
            Level::Success => "feedback success",
            Level::Error => "feedback error",
            Level::Info => "feedback info",
        }
    }
}

pub fn feedback_html(feedback: Option<&Feedback>) -> Html {
    match feedback {
        Some(fb) => html! {
            <pre class={fb.class()}>{&fb.message}</pre>
        },
        None => html! {},
    }
}

/// Asks the operator to confirm a destructive action. Answers `false` when
/// no window is available (e.g. outside a browser).
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .map(|w| w.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_levels_map_to_css_classes() {
        assert_eq!(Feedback::success("ok").class(), "feedback success");
        assert_eq!(Feedback::error("no").class(), "feedback error");
        assert_eq!(Feedback::info("hm").class(), "feedback info");
    }
}
