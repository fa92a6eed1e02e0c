use std::collections::BTreeMap;

use log::error;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::{confirm, feedback_html, Feedback};
use crate::req::{Rule, RuleSet};
use crate::{request, sensor};

/// Lifecycle of the rules form. Buttons only work in `Ready`; the form is
/// guaranteed to be populated before a save or reset can be issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Loading,
    Ready,
    Busy,
    Failed,
}

pub enum Msg {
    RulesLoaded(RuleSet),
    LoadFailed(String),
    SaveRequested,
    Saved(RuleSet),
    SaveFailed(String),
    ResetRequested,
    ResetSucceeded,
    ResetFailed(String),
}

pub struct Config {
    /// Last known-good rule set; sole source of truth for the form render.
    rules: RuleSet,
    /// One (min, max) input pair per sensor type, keyed like `rules`.
    inputs: BTreeMap<String, (NodeRef, NodeRef)>,
    state: State,
    feedback: Option<Feedback>,
}

impl Component for Config {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            rules: RuleSet::new(),
            inputs: BTreeMap::new(),
            state: State::Loading,
            feedback: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::RulesLoaded(rules) => {
                self.inputs = rules
                    .keys()
                    .map(|tipo| (tipo.clone(), (NodeRef::default(), NodeRef::default())))
                    .collect();
                self.rules = rules;
                self.state = State::Ready;
                true
            }
            Msg::LoadFailed(message) => {
                error!("failed to load rules: {message}");
                self.state = State::Failed;
                self.feedback = Some(Feedback::error(format!("Failed to load rules: {message}")));
                true
            }
            Msg::SaveRequested => {
                if self.state != State::Ready {
                    return false;
                }
                let entries: Vec<_> = self
                    .inputs
                    .iter()
                    .map(|(tipo, (min_ref, max_ref))| {
                        (tipo.clone(), input_value(min_ref), input_value(max_ref))
                    })
                    .collect();

                match collect_rules(entries) {
                    Err(message) => {
                        self.feedback = Some(Feedback::error(message));
                    }
                    Ok(rules) => {
                        self.state = State::Busy;
                        self.feedback = None;
                        let link = ctx.link().clone();
                        wasm_bindgen_futures::spawn_local(async move {
                            match request::save_rules(&rules).await {
                                Ok(()) => link.send_message(Msg::Saved(rules)),
                                Err(e) => link.send_message(Msg::SaveFailed(e.to_string())),
                            }
                        });
                    }
                }
                true
            }
            Msg::Saved(rules) => {
                // mirror exactly what was submitted, no re-fetch
                self.rules = rules;
                self.state = State::Ready;
                self.feedback = Some(Feedback::success("Rules saved."));
                true
            }
            Msg::SaveFailed(message) => {
                error!("failed to save rules: {message}");
                self.state = State::Ready;
                self.feedback = Some(Feedback::error(format!("Failed to save: {message}")));
                true
            }
            Msg::ResetRequested => {
                if self.state != State::Ready
                    || !confirm(
                        "Restore the default rules? This discards every change made here.",
                    )
                {
                    return false;
                }
                self.state = State::Busy;
                self.feedback = None;
                let link = ctx.link().clone();
                wasm_bindgen_futures::spawn_local(async move {
                    match request::reset_rules().await {
                        Ok(()) => link.send_message(Msg::ResetSucceeded),
                        Err(e) => link.send_message(Msg::ResetFailed(e.to_string())),
                    }
                });
                true
            }
            Msg::ResetSucceeded => {
                self.feedback = Some(Feedback::success("Default rules restored."));
                self.state = State::Loading;
                self.inputs.clear();
                self.request_rules(ctx);
                true
            }
            Msg::ResetFailed(message) => {
                error!("failed to reset rules: {message}");
                self.state = State::Ready;
                self.feedback = Some(Feedback::error(format!("Failed to restore: {message}")));
                true
            }
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            self.request_rules(ctx);
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let form = match self.state {
            State::Loading => html! { <p>{"Loading rules..."}</p> },
            State::Failed => html! {},
            State::Ready | State::Busy => {
                let groups: Html = self
                    .rules
                    .iter()
                    .filter_map(|(tipo, rule)| {
                        self.inputs
                            .get(tipo)
                            .map(|refs| rule_group(tipo, rule, refs))
                    })
                    .collect();
                html! { <form class="rules-form">{groups}</form> }
            }
        };

        let busy = self.state != State::Ready;

        html! {
            <>
                {form}
                {feedback_html(self.feedback.as_ref())}
                <div class="toolbar">
                    <button disabled={busy}
                        onclick={ctx.link().callback(|_| Msg::SaveRequested)}>
                        {"Save rules"}
                    </button>
                    <button disabled={busy}
                        onclick={ctx.link().callback(|_| Msg::ResetRequested)}>
                        {"Restore defaults"}
                    </button>
                </div>
            </>
        }
    }
}

impl Config {
    fn request_rules(&self, ctx: &Context<Self>) {
        let link = ctx.link().clone();
        wasm_bindgen_futures::spawn_local(async move {
            match request::rules().await {
                Ok(rules) => link.send_message(Msg::RulesLoaded(rules)),
                Err(e) => link.send_message(Msg::LoadFailed(e.to_string())),
            }
        });
    }
}

fn rule_group(tipo: &str, rule: &Rule, (min_ref, max_ref): &(NodeRef, NodeRef)) -> Html {
    html! {
        <fieldset>
            <legend>{sensor::label_for(tipo)}</legend>
            <label>{"Min:"}</label>
            <input type="number" step="0.1" ref={min_ref.clone()} value={rule.min.to_string()} />
            <label>{"Max:"}</label>
            <input type="number" step="0.1" ref={max_ref.clone()} value={rule.max.to_string()} />
        </fieldset>
    }
}

fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

fn parse_bound(raw: &str) -> Option<f64> {
    let value = raw.trim().parse::<f64>().ok()?;
    value.is_finite().then_some(value)
}

/// Assembles the rule set to submit from raw form values. Rejects the whole
/// save when any bound is missing or not a finite number, so the backend
/// never sees a rule without two numeric bounds.
fn collect_rules(
    entries: impl IntoIterator<Item = (String, String, String)>,
) -> Result<RuleSet, String> {
    let mut rules = RuleSet::new();
    for (tipo, min_raw, max_raw) in entries {
        let (Some(min), Some(max)) = (parse_bound(&min_raw), parse_bound(&max_raw)) else {
            return Err(format!(
                "Invalid bounds for {}: min and max must both be numeric.",
                sensor::label_for(&tipo)
            ));
        };
        rules.insert(tipo, Rule { min, max });
    }
    Ok(rules)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_parse_decimals_and_trim_whitespace() {
        assert_eq!(parse_bound("10"), Some(10.0));
        assert_eq!(parse_bound(" 6.5 "), Some(6.5));
        assert_eq!(parse_bound("-3.2"), Some(-3.2));
    }

    #[test]
    fn garbage_and_non_finite_bounds_are_rejected() {
        assert_eq!(parse_bound(""), None);
        assert_eq!(parse_bound("abc"), None);
        assert_eq!(parse_bound("NaN"), None);
        assert_eq!(parse_bound("inf"), None);
    }

    #[test]
    fn collect_rules_builds_the_full_set() {
        let rules = collect_rules(vec![
            ("temperatura".to_string(), "10".to_string(), "30".to_string()),
            ("ph".to_string(), "5.5".to_string(), "6.5".to_string()),
        ])
        .unwrap();

        assert_eq!(rules.len(), 2);
        assert_eq!(rules["temperatura"], Rule { min: 10.0, max: 30.0 });
        assert_eq!(rules["ph"], Rule { min: 5.5, max: 6.5 });
    }

    #[test]
    fn one_bad_bound_rejects_the_whole_save() {
        let result = collect_rules(vec![
            ("temperatura".to_string(), "10".to_string(), "30".to_string()),
            ("ph".to_string(), "x".to_string(), "6.5".to_string()),
        ]);

        let message = result.unwrap_err();
        assert!(message.contains("pH"));
    }
}
