use log::error;
use yew::prelude::*;

use crate::components::{confirm, feedback_html, Feedback};
use crate::req::GreenhouseReadings;
use crate::{request, sensor, utils};

pub enum Msg {
    ReadingsReceived(Vec<GreenhouseReadings>),
    RequestFailed(String),
    ClearRequested,
    Cleared(String),
    ClearFailed(String),
}

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Bumped by the app root whenever a submit landed new data.
    pub epoch: u32,
}

pub struct Dashboard {
    estufas: Option<Vec<GreenhouseReadings>>,
    error: Option<String>,
    clear_feedback: Option<Feedback>,
}

impl Component for Dashboard {
    type Message = Msg;
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            estufas: None,
            error: None,
            clear_feedback: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ReadingsReceived(estufas) => {
                self.estufas = Some(estufas);
                self.error = None;
                true
            }
            Msg::RequestFailed(message) => {
                error!("failed to load readings: {message}");
                self.error = Some(message);
                true
            }
            Msg::ClearRequested => {
                if confirm("This will delete every stored reading in the backend. Continue?") {
                    let link = ctx.link().clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        match request::clear_readings().await {
                            Ok(message) => link.send_message(Msg::Cleared(message)),
                            Err(e) => link.send_message(Msg::ClearFailed(e.to_string())),
                        }
                    });
                }
                false
            }
            Msg::Cleared(message) => {
                self.clear_feedback = Some(Feedback::success(message));
                self.reload(ctx);
                true
            }
            Msg::ClearFailed(message) => {
                error!("failed to clear readings: {message}");
                self.clear_feedback = Some(Feedback::error(message));
                true
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().epoch != old_props.epoch {
            self.reload(ctx);
        }
        true
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            self.request_readings(ctx);
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let content = if let Some(message) = &self.error {
            html! {
                <div class="error-box">
                    <strong>{"Failed to reach the backend."}</strong>
                    <p>{message}</p>
                </div>
            }
        } else {
            match self.estufas.as_ref() {
                None => html! { <p>{"Loading readings..."}</p> },
                Some(estufas) if estufas.is_empty() => {
                    html! { <p>{"No readings stored in the backend yet."}</p> }
                }
                Some(estufas) => estufas.iter().map(greenhouse_card).collect::<Html>(),
            }
        };

        html! {
            <>
                <div class="toolbar">
                    <button onclick={ctx.link().callback(|_| Msg::ClearRequested)}>
                        {"🗑 Clear all data"}
                    </button>
                </div>
                {feedback_html(self.clear_feedback.as_ref())}
                {content}
            </>
        }
    }
}

impl Dashboard {
    fn reload(&mut self, ctx: &Context<Self>) {
        self.estufas = None;
        self.error = None;
        self.request_readings(ctx);
    }

    fn request_readings(&self, ctx: &Context<Self>) {
        let link = ctx.link().clone();
        wasm_bindgen_futures::spawn_local(async move {
            match request::readings().await {
                Ok(estufas) => link.send_message(Msg::ReadingsReceived(estufas)),
                Err(e) => link.send_message(Msg::RequestFailed(e.to_string())),
            }
        });
    }
}

fn greenhouse_card(estufa: &GreenhouseReadings) -> Html {
    let items: Html = estufa
        .leituras
        .iter()
        .map(|leitura| {
            html! {
                <li>
                    <strong>{sensor::label_for(&leitura.tipo)}</strong>
                    {format!(" (Ref: {}) | ", leitura.sensor_ref)}
                    <strong>{format!("{} {}", leitura.valor, sensor::unit_for(&leitura.tipo))}</strong>
                    {format!(" | {}", utils::format_timestamp(&leitura.data_hora))}
                </li>
            }
        })
        .collect();

    html! {
        <div class="card reading-card">
            <h3>{format!("Estufa {}", estufa.estufa_id)}</h3>
            <ul class="reading-list">{items}</ul>
        </div>
    }
}
