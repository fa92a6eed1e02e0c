use log::error;
use yew::prelude::*;

use crate::req::Alert;
use crate::{request, sensor, utils};

pub enum Msg {
    AlertsReceived(Vec<Alert>),
    RequestFailed(String),
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub epoch: u32,
}

pub struct Alerts {
    alerts: Option<Vec<Alert>>,
    error: Option<String>,
}

impl Component for Alerts {
    type Message = Msg;
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            alerts: None,
            error: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::AlertsReceived(alerts) => {
                self.alerts = Some(alerts);
                self.error = None;
                true
            }
            Msg::RequestFailed(message) => {
                error!("failed to load alerts: {message}");
                self.error = Some(message);
                true
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().epoch != old_props.epoch {
            self.alerts = None;
            self.error = None;
            self.request_alerts(ctx);
        }
        true
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            self.request_alerts(ctx);
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        if let Some(message) = &self.error {
            return html! {
                <div class="error-box">
                    <strong>{"Failed to reach the backend."}</strong>
                    <p>{message}</p>
                </div>
            };
        }

        match self.alerts.as_ref() {
            None => html! { <p>{"Loading alerts..."}</p> },
            Some(alerts) if alerts.is_empty() => {
                html! { <p>{"No active alerts."}</p> }
            }
            Some(alerts) => alerts.iter().map(alert_card).collect::<Html>(),
        }
    }
}

impl Alerts {
    fn request_alerts(&self, ctx: &Context<Self>) {
        let link = ctx.link().clone();
        wasm_bindgen_futures::spawn_local(async move {
            match request::alerts().await {
                Ok(alerts) => link.send_message(Msg::AlertsReceived(alerts)),
                Err(e) => link.send_message(Msg::RequestFailed(e.to_string())),
            }
        });
    }
}

fn alert_card(alert: &Alert) -> Html {
    html! {
        <div class="card alert-card">
            <h3>{format!(
                "{} (Estufa {})",
                sensor::label_for(&alert.tipo),
                alert.estufa_id
            )}</h3>
            <ul class="reading-list">
                <li><strong>{format!(
                    "Measured: {} {}",
                    alert.valor_lido,
                    sensor::unit_for(&alert.tipo)
                )}</strong></li>
                <li>{format!("Ideal range: {}", alert.faixa_ideal)}</li>
                <li>{format!("Sensor: {}", alert.sensor_id)}</li>
                <li>{format!("Time: {}", utils::format_timestamp(&alert.data_hora))}</li>
            </ul>
        </div>
    }
}
