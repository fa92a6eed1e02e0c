mod components;
mod req;
mod request;
mod sensor;
mod utils;

use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Dashboard,
    Alerts,
    Config,
    Editor,
}

impl View {
    const ALL: [View; 4] = [View::Dashboard, View::Alerts, View::Config, View::Editor];

    fn title(self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Alerts => "Alerts",
            View::Config => "Validation rules",
            View::Editor => "XML editor",
        }
    }
}

pub enum Msg {
    Show(View),
    Ingested,
}

/// App root. Owns which view is active and the refresh epochs that tell the
/// dashboard and alerts views to re-fetch after a successful ingest. All
/// views stay mounted so their state survives switching; only visibility
/// toggles.
struct App {
    active: View,
    dashboard_epoch: u32,
    alerts_epoch: u32,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            active: View::Dashboard,
            dashboard_epoch: 0,
            alerts_epoch: 0,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Show(view) => {
                self.active = view;
                true
            }
            Msg::Ingested => {
                self.dashboard_epoch += 1;
                self.alerts_epoch += 1;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let active = self.active;
        let nav_class = move |view| {
            if active == view {
                "nav-button active"
            } else {
                "nav-button"
            }
        };
        let section_class = move |view| {
            if active == view {
                "view-content active"
            } else {
                "view-content"
            }
        };

        let nav: Html = View::ALL
            .into_iter()
            .map(|view| {
                html! {
                    <button class={nav_class(view)}
                        onclick={ctx.link().callback(move |_| Msg::Show(view))}>
                        {view.title()}
                    </button>
                }
            })
            .collect();

        html! {
            <div class="app">
                <header>
                    <h1>{"🌱 Greenhouse Monitor"}</h1>
                    <nav>{nav}</nav>
                </header>
                <main>
                    <section class={section_class(View::Dashboard)}>
                        <h2>{View::Dashboard.title()}</h2>
                        <components::dashboard::Dashboard epoch={self.dashboard_epoch} />
                    </section>
                    <section class={section_class(View::Alerts)}>
                        <h2>{View::Alerts.title()}</h2>
                        <components::alerts::Alerts epoch={self.alerts_epoch} />
                    </section>
                    <section class={section_class(View::Config)}>
                        <h2>{View::Config.title()}</h2>
                        <components::config::Config />
                    </section>
                    <section class={section_class(View::Editor)}>
                        <h2>{View::Editor.title()}</h2>
                        <components::editor::Editor
                            on_ingested={ctx.link().callback(|_| Msg::Ingested)} />
                    </section>
                </main>
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
