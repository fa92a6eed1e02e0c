use log::error;
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use crate::components::{feedback_html, Feedback};
use crate::request;

/// Canned document covering every sensor type the backend knows.
const SAMPLE_FULL: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<estufa id="EST01">
  <sensores>
    <sensor id="S01" tipo="temperatura">
      <unidade>°C</unidade>
    </sensor>
    <sensor id="S02" tipo="umidadear">
      <unidade>%</unidade>
    </sensor>
    <sensor id="S03" tipo="umidadesolo">
      <unidade>%</unidade>
    </sensor>
    <sensor id="S04" tipo="ph">
      <unidade>pH</unidade>
    </sensor>
    <sensor id="S05" tipo="ce">
      <unidade>mS/cm</unidade>
    </sensor>
    <sensor id="S06" tipo="luminosidade">
      <unidade>lux</unidade>
    </sensor>
    <sensor id="S07" tipo="co2">
      <unidade>ppm</unidade>
    </sensor>
  </sensores>
  <leituras>
    <leitura id="L01">
      <dataHora>2025-10-20T14:30:00</dataHora>
      <sensorRef ref="S01"/>
      <valor>22.5</valor>
    </leitura>
    <leitura id="L02">
      <dataHora>2025-10-20T14:30:00</dataHora>
      <sensorRef ref="S02"/>
      <valor>70.0</valor>
    </leitura>
    <leitura id="L03">
      <dataHora>2025-10-20T14:30:00</dataHora>
      <sensorRef ref="S03"/>
      <valor>65.0</valor>
    </leitura>
    <leitura id="L04">
      <dataHora>2025-10-20T14:30:00</dataHora>
      <sensorRef ref="S04"/>
      <valor>6.0</valor>
    </leitura>
    <leitura id="L05">
      <dataHora>2025-10-20T14:30:00</dataHora>
      <sensorRef ref="S05"/>
      <valor>1.5</valor>
    </leitura>
    <leitura id="L06">
      <dataHora>2025-10-20T14:30:00</dataHora>
      <sensorRef ref="S06"/>
      <valor>30000</valor>
    </leitura>
    <leitura id="L07">
      <dataHora>2025-10-20T14:30:00</dataHora>
      <sensorRef ref="S07"/>
      <valor>800</valor>
    </leitura>
  </leituras>
</estufa>
"#;

/// Minimal single-reading document.
const SAMPLE_SIMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<estufa id="EST01">
  <sensores>
    <sensor id="S01" tipo="temperatura">
      <unidade>°C</unidade>
    </sensor>
  </sensores>
  <leituras>
    <leitura id="L01">
      <dataHora>2025-10-20T14:30:00</dataHora>
      <sensorRef ref="S01"/>
      <valor>22.5</valor>
    </leitura>
  </leituras>
</estufa>
"#;

pub enum Msg {
    LoadFullSample,
    LoadSimpleSample,
    SubmitRequested,
    Submitted(String),
    SubmitFailed(String),
}

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Fired after the backend accepted a document, so dependent views can
    /// re-fetch.
    pub on_ingested: Callback<()>,
}

pub struct Editor {
    textarea: NodeRef,
    feedback: Option<Feedback>,
    busy: bool,
}

impl Component for Editor {
    type Message = Msg;
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            textarea: NodeRef::default(),
            feedback: None,
            busy: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::LoadFullSample => {
                self.set_text(SAMPLE_FULL);
                self.feedback = Some(Feedback::info("Full sample document loaded."));
                true
            }
            Msg::LoadSimpleSample => {
                self.set_text(SAMPLE_SIMPLE);
                self.feedback = Some(Feedback::info("Simple sample document loaded."));
                true
            }
            Msg::SubmitRequested => {
                // sent verbatim, the backend does all validation
                let xml = self.text();
                self.busy = true;
                self.feedback = Some(Feedback::info("Sending document to the API..."));
                let link = ctx.link().clone();
                wasm_bindgen_futures::spawn_local(async move {
                    match request::submit_document(xml).await {
                        Ok(message) => link.send_message(Msg::Submitted(message)),
                        Err(e) => link.send_message(Msg::SubmitFailed(e.to_string())),
                    }
                });
                true
            }
            Msg::Submitted(message) => {
                self.busy = false;
                self.feedback = Some(Feedback::success(format!("Accepted: {message}")));
                ctx.props().on_ingested.emit(());
                true
            }
            Msg::SubmitFailed(message) => {
                error!("document rejected: {message}");
                self.busy = false;
                self.feedback = Some(Feedback::error(message));
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        html! {
            <>
                <textarea
                    ref={self.textarea.clone()}
                    class="xml-editor"
                    rows="20"
                    spellcheck="false"
                    placeholder="Paste or load a reading document here"
                />
                <div class="toolbar">
                    <button onclick={link.callback(|_| Msg::LoadFullSample)}>
                        {"Load full sample"}
                    </button>
                    <button onclick={link.callback(|_| Msg::LoadSimpleSample)}>
                        {"Load simple sample"}
                    </button>
                    <button disabled={self.busy}
                        onclick={link.callback(|_| Msg::SubmitRequested)}>
                        {"Send to API"}
                    </button>
                </div>
                {feedback_html(self.feedback.as_ref())}
            </>
        }
    }
}

impl Editor {
    fn text(&self) -> String {
        self.textarea
            .cast::<HtmlTextAreaElement>()
            .map(|area| area.value())
            .unwrap_or_default()
    }

    fn set_text(&self, text: &str) {
        if let Some(area) = self.textarea.cast::<HtmlTextAreaElement>() {
            area.set_value(text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_carry_the_expected_reading_counts() {
        assert_eq!(SAMPLE_FULL.matches("<leitura id=").count(), 7);
        assert_eq!(SAMPLE_SIMPLE.matches("<leitura id=").count(), 1);
    }

    #[test]
    fn samples_declare_the_estufa_document_root() {
        for sample in [SAMPLE_FULL, SAMPLE_SIMPLE] {
            assert!(sample.starts_with("<?xml"));
            assert!(sample.contains("<estufa id=\"EST01\">"));
            assert!(sample.contains("<sensores>"));
            assert!(sample.trim_end().ends_with("</estufa>"));
        }
    }

    #[test]
    fn full_sample_references_every_declared_sensor() {
        for sensor_id in ["S01", "S02", "S03", "S04", "S05", "S06", "S07"] {
            assert!(SAMPLE_FULL.contains(&format!("<sensorRef ref=\"{sensor_id}\"/>")));
        }
    }
}
