use anyhow::{bail, Context, Result};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Response;

use crate::req::{Ack, Alert, ErrorBody, GreenhouseReadings, RuleSet};

/// Base URL of the greenhouse backend.
pub const API_URL: &str = "http://127.0.0.1:5000";

fn api_url(endpoint: &str) -> String {
    format!("{API_URL}/{endpoint}")
}

fn check_status(resp: Response) -> Result<Response> {
    if !resp.status().is_success() {
        bail!("API returned {}", resp.status());
    }
    Ok(resp)
}

pub async fn readings() -> Result<Vec<GreenhouseReadings>> {
    let client = reqwest::Client::new();

    let resp = client
        .get(api_url("api/leituras"))
        .header(ACCEPT, "application/json")
        .send()
        .await?;

    Ok(check_status(resp)?
        .json::<Vec<GreenhouseReadings>>()
        .await
        .context("unexpected readings payload")?)
}

pub async fn alerts() -> Result<Vec<Alert>> {
    let client = reqwest::Client::new();

    let resp = client
        .get(api_url("api/alertas"))
        .header(ACCEPT, "application/json")
        .send()
        .await?;

    Ok(check_status(resp)?
        .json::<Vec<Alert>>()
        .await
        .context("unexpected alerts payload")?)
}

pub async fn rules() -> Result<RuleSet> {
    let client = reqwest::Client::new();

    let resp = client
        .get(api_url("api/configuracoes"))
        .header(ACCEPT, "application/json")
        .send()
        .await?;

    Ok(check_status(resp)?
        .json::<RuleSet>()
        .await
        .context("unexpected rules payload")?)
}

/// Replaces the whole rule set on the backend.
pub async fn save_rules(rules: &RuleSet) -> Result<()> {
    let client = reqwest::Client::new();

    let resp = client
        .put(api_url("api/configuracoes"))
        .header(ACCEPT, "application/json")
        .json(rules)
        .send()
        .await?;

    check_status(resp)?;
    Ok(())
}

pub async fn reset_rules() -> Result<()> {
    let client = reqwest::Client::new();

    let resp = client
        .post(api_url("api/configuracoes/reset"))
        .header(ACCEPT, "application/json")
        .send()
        .await?;

    check_status(resp)?;
    Ok(())
}

/// Posts a raw reading document for ingestion. The body is sent verbatim;
/// well-formedness is the backend's problem. Returns the backend's success
/// message, or an error carrying the backend's description of the refusal.
pub async fn submit_document(xml: String) -> Result<String> {
    let client = reqwest::Client::new();

    let resp = client
        .post(api_url("api/leituras"))
        .header(CONTENT_TYPE, "application/xml")
        .header(ACCEPT, "application/json")
        .body(xml)
        .send()
        .await?;

    let status = resp.status();
    if status.is_success() {
        let ack = resp
            .json::<Ack>()
            .await
            .context("unexpected ingestion response payload")?;
        Ok(ack.message)
    } else {
        match resp.json::<ErrorBody>().await {
            Ok(body) => bail!("API returned {status}: {}", body.error.description),
            Err(_) => bail!("API returned {status}"),
        }
    }
}

/// Deletes every stored reading. Returns the backend's summary message.
pub async fn clear_readings() -> Result<String> {
    let client = reqwest::Client::new();

    let resp = client
        .delete(api_url("api/leituras"))
        .header(ACCEPT, "application/json")
        .send()
        .await?;

    let ack = check_status(resp)?
        .json::<Ack>()
        .await
        .context("unexpected delete response payload")?;
    Ok(ack.message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_joins_base_and_endpoint() {
        assert_eq!(api_url("api/leituras"), "http://127.0.0.1:5000/api/leituras");
        assert_eq!(
            api_url("api/configuracoes/reset"),
            format!("{API_URL}/api/configuracoes/reset")
        );
    }
}
