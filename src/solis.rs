use crate::prelude::*;
use crate::planner::DischargePlan;
use crate::signing;

use serde::{Deserialize, Serialize};

static INVERTER_DETAIL_PATH: &str = "/v1/api/inverterDetail";
static CONTROL_PATH: &str = "/v2/api/control";

/// Control command id for the charge/discharge schedule.
const SCHEDULE_CID: u32 = 103;

#[derive(Debug, Serialize)]
struct InverterDetailRequest<'a> {
    sn: &'a str,
}

#[derive(Debug, Deserialize)]
struct InverterDetailResponse {
    #[serde(default)]
    success: bool,
    data: Option<InverterDetail>,
    msg: Option<String>,
}

#[derive(Debug, Deserialize)]
struct InverterDetail {
    #[serde(rename = "batteryCapacitySoc")]
    battery_capacity_soc: Option<f64>,
}

#[derive(Debug, Serialize)]
struct ControlRequest<'a> {
    cid: u32,
    #[serde(rename = "inverterSn")]
    inverter_sn: &'a str,
    value: String,
    language: &'a str,
}

/// Signed-request client for the SolisCloud HTTP API.
#[derive(Clone)]
pub struct SolisClient {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    api_secret: String,
    inverter_sn: String,
}

impl SolisClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: config.api_url().to_string(),
            api_key: config.api_key().to_string(),
            api_secret: config.api_secret().to_string(),
            inverter_sn: config.inverter_sn().to_string(),
        }
    }

    /// Fetches the battery state of charge. Transport errors, API-level
    /// failures and malformed payloads are all logged and reported as absent;
    /// the caller decides what an absent SOC means for the run.
    pub async fn battery_soc(&self) -> Option<f64> {
        let response = match self.fetch_inverter_detail().await {
            Ok(response) => response,
            Err(err) => {
                error!("SOC query failed: {}", err);
                return None;
            }
        };

        if !response.success {
            error!(
                "Failed to retrieve SOC: {}",
                response.msg.as_deref().unwrap_or("no message")
            );
            return None;
        }

        match response.data.and_then(|data| data.battery_capacity_soc) {
            Some(soc) => Some(soc),
            None => {
                error!("inverter detail response is missing batteryCapacitySoc");
                None
            }
        }
    }

    async fn fetch_inverter_detail(&self) -> Result<InverterDetailResponse> {
        let body = serde_json::to_string(&InverterDetailRequest {
            sn: &self.inverter_sn,
        })?;
        let response = self.post(INVERTER_DETAIL_PATH, body).await?;

        Ok(response.json().await?)
    }

    /// Pushes the charge/discharge schedule. Returns the raw response JSON;
    /// interpreting the provider's per-command messages is up to the caller.
    pub async fn set_discharge_schedule(&self, plan: &DischargePlan) -> Result<serde_json::Value> {
        let body = serde_json::to_string(&ControlRequest {
            cid: SCHEDULE_CID,
            inverter_sn: &self.inverter_sn,
            value: plan.control_value(),
            language: "2",
        })?;
        let response = self.post(CONTROL_PATH, body).await?;

        Ok(response.json().await?)
    }

    async fn post(&self, path: &str, body: String) -> Result<reqwest::Response> {
        let signed = signing::sign("POST", path, &body, &self.api_key, &self.api_secret);
        let url = format!("{}{}", self.api_url, path);

        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .header("Content-MD5", signed.content_md5)
            .header("Content-Type", signing::CONTENT_TYPE)
            .header("Date", signed.date)
            .header("Authorization", signed.authorization)
            .body(body)
            .send()
            .await?;

        Ok(response)
    }
}

/// Pulls the human-readable message out of a control response:
/// `data[0].msg`, with `<br>` tags rewritten as newlines.
pub fn control_response_message(response: &serde_json::Value) -> String {
    let msg = match response.get("data").and_then(|data| data.as_array()) {
        Some(list) if !list.is_empty() => list[0]
            .get("msg")
            .and_then(|msg| msg.as_str())
            .unwrap_or("No message")
            .to_string(),
        _ => "No data or invalid format".to_string(),
    };

    msg.replace("<br>", "\n")
}
