use super::{PushAuthorization, PushClient, PushError, PushMessage};
use axum::async_trait;
use reqwest::header::AUTHORIZATION;
use serde::Deserialize;
use serde_json::{json, Value};
use time::OffsetDateTime;

const CLICK_ACTION: &str = "FLUTTER_NOTIFICATION_CLICK";

pub struct FcmLegacyClientConfig {
    pub endpoint: String,
    pub server_key: String,
}

///
/// Client of the legacy, server key authorized push endpoint.
///
pub struct FcmLegacyClient {
    config: FcmLegacyClientConfig,
    http_client: reqwest::Client,
}

#[derive(Deserialize)]
struct SendResponse {
    #[serde(default)]
    success: i64,
    results: Option<Vec<SendResult>>,
    error: Option<String>,
}

#[derive(Deserialize)]
struct SendResult {
    message_id: Option<String>,
    error: Option<String>,
}

impl FcmLegacyClient {
    pub fn new(config: FcmLegacyClientConfig, http_client: reqwest::Client) -> Self {
        Self {
            config,
            http_client,
        }
    }

    fn build_send_body(&self, message: &PushMessage) -> Value {
        let mut data = serde_json::Map::new();
        for (key, value) in message.data.clone() {
            data.insert(key, value.into());
        }
        data.insert(
            "notification_type".to_string(),
            message.notification_type.as_str().into(),
        );
        data.insert("priority".to_string(), message.priority.as_str().into());
        data.insert("click_action".to_string(), CLICK_ACTION.into());

        json!({
            "to": message.token.as_str(),
            "notification": {
                "title": message.title.as_str(),
                "body": message.body.as_str(),
                "sound": "default",
                "badge": "1",
            },
            "data": data,
            "android": {
                "notification": {
                    "channel_id": "default_channel",
                    "icon": "ic_notification",
                    "color": "#2196F3",
                }
            },
            "apns": {
                "payload": {
                    "aps": {
                        "sound": "default",
                        "badge": 1,
                        "content-available": 1,
                    }
                }
            }
        })
    }
}

#[async_trait]
impl PushClient for FcmLegacyClient {
    async fn authorize(&self) -> Result<PushAuthorization, PushError> {
        Ok(PushAuthorization {
            header_value: format!("key={}", self.config.server_key),
        })
    }

    async fn send(
        &self,
        authorization: &PushAuthorization,
        message: &PushMessage,
    ) -> Result<String, PushError> {
        let body = self.build_send_body(message);

        let response = self
            .http_client
            .post(format!("{}/fcm/send", self.config.endpoint))
            .header(AUTHORIZATION, &authorization.header_value)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(PushError::SendRejected { status, body });
        }

        let send_response = response.json::<SendResponse>().await?;
        if send_response.success != 1 {
            let reason = send_response
                .results
                .as_ref()
                .and_then(|results| results.first())
                .and_then(|result| result.error.clone())
                .or(send_response.error)
                .unwrap_or_else(|| "unknown provider error".to_string());
            return Err(PushError::Provider(reason));
        }

        let message_id = send_response
            .results
            .and_then(|results| results.into_iter().next())
            .and_then(|result| result.message_id)
            .unwrap_or_else(|| {
                let now_millis = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
                format!("msg_{now_millis}")
            });

        Ok(message_id)
    }
}
