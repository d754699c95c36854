use super::{AccessTokenProvider, PushAuthorization, PushClient, PushError, PushMessage};
use axum::async_trait;
use reqwest::header::AUTHORIZATION;
use serde::Deserialize;
use serde_json::{json, Value};
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

const ANDROID_TTL: &str = "3600s";
const APNS_EXPIRATION_SECONDS: i64 = 3600;
const CLICK_ACTION: &str = "FLUTTER_NOTIFICATION_CLICK";

pub struct FcmV1ClientConfig {
    pub endpoint: String,
    pub project_id: String,
}

///
/// Client of the modern, token authorized push endpoint.
///
pub struct FcmV1Client {
    config: FcmV1ClientConfig,
    token_provider: AccessTokenProvider,
    http_client: reqwest::Client,
}

#[derive(Deserialize)]
struct SendResponse {
    name: String,
}

impl FcmV1Client {
    pub fn new(
        config: FcmV1ClientConfig,
        token_provider: AccessTokenProvider,
        http_client: reqwest::Client,
    ) -> Self {
        Self {
            config,
            token_provider,
            http_client,
        }
    }

    fn build_send_body(
        &self,
        message: &PushMessage,
        now: OffsetDateTime,
    ) -> Result<Value, PushError> {
        let mut data = serde_json::Map::new();
        for (key, value) in message.data.clone() {
            data.insert(key, value.into());
        }
        data.insert("timestamp".to_string(), now.format(&Rfc3339)?.into());
        data.insert("click_action".to_string(), CLICK_ACTION.into());

        let body = json!({
            "message": {
                "token": message.token.as_str(),
                "notification": {
                    "title": message.title.as_str(),
                    "body": message.body.as_str(),
                },
                "android": {
                    "ttl": ANDROID_TTL,
                    "priority": "HIGH",
                    "notification": {
                        "title": message.title.as_str(),
                        "body": message.body.as_str(),
                        "sound": "default",
                        "channel_id": "default",
                        "notification_priority": "PRIORITY_MAX",
                    }
                },
                "apns": {
                    "headers": {
                        "apns-expiration":
                            (now.unix_timestamp() + APNS_EXPIRATION_SECONDS).to_string(),
                    },
                    "payload": {
                        "aps": {
                            "alert": {
                                "title": message.title.as_str(),
                                "body": message.body.as_str(),
                            },
                            "sound": "default",
                            "badge": 1,
                            "content-available": 1,
                        }
                    }
                },
                "data": data,
            }
        });

        Ok(body)
    }
}

#[async_trait]
impl PushClient for FcmV1Client {
    async fn authorize(&self) -> Result<PushAuthorization, PushError> {
        let access_token = self.token_provider.obtain_access_token().await?;

        Ok(PushAuthorization {
            header_value: format!("Bearer {access_token}"),
        })
    }

    async fn send(
        &self,
        authorization: &PushAuthorization,
        message: &PushMessage,
    ) -> Result<String, PushError> {
        let body = self.build_send_body(message, OffsetDateTime::now_utc())?;

        let response = self
            .http_client
            .post(format!(
                "{}/v1/projects/{}/messages:send",
                self.config.endpoint, self.config.project_id
            ))
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

        Ok(send_response.name)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::push::ServiceAccountCredential;
    use bson::doc;
    use reqwest::StatusCode;
    use serde_json::json;
    use wiremock::{
        matchers::{header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn client() -> FcmV1Client {
        client_with_endpoint("https://push.example.com".to_string())
    }

    fn client_with_endpoint(endpoint: String) -> FcmV1Client {
        let credential = ServiceAccountCredential {
            private_key_pem: "unused".to_string(),
            client_email: "service-account@example.iam.gserviceaccount.com".to_string(),
            token_endpoint_url: "https://oauth2.example.com/token".to_string(),
            scope: "https://push.example.com/scope".to_string(),
        };
        let http_client = reqwest::Client::new();
        FcmV1Client::new(
            FcmV1ClientConfig {
                endpoint,
                project_id: "my-project".to_string(),
            },
            AccessTokenProvider::new(credential, http_client.clone()),
            http_client,
        )
    }

    fn message() -> PushMessage {
        PushMessage {
            token: "device token".to_string(),
            title: "title".to_string(),
            body: "body".to_string(),
            notification_type: "report_ready".to_string(),
            priority: "high".to_string(),
            data: doc! { "report_id": "152" },
        }
    }

    #[test]
    fn build_send_body_wraps_message() {
        let now = OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap();

        let body = client().build_send_body(&message(), now).unwrap();

        assert_eq!(body["message"]["token"], "device token");
        assert_eq!(body["message"]["notification"]["title"], "title");
        assert_eq!(body["message"]["notification"]["body"], "body");
        assert_eq!(body["message"]["android"]["ttl"], ANDROID_TTL);
        assert_eq!(
            body["message"]["apns"]["headers"]["apns-expiration"],
            (1_700_000_000 + APNS_EXPIRATION_SECONDS).to_string()
        );
    }

    #[test]
    fn build_send_body_extends_data() {
        let now = OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap();

        let body = client().build_send_body(&message(), now).unwrap();

        assert_eq!(body["message"]["data"]["report_id"], "152");
        assert_eq!(body["message"]["data"]["click_action"], CLICK_ACTION);
        assert_eq!(body["message"]["data"]["timestamp"], "2023-11-14T22:13:20Z");
    }

    #[tokio::test]
    async fn send_returns_provider_message_name() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/projects/my-project/messages:send"))
            .and(header("authorization", "Bearer access-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "projects/my-project/messages/0:152",
            })))
            .expect(1)
            .mount(&server)
            .await;
        let client = client_with_endpoint(server.uri());
        let authorization = PushAuthorization {
            header_value: "Bearer access-token".to_string(),
        };

        let message_id = client.send(&authorization, &message()).await.unwrap();

        assert_eq!(message_id, "projects/my-project/messages/0:152");
    }

    #[tokio::test]
    async fn send_rejected_by_provider() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/projects/my-project/messages:send"))
            .respond_with(ResponseTemplate::new(404).set_body_string("UNREGISTERED"))
            .mount(&server)
            .await;
        let client = client_with_endpoint(server.uri());
        let authorization = PushAuthorization {
            header_value: "Bearer access-token".to_string(),
        };

        let result = client.send(&authorization, &message()).await;

        assert!(matches!(
            result,
            Err(PushError::SendRejected { status, body })
                if status == StatusCode::NOT_FOUND && body == "UNREGISTERED"
        ));
    }
}
