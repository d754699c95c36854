use crate::auth::util::{parse_jwt_algorithms, parse_jwt_key};
use anyhow::anyhow;
use jsonwebtoken::{Algorithm, DecodingKey};
use std::{net::SocketAddr, time::Duration};

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,

    pub bind_address: SocketAddr,

    pub db_connection_string: String,
    pub db_name: String,

    pub max_http_content_len: usize,

    /// Algorithms must belong to the same family
    pub jwt_algorithms: Vec<Algorithm>,
    pub jwt_key: DecodingKey,

    pub admin_auth: AdminAuthEnv,

    pub push_endpoint: String,
    pub push_send_timeout: Duration,
    pub push_api: PushApiEnv,
}

pub enum AdminAuthEnv {
    Bearer,
    Secret { secret: String },
}

pub enum PushApiEnv {
    V1 {
        project_id: String,
        client_email: String,
        private_key: String,
        token_endpoint: String,
    },
    Legacy {
        server_key: String,
    },
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("REPORT_NOTIFIER_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("REPORT_NOTIFIER_LOG_FILENAME")?;
        let bind_address = Self::env_var("REPORT_NOTIFIER_BIND_ADDRESS")?.parse()?;
        let db_connection_string = Self::env_var("REPORT_NOTIFIER_DB_CONNECTION_STRING")?;
        let db_name = Self::env_var("REPORT_NOTIFIER_DB_NAME")?;
        let max_http_content_len =
            Self::env_var("REPORT_NOTIFIER_MAX_HTTP_CONTENT_LEN")?.parse()?;
        let jwt_algorithms =
            parse_jwt_algorithms(Self::env_var("REPORT_NOTIFIER_JWT_ALGORITHMS")?)?;
        let jwt_algorithm = jwt_algorithms.first().ok_or(anyhow!(
            "REPORT_NOTIFIER_JWT_ALGORITHMS need to contain at least one algorithm"
        ))?;
        let jwt_key = parse_jwt_key(jwt_algorithm, Self::env_var("REPORT_NOTIFIER_JWT_KEY")?)?;

        let admin_auth = match Self::env_var("REPORT_NOTIFIER_ADMIN_AUTH")?.as_str() {
            "bearer" => AdminAuthEnv::Bearer,
            "secret" => AdminAuthEnv::Secret {
                secret: Self::env_var("REPORT_NOTIFIER_ADMIN_SECRET")?,
            },
            other => {
                return Err(anyhow!(
                    "REPORT_NOTIFIER_ADMIN_AUTH need to be either 'bearer' or 'secret', got '{other}'"
                ))
            }
        };

        let push_endpoint = Self::env_var("REPORT_NOTIFIER_PUSH_ENDPOINT")?;
        let push_send_timeout =
            Self::env_var("REPORT_NOTIFIER_PUSH_SEND_TIMEOUT_SECONDS")?.parse()?;
        let push_send_timeout = Duration::from_secs(push_send_timeout);
        let push_api = match Self::env_var("REPORT_NOTIFIER_PUSH_API")?.as_str() {
            "v1" => PushApiEnv::V1 {
                project_id: Self::env_var("REPORT_NOTIFIER_PUSH_PROJECT_ID")?,
                client_email: Self::env_var("REPORT_NOTIFIER_PUSH_CLIENT_EMAIL")?,
                private_key: Self::env_var("REPORT_NOTIFIER_PUSH_PRIVATE_KEY")?,
                token_endpoint: Self::env_var("REPORT_NOTIFIER_PUSH_TOKEN_ENDPOINT")?,
            },
            "legacy" => PushApiEnv::Legacy {
                server_key: Self::env_var("REPORT_NOTIFIER_PUSH_SERVER_KEY")?,
            },
            other => {
                return Err(anyhow!(
                    "REPORT_NOTIFIER_PUSH_API need to be either 'v1' or 'legacy', got '{other}'"
                ))
            }
        };

        Ok(Self {
            log_directory,
            log_filename,
            bind_address,
            db_connection_string,
            db_name,
            max_http_content_len,
            jwt_algorithms,
            jwt_key,
            admin_auth,
            push_endpoint,
            push_send_timeout,
            push_api,
        })
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }
}
