use super::ApplicationEnv;
use crate::auth::JwtAuthorizationValidator;
use axum::http::{
    header::{AUTHORIZATION, CONTENT_TYPE},
    HeaderName,
};
use tower_http::{
    classify::{ServerErrorsAsFailures, SharedClassifier},
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
    validate_request::ValidateRequestHeaderLayer,
};

pub struct ApplicationMiddleware {
    pub user_auth: ValidateRequestHeaderLayer<JwtAuthorizationValidator>,
    pub body_limit: RequestBodyLimitLayer,
    pub cors: CorsLayer,
    pub trace: TraceLayer<SharedClassifier<ServerErrorsAsFailures>>,
}

pub fn create_middleware(env: &ApplicationEnv) -> ApplicationMiddleware {
    let user_auth = ValidateRequestHeaderLayer::custom(JwtAuthorizationValidator::new(
        env.jwt_key.clone(),
        env.jwt_algorithms.clone(),
    ));

    let body_limit = RequestBodyLimitLayer::new(env.max_http_content_len);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers([
            AUTHORIZATION,
            CONTENT_TYPE,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
            HeaderName::from_static("x-admin-secret"),
        ]);

    let trace = TraceLayer::new_for_http();

    ApplicationMiddleware {
        user_auth,
        body_limit,
        cors,
        trace,
    }
}
