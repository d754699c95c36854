///
/// Authorization header value accepted by the push endpoint.
///
/// Acquired once per fan out run and reused for every message of that run.
///
#[derive(Debug, Clone)]
pub struct PushAuthorization {
    pub header_value: String,
}
