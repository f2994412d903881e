use axum::body::Body;
use serde::de::DeserializeOwned;

/// Body limit for JSON requests (1 MiB)
const BODY_LIMIT_BYTES: usize = 1 << 20;

static APPLICATION_JSON: http::HeaderValue = http::HeaderValue::from_static("application/json");

/// Extractor for JSON request bodies
///
/// Unlike `axum::Json` this rejects malformed payloads with a plain
/// 400 instead of 422, which is what the API's callers expect.
pub struct ExtractJson<T>(pub T);

impl<S, T: DeserializeOwned> axum::extract::FromRequest<S> for ExtractJson<T>
where
    S: Send + Sync,
{
    type Rejection = axum::response::Response;

    async fn from_request(request: http::Request<Body>, _state: &S) -> Result<Self, Self::Rejection> {
        use axum::response::IntoResponse;

        let (parts, body) = request.into_parts();

        if parts
            .headers
            .get(http::header::CONTENT_TYPE)
            .is_none_or(|value| value != APPLICATION_JSON)
        {
            return Err((
                http::StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "Unsupported Content-Type, expected: 'Content-Type: application/json'",
            )
                .into_response());
        }

        let bytes = axum::body::to_bytes(body, BODY_LIMIT_BYTES).await.map_err(|err| {
            if std::error::Error::source(&err).is_some_and(|source| source.is::<http_body_util::LengthLimitError>()) {
                (
                    http::StatusCode::PAYLOAD_TOO_LARGE,
                    format!("Request body is too large, limit is {BODY_LIMIT_BYTES} bytes"),
                )
            } else {
                (http::StatusCode::BAD_REQUEST, format!("Failed to read request body: {err}"))
            }
            .into_response()
        })?;

        let payload = serde_json::from_slice::<T>(&bytes).map_err(|e| {
            (http::StatusCode::BAD_REQUEST, format!("Failed to parse request body: {e}")).into_response()
        })?;

        Ok(Self(payload))
    }
}
