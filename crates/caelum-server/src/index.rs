use axum::response::IntoResponse;

/// Fixed greeting for the single-user deployment
const GREETING: &str = "Welcome to Caelum, your personal AI assistant.";

pub async fn index_handler() -> impl IntoResponse {
    GREETING
}
