use std::sync::Arc;

use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Form;
use quick_xml::escape::escape;
use serde::Deserialize;

use crate::errors::AppError;
use crate::services::conversation;
use crate::state::AppState;

/// Inbound message as posted by Twilio (SMS or WhatsApp). Other Twilio
/// fields are ignored.
#[derive(Deserialize)]
pub struct TwilioWebhookForm {
    #[serde(rename = "From", default)]
    pub from: String,
    #[serde(rename = "Body", default)]
    pub body: String,
}

pub async fn message_webhook(
    State(state): State<Arc<AppState>>,
    Form(form): Form<TwilioWebhookForm>,
) -> Result<Response, AppError> {
    tracing::info!(from = %form.from, body = %form.body, "incoming message");

    let reply = conversation::process_message(&state, &form.from, &form.body).await?;

    Ok(twiml_response(&reply))
}

fn twiml_response(reply: &str) -> Response {
    let body = format!(
        "<Response><Message>{}</Message></Response>",
        escape(reply)
    );
    ([(header::CONTENT_TYPE, "text/xml")], body).into_response()
}
