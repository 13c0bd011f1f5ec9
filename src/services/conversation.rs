use crate::errors::AppError;
use crate::services::ai::fallback;
use crate::services::language::detect_language;
use crate::services::normalize::normalize;
use crate::services::templates::canned_reply;
use crate::state::AppState;

/// Produce the reply text for one inbound message.
///
/// Matched intents get their canned reply in the detected language and are
/// not logged. Everything else goes to the completion fallback, which logs
/// the interaction to the unmatched log.
pub async fn process_message(
    state: &AppState,
    from_phone: &str,
    message: &str,
) -> Result<String, AppError> {
    let language = detect_language(message);
    let normalized = normalize(message);

    match state.keywords.match_intent(&normalized) {
        Some(intent) => {
            tracing::info!(
                phone = from_phone,
                intent = intent.as_str(),
                language = language.as_str(),
                "matched intent"
            );
            Ok(canned_reply(intent, language).to_string())
        }
        None => {
            tracing::info!(
                phone = from_phone,
                language = language.as_str(),
                "no intent matched, using completion fallback"
            );
            fallback::generate_reply(
                state.llm.as_ref(),
                &state.unmatched_log,
                from_phone,
                message,
                language,
            )
            .await
        }
    }
}
