use crate::errors::AppError;
use crate::models::Language;
use crate::services::unmatched_log::LogStore;

use super::{LlmProvider, Message};

const SYSTEM_PROMPT_AR: &str =
    "أنت مساعد ذكي في عيادة طبية سعودية. رد على الرسائل باحترافية وباللغة العربية.";
const SYSTEM_PROMPT_EN: &str =
    "You are a helpful assistant for a Saudi medical clinic. Reply clearly and professionally.";

const APOLOGY_AR: &str = "شكرًا لرسالتك. سنقوم بالرد عليك قريبًا.";
const APOLOGY_EN: &str =
    "Thank you for your message. A representative will get back to you shortly.";

pub fn system_prompt(language: Language) -> &'static str {
    match language {
        Language::Arabic => SYSTEM_PROMPT_AR,
        Language::English => SYSTEM_PROMPT_EN,
    }
}

pub fn apology(language: Language) -> &'static str {
    match language {
        Language::Arabic => APOLOGY_AR,
        Language::English => APOLOGY_EN,
    }
}

/// Ask the completion service for a reply, falling back to a fixed apology on
/// any provider failure. The interaction is logged either way; only a log
/// store failure is returned as an error.
pub async fn generate_reply(
    llm: &dyn LlmProvider,
    unmatched_log: &LogStore,
    from: &str,
    message: &str,
    language: Language,
) -> Result<String, AppError> {
    let reply = match llm
        .chat(system_prompt(language), &[Message::user(message)])
        .await
    {
        Ok(reply) => reply,
        Err(e) => {
            tracing::warn!(error = %e, from = %from, "completion failed, sending apology");
            apology(language).to_string()
        }
    };

    unmatched_log
        .log_unmatched(from, message, language, &reply)
        .await?;

    Ok(reply)
}
