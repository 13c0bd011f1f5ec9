use crate::services::ai::LlmProvider;
use crate::services::intent::KeywordTable;
use crate::services::unmatched_log::LogStore;

pub struct AppState {
    pub llm: Box<dyn LlmProvider>,
    pub keywords: KeywordTable,
    pub unmatched_log: LogStore,
}
