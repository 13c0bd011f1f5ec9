pub mod ai;
pub mod conversation;
pub mod intent;
pub mod language;
pub mod normalize;
pub mod templates;
pub mod unmatched_log;
