pub const LIVE_MESSAGE: &str = "🚀 SehlaBot with Learning is live and logging unmatched messages!";

pub async fn health() -> &'static str {
    LIVE_MESSAGE
}
