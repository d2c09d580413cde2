//! Fixed fallback content substituted on the degrade paths.
//!
//! Every degrade boundary swaps in one of these named literals instead of
//! surfacing the upstream failure, so the full set lives here where it can
//! be audited and asserted against in tests.

/// Substituted when the transcript fetch fails or comes back empty.
pub const PLACEHOLDER_TRANSCRIPT: &str = "This is a simulated transcript. The video explores the depths of consciousness and the interconnectedness of all things. It speaks to the journey of the soul through time and space, seeking the ultimate truth of existence.";

/// Mock summary fields substituted when the text-generation batch fails.
pub const MOCK_STRUCTURED: &str = "AI Generation Failed (Check Server Logs). Mock: The video covers three main points: 1. The importance of mindfulness. 2. How to practice daily gratitude. 3. The connection between inner peace and outer reality.";
pub const MOCK_SPIRITUAL: &str = "AI Generation Failed. Mock: At its core, this message invites you to return to the sanctuary of your own heart.";
pub const MOCK_QUOTE: &str = "The universe is not outside of you.";
pub const MOCK_IMAGE_PROMPT: &str = "A mock spiritual background.";

/// Substituted when image generation fails (or when the whole text batch
/// failed and no image prompt exists to draw from).
pub const FALLBACK_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1518531933037-91b2f5f229cc?q=80&w=1000&auto=format&fit=crop";

/// Characters of transcript kept on a stored history record.
pub const STORED_TRANSCRIPT_CHAR_LIMIT: usize = 10_000;

/// Records returned by the history listing endpoint.
pub const HISTORY_PAGE_LIMIT: i64 = 50;
