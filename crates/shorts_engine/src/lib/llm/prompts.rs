//! Facet prompts. The system instructions beg the model to skip the
//! conversational wrapping; `normalize` cleans up whatever leaks through
//! anyway.

pub const STRUCTURED_SYSTEM: &str = include_str!("./prompts/structured_system.txt");
pub const ESSENCE_SYSTEM: &str = include_str!("./prompts/essence_system.txt");
pub const QUOTE_SYSTEM: &str = include_str!("./prompts/quote_system.txt");
pub const IMAGE_PROMPT_SYSTEM: &str = include_str!("./prompts/image_prompt_system.txt");

/// Characters of transcript embedded in each facet prompt.
pub const PROMPT_CHAR_LIMIT: usize = 20_000;

/// Fixed style framing prepended to the generated image description.
pub const IMAGE_STYLE_PREFIX: &str =
    "Vertical 9:16 aspect ratio. Spiritual, ethereal, cinematic, 8k resolution.";

pub fn structured_user(excerpt: &str) -> String {
    format!("Summarize this text into 3 bullet points:\n\n{excerpt}")
}

pub fn essence_user(excerpt: &str) -> String {
    format!("Rewrite the soul of this message into a poetic spiritual essence:\n\n{excerpt}")
}

pub fn quote_user(excerpt: &str) -> String {
    format!("Extract the single best short quote from this text:\n\n{excerpt}")
}

pub fn image_prompt_user(excerpt: &str) -> String {
    format!(
        "Describe an abstract, cinematic, spiritual background image (9:16) based on this text:\n\n{excerpt}"
    )
}

pub fn image_generation_prompt(image_prompt: &str) -> String {
    format!("{IMAGE_STYLE_PREFIX} {image_prompt}")
}
