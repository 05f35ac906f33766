// Env values.
pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";

pub const CHAT_COMPLETIONS_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

// Client facing messages.
pub const ERR_KEY_NOT_CONFIGURED: &str = "OpenAI API key not configured.";
pub const ERR_INVALID_JSON: &str = "Invalid JSON in request body.";
pub const ERR_CONTACT_FAILED: &str = "Failed to contact OpenAI API.";
