//! Application constants

pub const DEFAULT_CHAT_API_URL: &str = "https://faq-bot-37go.onrender.com/chat/";

// Starfield
pub const STAR_COUNT: usize = 300;
pub const MAX_STAR_RADIUS: f64 = 1.5;
pub const STAR_OPACITY: f64 = 0.8;

// Timers
pub const COMET_INTERVAL_MS: u64 = 2500;
pub const COMET_LIFETIME_MS: u32 = 8000;
pub const SHIP_INTERVAL_MS: u64 = 12000;
pub const SHIP_COUNT: usize = 2;

// Chat copy
pub const GREETING_TEXT: &str = "Hi! I'm a chat bot. Ask a question about admission or studies.";
pub const PLACEHOLDER_TEXT: &str = "Working...";
pub const CONNECTION_ERROR_TEXT: &str = "Server connection error.";
