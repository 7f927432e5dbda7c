pub const DEFAULT_SHRINK_ENDPOINT: &str = "https://api.tinify.com/shrink";

// The service rejects anything larger, so fail before reading the file
pub const MAX_UPLOAD_SIZE: u64 = 500 * 1024 * 1024;

// Common output message prefixes
pub const SUCCESS_PREFIX: &str = "✅";
pub const ERROR_PREFIX: &str = "❌";
pub const UPLOAD_PREFIX: &str = "📤";
pub const SAVE_PREFIX: &str = "💾";
pub const URL_PREFIX: &str = "🌐";
