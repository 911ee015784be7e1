//! Site-wide constants. Everything the page shows is hardcoded here so the
//! rest of the code stays free of magic numbers.

/// Countdown start value as (days, hours, minutes, seconds). The timer is
/// decorative: it restarts from this value on every page load.
pub const COUNTDOWN_START: (u32, u32, u32, u32) = (2, 14, 33, 12);

/// Particles in one button explosion.
pub const EXPLOSION_PARTICLES: u32 = 12;

/// Milliseconds until an explosion batch is cleared.
pub const EXPLOSION_CLEAR_MS: u32 = 1_000;

/// Pieces in one full-screen confetti burst.
pub const CONFETTI_PIECES: u32 = 50;

/// Milliseconds until the confetti overlay is dismissed.
pub const CONFETTI_DISMISS_MS: u32 = 3_000;

/// Ambient floating dots behind the page.
pub const BACKGROUND_DOTS: u32 = 20;

/// Explosion particle colors (amber family).
pub const EXPLOSION_COLORS: &[&str] = &["#fbbf24", "#f59e0b", "#d97706", "#fef08a"];

/// Confetti colors.
pub const CONFETTI_COLORS: &[&str] = &["#fbbf24", "#f59e0b", "#ef4444", "#22c55e", "#3b82f6"];

/// Used when the browser refuses to report a viewport size.
pub const FALLBACK_VIEWPORT: (f64, f64) = (1280.0, 800.0);

pub const TOKEN_NAME: &str = "PONKI";
pub const TOKEN_TICKER: &str = "$PONKI";

pub const TELEGRAM_URL: &str = "https://t.me/ponkicoin";
pub const TWITTER_URL: &str = "https://x.com/ponkicoin";
pub const GITHUB_URL: &str = "https://github.com/ponkicoin";
pub const DISCORD_URL: &str = "https://discord.gg/ponkicoin";
pub const WEBSITE_URL: &str = "https://ponki.fun";
