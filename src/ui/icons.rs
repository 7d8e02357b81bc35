//! Shared status icons.
//!
//! Each icon falls back to a plain-text marker on terminals without emoji.

use console::Emoji;

pub static CHECK: Emoji<'_, '_> = Emoji("✅ ", "[OK]");
pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "[ERR]");
pub static WARN: Emoji<'_, '_> = Emoji("⚠️  ", "[WARN]");
pub static FILE_NEW: Emoji<'_, '_> = Emoji("📄 ", "+");
