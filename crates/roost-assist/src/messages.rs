//! Canned user-facing strings.
//!
//! Replies the assistant produces itself (as opposed to classifier-supplied
//! text) live here so handlers and tests share one source.

/// Lead-in for a recommendation envelope with at least one match.
pub const RECOMMENDATION_LEAD_IN: &str = "沒問題！為您找到符合需求的房源：";

/// Search produced zero matches.
pub const NO_RESULTS: &str = "不好意思，目前沒有找到符合條件的房源，要不要換個關鍵字試試？";

/// Classification output could not be understood; the conversation
/// degrades gracefully instead of surfacing an error.
pub const CLASSIFY_FALLBACK: &str = "抱歉，我現在有點累，請再說一次好嗎？";

/// Reminder persistence failed; degraded to a conversational apology.
pub const REMINDER_FAILED: &str = "抱歉，設定提醒時發生錯誤，請稍後再試。";

/// The classifier named a destination outside the navigation table.
pub const NAVIGATE_UNKNOWN: &str = "抱歉，我找不到對應的功能頁面，請換個說法試試。";
