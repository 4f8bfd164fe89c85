//! Intent classification contract.
//!
//! The classification backend is a language model reached through this
//! narrow interface: a prompt goes out, JSON text comes back, and
//! [`parse_classification`] is the single place that JSON is decoded and
//! validated into the closed [`Intent`] set. Output that does not fit is
//! reported as [`ClassifyError::UnparsableOutput`] — the caller substitutes
//! the canned fallback reply, so malformed model output never reaches the
//! dispatcher or the end user.

use async_trait::async_trait;
use chrono::{DateTime, Local};
use serde::Deserialize;
use tracing::warn;

use roost_core::types::Recurrence;

use crate::error::ClassifyError;
use crate::paths::NAV_TABLE;
use crate::types::{Intent, NavigationTarget, ReminderDraft, SearchQuery};

/// Classifies a free-text message into one structured intent.
///
/// `now` is the request-time clock, threaded into the prompt so relative
/// expressions like 「明天」 resolve against the moment the user spoke,
/// not process start.
#[async_trait]
pub trait IntentClassifier: Send + Sync {
    async fn classify(
        &self,
        message: &str,
        now: DateTime<Local>,
    ) -> Result<Intent, ClassifyError>;
}

// =============================================================================
// Prompt construction
// =============================================================================

/// Amenity vocabulary shown to the model, matching the tags listings carry.
const AMENITY_VOCABULARY: &str =
    "Wi-Fi, 電視, 冰箱, 冷氣, 洗衣機, 熱水器, 床, 衣櫃, 沙發, 桌椅, 陽台, 電梯, 車位, 可養寵物, 可開伙";

/// Build the classification prompt for one message.
pub fn build_prompt(message: &str, now: DateTime<Local>) -> String {
    let mut path_table = String::new();
    for entry in NAV_TABLE {
        path_table.push_str(&format!("      - {}: {}\n", entry.label, entry.path));
    }

    format!(
        r#"你是一個專業的租屋平台 AI 助手。

使用者傳送的訊息是： "{message}"

請分析使用者的意圖，並嚴格按照以下 JSON 格式回傳，不要包含任何 markdown 標記：
現在的日期時間是：{now}。
當使用者說「明天」，請根據這個時間推算。

情況 A：如果使用者想找房（提到地點、價格、房型、租屋等關鍵字）
{{
  "type": "search",
  "params": {{
    "location": "地點關鍵字 (例如: 斗六, 雲科大, 火車站)",
    "maxPrice": 數字 (如果沒提到則為 null),
    "roomType": "房型 (例如: 套房, 雅房, 整層住家)",
    "amenities": ["需要的設備，從這些選： {amenities}"]
  }}
}}

情況 B：如果是打招呼、閒聊或與找房無關
{{
  "type": "chat",
  "reply": "你親切的回覆內容 (請用繁體中文，語氣活潑)"
}}

情況 C：使用者詢問功能在哪裡、如何操作、或想去某個頁面 (如：找房、預約、收藏、改資料)
你「必須」回傳以下格式：
{{
  "type": "navigate",
  "path": "目標路由路徑",
  "reply": "導引文字內容",
  "label": "頁面名稱"
}}
路徑對照表：
{path_table}
情況 D：建立提醒事項 (例如：繳房租、繳水電、看房預約)
{{
  "type": "create_reminder",
  "params": {{
    "title": "提醒的標題 (如: 繳納水電費)",
    "time": "提醒的時間 (如: 20240501T0900)",
    "recurrence": "頻率 (如: MONTHLY, WEEKLY, null)",
    "reply": "你確認設定好的親切回覆"
  }}
}}
"#,
        message = message,
        now = now.format("%Y-%m-%d %H:%M (%A)"),
        amenities = AMENITY_VOCABULARY,
        path_table = path_table,
    )
}

// =============================================================================
// Output decoding
// =============================================================================

/// Wire shape of the classifier's JSON output, decoded strictly at the
/// boundary. Field names follow the prompt's camelCase contract.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum RawClassification {
    Search { params: RawSearchParams },
    Navigate { path: String, reply: String, label: String },
    CreateReminder { params: RawReminderParams },
    Chat { reply: String },
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSearchParams {
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    max_price: Option<f64>,
    #[serde(default)]
    room_type: Option<String>,
    #[serde(default)]
    amenities: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawReminderParams {
    title: String,
    time: String,
    #[serde(default)]
    recurrence: Option<String>,
    reply: String,
}

/// Decode raw classifier output into an [`Intent`].
///
/// Tolerates markdown code fences around the JSON; everything else about
/// the shape is strict. Any structural mismatch fails closed as
/// `UnparsableOutput`.
pub fn parse_classification(raw: &str) -> Result<Intent, ClassifyError> {
    let stripped = strip_code_fences(raw);
    let parsed: RawClassification = serde_json::from_str(stripped)
        .map_err(|e| ClassifyError::UnparsableOutput(e.to_string()))?;

    Ok(match parsed {
        RawClassification::Search { params } => Intent::Search(SearchQuery {
            location: non_empty(params.location),
            max_price: params.max_price.map(|p| p as i64),
            room_type: non_empty(params.room_type),
            amenities: params.amenities,
        }),
        RawClassification::Navigate { path, reply, label } => {
            Intent::Navigate(NavigationTarget { path, label, reply })
        }
        RawClassification::CreateReminder { params } => Intent::CreateReminder(ReminderDraft {
            title: params.title,
            remind_time: params.time,
            recurrence: parse_recurrence(params.recurrence.as_deref()),
            reply: params.reply,
        }),
        RawClassification::Chat { reply } => Intent::Chat { reply },
    })
}

/// The closed recurrence set is WEEKLY / MONTHLY / null. Anything else the
/// model invents is coerced to none rather than failing an otherwise
/// well-formed reminder.
fn parse_recurrence(raw: Option<&str>) -> Option<Recurrence> {
    let raw = raw?;
    if raw.eq_ignore_ascii_case("null") || raw.is_empty() {
        return None;
    }
    match raw.to_ascii_uppercase().parse::<Recurrence>() {
        Ok(recurrence) => Some(recurrence),
        Err(_) => {
            warn!(value = raw, "Unknown recurrence from classifier, treating as one-off");
            None
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Strip a leading/trailing markdown code fence if present.
fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop an optional language tag on the opening fence line.
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    rest.trim()
}

// =============================================================================
// Tests
// =============================================================================
