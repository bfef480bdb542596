//! User-facing texts. Everything sent with HTML parse mode escapes user content here, exactly once.

use decoration::{DecoratedText, InputError};
use teloxide::utils::html;

pub const MENU_PROMPT: &str = "اختر نمط الزخرفة الذي تفضله:";
pub const SESSION_EXPIRED: &str = "⌛ انتهت صلاحية الجلسة، يرجى إرسال النص من جديد.";
pub const NOT_ALLOWED: &str = "⛔ هذا الأمر متاح للمشرفين فقط.";
pub const BROADCAST_USAGE: &str = "الاستخدام: /broadcast <النص>";
const FALLBACK_NAME: &str = "صديقي";

/// Greeting for /start, addressed to `first_name` when known.
pub fn welcome_html(first_name: Option<&str>) -> String {
    let name = first_name
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or(FALLBACK_NAME);
    format!(
        "اهلاً بك يا {} في بوت <b>حبر الأمة</b> للزخرفة الفاخرة ✨\n• أرسل الآن الاسم أو النص الذي تريد زخرفته.",
        html::escape(name)
    )
}

/// Result message: the decorated text in a tap-to-copy code span.
pub fn decorated_html(decorated: &DecoratedText) -> String {
    format!(
        "✨ <b>تمت الزخرفة بنجاح!</b>\nاضغط على النص أدناه لنسخه:\n\n{}",
        html::code_inline(decorated.as_str())
    )
}

pub fn input_rejected(err: &InputError) -> String {
    match err {
        InputError::Empty => "⚠️ أرسل نصاً لزخرفته.".to_string(),
        InputError::TooLong { len, max } => format!(
            "⚠️ النص طويل جداً ({} حرفاً). الحد الأقصى {} حرفاً، أرسل نصاً أقصر.",
            len, max
        ),
    }
}

pub fn broadcast_summary(sent: usize, failed: usize) -> String {
    format!("📢 تم الإرسال إلى {} مستخدم، وفشل {}.", sent, failed)
}

pub fn stats(user_count: i64) -> String {
    format!("👥 عدد المستخدمين: {}", user_count)
}
