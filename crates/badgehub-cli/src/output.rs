//! Rendering of the badge list for stdout.

use badgehub_registry::BadgeCollection;

/// Render badges as an aligned text table, one badge per line.
pub fn render_table(badges: &BadgeCollection) -> String {
    let mac_width = badges
        .iter()
        .map(|b| b.mac().as_str().len())
        .max()
        .unwrap_or(0)
        .max("MAC".len());

    let mut out = format!(
        "{:<mac_width$}  {:>8}  {:>10}  {:>12}  {:>5}  NAME\n",
        "MAC", "BADGE_ID", "PROJECT_ID", "INIT_TS", "FRACT"
    );
    for badge in badges {
        out.push_str(&format!(
            "{:<mac_width$}  {:>8}  {:>10}  {:>12}  {:>5}  {}\n",
            badge.mac().as_str(),
            badge.badge_id().value(),
            badge.project_id().value(),
            badge.init_audio_ts_int(),
            badge.init_audio_ts_fract(),
            badge.name().unwrap_or("-"),
        ));
    }
    out
}

/// Render badges as a pretty-printed JSON array in badge id order.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn render_json(badges: &BadgeCollection) -> serde_json::Result<String> {
    serde_json::to_string_pretty(badges.as_slice())
}
