pub const NONE: &str = "✅";
pub const MINOR: &str = "🟡";
pub const MAJOR: &str = "🟠";
pub const CRITICAL: &str = "🔴";
pub const UNKNOWN: &str = "❔";

/// Map a component status or incident impact to its glyph.
/// Matching is case-insensitive; anything unrecognised maps to [`UNKNOWN`].
pub fn to_icon(status: &str) -> &'static str {
    match status.to_lowercase().as_str() {
        "none" | "operational" => NONE,
        "minor" | "degraded_performance" => MINOR,
        "major" | "partial_outage" => MAJOR,
        "critical" | "major_outage" => CRITICAL,
        _ => UNKNOWN,
    }
}
