// ============================================================================
// FORMAT - Helpers de presentación (puros, sin DOM)
// ============================================================================

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use crate::models::Screening;

/// Distancia en metros → "4.5 km" (un decimal)
pub fn format_distance(distance_m: f64) -> String {
    format!("{:.1} km", distance_m / 1000.0)
}

/// "2024-05-01" → "May 1". Si no parsea, se devuelve tal cual
pub fn format_date_tab(date: &str) -> String {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|d| d.format("%b %-d").to_string())
        .unwrap_or_else(|_| date.to_string())
}

/// Hora "HH:MM" de un timestamp del backend
pub fn format_time(timestamp: &str) -> String {
    let ts = timestamp.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(ts) {
        return dt.format("%H:%M").to_string();
    }
    if let Ok(dt) = DateTime::parse_from_str(ts, "%Y-%m-%d %H:%M:%S%#z") {
        return dt.format("%H:%M").to_string();
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(ts, pattern) {
            return dt.format("%H:%M").to_string();
        }
    }
    for pattern in ["%H:%M:%S", "%H:%M"] {
        if let Ok(t) = NaiveTime::parse_from_str(ts, pattern) {
            return t.format("%H:%M").to_string();
        }
    }
    ts.to_string()
}

/// "19:30 – 21:40"
pub fn format_time_range(screening: &Screening) -> String {
    format!("{} – {}", format_time(&screening.start_dt), format_time(&screening.end_dt))
}

/// "12 / 80"
pub fn format_seats(screening: &Screening) -> String {
    format!("{} / {}", screening.remain_seat_cnt, screening.total_seat_cnt)
}

/// Deduplicar y ordenar fechas `YYYY-MM-DD` (orden lexicográfico = cronológico)
pub fn dedupe_dates<I>(dates: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut dates: Vec<String> = dates.into_iter().collect();
    dates.sort();
    dates.dedup();
    dates
}
