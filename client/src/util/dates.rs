//! Display formatting for the backend's ISO 8601 timestamps.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Format an ISO 8601 timestamp or date as `"Oct 24, 2023"`.
///
/// Falls back to the raw input when the value does not start with a
/// `YYYY-MM-DD` prefix, so unexpected backend values stay visible instead of
/// vanishing.
pub fn format_date(iso: &str) -> String {
    let Some((year, month, day)) = split_date(iso) else {
        return iso.to_owned();
    };
    format!("{} {day}, {year}", MONTHS[usize::from(month) - 1])
}

/// Extract the `HH:MM` portion of an ISO 8601 timestamp, if present.
pub fn format_time(iso: &str) -> Option<String> {
    let rest = iso.get(11..16)?;
    let mut parts = rest.split(':');
    let hours: u8 = parts.next()?.parse().ok()?;
    let minutes: u8 = parts.next()?.parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    Some(format!("{hours:02}:{minutes:02}"))
}

fn split_date(iso: &str) -> Option<(u16, u8, u8)> {
    let date = iso.get(..10)?;
    let mut parts = date.split('-');
    let year: u16 = parts.next()?.parse().ok()?;
    let month: u8 = parts.next()?.parse().ok()?;
    let day: u8 = parts.next()?.parse().ok()?;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }
    Some((year, month, day))
}
