use super::*;

// =============================================================
// format_date
// =============================================================

#[test]
fn formats_full_timestamp() {
    assert_eq!(format_date("2023-10-24T05:30:00Z"), "Oct 24, 2023");
}

#[test]
fn formats_bare_date() {
    assert_eq!(format_date("2026-01-05"), "Jan 5, 2026");
}

#[test]
fn falls_back_to_raw_input_on_garbage() {
    assert_eq!(format_date("yesterday"), "yesterday");
    assert_eq!(format_date(""), "");
    assert_eq!(format_date("2023-13-01"), "2023-13-01");
}

// =============================================================
// format_time
// =============================================================

#[test]
fn extracts_time_from_timestamp() {
    assert_eq!(
        format_time("2023-10-24T05:30:00Z"),
        Some("05:30".to_owned())
    );
}

#[test]
fn bare_date_has_no_time() {
    assert_eq!(format_time("2023-10-24"), None);
}

#[test]
fn nonsense_time_is_rejected() {
    assert_eq!(format_time("2023-10-24T99:99:00Z"), None);
}
