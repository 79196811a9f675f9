use super::*;

#[test]
fn parse_accepts_canonical_format() {
    let dt = parse_end_time("2025-03-10 18:00:00").unwrap();
    assert_eq!(format_end_time(dt), "2025-03-10 18:00:00");
}

#[test]
fn parse_trims_whitespace() {
    let dt = parse_end_time("  2025-03-10 18:00:00\n").unwrap();
    assert_eq!(format_end_time(dt), "2025-03-10 18:00:00");
}

#[test]
fn parse_rejects_other_formats() {
    assert!(parse_end_time("10.03.2025 18:00").is_err());
    assert!(parse_end_time("2025-03-10").is_err());
    assert!(parse_end_time("2025-13-40 18:00:00").is_err());
    assert!(parse_end_time("not a date").is_err());
}

#[test]
fn format_local_is_naive_wall_clock() {
    use chrono::TimeZone;
    let dt = chrono_tz::Europe::Berlin
        .with_ymd_and_hms(2025, 3, 10, 18, 0, 0)
        .unwrap();
    assert_eq!(format_local(dt), "2025-03-10 18:00:00");
}
