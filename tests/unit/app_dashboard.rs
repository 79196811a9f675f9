use super::*;

fn user(user_id: i64, end_time: Option<&str>, approved: bool, active: bool) -> UserRecord {
    UserRecord {
        user_id,
        name: None,
        end_time: end_time.map(str::to_string),
        active,
        approved,
        tminus3_sent: false,
        onday_sent: false,
        after_sent: false,
    }
}

#[test]
fn header_counts_ignore_the_filter() {
    let users = vec![
        user(1, Some("2025-03-10 18:00:00"), true, true),
        user(2, Some("2025-04-01 09:00:00"), true, false),
        user(3, None, false, false),
    ];
    let page = format_page(&users, DashboardFilter::WithoutDate, 0, LanguageCode::En);
    assert!(page.text.contains("Total: <b>3</b>"));
    assert!(page.text.contains("with date: <b>2</b>"));
    assert!(page.text.contains("without date: <b>1</b>"));
}

#[test]
fn without_date_filter_hides_dated_rows() {
    let users = vec![
        user(1, Some("2025-03-10 18:00:00"), true, true),
        user(3, None, false, false),
    ];
    let page = format_page(&users, DashboardFilter::WithoutDate, 0, LanguageCode::En);
    assert!(!page.text.contains("2025-03-10"));
    assert!(page.text.contains('3'));
}

#[test]
fn undated_rows_sort_last() {
    let users = vec![
        user(1, None, true, false),
        user(2, Some("2025-05-01 10:00:00"), true, true),
        user(3, Some("2025-03-10 18:00:00"), true, true),
    ];
    let page = format_page(&users, DashboardFilter::All, 0, LanguageCode::En);
    let first = page.text.find("2025-03-10").unwrap();
    let second = page.text.find("2025-05-01").unwrap();
    let undated = page.text.find('—').unwrap();
    assert!(first < second);
    assert!(second < undated);
}

#[test]
fn pages_are_capped_and_clamped() {
    let users: Vec<UserRecord> = (0..45)
        .map(|i| user(i, Some("2025-03-10 18:00:00"), true, true))
        .collect();

    let page = format_page(&users, DashboardFilter::All, 0, LanguageCode::En);
    assert_eq!(page.total_pages, 3);
    assert!(!page.has_prev);
    assert!(page.has_next);

    let page = format_page(&users, DashboardFilter::All, 2, LanguageCode::En);
    assert!(page.has_prev);
    assert!(!page.has_next);

    // Out-of-range pages clamp to the last one.
    let page = format_page(&users, DashboardFilter::All, 99, LanguageCode::En);
    assert_eq!(page.page, 2);
}

#[test]
fn empty_list_renders_a_placeholder() {
    let page = format_page(&[], DashboardFilter::All, 0, LanguageCode::En);
    assert_eq!(page.total_pages, 1);
    assert!(!page.has_prev);
    assert!(!page.has_next);
    assert!(page.text.contains("(nothing to show)"));
}
