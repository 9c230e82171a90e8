use super::*;

#[test]
fn time_is_rendered_in_utc() {
    assert_eq!(format_time_utc("2024-09-10T09:05:07.000Z"), "09:05:07");
    assert_eq!(format_time_utc("2024-09-10T14:35:00+05:30"), "09:05:00");
}

#[test]
fn offsetless_timestamps_are_utc() {
    assert_eq!(format_time_utc("2024-09-10T09:00:00"), "09:00:00");
    assert_eq!(format_time_utc("2024-09-10 16:45:30"), "16:45:30");
}

#[test]
fn locale_date_is_month_day_year() {
    assert_eq!(format_locale_date("2024-09-01"), "9/1/2024");
    assert_eq!(format_locale_date("2024-12-25T00:00:00.000Z"), "12/25/2024");
}

#[test]
fn malformed_values_render_invalid_date() {
    assert_eq!(format_time_utc("not a date"), INVALID_DATE);
    assert_eq!(format_locale_date(""), INVALID_DATE);
    assert_eq!(format_readable_ist("2024-13-40"), INVALID_DATE);
}

#[test]
fn lecture_window_joins_start_and_end() {
    assert_eq!(
        format_lecture_window("2024-09-10T09:00:00Z", "2024-09-10T10:00:00Z"),
        "09:00:00 to 10:00:00"
    );
}

#[test]
fn readable_ist_shifts_to_india_time() {
    assert_eq!(
        format_readable_ist("2024-09-10T09:00:00Z"),
        "September 10, 2024 at 02:30:00 PM"
    );
}

#[test]
fn percentage_has_two_decimals() {
    assert_eq!(format_percentage(80.0), "80.00%");
    assert_eq!(format_percentage(66.666_666), "66.67%");
}
