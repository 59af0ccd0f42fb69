use edulog_core::age::{age, parse_birthdate, UNKNOWN_AGE};
use jiff::civil::date;

#[test]
fn slash_separated_birthdate_against_fixed_today() {
    assert_eq!(age("15/03/2018", date(2024, 6, 1)), "6,2");
}

#[test]
fn iso_birthdate_is_accepted() {
    assert_eq!(age("2018-03-15", date(2024, 6, 1)), "6,2");
}

#[test]
fn datetime_and_timestamp_forms_are_accepted() {
    assert_eq!(age("2018-03-15T08:30:00", date(2024, 6, 1)), "6,2");
    assert_eq!(age("2018-03-15T08:30:00Z", date(2024, 6, 1)), "6,2");
}

#[test]
fn dotted_birthdate_is_accepted() {
    assert_eq!(parse_birthdate("01.12.2019").unwrap(), date(2019, 12, 1));
}

#[test]
fn birthday_today_counts_full_year() {
    assert_eq!(age("01/06/2020", date(2024, 6, 1)), "4,0");
}

#[test]
fn day_before_birthday_is_still_previous_year() {
    assert_eq!(age("02/06/2020", date(2024, 6, 1)), "3,11");
}

#[test]
fn unparseable_birthdate_yields_zero() {
    assert_eq!(age("", date(2024, 6, 1)), UNKNOWN_AGE);
    assert_eq!(age("not a date", date(2024, 6, 1)), UNKNOWN_AGE);
    assert_eq!(age("31/02/2018", date(2024, 6, 1)), UNKNOWN_AGE);
}

#[test]
fn future_birthdate_yields_zero() {
    assert_eq!(age("01/01/2030", date(2024, 6, 1)), UNKNOWN_AGE);
}
