use chrono::NaiveDate;
use study_core::Locale;
use study_core::time::format_long_date;

#[must_use]
pub fn format_day_heading(date: NaiveDate, locale: Locale) -> String {
    format_long_date(date, locale)
}
