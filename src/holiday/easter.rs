use crate::time::{Date, Month, Year};

/// Returns the date of easter sunday in the `year`.
///
/// The algorithm is based on <https://en.wikipedia.org/wiki/Date_of_Easter#Anonymous_Gregorian_algorithm>
#[must_use]
pub const fn easter_sunday(year: Year) -> Date {
    let year_number = year.as_usize();

    let a = year_number % 19;
    let b = year_number / 100;
    let c = year_number % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let n = (h + l - 7 * m + 114) / 31;
    let o = (h + l - 7 * m + 114) % 31;

    Date::from_parts(year, Month::new(n), o + 1)
}
