// Formatos de fecha/hora/precio al estilo en-IE

use std::fmt::Display;

use chrono::{DateTime, TimeZone};

/// "16:45:09"
pub fn format_clock<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    dt.format("%H:%M:%S").to_string()
}

/// "16:45"
pub fn format_time<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    dt.format("%H:%M").to_string()
}

/// "13 Oct 2024"
pub fn format_date<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    dt.format("%d %b %Y").to_string()
}

/// "€1.20"
pub fn format_price(price: f64) -> String {
    format!("€{:.2}", price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn formats_like_en_ie() {
        let dt = Utc.with_ymd_and_hms(2024, 10, 3, 7, 5, 9).unwrap();
        assert_eq!(format_clock(&dt), "07:05:09");
        assert_eq!(format_time(&dt), "07:05");
        assert_eq!(format_date(&dt), "03 Oct 2024");
    }

    #[test]
    fn prices_have_two_decimals() {
        assert_eq!(format_price(1.2), "€1.20");
        assert_eq!(format_price(3.6), "€3.60");
    }
}
