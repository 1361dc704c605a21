//! Helper utility functions

use chrono::{DateTime, Datelike, TimeZone, Timelike};

const MONTHS_ES: [&str; 12] = [
    "enero", "febrero", "marzo", "abril", "mayo", "junio",
    "julio", "agosto", "septiembre", "octubre", "noviembre", "diciembre",
];

/// Format an integer with comma thousands separators: 45800 -> "45,800"
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Format a USD amount: 45800 -> "$45,800"
pub fn format_usd(value: u32) -> String {
    format!("${}", format_thousands(value as u64))
}

/// Scores always carry one decimal: 9.0 -> "9.0"
pub fn format_score(score: f32) -> String {
    format!("{:.1}", score)
}

/// Long Spanish date used in the report header: "03 de noviembre de 2025, 14:05"
pub fn format_long_date<Tz: TimeZone>(at: &DateTime<Tz>) -> String {
    let month = MONTHS_ES[at.month0() as usize];
    format!(
        "{:02} de {} de {}, {:02}:{:02}",
        at.day(),
        month,
        at.year(),
        at.hour(),
        at.minute()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(6587), "6,587");
        assert_eq!(format_thousands(876469), "876,469");
        assert_eq!(format_thousands(3597000), "3,597,000");
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(45800), "$45,800");
        assert_eq!(format_usd(50), "$50");
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(9.0), "9.0");
        assert_eq!(format_score(7.6), "7.6");
        assert_eq!(format_score(0.0), "0.0");
    }

    #[test]
    fn test_format_long_date() {
        let at = Utc.with_ymd_and_hms(2025, 11, 3, 9, 5, 0).unwrap();
        assert_eq!(format_long_date(&at), "03 de noviembre de 2025, 09:05");

        let offset = FixedOffset::west_opt(6 * 3600).unwrap();
        let at = offset.with_ymd_and_hms(2026, 1, 31, 23, 59, 0).unwrap();
        assert_eq!(format_long_date(&at), "31 de enero de 2026, 23:59");
    }
}
