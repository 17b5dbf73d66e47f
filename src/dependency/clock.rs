use chrono::{NaiveDate, Utc};

/// Calendar day (UTC) stamped on exported reports.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn today_is_a_plausible_date() {
        assert!(today().year() >= 2024);
    }
}
