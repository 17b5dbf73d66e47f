use crate::types::{CountryCode, CountryProfile, Trend};

const fn profile(
    code: &'static str,
    name: &'static str,
    democracy: u8,
    freedom: u8,
    authoritarian: u8,
    press_freedom: u8,
    trend: Trend,
) -> CountryProfile {
    CountryProfile {
        code: CountryCode::from_static(code),
        name,
        democracy,
        freedom,
        authoritarian,
        press_freedom,
        trend,
    }
}

/// Scalar scores per country, in selector order.
pub static PROFILES: [CountryProfile; 8] = [
    profile("RU", "Russia", 35, 28, 72, 20, Trend::Down),
    profile("US", "United States", 78, 82, 22, 75, Trend::Stable),
    profile("DE", "Germany", 85, 88, 12, 82, Trend::Up),
    profile("CN", "China", 25, 18, 82, 10, Trend::Down),
    profile("NO", "Norway", 95, 97, 5, 95, Trend::Stable),
    profile("BY", "Belarus", 22, 15, 85, 12, Trend::Down),
    profile("FR", "France", 82, 85, 15, 78, Trend::Stable),
    profile("JP", "Japan", 88, 90, 10, 85, Trend::Up),
];

/// Codes drawn on the illustrative world map. Some have no profile row.
pub static MAP_CODES: [&str; 16] = [
    "RU", "US", "CN", "DE", "GB", "FR", "IT", "ES", "CA", "BR", "JP", "IN", "AU", "NO", "SE", "BY",
];

/// Illustrative month-by-month index behind the dynamics chart.
pub static DYNAMICS_SERIES: [(&str, u8); 7] = [
    ("Jan", 75),
    ("Feb", 65),
    ("Mar", 58),
    ("Apr", 52),
    ("May", 45),
    ("Jun", 38),
    ("Dec", 35),
];

pub fn find(code: CountryCode) -> Option<&'static CountryProfile> {
    PROFILES.iter().find(|p| p.code == code)
}

/// Looks `code` up, silently using the `default` row when it is absent.
pub fn resolve(code: CountryCode, default: CountryCode) -> &'static CountryProfile {
    find(code).or_else(|| find(default)).unwrap_or(&PROFILES[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn codes_are_unique() {
        let codes: HashSet<_> = PROFILES.iter().map(|p| p.code).collect();
        assert_eq!(codes.len(), PROFILES.len());
    }

    #[test]
    fn scores_stay_in_percent_range() {
        for p in &PROFILES {
            for value in [p.democracy, p.freedom, p.authoritarian, p.press_freedom] {
                assert!(value <= 100, "{} has score {}", p.code, value);
            }
        }
    }

    #[test]
    fn every_profile_is_on_the_map() {
        for p in &PROFILES {
            assert!(MAP_CODES.contains(&p.code.as_str()), "{} missing", p.code);
        }
    }

    #[test]
    fn resolve_falls_back_to_default_row() {
        let default = CountryCode::from_static("US");
        let unknown = CountryCode::from_static("ZZ");
        assert_eq!(resolve(unknown, default).code, default);
        assert_eq!(resolve(CountryCode::from_static("BY"), default).name, "Belarus");
    }
}
