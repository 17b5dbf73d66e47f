use crate::constants::INDICATOR_COUNT;
use crate::types::{CountryCode, IndicatorDefinition, IndicatorScores, Taxonomy};

const fn def(id: u8, name: &'static str, description: &'static str) -> IndicatorDefinition {
    IndicatorDefinition {
        id,
        name,
        description,
    }
}

pub static BRITT_INDICATORS: [IndicatorDefinition; INDICATOR_COUNT] = [
    def(1, "Powerful nationalism", "Patriotic slogans, symbols and songs everywhere"),
    def(2, "Disdain for human rights", "Rights violations justified in the name of security"),
    def(3, "Enemies as a unifying cause", "Unity built on the image of an enemy or scapegoat"),
    def(4, "Supremacy of the military", "Militarized society and outsized military budgets"),
    def(5, "Rampant sexism", "Restricted women's rights, rigid traditional gender roles"),
    def(6, "Controlled mass media", "Censorship, propaganda and state-run outlets"),
    def(7, "Obsession with national security", "Constant fear of external threats"),
    def(8, "Religion and government intertwined", "Religion used as a tool of manipulation"),
    def(9, "Corporate power protected", "Business and state power merged"),
    def(10, "Labor power suppressed", "Unions and protests banned or crushed"),
    def(11, "Disdain for intellectuals", "Anti-intellectualism and attacks on science"),
    def(12, "Obsession with crime and punishment", "Harsh laws and a police state"),
    def(13, "Cronyism and corruption", "Loyalists appointed, elites above the law"),
    def(14, "Fraudulent elections", "Manipulated voting and rigged results"),
];

pub static ECO_INDICATORS: [IndicatorDefinition; INDICATOR_COUNT] = [
    def(1, "Cult of tradition", "Appeals to ancient values"),
    def(2, "Rejection of modernism", "Rationalism treated as the root of evil"),
    def(3, "Cult of action for action's sake", "Distrust of thinking and reflection"),
    def(4, "Disagreement is treason", "Critical thought cast as betrayal"),
    def(5, "Fear of difference", "Xenophobia and racism"),
    def(6, "Appeal to a frustrated middle class", "Mobilizing social frustration"),
    def(7, "Obsession with a plot", "Enemies inside and outside the country"),
    def(8, "Enemy both strong and weak", "A contradictory image of the enemy"),
    def(9, "Life is permanent warfare", "Pacifism seen as collusion with the enemy"),
    def(10, "Popular elitism", "Contempt for the weak"),
    def(11, "Cult of heroic death", "Sacrifice glorified"),
    def(12, "Machismo and weaponry", "Cult of masculinity and militarism"),
    def(13, "Selective populism", "The people as one will voiced by the leader"),
    def(14, "Newspeak", "Impoverished vocabulary that limits thought"),
];

const fn scores(
    code: &'static str,
    britt: [u8; INDICATOR_COUNT],
    eco: [u8; INDICATOR_COUNT],
) -> IndicatorScores {
    IndicatorScores {
        country: CountryCode::from_static(code),
        britt,
        eco,
    }
}

pub static INDICATOR_SCORES: [IndicatorScores; 8] = [
    scores(
        "RU",
        [85, 75, 90, 80, 60, 95, 85, 70, 80, 85, 75, 80, 90, 70],
        [80, 70, 85, 90, 75, 80, 95, 85, 90, 75, 70, 80, 90, 85],
    ),
    scores(
        "CN",
        [90, 80, 85, 75, 55, 98, 90, 60, 85, 90, 70, 85, 88, 75],
        [75, 65, 80, 95, 70, 75, 90, 80, 85, 70, 65, 75, 95, 90],
    ),
    scores(
        "BY",
        [88, 85, 92, 70, 65, 97, 88, 75, 82, 90, 78, 85, 93, 80],
        [82, 75, 88, 93, 80, 85, 93, 88, 92, 78, 75, 82, 93, 88],
    ),
    scores(
        "US",
        [60, 40, 55, 65, 45, 35, 70, 50, 70, 40, 35, 65, 60, 45],
        [50, 40, 45, 40, 55, 50, 60, 50, 55, 45, 40, 55, 50, 40],
    ),
    scores(
        "DE",
        [30, 20, 25, 20, 15, 25, 35, 20, 40, 15, 20, 30, 35, 20],
        [25, 20, 30, 20, 20, 25, 30, 25, 25, 20, 18, 25, 25, 28],
    ),
    scores(
        "NO",
        [20, 15, 18, 15, 10, 20, 25, 15, 35, 10, 15, 25, 28, 15],
        [18, 15, 22, 15, 15, 20, 22, 20, 20, 15, 12, 20, 20, 22],
    ),
    scores(
        "FR",
        [35, 25, 30, 25, 20, 28, 40, 25, 45, 20, 22, 35, 40, 25],
        [30, 25, 32, 25, 25, 28, 35, 28, 30, 22, 20, 28, 28, 30],
    ),
    scores(
        "JP",
        [45, 25, 35, 50, 40, 30, 35, 35, 55, 30, 25, 30, 40, 28],
        [40, 30, 38, 30, 30, 35, 38, 35, 40, 28, 30, 35, 35, 35],
    ),
];

pub fn definitions(taxonomy: Taxonomy) -> &'static [IndicatorDefinition; INDICATOR_COUNT] {
    match taxonomy {
        Taxonomy::Britt => &BRITT_INDICATORS,
        Taxonomy::Eco => &ECO_INDICATORS,
    }
}

pub fn find(code: CountryCode) -> Option<&'static IndicatorScores> {
    INDICATOR_SCORES.iter().find(|row| row.country == code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::country_table;

    #[test]
    fn definition_ids_run_one_through_fourteen() {
        for taxonomy in Taxonomy::ALL {
            let ids: Vec<u8> = definitions(taxonomy).iter().map(|d| d.id).collect();
            assert_eq!(ids, (1..=INDICATOR_COUNT as u8).collect::<Vec<_>>());
        }
    }

    #[test]
    fn every_profile_has_indicator_scores() {
        for profile in &country_table::PROFILES {
            assert!(find(profile.code).is_some(), "{} has no checklist row", profile.code);
        }
    }

    #[test]
    fn indicator_values_stay_in_percent_range() {
        for row in &INDICATOR_SCORES {
            assert!(row.britt.iter().chain(row.eco.iter()).all(|&v| v <= 100));
        }
    }
}
