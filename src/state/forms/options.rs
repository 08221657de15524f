//! Option lists for the choice and multi-select fields

/// A selectable option with a stored value and a display label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceOption {
    pub value: &'static str,
    pub label: &'static str,
}

impl ChoiceOption {
    const fn same(value: &'static str) -> Self {
        Self {
            value,
            label: value,
        }
    }

    const fn labeled(value: &'static str, label: &'static str) -> Self {
        Self { value, label }
    }
}

/// Value stored for an affirmative yes/no answer
pub const YES: &str = "yes";
/// Value stored for a negative yes/no answer
pub const NO: &str = "no";
/// Institution value that unlocks the free-text institution field
pub const OTHER_INSTITUTION: &str = "other";

pub const YES_NO: &[ChoiceOption] = &[
    ChoiceOption::labeled(YES, "Yes"),
    ChoiceOption::labeled(NO, "No"),
];

pub const NATIONALITIES: &[ChoiceOption] = &[
    ChoiceOption::same("American"),
    ChoiceOption::same("Canadian"),
    ChoiceOption::same("British"),
    ChoiceOption::same("Australian"),
    ChoiceOption::same("German"),
    ChoiceOption::same("French"),
    ChoiceOption::same("Italian"),
    ChoiceOption::same("Spanish"),
    ChoiceOption::same("Japanese"),
    ChoiceOption::same("Chinese"),
    ChoiceOption::same("Korean"),
    ChoiceOption::same("Indian"),
    ChoiceOption::same("Brazilian"),
    ChoiceOption::same("Mexican"),
    ChoiceOption::same("Russian"),
    ChoiceOption::same("Dutch"),
    ChoiceOption::same("Swedish"),
    ChoiceOption::same("Norwegian"),
    ChoiceOption::same("Danish"),
    ChoiceOption::same("Finnish"),
    ChoiceOption::same("Swiss"),
    ChoiceOption::same("Austrian"),
    ChoiceOption::same("Belgian"),
    ChoiceOption::same("Portuguese"),
    ChoiceOption::same("Greek"),
    ChoiceOption::same("Turkish"),
    ChoiceOption::same("Egyptian"),
    ChoiceOption::same("South African"),
    ChoiceOption::same("Nigerian"),
    ChoiceOption::same("Kenyan"),
    ChoiceOption::same("Argentinian"),
    ChoiceOption::same("Chilean"),
    ChoiceOption::same("Colombian"),
    ChoiceOption::same("Peruvian"),
    ChoiceOption::same("Venezuelan"),
    ChoiceOption::same("Thai"),
    ChoiceOption::same("Vietnamese"),
    ChoiceOption::same("Malaysian"),
    ChoiceOption::same("Singaporean"),
    ChoiceOption::same("Indonesian"),
    ChoiceOption::same("Filipino"),
    ChoiceOption::same("Pakistani"),
    ChoiceOption::same("Bangladeshi"),
    ChoiceOption::same("Sri Lankan"),
    ChoiceOption::same("Nepalese"),
    ChoiceOption::same("Iranian"),
    ChoiceOption::same("Israeli"),
    ChoiceOption::same("Saudi Arabian"),
    ChoiceOption::same("Emirati"),
    ChoiceOption::same("Jordanian"),
    ChoiceOption::same("Lebanese"),
];

pub const LANGUAGES: &[ChoiceOption] = &[
    ChoiceOption::same("English"),
    ChoiceOption::same("Spanish"),
    ChoiceOption::same("French"),
    ChoiceOption::same("German"),
    ChoiceOption::same("Italian"),
    ChoiceOption::same("Portuguese"),
    ChoiceOption::same("Russian"),
    ChoiceOption::same("Chinese (Mandarin)"),
    ChoiceOption::same("Chinese (Cantonese)"),
    ChoiceOption::same("Japanese"),
    ChoiceOption::same("Korean"),
    ChoiceOption::same("Arabic"),
    ChoiceOption::same("Hindi"),
    ChoiceOption::same("Bengali"),
    ChoiceOption::same("Tamil"),
    ChoiceOption::same("Telugu"),
    ChoiceOption::same("Marathi"),
    ChoiceOption::same("Gujarati"),
    ChoiceOption::same("Urdu"),
    ChoiceOption::same("Persian"),
    ChoiceOption::same("Turkish"),
    ChoiceOption::same("Hebrew"),
    ChoiceOption::same("Thai"),
    ChoiceOption::same("Vietnamese"),
    ChoiceOption::same("Indonesian"),
    ChoiceOption::same("Malay"),
    ChoiceOption::same("Filipino"),
    ChoiceOption::same("Dutch"),
    ChoiceOption::same("Swedish"),
    ChoiceOption::same("Norwegian"),
    ChoiceOption::same("Danish"),
    ChoiceOption::same("Finnish"),
    ChoiceOption::same("Greek"),
    ChoiceOption::same("Polish"),
    ChoiceOption::same("Czech"),
    ChoiceOption::same("Hungarian"),
    ChoiceOption::same("Romanian"),
    ChoiceOption::same("Bulgarian"),
    ChoiceOption::same("Croatian"),
    ChoiceOption::same("Serbian"),
    ChoiceOption::same("Ukrainian"),
    ChoiceOption::same("Swahili"),
];

/// Universities plus the trailing "other" entry
pub const INSTITUTIONS: &[ChoiceOption] = &[
    ChoiceOption::same("Harvard University"),
    ChoiceOption::same("Stanford University"),
    ChoiceOption::same("MIT"),
    ChoiceOption::same("Yale University"),
    ChoiceOption::same("Princeton University"),
    ChoiceOption::same("Columbia University"),
    ChoiceOption::same("University of Chicago"),
    ChoiceOption::same("University of Pennsylvania"),
    ChoiceOption::same("Caltech"),
    ChoiceOption::same("Johns Hopkins University"),
    ChoiceOption::same("Northwestern University"),
    ChoiceOption::same("Duke University"),
    ChoiceOption::same("Dartmouth College"),
    ChoiceOption::same("Brown University"),
    ChoiceOption::same("Vanderbilt University"),
    ChoiceOption::same("Rice University"),
    ChoiceOption::same("Washington University in St. Louis"),
    ChoiceOption::same("Cornell University"),
    ChoiceOption::same("Notre Dame"),
    ChoiceOption::same("UCLA"),
    ChoiceOption::same("UC Berkeley"),
    ChoiceOption::same("Georgetown University"),
    ChoiceOption::same("University of Michigan"),
    ChoiceOption::same("Carnegie Mellon University"),
    ChoiceOption::same("University of Virginia"),
    ChoiceOption::labeled(OTHER_INSTITUTION, "Other (specify below)"),
];

pub const EXPERIENCE_LEVELS: &[ChoiceOption] = &[
    ChoiceOption::labeled("high-school", "High School Student"),
    ChoiceOption::labeled("undergraduate", "Undergraduate Student"),
    ChoiceOption::labeled("graduate", "Graduate Student"),
    ChoiceOption::labeled("recent-graduate", "Recent Graduate (0-2 years)"),
    ChoiceOption::labeled("early-career", "Early Career Professional (2-5 years)"),
    ChoiceOption::labeled("mid-career", "Mid-Career Professional (5+ years)"),
];

pub const REFERRAL_SOURCES: &[ChoiceOption] = &[
    ChoiceOption::same("University Professor"),
    ChoiceOption::same("Friend/Colleague"),
    ChoiceOption::same("Social Media"),
    ChoiceOption::same("HPAIR Website"),
    ChoiceOption::same("Previous Participant"),
    ChoiceOption::same("Academic Conference"),
    ChoiceOption::same("Online Search"),
    ChoiceOption::same("Other"),
];

pub const INTERESTS: &[&str] = &[
    "International Relations",
    "Public Policy",
    "Economics",
    "Human Rights",
    "Environmental Policy",
    "Technology & Society",
    "Healthcare Policy",
    "Education",
    "Gender Studies",
    "Conflict Resolution",
    "Development Studies",
    "Cultural Exchange",
];

/// Look up the display label for a stored choice value
pub fn label_for<'a>(options: &'a [ChoiceOption], value: &str) -> Option<&'a str> {
    options.iter().find(|o| o.value == value).map(|o| o.label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_experience_label_lookup() {
        assert_eq!(
            label_for(EXPERIENCE_LEVELS, "graduate"),
            Some("Graduate Student")
        );
        assert_eq!(label_for(EXPERIENCE_LEVELS, "unknown"), None);
    }

    #[test]
    fn test_other_institution_is_last() {
        assert_eq!(INSTITUTIONS.last().map(|o| o.value), Some(OTHER_INSTITUTION));
    }

    #[test]
    fn test_option_values_are_unique() {
        for list in [NATIONALITIES, LANGUAGES, INSTITUTIONS, EXPERIENCE_LEVELS, REFERRAL_SOURCES] {
            let mut values: Vec<_> = list.iter().map(|o| o.value).collect();
            values.sort_unstable();
            values.dedup();
            assert_eq!(values.len(), list.len());
        }
    }
}
