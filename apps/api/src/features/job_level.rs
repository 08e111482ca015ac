//! Job-level classifier: maps a free-text job title to an ordinal level 1–5.

/// Keyword rules, evaluated top to bottom. The first rule with any matching
/// keyword wins, so "Senior Director" is a director (5), not senior (4).
const LEVEL_RULES: &[(&[&str], u8)] = &[
    (&["director"], 5),
    (&["senior", "manager"], 4),
    (&["analyst"], 3),
    (&["engineer", "developer"], 2),
];

/// Level for titles that match no keyword.
pub const BASE_LEVEL: u8 = 1;

/// Returns the ordinal job level for `title`. Matching is a case-insensitive
/// substring test; every input, including the empty string, has a level.
pub fn assign_job_level(title: &str) -> u8 {
    let title_lower = title.to_lowercase();

    LEVEL_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|kw| title_lower.contains(kw)))
        .map(|&(_, level)| level)
        .unwrap_or(BASE_LEVEL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::employee::JOB_TITLE_OPTIONS;

    #[test]
    fn test_director_any_case_is_level_5() {
        assert_eq!(assign_job_level("Director"), 5);
        assert_eq!(assign_job_level("DIRECTOR of Sales"), 5);
        assert_eq!(assign_job_level("art director"), 5);
    }

    #[test]
    fn test_director_beats_other_keywords() {
        assert_eq!(assign_job_level("Senior Director"), 5);
        assert_eq!(assign_job_level("Director, Engineering Analyst Manager"), 5);
    }

    #[test]
    fn test_senior_or_manager_is_level_4() {
        assert_eq!(assign_job_level("Senior Consultant"), 4);
        assert_eq!(assign_job_level("Product Manager"), 4);
        // senior outranks engineer
        assert_eq!(assign_job_level("Senior Software Engineer"), 4);
        assert_eq!(assign_job_level("Analytics Manager"), 4);
    }

    #[test]
    fn test_analyst_is_level_3() {
        assert_eq!(assign_job_level("Data Analyst"), 3);
        assert_eq!(assign_job_level("Analyst Developer"), 3);
    }

    #[test]
    fn test_engineer_or_developer_is_level_2() {
        assert_eq!(assign_job_level("Software Engineer"), 2);
        assert_eq!(assign_job_level("Junior Developer"), 2);
    }

    #[test]
    fn test_unmatched_titles_are_level_1() {
        assert_eq!(assign_job_level("Sales Associate"), 1);
        assert_eq!(assign_job_level("Data Scientist"), 1);
        assert_eq!(assign_job_level(""), 1);
    }

    #[test]
    fn test_substring_matching() {
        // "engineering" contains "engineer"
        assert_eq!(assign_job_level("Engineering Lead"), 2);
    }

    #[test]
    fn test_every_form_option_has_expected_level() {
        let expected = [2, 3, 4, 1, 5, 3, 4, 3, 4, 4, 1, 1, 4, 2, 4];
        for (title, level) in JOB_TITLE_OPTIONS.iter().zip(expected) {
            assert_eq!(assign_job_level(title), level, "title: {title}");
        }
    }
}
