//! Server-rendered prediction page. Holds layout only; the pipeline lives in
//! `prediction`.

pub mod templates;

use crate::models::employee::{
    Education, Gender, AGE_RANGE, DEFAULT_AGE, DEFAULT_EXPERIENCE, EXPERIENCE_RANGE,
    JOB_TITLE_OPTIONS,
};
use crate::ui::templates::{
    ERROR_TEMPLATE, FORM_TEMPLATE, OPTION_TEMPLATE, PAGE_TEMPLATE, RESULT_TEMPLATE,
};

/// Raw form values, kept as submitted so the form can be redisplayed.
#[derive(Debug, Clone, PartialEq)]
pub struct FormValues {
    pub age: String,
    pub education: String,
    pub job_title: String,
    pub experience: String,
    pub gender: String,
}

impl Default for FormValues {
    fn default() -> Self {
        Self {
            age: DEFAULT_AGE.to_string(),
            education: Education::ALL[0].as_str().to_string(),
            job_title: JOB_TITLE_OPTIONS[0].to_string(),
            experience: DEFAULT_EXPERIENCE.to_string(),
            gender: Gender::ALL[0].as_str().to_string(),
        }
    }
}

/// What to show under the form.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<'a> {
    Empty,
    Predicted { formatted: &'a str },
    Invalid { message: &'a str },
}

pub fn render_form_page(values: &FormValues, outcome: Outcome<'_>) -> String {
    let education_labels: Vec<&str> = Education::ALL.iter().map(|e| e.as_str()).collect();
    let gender_labels: Vec<&str> = Gender::ALL.iter().map(|g| g.as_str()).collect();

    let (alert, result) = match outcome {
        Outcome::Empty => (String::new(), String::new()),
        Outcome::Predicted { formatted } => (
            String::new(),
            RESULT_TEMPLATE.replace("{amount}", &escape_html(formatted)),
        ),
        Outcome::Invalid { message } => (render_error(message), String::new()),
    };

    let body = FORM_TEMPLATE
        .replace("{age_min}", &AGE_RANGE.start().to_string())
        .replace("{age_max}", &AGE_RANGE.end().to_string())
        .replace("{age}", &escape_html(&values.age))
        .replace("{experience_min}", &EXPERIENCE_RANGE.start().to_string())
        .replace("{experience_max}", &EXPERIENCE_RANGE.end().to_string())
        .replace("{experience}", &escape_html(&values.experience))
        .replace(
            "{education_options}",
            &render_options(&education_labels, &values.education),
        )
        .replace(
            "{job_title_options}",
            &render_options(&JOB_TITLE_OPTIONS, &values.job_title),
        )
        .replace(
            "{gender_options}",
            &render_options(&gender_labels, &values.gender),
        )
        .replace("{alert}", &alert)
        .replace("{result}", &result);

    PAGE_TEMPLATE.replace("{body}", &body)
}

/// Page shown when the model could not be loaded: guidance, no form.
pub fn render_unready_page(guidance: &str) -> String {
    PAGE_TEMPLATE.replace("{body}", &render_error(guidance))
}

fn render_error(message: &str) -> String {
    ERROR_TEMPLATE.replace("{message}", &escape_html(message))
}

fn render_options(choices: &[&str], selected: &str) -> String {
    choices
        .iter()
        .map(|choice| {
            let marker = if *choice == selected { " selected" } else { "" };
            OPTION_TEMPLATE
                .replace("{selected}", marker)
                .replace("{value}", &escape_html(choice))
        })
        .collect()
}

/// Escapes text for HTML element and attribute context. Braces are escaped
/// too so substituted text can never form a template placeholder.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '{' => out.push_str("&#123;"),
            '}' => out.push_str("&#125;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_form_has_all_fields_and_button() {
        let html = render_form_page(&FormValues::default(), Outcome::Empty);
        for name in ["age", "education", "job_title", "experience", "gender"] {
            assert!(html.contains(&format!("name=\"{name}\"")), "missing {name}");
        }
        assert!(html.contains("Predict Salary"));
        assert!(html.contains(r#"value="30""#));
        assert!(html.contains(r#"value="5""#));
        assert!(html.contains(r#"<option value="Software Engineer" selected>"#));
        assert!(!html.contains("Predicted Salary"));
    }

    #[test]
    fn test_every_job_title_is_an_option() {
        let html = render_form_page(&FormValues::default(), Outcome::Empty);
        assert_eq!(html.matches("<option").count(), 15 + 3 + 2);
        assert!(html.contains("Human Resources Manager"));
    }

    #[test]
    fn test_result_block_shows_amount_per_year() {
        let html = render_form_page(
            &FormValues::default(),
            Outcome::Predicted {
                formatted: "$85,123.46",
            },
        );
        assert!(html.contains("Predicted Salary"));
        assert!(html.contains("$85,123.46 per year"));
    }

    #[test]
    fn test_submitted_selection_is_preserved() {
        let values = FormValues {
            education: "PhD".to_string(),
            job_title: "Director".to_string(),
            ..FormValues::default()
        };
        let html = render_form_page(&values, Outcome::Empty);
        assert!(html.contains(r#"<option value="PhD" selected>"#));
        assert!(html.contains(r#"<option value="Director" selected>"#));
        assert!(!html.contains(r#"<option value="Software Engineer" selected>"#));
    }

    #[test]
    fn test_apostrophes_in_options_are_escaped() {
        let html = render_form_page(&FormValues::default(), Outcome::Empty);
        assert!(html.contains(r#"<option value="Bachelor&#39;s" selected>"#));
    }

    #[test]
    fn test_unready_page_has_guidance_and_no_form() {
        let html = render_unready_page("Model not found!");
        assert!(html.contains("Model not found!"));
        assert!(!html.contains("<form"));
        assert!(!html.contains("Predict Salary"));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let values = FormValues {
            age: "\"><script>alert(1)</script>".to_string(),
            ..FormValues::default()
        };
        let html = render_form_page(
            &values,
            Outcome::Invalid {
                message: "bad {result}",
            },
        );
        assert!(!html.contains("<script>"));
        assert!(html.contains("bad &#123;result&#125;"));
    }
}
