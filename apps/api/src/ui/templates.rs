// HTML fragments for the prediction page. Placeholders in `{braces}` are
// replaced by `ui::render_*`; every substituted value is escaped first.

pub const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Salary Predictor</title>
<style>
body { font-family: system-ui, sans-serif; max-width: 46rem; margin: 2rem auto; padding: 0 1rem; color: #262730; }
.columns { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem 2rem; }
label { display: block; font-size: 0.9rem; margin-bottom: 0.25rem; }
input, select { width: 100%; padding: 0.4rem; box-sizing: border-box; }
button { margin-top: 1.5rem; padding: 0.5rem 1.25rem; background: #ff4b4b; color: #fff; border: 0; border-radius: 0.4rem; font-size: 1rem; cursor: pointer; }
.error { background: #ffebee; color: #7d1a1a; padding: 1rem; border-radius: 0.4rem; }
.success { background: #e8f5e9; color: #1b5e20; padding: 1rem; border-radius: 0.4rem; font-weight: bold; }
</style>
</head>
<body>
<h1>&#x1F4B5; Salary Prediction App</h1>
<p>Enter the details of an employee to predict their potential salary. This app uses a Random Forest model with engineered job-level features.</p>
<hr>
{body}
</body>
</html>
"#;

pub const FORM_TEMPLATE: &str = r#"<h2>Enter Employee Details</h2>
{alert}
<form method="post" action="/predict">
<div class="columns">
<div>
<label for="age">Age</label>
<input id="age" name="age" type="number" min="{age_min}" max="{age_max}" step="1" value="{age}" required>
<label for="education">Education Level</label>
<select id="education" name="education">{education_options}</select>
<label for="job_title">Job Title</label>
<select id="job_title" name="job_title">{job_title_options}</select>
</div>
<div>
<label for="experience">Years of Experience</label>
<input id="experience" name="experience" type="number" min="{experience_min}" max="{experience_max}" step="1" value="{experience}" required>
<label for="gender">Gender</label>
<select id="gender" name="gender">{gender_options}</select>
</div>
</div>
<button type="submit">Predict Salary</button>
</form>
{result}
"#;

pub const RESULT_TEMPLATE: &str = r#"<hr>
<h2>Predicted Salary</h2>
<p class="success">{amount} per year</p>
"#;

pub const ERROR_TEMPLATE: &str = r#"<p class="error">{message}</p>
"#;

pub const OPTION_TEMPLATE: &str = r#"<option value="{value}"{selected}>{value}</option>"#;
