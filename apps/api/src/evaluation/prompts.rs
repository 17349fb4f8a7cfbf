// Prompt template for resume evaluation.
// Inputs are interpolated verbatim; nothing is escaped.

/// Persona and task instructions that open every evaluation prompt.
pub const EVALUATION_INSTRUCTIONS: &str = "Act like a skilled or very experienced ATS \
    (Application Tracking System) with a deep understanding of tech field, software engineering, \
    data science, data analyst and big data engineer. Your task is to evaluate the resume based \
    on the given job description. You must consider the job market is very competitive and you \
    should provide best assistance for improving the resumes. Assign the percentage Matching \
    based on Jd and the missing keywords with high accuracy.";

pub const JD_MATCH_FIELD: &str = "JD Match";
pub const MISSING_KEYWORDS_FIELD: &str = "Missing Keywords";
pub const PROFILE_SUMMARY_FIELD: &str = "Profile Summary";

/// Builds the evaluation prompt for one resume / job description pair.
///
/// The closing block asks, but cannot force, the model to answer with a
/// single JSON-shaped string holding the three response fields.
pub fn build_evaluation_prompt(resume_text: &str, job_description: &str) -> String {
    format!(
        "{EVALUATION_INSTRUCTIONS}\n\
        resume: {resume_text}\n\
        description: {job_description}\n\
        \n\
        I want the response in one single string having the structure\n\
        {{\"{JD_MATCH_FIELD}\":\"%\",\n\
        \"{MISSING_KEYWORDS_FIELD}\" : [],\n\
        \"{PROFILE_SUMMARY_FIELD}\" : \"\"}}\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_is_deterministic() {
        let a = build_evaluation_prompt("resume body", "jd body");
        let b = build_evaluation_prompt("resume body", "jd body");
        assert_eq!(a, b);
    }

    #[test]
    fn test_prompt_contains_all_response_fields() {
        let prompt = build_evaluation_prompt("", "");
        for field in [JD_MATCH_FIELD, MISSING_KEYWORDS_FIELD, PROFILE_SUMMARY_FIELD] {
            assert!(
                prompt.contains(&format!("\"{field}\"")),
                "prompt is missing field {field}"
            );
        }
    }

    #[test]
    fn test_prompt_names_the_ats_persona() {
        let prompt = build_evaluation_prompt("r", "j");
        assert!(prompt.contains("ATS (Application Tracking System)"));
        assert!(prompt.contains("software engineering"));
        assert!(prompt.contains("data science"));
        assert!(prompt.contains("big data"));
    }

    #[test]
    fn test_inputs_interpolated_verbatim() {
        let resume = r#"Built {"json": "apis"} and "quoted" things"#;
        let jd = "Needs {braces} and \"quotes\"";

        let prompt = build_evaluation_prompt(resume, jd);

        assert!(prompt.contains(&format!("resume: {resume}")));
        assert!(prompt.contains(&format!("description: {jd}")));
    }

    #[test]
    fn test_placeholder_text_in_resume_is_not_substituted() {
        let prompt = build_evaluation_prompt("{job_description}", "the real jd");
        assert!(prompt.contains("resume: {job_description}"));
        assert_eq!(prompt.matches("the real jd").count(), 1);
    }

    #[test]
    fn test_resume_precedes_description() {
        let prompt = build_evaluation_prompt("RESUME-MARKER", "JD-MARKER");
        let resume_at = prompt.find("RESUME-MARKER").unwrap();
        let jd_at = prompt.find("JD-MARKER").unwrap();
        assert!(resume_at < jd_at);
    }
}
