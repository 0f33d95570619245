// Prompt constants for the resume analysis pipeline.

/// Analysis prompt template. Replace `{resume_text}` and `{job_desc}` before
/// sending.
///
/// Both inputs are embedded verbatim. No escaping or delimiting is applied,
/// so a document that contains instructions can steer the model.
pub const ANALYZE_PROMPT_TEMPLATE: &str = r#"You are a career advisor. Compare this resume with the job description.

Resume:
{resume_text}

Job Description:
{job_desc}

Return the output STRICTLY in JSON format like this:
{
  "match_percentage": 65,
  "strengths": ["Skill 1", "Skill 2"],
  "weaknesses": ["Weakness 1", "Weakness 2"]
}"#;

/// Builds the analysis prompt by substituting both inputs into the template.
pub fn build_prompt(resume_text: &str, job_desc: &str) -> String {
    ANALYZE_PROMPT_TEMPLATE
        .replace("{resume_text}", resume_text)
        .replace("{job_desc}", job_desc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_prompt_embeds_both_inputs_verbatim() {
        let prompt = build_prompt(
            "Experienced backend engineer with Python",
            "Looking for a backend engineer with Python experience",
        );

        assert!(prompt.contains("Experienced backend engineer with Python"));
        assert!(prompt.contains("Looking for a backend engineer with Python experience"));
    }

    #[test]
    fn test_build_prompt_names_the_required_fields() {
        let prompt = build_prompt("resume", "jd");

        assert!(prompt.contains("match_percentage"));
        assert!(prompt.contains("strengths"));
        assert!(prompt.contains("weaknesses"));
        assert!(!prompt.contains("{resume_text}"));
        assert!(!prompt.contains("{job_desc}"));
    }

    #[test]
    fn test_build_prompt_accepts_empty_inputs() {
        let prompt = build_prompt("", "");
        assert!(prompt.contains("Resume:"));
        assert!(prompt.contains("Job Description:"));
    }
}
