//! Prompt framing and fallback templates for the generation proxy.
//!
//! The recognized categories are "profile summary", "job description" and
//! "project description"; anything else passes the raw prompt through and
//! falls back to the generic mock string.

/// Wraps a raw prompt with fixed framing for the requested content category.
pub fn enhanced_prompt(prompt: &str, field_type: &str) -> String {
    match field_type {
        "profile summary" => format!(
            "Write a professional profile summary for a resume. {prompt}. \
             Keep it concise, professional, and highlight key strengths and experience."
        ),
        "job description" => format!(
            "Write professional job description bullet points for a resume. {prompt}. \
             Format as bullet points highlighting achievements and responsibilities."
        ),
        "project description" => format!(
            "Write a professional project description for a resume. {prompt}. \
             Focus on technologies used, challenges solved, and impact achieved."
        ),
        _ => prompt.to_string(),
    }
}

/// Deterministic canned content served whenever the external call is
/// unavailable or fails.
pub fn mock_content(prompt: &str, field_type: &str) -> String {
    match field_type {
        "profile summary" => format!("Mock Profile Summary: {prompt}. This is a generated summary."),
        "job description" => {
            format!("Mock Job Description: {prompt}. This is a generated job description.")
        }
        "project description" => {
            format!("Mock Project Description: {prompt}. This is a generated project description.")
        }
        _ => format!("Mock Content: {prompt}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enhanced_prompt_frames_each_category() {
        let framed = enhanced_prompt("5 years in fintech", "profile summary");
        assert!(framed.starts_with("Write a professional profile summary for a resume."));
        assert!(framed.contains("5 years in fintech"));

        let framed = enhanced_prompt("Led a team", "job description");
        assert!(framed.contains("bullet points"));

        let framed = enhanced_prompt("Built a cache", "project description");
        assert!(framed.contains("technologies used"));
    }

    #[test]
    fn test_unrecognized_category_passes_through() {
        assert_eq!(enhanced_prompt("raw text", "cover letter"), "raw text");
        assert_eq!(enhanced_prompt("raw text", ""), "raw text");
    }

    #[test]
    fn test_mock_content_exact_strings() {
        assert_eq!(
            mock_content("Senior engineer", "profile summary"),
            "Mock Profile Summary: Senior engineer. This is a generated summary."
        );
        assert_eq!(
            mock_content("Backend role", "job description"),
            "Mock Job Description: Backend role. This is a generated job description."
        );
        assert_eq!(
            mock_content("CLI tool", "project description"),
            "Mock Project Description: CLI tool. This is a generated project description."
        );
        assert_eq!(mock_content("X", "unknown"), "Mock Content: X");
    }
}
