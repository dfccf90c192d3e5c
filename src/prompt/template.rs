//! The fixed prompt template

use super::PromptFormInput;

const DEFAULT_ROLE: &str = "assistant";
const DEFAULT_DOMAIN: &str = "general tasks";
const DEFAULT_CONTEXT: &str = "No additional context provided.";

const REQUIREMENTS: [&str; 4] = [
    "Provide detailed and actionable responses",
    "Maintain a professional yet approachable tone",
    "Consider best practices and industry standards",
    "Include relevant examples when helpful",
];

const CLOSING: &str =
    "Please proceed with the task, ensuring high quality and accuracy in your response.";

fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.trim().is_empty() {
        default
    } else {
        value
    }
}

/// Render the prompt text for a form snapshot.
///
/// Blank role, domain and context fall back to fixed defaults; the task is
/// inserted as typed. Tone and detail level are carried by the form but do
/// not change the text.
pub fn build_prompt(input: &PromptFormInput) -> String {
    let role = or_default(&input.role, DEFAULT_ROLE);
    let domain = or_default(&input.domain, DEFAULT_DOMAIN);
    let context = or_default(&input.context, DEFAULT_CONTEXT);

    let requirements = REQUIREMENTS
        .iter()
        .map(|line| format!("- {}", line))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are an expert {role} specializing in {domain}.\n\
         \n\
         Task: {task}\n\
         \n\
         Context: {context}\n\
         \n\
         Requirements:\n\
         {requirements}\n\
         \n\
         {CLOSING}",
        task = input.task,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::{Complexity, Tone};

    #[test]
    fn test_defaults_for_blank_fields() {
        let input = PromptFormInput::new().with_task("Summarize this doc");
        let prompt = build_prompt(&input);

        assert!(prompt.contains("expert assistant specializing in general tasks"));
        assert!(prompt.lines().any(|line| line == "Task: Summarize this doc"));
        assert!(prompt.contains("Context: No additional context provided."));
    }

    #[test]
    fn test_filled_fields() {
        let input = PromptFormInput::new()
            .with_role("Data Analyst")
            .with_domain("Finance")
            .with_task("Build a report")
            .with_context("Quarterly data only");
        let prompt = build_prompt(&input);

        assert_eq!(
            prompt.lines().next(),
            Some("You are an expert Data Analyst specializing in Finance.")
        );
        assert!(prompt.lines().any(|line| line == "Context: Quarterly data only"));
    }

    #[test]
    fn test_whitespace_only_fields_use_defaults() {
        let input = PromptFormInput::new()
            .with_role("  ")
            .with_domain("\t")
            .with_task("Plan a trip")
            .with_context(" \n ");
        let prompt = build_prompt(&input);

        assert!(prompt.starts_with("You are an expert assistant specializing in general tasks."));
        assert!(prompt.contains("Context: No additional context provided."));
    }

    #[test]
    fn test_full_layout() {
        let input = PromptFormInput::new()
            .with_role("Editor")
            .with_domain("Publishing")
            .with_task("Proofread")
            .with_context("British spelling");

        let expected = "You are an expert Editor specializing in Publishing.\n\
\n\
Task: Proofread\n\
\n\
Context: British spelling\n\
\n\
Requirements:\n\
- Provide detailed and actionable responses\n\
- Maintain a professional yet approachable tone\n\
- Consider best practices and industry standards\n\
- Include relevant examples when helpful\n\
\n\
Please proceed with the task, ensuring high quality and accuracy in your response.";

        assert_eq!(build_prompt(&input), expected);
    }

    #[test]
    fn test_deterministic() {
        let input = PromptFormInput::new()
            .with_role("Writer")
            .with_task("Draft a blog post\nabout Rust");
        let first = build_prompt(&input);
        for _ in 0..5 {
            assert_eq!(build_prompt(&input), first);
        }
    }

    #[test]
    fn test_tone_and_complexity_do_not_change_text() {
        let base = PromptFormInput::new().with_role("Writer").with_task("Write");
        let reference = build_prompt(&base);
        for tone in Tone::ALL {
            for complexity in Complexity::ALL {
                let input = base.clone().with_tone(tone).with_complexity(complexity);
                assert_eq!(build_prompt(&input), reference);
            }
        }
    }
}
