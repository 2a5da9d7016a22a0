//! Greeting prompt definition.

use rmcp::model::PromptArgument;
use std::collections::HashMap;

use super::super::error::PromptError;
use super::PromptDefinition;

/// A greeting prompt with selectable styles.
pub struct GreetUserPrompt;

impl GreetUserPrompt {
    /// Instruction prefix for a style keyword.
    ///
    /// Unknown styles fall back to friendly.
    fn instruction(style: &str) -> &'static str {
        match style {
            "formal" => "Please write a formal, professional greeting",
            "casual" => "Please write a casual, relaxed greeting",
            _ => "Please write a warm, friendly greeting",
        }
    }
}

impl PromptDefinition for GreetUserPrompt {
    const NAME: &'static str = "greet_user";
    const DESCRIPTION: &'static str = "Generate a greeting for a user in a chosen style";

    fn arguments() -> Vec<PromptArgument> {
        vec![
            PromptArgument {
                name: "name".to_string(),
                title: None,
                description: Some("The name of the person to greet".to_string()),
                required: Some(true),
            },
            PromptArgument {
                name: "style".to_string(),
                title: None,
                description: Some(
                    "The greeting style: friendly, formal, or casual".to_string(),
                ),
                required: Some(false),
            },
        ]
    }

    fn render(arguments: &HashMap<String, String>) -> Result<String, PromptError> {
        let name = arguments
            .get("name")
            .ok_or_else(|| PromptError::missing_argument("name"))?;
        let style = arguments.get("style").map(String::as_str).unwrap_or("friendly");

        Ok(format!(
            "{} for someone named {}.",
            Self::instruction(style),
            name
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_greet_user_metadata() {
        assert_eq!(GreetUserPrompt::NAME, "greet_user");
        assert!(!GreetUserPrompt::DESCRIPTION.is_empty());

        let arguments = GreetUserPrompt::arguments();
        assert_eq!(arguments.len(), 2);
        assert_eq!(arguments[0].name, "name");
        assert_eq!(arguments[0].required, Some(true));
        assert_eq!(arguments[1].required, Some(false));
    }

    #[test]
    fn test_render_default_style_is_friendly() {
        let rendered = GreetUserPrompt::render(&args(&[("name", "Sam")])).unwrap();
        assert_eq!(
            rendered,
            "Please write a warm, friendly greeting for someone named Sam."
        );
    }

    #[test]
    fn test_render_formal_style() {
        let rendered =
            GreetUserPrompt::render(&args(&[("name", "Sam"), ("style", "formal")])).unwrap();
        assert_eq!(
            rendered,
            "Please write a formal, professional greeting for someone named Sam."
        );
    }

    #[test]
    fn test_render_casual_style() {
        let rendered =
            GreetUserPrompt::render(&args(&[("name", "Sam"), ("style", "casual")])).unwrap();
        assert_eq!(
            rendered,
            "Please write a casual, relaxed greeting for someone named Sam."
        );
    }

    #[test]
    fn test_render_unknown_style_falls_back() {
        let rendered =
            GreetUserPrompt::render(&args(&[("name", "Sam"), ("style", "baroque")])).unwrap();
        assert!(rendered.starts_with("Please write a warm, friendly greeting"));
    }

    #[test]
    fn test_render_missing_name() {
        let result = GreetUserPrompt::render(&HashMap::new());
        assert!(matches!(result, Err(PromptError::MissingArgument(_))));
    }
}
