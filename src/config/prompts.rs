//! Prompt templates for vidsum.
//!
//! Prompts can be customized by placing TOML files in the custom prompts directory.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Collection of all prompt templates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct Prompts {
    pub summary: SummaryPrompts,
    pub qa: QaPrompts,
    pub mindmap: MindMapPrompts,
    /// Custom variables from config, available in all prompts.
    #[serde(skip)]
    pub variables: HashMap<String, String>,
}

/// Prompt for two-part video summaries.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryPrompts {
    pub instruction: String,
}

impl Default for SummaryPrompts {
    fn default() -> Self {
        Self {
            instruction: r#"
You are a YouTube video summarizer. You will be taking the transcript text
and generating two types of summaries:
1. **Overview:** A concise bullet-point summary with the key highlights (max 200 words).
2. **Detailed Summary:** A thorough, paragraph-style summary explaining the entire video content in detail (max 400 words).
"#
            .to_string(),
        }
    }
}

/// Prompt for questions about a video.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QaPrompts {
    pub instruction: String,
}

impl Default for QaPrompts {
    fn default() -> Self {
        Self {
            instruction: r#"
You are an expert on video content. Answer questions about the video content
based on the provided transcript. Be concise and accurate.
"#
            .to_string(),
        }
    }
}

/// Prompt for topic trees.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MindMapPrompts {
    pub instruction: String,
}

impl Default for MindMapPrompts {
    fn default() -> Self {
        Self {
            instruction: r#"You are a video content analyst. Build a mind map of the main topics covered in the transcript below.

Respond with a single JSON object of the form:
{"name": "<central topic>", "children": [{"name": "<subtopic>", "children": [...]}]}

Rules:
- Use at most 3 levels below the root
- Keep each name under 8 words
- Leaf nodes have an empty "children" array

Transcript:
"#
            .to_string(),
        }
    }
}

impl Prompts {
    /// Load prompts from the default location, with optional custom directory and variables.
    pub fn load(
        custom_dir: Option<&str>,
        custom_variables: Option<&HashMap<String, String>>,
    ) -> crate::error::Result<Self> {
        let mut prompts = Prompts::default();

        if let Some(vars) = custom_variables {
            prompts.variables = vars.clone();
        }

        if let Some(dir) = custom_dir {
            let custom_path = PathBuf::from(shellexpand::tilde(dir).to_string());

            let summary_path = custom_path.join("summary.toml");
            if summary_path.exists() {
                let content = std::fs::read_to_string(&summary_path)?;
                prompts.summary = toml::from_str(&content)?;
            }

            let qa_path = custom_path.join("qa.toml");
            if qa_path.exists() {
                let content = std::fs::read_to_string(&qa_path)?;
                prompts.qa = toml::from_str(&content)?;
            }

            let mindmap_path = custom_path.join("mindmap.toml");
            if mindmap_path.exists() {
                let content = std::fs::read_to_string(&mindmap_path)?;
                prompts.mindmap = toml::from_str(&content)?;
            }
        }

        Ok(prompts)
    }

    /// Render a prompt template with the given variables.
    pub fn render(template: &str, vars: &HashMap<String, String>) -> String {
        let mut result = template.to_string();
        for (key, value) in vars {
            result = result.replace(&format!("{{{{{}}}}}", key), value);
        }
        result
    }

    /// Render a template with the custom config variables only.
    pub fn render_custom(&self, template: &str) -> String {
        Self::render(template, &self.variables)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prompts() {
        let prompts = Prompts::default();
        assert!(prompts.summary.instruction.contains("**Detailed Summary:**"));
        assert!(!prompts.qa.instruction.is_empty());
        assert!(prompts.mindmap.instruction.contains("children"));
    }

    #[test]
    fn test_render_template() {
        let template = "Hello {{name}}, you have {{count}} messages.";
        let mut vars = HashMap::new();
        vars.insert("name".to_string(), "Alice".to_string());
        vars.insert("count".to_string(), "5".to_string());

        let result = Prompts::render(template, &vars);
        assert_eq!(result, "Hello Alice, you have 5 messages.");
    }

    #[test]
    fn test_custom_dir_overrides_one_prompt() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("qa.toml"),
            "instruction = \"Answer in {{language}}.\"\n",
        )
        .unwrap();

        let mut vars = HashMap::new();
        vars.insert("language".to_string(), "Norwegian".to_string());

        let prompts = Prompts::load(dir.path().to_str(), Some(&vars)).unwrap();
        assert_eq!(prompts.render_custom(&prompts.qa.instruction), "Answer in Norwegian.");
        assert_eq!(prompts.summary.instruction, SummaryPrompts::default().instruction);
    }
}
