//! Topic trees for the browser client's mind map view.

use crate::config::Prompts;
use crate::error::{Result, VidsumError};
use crate::llm::{CompletionProvider, CompletionRequest};
use crate::youtube::Transcript;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, instrument};

/// A node in the topic tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MindMapNode {
    pub name: String,
    #[serde(default)]
    pub children: Vec<MindMapNode>,
}

impl MindMapNode {
    /// Total number of nodes, root included.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(MindMapNode::node_count).sum::<usize>()
    }
}

pub struct MindMapService {
    llm: Arc<dyn CompletionProvider>,
    prompts: Prompts,
}

impl MindMapService {
    pub fn new(llm: Arc<dyn CompletionProvider>, prompts: Prompts) -> Self {
        Self { llm, prompts }
    }

    /// Parse the completion, tolerating prose or code fences around the object.
    fn parse_tree(response: &str) -> Result<MindMapNode> {
        let json_str = match (response.find('{'), response.rfind('}')) {
            (Some(start), Some(end)) if end > start => &response[start..=end],
            _ => response,
        };

        serde_json::from_str(json_str).map_err(|e| {
            VidsumError::Llm(format!(
                "Failed to parse mind map response: {}. Response was: {}",
                e,
                response.chars().take(500).collect::<String>()
            ))
        })
    }

    #[instrument(skip(self, transcript), fields(video_id = %transcript.video_id))]
    pub async fn build(&self, transcript: &Transcript) -> Result<MindMapNode> {
        let instruction = self.prompts.render_custom(&self.prompts.mindmap.instruction);
        let request =
            CompletionRequest::new(format!("{}{}", instruction, transcript.text())).with_json_object();

        let completion = self.llm.complete(request).await?;
        let tree = Self::parse_tree(&completion)?;
        debug!("Mind map has {} nodes", tree.node_count());

        Ok(tree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::testing::StubCompletion;
    use crate::youtube::{CaptionFragment, VideoId};

    fn transcript() -> Transcript {
        Transcript::new(
            VideoId::parse("https://youtu.be/dQw4w9WgXcQ").unwrap(),
            vec![CaptionFragment::new("rust ownership and borrowing")],
        )
        .unwrap()
    }

    #[test]
    fn test_parse_tree_inside_code_fence() {
        let response = "```json\n{\"name\": \"Rust\", \"children\": [{\"name\": \"Ownership\"}]}\n```";
        let tree = MindMapService::parse_tree(response).unwrap();
        assert_eq!(tree.name, "Rust");
        assert_eq!(tree.children[0].name, "Ownership");
        assert!(tree.children[0].children.is_empty());
        assert_eq!(tree.node_count(), 2);
    }

    #[test]
    fn test_parse_tree_rejects_garbage() {
        assert!(matches!(
            MindMapService::parse_tree("no tree here"),
            Err(VidsumError::Llm(_))
        ));
    }

    #[tokio::test]
    async fn test_build_requests_json_object() {
        let llm = StubCompletion::replying(&[r#"{"name": "Rust", "children": []}"#]);
        let service = MindMapService::new(Arc::new(llm.clone()), Prompts::default());

        let tree = service.build(&transcript()).await.unwrap();
        assert_eq!(tree.name, "Rust");

        let requests = llm.requests.lock().unwrap();
        assert!(requests[0].json_object);
        assert!(requests[0].prompt.ends_with("rust ownership and borrowing"));
    }
}
