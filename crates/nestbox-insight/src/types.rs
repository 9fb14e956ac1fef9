//! Wire types for the OpenAI-compatible chat-completions API and the
//! fragments Nestbox pulls out of model responses.

use serde::{Deserialize, Serialize};

/// A single chat message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message role: `"system"` or `"user"`.
    pub role: String,
    /// Message text.
    pub content: String,
}

/// Chat-completions request body.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// Model identifier.
    pub model: String,
    /// Conversation messages.
    pub messages: Vec<ChatMessage>,
    /// Sampling temperature.
    pub temperature: f32,
    /// Completion token cap.
    pub max_completion_tokens: u32,
}

/// Chat-completions response body (the fields Nestbox reads).
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    /// Completion choices; the first one is used.
    pub choices: Vec<ChatChoice>,
}

/// One completion choice.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    /// The generated message.
    pub message: ChatMessage,
}

/// The single recommended file the model embeds in its prose as a JSON
/// fragment. Parsed best-effort; a malformed fragment degrades to None.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Full file name, with extension.
    pub name: String,
    /// Retrievable URL of the file.
    pub url: String,
}

impl Recommendation {
    /// Pull the first JSON object embedded in prose and try to parse it
    /// as a recommendation.
    pub fn extract(content: &str) -> Option<Self> {
        let start = content.find('{')?;
        let mut depth = 0usize;
        for (offset, ch) in content[start..].char_indices() {
            match ch {
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        let fragment = &content[start..start + offset + 1];
                        return serde_json::from_str(fragment).ok();
                    }
                }
                _ => {}
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_plain_object() {
        let rec = Recommendation::extract(r#"{"name": "notes.txt", "url": "http://x/1"}"#);
        assert_eq!(
            rec,
            Some(Recommendation {
                name: "notes.txt".to_string(),
                url: "http://x/1".to_string(),
            })
        );
    }

    #[test]
    fn test_extract_object_embedded_in_prose() {
        let content = "Here you go: {\"name\": \"a.pdf\", \"url\": \"u\"} — enjoy!";
        let rec = Recommendation::extract(content).unwrap();
        assert_eq!(rec.name, "a.pdf");
    }

    #[test]
    fn test_extract_malformed_degrades_to_none() {
        assert_eq!(Recommendation::extract("NO files to analyse"), None);
        assert_eq!(Recommendation::extract("{\"name\": unquoted}"), None);
        assert_eq!(Recommendation::extract("{ truncated"), None);
    }
}
