use crate::domain::errors::{DataError, NetworkResult};
use crate::domain::logging::{LogComponent, get_logger};
use crate::infrastructure::http::ServiceEndpoints;
use gloo_net::http::Request;

#[derive(Debug, serde::Serialize)]
struct ChatRequestDto<'a> {
    user_question: &'a str,
    context: &'a str,
}

#[derive(Debug, serde::Deserialize)]
struct ChatReplyDto {
    chatbot_response: String,
    #[serde(default)]
    context: String,
}

/// Reply plus the context string to echo on the next request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub response: String,
    pub context: String,
}

/// Client for the assistant microservice.
pub struct ChatClient {
    base_url: String,
}

impl ChatClient {
    pub fn new() -> Self {
        Self { base_url: ServiceEndpoints::default().chat }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    pub fn chat_url(&self) -> String {
        format!("{}/chat", self.base_url)
    }

    pub async fn send(&self, question: &str, context: &str) -> NetworkResult<ChatReply> {
        get_logger().debug(LogComponent::Infrastructure("ChatAPI"), "Sending chat message");

        let body = ChatRequestDto { user_question: question, context };
        let response = Request::post(&self.chat_url())
            .json(&body)
            .map_err(|e| DataError::ParseError(format!("{e:?}")))?
            .send()
            .await
            .map_err(|e| DataError::NetworkError(format!("{e:?}")))?;

        if !response.ok() {
            return Err(DataError::HttpStatus(response.status()));
        }

        let reply: ChatReplyDto =
            response.json().await.map_err(|e| DataError::ParseError(format!("{e:?}")))?;

        Ok(ChatReply { response: reply.chatbot_response, context: reply.context })
    }
}

impl Default for ChatClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_url_appends_route() {
        let client = ChatClient::with_base_url("http://chat.local");
        assert_eq!(client.chat_url(), "http://chat.local/chat");
    }

    #[test]
    fn reply_context_defaults_to_empty() {
        let reply: ChatReplyDto =
            serde_json::from_str(r#"{"chatbot_response":"hi"}"#).unwrap();
        assert_eq!(reply.chatbot_response, "hi");
        assert!(reply.context.is_empty());
    }
}
