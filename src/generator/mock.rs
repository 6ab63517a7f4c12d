use super::client::DescriptionGenerator;
use super::error::GeneratorError;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Scripted generator for tests.
///
/// Responses are consumed in order. Once the queue is empty the fallback
/// text is returned if one was set, otherwise the call fails.
pub struct MockGenerator {
    responses: Mutex<VecDeque<MockResponse>>,
    fallback: Option<String>,
    inputs: Mutex<Vec<String>>,
    name: String,
}

#[derive(Debug, Clone)]
pub enum MockResponse {
    Text(String),
    Error(GeneratorError),
}

impl MockResponse {
    pub fn text(content: impl Into<String>) -> Self {
        MockResponse::Text(content.into())
    }

    pub fn error(error: GeneratorError) -> Self {
        MockResponse::Error(error)
    }

    pub fn failed(stderr: impl Into<String>) -> Self {
        MockResponse::Error(GeneratorError::Failed {
            command: "mock".to_string(),
            status: "exit status: 1".to_string(),
            stderr: stderr.into(),
        })
    }
}

impl MockGenerator {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            fallback: None,
            inputs: Mutex::new(Vec::new()),
            name: "MockGenerator".to_string(),
        }
    }

    /// A generator that answers every call with `text`
    pub fn always(text: impl Into<String>) -> Self {
        Self {
            fallback: Some(text.into()),
            ..Self::new()
        }
    }

    pub fn add_response(&self, response: MockResponse) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub fn add_responses(&self, responses: impl IntoIterator<Item = MockResponse>) {
        let mut queue = self.responses.lock().unwrap();
        for response in responses {
            queue.push_back(response);
        }
    }

    pub fn remaining_responses(&self) -> usize {
        self.responses.lock().unwrap().len()
    }

    pub fn call_count(&self) -> usize {
        self.inputs.lock().unwrap().len()
    }

    /// Content passed to each call, in call order
    pub fn inputs(&self) -> Vec<String> {
        self.inputs.lock().unwrap().clone()
    }
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DescriptionGenerator for MockGenerator {
    async fn describe(&self, content: &str) -> Result<String, GeneratorError> {
        self.inputs.lock().unwrap().push(content.to_string());

        let response = self.responses.lock().unwrap().pop_front();
        match response {
            Some(MockResponse::Text(text)) => Ok(text),
            Some(MockResponse::Error(error)) => Err(error),
            None => self.fallback.clone().ok_or_else(|| GeneratorError::Io {
                command: "mock".to_string(),
                message: "MockGenerator: No more responses in queue".to_string(),
            }),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn model_info(&self) -> Option<String> {
        Some("mock-model".to_string())
    }
}

impl std::fmt::Debug for MockGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockGenerator")
            .field("name", &self.name)
            .field("remaining_responses", &self.remaining_responses())
            .field("calls", &self.call_count())
            .finish()
    }
}
