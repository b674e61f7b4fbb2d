/*!
 * Mock provider implementations for testing.
 *
 * This module provides a mock inference provider that simulates different
 * behaviors:
 * - `MockInference::echo()` - Succeeds, returning the request input
 * - `MockInference::fixed(...)` - Succeeds with a canned response
 * - `MockInference::empty()` - Succeeds with empty output
 * - `MockInference::failing()` - Always fails with an error
 */

use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::errors::ProviderError;
use crate::providers::Provider;
use crate::providers::huggingface::{InferenceOutput, InferenceRequest};

/// Behavior mode for the mock provider
#[derive(Debug, Clone, PartialEq)]
pub enum MockBehavior {
    /// Succeed and return the request input unchanged
    Echo,
    /// Succeed with a fixed response text
    Fixed(String),
    /// Succeed with an empty output
    Empty,
    /// Succeed with a response carrying no outputs at all
    NoOutputs,
    /// Always fail with a request error
    Failing,
}

/// Mock inference provider for testing capability services
#[derive(Debug)]
pub struct MockInference {
    /// Behavior mode
    behavior: MockBehavior,
    /// Number of completed requests
    request_count: AtomicUsize,
    /// Inputs of the most recent request
    last_inputs: Mutex<Option<String>>,
    /// Model of the most recent request
    last_model: Mutex<Option<String>>,
}

impl MockInference {
    /// Create a new mock provider with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            request_count: AtomicUsize::new(0),
            last_inputs: Mutex::new(None),
            last_model: Mutex::new(None),
        }
    }

    /// Create a mock that echoes the request input
    pub fn echo() -> Self {
        Self::new(MockBehavior::Echo)
    }

    /// Create a mock that returns a fixed response
    pub fn fixed(text: impl Into<String>) -> Self {
        Self::new(MockBehavior::Fixed(text.into()))
    }

    /// Create a mock that returns empty output
    pub fn empty() -> Self {
        Self::new(MockBehavior::Empty)
    }

    /// Create a mock that returns a response without outputs
    pub fn no_outputs() -> Self {
        Self::new(MockBehavior::NoOutputs)
    }

    /// Create a mock that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Number of requests completed so far
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }

    /// The inputs of the most recent request, if any
    pub fn last_inputs(&self) -> Option<String> {
        self.last_inputs.lock().expect("mock lock poisoned").clone()
    }

    /// The model of the most recent request, if any
    pub fn last_model(&self) -> Option<String> {
        self.last_model.lock().expect("mock lock poisoned").clone()
    }
}

#[async_trait]
impl Provider for MockInference {
    type Request = InferenceRequest;
    type Response = Vec<InferenceOutput>;

    async fn complete(&self, request: InferenceRequest) -> Result<Vec<InferenceOutput>, ProviderError> {
        self.request_count.fetch_add(1, Ordering::SeqCst);
        *self.last_inputs.lock().expect("mock lock poisoned") = Some(request.inputs.clone());
        *self.last_model.lock().expect("mock lock poisoned") = Some(request.model.clone());

        match &self.behavior {
            MockBehavior::Echo => Ok(vec![InferenceOutput::Generated {
                generated_text: request.inputs,
            }]),
            MockBehavior::Fixed(text) => Ok(vec![InferenceOutput::Generated {
                generated_text: text.clone(),
            }]),
            MockBehavior::Empty => Ok(vec![InferenceOutput::Generated {
                generated_text: String::new(),
            }]),
            MockBehavior::NoOutputs => Ok(Vec::new()),
            MockBehavior::Failing => Err(ProviderError::RequestFailed(
                "Mock provider is set to fail".to_string(),
            )),
        }
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        match self.behavior {
            MockBehavior::Failing => Err(ProviderError::ConnectionError(
                "Mock provider is set to fail".to_string(),
            )),
            _ => Ok(()),
        }
    }

    fn extract_text(response: &Vec<InferenceOutput>) -> String {
        response
            .first()
            .map(|output| output.text().to_string())
            .unwrap_or_default()
    }
}
