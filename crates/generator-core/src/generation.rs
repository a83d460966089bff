use std::time::Duration;

use crate::templates::render;
use crate::types::{GenerationRequest, GenerationResult};
use crate::validation::{validate, ValidationError};

pub const DEFAULT_GENERATE_DELAY: Duration = Duration::from_millis(300);

/// Validates a request and renders the matching template.
#[derive(Debug, Clone)]
pub struct GenerationService {
    delay: Duration,
}

impl Default for GenerationService {
    fn default() -> Self {
        Self::new(DEFAULT_GENERATE_DELAY)
    }
}

impl GenerationService {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn compose(&self, request: &GenerationRequest) -> Result<GenerationResult, ValidationError> {
        let validated = validate(request)?;
        let output = render(
            &validated.topic,
            validated.tone,
            validated.output_length,
            &validated.input,
        );
        log::debug!(
            "Rendered {}/{} template ({} chars)",
            validated.tone,
            validated.output_length,
            output.chars().count()
        );
        Ok(GenerationResult { output })
    }

    /// Like [`compose`](Self::compose), then waits out the configured delay
    /// on a timer. Failures return immediately.
    pub async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, ValidationError> {
        let result = self.compose(request)?;
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(result)
    }
}
