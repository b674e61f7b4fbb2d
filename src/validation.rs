/*!
 * Request parameter validation.
 *
 * Malformed requests are rejected here, before the pipeline runs any
 * capability call, so failures are cheap and attributable.
 */

use crate::errors::PipelineError;
use crate::pipeline::SummaryRequest;

/// Validate a summary request against the pipeline's invariants.
///
/// Returns the first violated rule as a [`PipelineError::Validation`];
/// side-effect-free.
pub fn validate_request(request: &SummaryRequest) -> Result<(), PipelineError> {
    if request.text.trim().is_empty() {
        return Err(PipelineError::Validation(
            "Input text must be a non-empty string".to_string(),
        ));
    }

    if request.input_max_length == 0 {
        return Err(PipelineError::Validation(
            "input_max_length must be positive".to_string(),
        ));
    }

    if request.sum_min_length == 0 {
        return Err(PipelineError::Validation(
            "sum_min_length must be positive".to_string(),
        ));
    }

    if request.sum_min_length >= request.sum_max_length {
        return Err(PipelineError::Validation(
            "sum_max_length must be greater than sum_min_length".to_string(),
        ));
    }

    if request.num_beams == 0 {
        return Err(PipelineError::Validation(
            "num_beams must be positive".to_string(),
        ));
    }

    Ok(())
}
