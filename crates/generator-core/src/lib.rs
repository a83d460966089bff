pub mod generation;
pub mod presets;
pub mod record;
pub mod templates;
pub mod types;
pub mod validation;

pub use generation::{GenerationService, DEFAULT_GENERATE_DELAY};
pub use presets::{presets, Preset};
pub use record::{SaveDraft, SaveRecord, DEFAULT_SOURCE};
pub use templates::{excerpt_limit, render, truncate, ELLIPSIS};
pub use types::{
    text_field, GenerationRequest, GenerationResult, OutputLength, ParseEnumError, Tone,
    ValidatedRequest,
};
pub use validation::{validate, ValidationError};
