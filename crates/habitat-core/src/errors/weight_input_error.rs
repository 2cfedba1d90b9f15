/// A single unusable weight input.
///
/// Recovered inside the weight resolver (the whole vector resets to defaults);
/// callers of the engine never see it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WeightInputError {
    #[error("weight for {dimension} is not a number: '{raw}'")]
    InvalidNumber { dimension: String, raw: String },

    #[error("weight for {dimension} is not finite: '{raw}'")]
    NonFinite { dimension: String, raw: String },

    #[error("weight for {dimension} is negative: {value}")]
    Negative { dimension: String, value: f64 },
}
