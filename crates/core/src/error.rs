#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A wire value that names no known variant of `kind`.
    #[error("Unknown {kind} value: {value}")]
    UnknownVariant { kind: &'static str, value: String },
}
