pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid color literal: {value} (expected #rrggbb or #rgb)")]
    InvalidColor { value: String },

    #[error("Unknown gender: {value} (expected `male` or `female`)")]
    UnknownGender { value: String },

    #[error("Unknown view: {value} (expected `front` or `back`)")]
    UnknownView { value: String },

    #[error("Invalid JSON ({context}): {source}")]
    Json {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid YAML ({context}): {source}")]
    Yaml {
        context: &'static str,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid JSON5 ({context}): {message}")]
    Json5 {
        context: &'static str,
        message: String,
    },
}
