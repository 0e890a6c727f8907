use thiserror::Error;

pub type BaremeResult<T> = Result<T, BaremeError>;

#[derive(Error, Debug)]
pub enum BaremeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Excel error: {0}")]
    Xlsx(String),

    #[error("Header error: {0}")]
    Header(String),

    #[error("Path conflict: {0}")]
    PathConflict(String),
}
