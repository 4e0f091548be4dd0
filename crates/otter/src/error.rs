#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid physics config: `{field}` = {value}")]
    InvalidConfig { field: &'static str, value: f64 },
}

pub type Result<T> = std::result::Result<T, Error>;
