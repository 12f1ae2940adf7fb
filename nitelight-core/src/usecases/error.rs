use nitelight_entities::geo::PointParseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid position")]
    InvalidPosition,
    #[error("Invalid radius")]
    InvalidRadius,
}

impl From<PointParseError> for Error {
    fn from(_: PointParseError) -> Self {
        Self::InvalidPosition
    }
}
