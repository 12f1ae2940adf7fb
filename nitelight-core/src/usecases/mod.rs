mod error;
mod filter_venues;
mod normalize_venues;

pub use self::{error::Error, filter_venues::*, normalize_venues::*};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::entities::*;
}
