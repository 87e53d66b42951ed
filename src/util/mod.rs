mod error;
mod serde;

pub use self::serde::*;
pub use error::*;
