mod error;
mod obj;
mod rescale;
mod util;

pub use error::*;
pub use obj::*;
pub use rescale::*;
pub use util::*;

pub type Result<T, E = Error> = std::result::Result<T, E>;
