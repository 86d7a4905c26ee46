mod ctype;
mod helper;
pub(crate) mod dispatch;

pub use ctype::*;
pub use helper::*;
pub(crate) use dispatch::*;
