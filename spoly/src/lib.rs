mod coeff;
mod term;
mod poly;
mod ops;

pub mod parse;
pub mod util;

#[cfg(test)]
mod proptests;

pub use coeff::Coeff;
pub use term::Term;
pub use poly::{SparsePoly, Style};
pub use parse::{read_poly, ParseError, MAX_EXP};
