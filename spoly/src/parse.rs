//! The term-list text format.
//!
//! A polynomial is written as a term count `n` followed by `n` pairs
//! `coeff exp`, all separated by whitespace:
//!
//! ```text
//! 3   3 2   2 0   5 1      # 3x^2 + 5x^1 + 2
//! ```
//!
//! Pairs may come in any order and may repeat an exponent; they are
//! merged exactly as by `SparsePoly::add_term`. Exponents above
//! [`MAX_EXP`] are rejected.

use std::str::FromStr;
use derive_more::Display;
use itertools::Itertools;

use crate::{Coeff, SparsePoly};

/// Largest exponent accepted by the reader. The product of two parsed
/// polynomials stays below `usize::MAX`.
pub const MAX_EXP: usize = usize::MAX / 4;

#[derive(Clone, PartialEq, Eq, Debug, Display)]
pub enum ParseError {
    #[display("missing term count")]
    MissingCount,

    #[display("invalid term count: '{_0}'")]
    InvalidCount(String),

    #[display("missing coefficient of term {index}")]
    MissingCoeff { index: usize },

    #[display("missing exponent of term {index}")]
    MissingExp { index: usize },

    #[display("invalid coefficient of term {index}: '{token}'")]
    InvalidCoeff { index: usize, token: String },

    #[display("invalid exponent of term {index}: '{token}'")]
    InvalidExp { index: usize, token: String },

    #[display("exponent of term {index} is too large: '{token}'")]
    ExpTooLarge { index: usize, token: String },

    #[display("unexpected trailing input: '{_0}'")]
    TrailingInput(String),
}

impl std::error::Error for ParseError {}

/// Reads one polynomial from `tokens`, consuming exactly the tokens that
/// belong to it. Nothing is returned unless every term is read.
pub fn read_poly<R, I, S>(tokens: &mut I) -> Result<SparsePoly<R>, ParseError>
where
    R: Coeff,
    I: Iterator<Item = S>,
    S: AsRef<str>
{
    use ParseError::*;

    let n = tokens.next().ok_or(MissingCount)?;
    let n = n.as_ref();
    let n = usize::from_str(n).map_err(|_| InvalidCount(n.to_string()))?;

    let mut p = SparsePoly::new();

    for index in 0..n {
        let c = tokens.next().ok_or(MissingCoeff { index })?;
        let c = c.as_ref();
        let c = R::from_str(c).map_err(|_|
            InvalidCoeff { index, token: c.to_string() }
        )?;

        let e = tokens.next().ok_or(MissingExp { index })?;
        let e = e.as_ref();
        let e = match usize::from_str(e) {
            Ok(e) if e <= MAX_EXP => e,
            Ok(_) => return Err(ExpTooLarge { index, token: e.to_string() }),
            Err(_) => return Err(InvalidExp { index, token: e.to_string() })
        };

        p.add_term(c, e);
    }

    Ok(p)
}

impl<R> FromStr for SparsePoly<R>
where R: Coeff {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let p = read_poly(&mut tokens)?;

        if let Some(t) = tokens.next() {
            return Err(ParseError::TrailingInput(t.to_string()))
        }

        Ok(p)
    }
}

impl<R> SparsePoly<R>
where R: Coeff {
    /// Writes the polynomial back in the term-list format, highest
    /// exponent first. The zero polynomial is `"0"`.
    pub fn to_input_string(&self) -> String {
        let n = self.nterms().to_string();
        let terms = self.iter().map(|t| format!("{} {}", t.coeff, t.exp));
        std::iter::once(n).chain(terms).join(" ")
    }
}
