use std::fmt::{Display, Debug};
use itertools::Itertools;
use num_traits::{Zero, WrappingAdd};

use crate::{Coeff, Term};
use crate::util::format::{lc, mono};

// A sparse univariate polynomial Σ cᵢxⁱ over a primitive integer type R.
//
// Terms are kept in a vector sorted by strictly descending exponent,
// with no repeated exponent and no zero coefficient. The empty vector
// is the zero polynomial. Every mutation goes through `add_term`, or
// through `from_sorted` for data already in normal form.
//
// Overflow is handled the same way in debug and release builds:
// coefficients wrap around (two's complement), while an exponent that
// would exceed `usize::MAX` is never produced. `checked_mul` reports it
// as `None`, and `*` / `pow` panic with "exponent overflow". Parsed
// exponents are bounded by `MAX_EXP`, so a product of two parsed
// polynomials always fits.

#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct SparsePoly<R = i64> {
    terms: Vec<Term<R>>
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Style {
    /// `3x^2 - 1x^1 + 2`
    #[default] Ascii,
    /// `3x² - x + 2`
    Unicode
}

impl<R> SparsePoly<R>
where R: Coeff {
    pub fn new() -> Self {
        Self { terms: vec![] }
    }

    pub fn from_const(c: R) -> Self {
        Self::mono(c, 0)
    }

    pub fn mono(c: R, exp: usize) -> Self {
        let mut p = Self::new();
        p.add_term(c, exp);
        p
    }

    pub fn variable() -> Self {
        Self::mono(R::one(), 1)
    }

    // `terms` must already be in normal form.
    pub(crate) fn from_sorted(terms: Vec<Term<R>>) -> Self {
        debug_assert!(terms.windows(2).all(|w| w[0].exp > w[1].exp));
        debug_assert!(terms.iter().all(|t| !t.is_zero()));
        Self { terms }
    }

    /// Adds `coeff * x^exp`, merging with an existing term of the same
    /// exponent. A term whose coefficient becomes zero is removed, and a
    /// zero `coeff` with no matching term is a no-op.
    pub fn add_term(&mut self, coeff: R, exp: usize) {
        // position of the first term with exponent <= exp.
        match self.terms.binary_search_by(|t| exp.cmp(&t.exp)) {
            Ok(i) => {
                let c = self.terms[i].coeff.wrapping_add(&coeff);
                if c.is_zero() {
                    self.terms.remove(i);
                } else {
                    self.terms[i].coeff = c;
                }
            },
            Err(i) => if !coeff.is_zero() {
                self.terms.insert(i, Term::new(coeff, exp))
            }
        }
    }

    pub fn terms(&self) -> &[Term<R>] {
        &self.terms
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Term<R>> {
        self.terms.iter()
    }

    pub fn nterms(&self) -> usize {
        self.terms.len()
    }

    pub fn is_const(&self) -> bool {
        self.terms.iter().all(|t| t.is_const())
    }

    pub fn lead_term(&self) -> Option<&Term<R>> {
        self.terms.first()
    }

    /// `None` for the zero polynomial.
    pub fn degree(&self) -> Option<usize> {
        self.lead_term().map(|t| t.exp)
    }

    pub fn lead_coeff(&self) -> R {
        self.lead_term().map(|t| t.coeff).unwrap_or_else(R::zero)
    }

    pub fn coeff(&self, exp: usize) -> R {
        match self.terms.binary_search_by(|t| exp.cmp(&t.exp)) {
            Ok(i)  => self.terms[i].coeff,
            Err(_) => R::zero()
        }
    }

    pub fn const_term(&self) -> R {
        self.coeff(0)
    }

    pub fn to_terms(&self) -> Vec<(R, usize)> {
        self.iter().map(|t| (t.coeff, t.exp)).collect()
    }

    /// Evaluates the polynomial at `x`, taking `x^0 = 1` for every `x`
    /// (so the constant term survives at `x = 0`). The zero polynomial
    /// evaluates to `0`.
    pub fn evaluate(&self, x: f64) -> f64 {
        self.iter().fold(0.0, |acc, t| acc + t.eval(x))
    }

    pub fn map_coeffs<F>(&self, f: F) -> Self
    where F: Fn(R) -> R {
        let terms = self.iter().filter_map(|t| {
            let c = f(t.coeff);
            (!c.is_zero()).then(|| Term::new(c, t.exp))
        }).collect_vec();
        Self::from_sorted(terms)
    }

    pub fn to_string_with(&self, style: Style) -> String {
        let unicode = style == Style::Unicode;
        let terms = self.iter().map(|t|
            (mono(t.exp, unicode), t.coeff.to_string())
        );
        lc(terms, unicode)
    }
}

impl<R> From<Term<R>> for SparsePoly<R>
where R: Coeff {
    fn from(t: Term<R>) -> Self {
        Self::mono(t.coeff, t.exp)
    }
}

impl<R> From<Vec<(R, usize)>> for SparsePoly<R>
where R: Coeff {
    fn from(terms: Vec<(R, usize)>) -> Self {
        Self::from_iter(terms)
    }
}

impl<R> FromIterator<(R, usize)> for SparsePoly<R>
where R: Coeff {
    fn from_iter<T: IntoIterator<Item = (R, usize)>>(iter: T) -> Self {
        let mut p = Self::new();
        for (c, e) in iter {
            p.add_term(c, e);
        }
        p
    }
}

impl<R> FromIterator<Term<R>> for SparsePoly<R>
where R: Coeff {
    fn from_iter<T: IntoIterator<Item = Term<R>>>(iter: T) -> Self {
        Self::from_iter(iter.into_iter().map(|t| (t.coeff, t.exp)))
    }
}

impl<R> IntoIterator for SparsePoly<R> {
    type Item = Term<R>;
    type IntoIter = std::vec::IntoIter<Term<R>>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.into_iter()
    }
}

impl<'a, R> IntoIterator for &'a SparsePoly<R> {
    type Item = &'a Term<R>;
    type IntoIter = std::slice::Iter<'a, Term<R>>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

impl<R> Display for SparsePoly<R>
where R: Coeff {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_string_with(Style::Ascii))
    }
}

impl<R> Debug for SparsePoly<R>
where R: Coeff {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "serde")] {
        use serde::{Serialize, Serializer, Deserialize, Deserializer};

        // Serialized as a list of `[coeff, exp]` pairs. Deserialization
        // rebuilds through `add_term`, so unsorted or redundant input is
        // normalized.

        impl<R> Serialize for SparsePoly<R>
        where R: Coeff + Serialize {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where S: Serializer {
                serializer.collect_seq(self.iter().map(|t| (t.coeff, t.exp)))
            }
        }

        impl<'de, R> Deserialize<'de> for SparsePoly<R>
        where R: Coeff + Deserialize<'de> {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where D: Deserializer<'de> {
                let terms = Vec::<(R, usize)>::deserialize(deserializer)?;
                Ok(Self::from(terms))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type P = SparsePoly<i64>;

    fn exps(p: &P) -> Vec<usize> {
        p.iter().map(|t| t.exp).collect()
    }

    #[test]
    fn init() {
        let f = P::from_iter([(3, 2), (2, 0), (5, 1)]);
        assert_eq!(f.to_terms(), vec![(3, 2), (5, 1), (2, 0)]);
        assert_eq!(f.nterms(), 3);
        assert_eq!(&f.to_string(), "3x^2 + 5x^1 + 2");
    }

    #[test]
    fn zero() {
        let z = P::new();
        assert!(z.is_zero());
        assert_eq!(z, P::default());
        assert_eq!(z, P::from(vec![]));
        assert_eq!(z.nterms(), 0);
        assert_eq!(z.degree(), None);
        assert_eq!(z.lead_coeff(), 0);
        assert_eq!(&z.to_string(), "0");
    }

    #[test]
    fn add_term_sorted() {
        let mut f = P::new();
        f.add_term(1, 3);
        f.add_term(2, 7);
        f.add_term(3, 0);
        f.add_term(4, 5);
        assert_eq!(exps(&f), vec![7, 5, 3, 0]);
    }

    #[test]
    fn add_term_merge() {
        let mut f = P::from_iter([(3, 2), (2, 0), (5, 1)]);
        f.add_term(4, 1);
        assert_eq!(f.to_terms(), vec![(3, 2), (9, 1), (2, 0)]);
    }

    #[test]
    fn add_term_cancel() {
        let mut f = P::from_iter([(3, 2), (2, 0), (5, 1)]);
        f.add_term(-3, 2);
        assert_eq!(f.to_terms(), vec![(5, 1), (2, 0)]);
        assert_eq!(&f.to_string(), "5x^1 + 2");

        f.add_term(-2, 0);
        f.add_term(-5, 1);
        assert!(f.is_zero());
    }

    #[test]
    fn add_term_zero_coeff() {
        let mut f = P::from_iter([(3, 2)]);
        f.add_term(0, 1);
        f.add_term(0, 2);
        assert_eq!(f.to_terms(), vec![(3, 2)]);

        let g = P::from_iter([(0, 4), (0, 0)]);
        assert!(g.is_zero());
    }

    #[test]
    fn add_term_wraps() {
        let mut f = SparsePoly::<i32>::from_const(i32::MAX);
        f.add_term(1, 0);
        assert_eq!(f.to_terms(), vec![(i32::MIN, 0)]);

        f.add_term(i32::MIN, 0);
        assert!(f.is_zero());
    }

    #[test]
    fn duplicate_input() {
        let f = P::from_iter([(1, 1), (2, 1), (3, 1), (-6, 1), (7, 0)]);
        assert_eq!(f.to_terms(), vec![(7, 0)]);
    }

    #[test]
    fn accessors() {
        let f = P::from_iter([(2, 0), (3, 1), (-4, 5)]);
        assert_eq!(f.degree(), Some(5));
        assert_eq!(f.lead_coeff(), -4);
        assert_eq!(f.lead_term(), Some(&Term::new(-4, 5)));
        assert_eq!(f.coeff(1), 3);
        assert_eq!(f.coeff(2), 0);
        assert_eq!(f.const_term(), 2);
        assert!(!f.is_const());

        let c = P::from_const(7);
        assert!(c.is_const());
        assert_eq!(c.degree(), Some(0));

        let x = P::variable();
        assert_eq!(x.to_terms(), vec![(1, 1)]);
        assert_eq!(P::mono(0, 3), P::new());
    }

    #[test]
    fn evaluate() {
        let f = P::from_iter([(3, 2), (2, 0)]);
        assert_eq!(f.evaluate(2.0), 14.0);
        assert_eq!(f.evaluate(0.0), 2.0);
        assert_eq!(f.evaluate(-1.0), 5.0);
        assert_eq!(P::new().evaluate(3.5), 0.0);
    }

    #[test]
    fn map_coeffs() {
        let f = P::from_iter([(3, 2), (2, 0), (4, 1)]);
        let g = f.map_coeffs(|c| c % 2);
        assert_eq!(g.to_terms(), vec![(1, 2)]);
    }

    #[test]
    fn clone_is_deep() {
        let f = P::from_iter([(3, 2), (2, 0)]);
        let mut g = f.clone();
        g.add_term(1, 1);
        assert_eq!(f.nterms(), 2);
        assert_eq!(g.nterms(), 3);

        let mut h = P::from_const(9);
        h.clone_from(&P::new());
        assert!(h.is_zero());
    }

    #[test]
    fn display() {
        let f = P::from_iter([(-3, 2), (1, 1), (-2, 0)]);
        assert_eq!(&f.to_string(), "-3x^2 + 1x^1 - 2");
        assert_eq!(&format!("{f:?}"), "-3x^2 + 1x^1 - 2");
        assert_eq!(&P::from_const(-4).to_string(), "-4");
    }

    #[test]
    fn display_unicode() {
        let f = P::from_iter([(-1, 3), (1, 1), (-2, 0), (12, 10)]);
        assert_eq!(&f.to_string_with(Style::Unicode), "12x¹⁰ - x³ + x - 2");
        assert_eq!(&P::new().to_string_with(Style::Unicode), "0");
        assert_eq!(&P::from_const(1).to_string_with(Style::Unicode), "1");
    }

    #[test]
    fn into_iter() {
        let f = P::from_iter([(1, 0), (2, 4)]);
        let ts: Vec<_> = (&f).into_iter().copied().collect();
        assert_eq!(ts, vec![Term::new(2, 4), Term::new(1, 0)]);

        let g: P = f.clone().into_iter().collect();
        assert_eq!(f, g);
    }

    #[test]
    #[cfg(feature = "serde")]
    fn serialize() {
        let f = P::from_iter([(3, 2), (2, 0), (5, 1)]);

        let ser = serde_json::to_string(&f).unwrap();
        assert_eq!(&ser, "[[3,2],[5,1],[2,0]]");

        let des: P = serde_json::from_str(&ser).unwrap();
        assert_eq!(f, des);
    }

    #[test]
    #[cfg(feature = "serde")]
    fn deserialize_normalizes() {
        let des: P = serde_json::from_str("[[1,0],[4,3],[0,2],[-1,0]]").unwrap();
        assert_eq!(des.to_terms(), vec![(4, 3)]);
    }
}
