use std::iter::{Sum, Product};
use std::ops::{Add, AddAssign, Sub, SubAssign, Mul, MulAssign, Neg};
use auto_impl_ops::auto_ops;
use itertools::{EitherOrBoth, Itertools};
use log::trace;
use num_traits::{Zero, One, Pow, WrappingAdd, WrappingSub, WrappingMul, WrappingNeg};

use crate::{Coeff, SparsePoly, Term};

impl<R> SparsePoly<R>
where R: Coeff {
    // Merge-walk of two descending term sequences. Terms only in `self`
    // pass through, terms only in `rhs` go through `right`, and terms
    // sharing an exponent are combined by `both`. Zero results are dropped.
    fn merge_with<F, G>(&self, rhs: &Self, right: G, both: F) -> Self
    where F: Fn(R, R) -> R, G: Fn(R) -> R {
        let terms = self.iter()
            .merge_join_by(rhs.iter(), |s, t| t.exp.cmp(&s.exp))
            .filter_map(|e| {
                let (c, exp) = match e {
                    EitherOrBoth::Left(s)    => (s.coeff, s.exp),
                    EitherOrBoth::Right(t)   => (right(t.coeff), t.exp),
                    EitherOrBoth::Both(s, t) => (both(s.coeff, t.coeff), s.exp),
                };
                (!c.is_zero()).then(|| Term::new(c, exp))
            })
            .collect_vec();

        Self::from_sorted(terms)
    }

    /// `self * rhs`, or `None` if some exponent of the product exceeds
    /// `usize::MAX`.
    pub fn checked_mul(&self, rhs: &Self) -> Option<Self> {
        let mut res = Self::zero();
        for (s, t) in self.iter().cartesian_product(rhs.iter()) {
            let exp = s.exp.checked_add(t.exp)?;
            res.add_term(s.coeff.wrapping_mul(&t.coeff), exp);
        }
        Some(res)
    }
}

impl<R> Zero for SparsePoly<R>
where R: Coeff {
    fn zero() -> Self {
        Self::new()
    }

    fn is_zero(&self) -> bool {
        self.terms().is_empty()
    }
}

impl<R> One for SparsePoly<R>
where R: Coeff {
    fn one() -> Self {
        Self::from_const(R::one())
    }

    fn is_one(&self) -> bool {
        self.nterms() == 1 && self.const_term().is_one()
    }
}

impl<R> Neg for SparsePoly<R>
where R: Coeff {
    type Output = Self;

    fn neg(self) -> Self::Output {
        -&self
    }
}

impl<R> Neg for &SparsePoly<R>
where R: Coeff {
    type Output = SparsePoly<R>;

    fn neg(self) -> Self::Output {
        self.map_coeffs(|c| c.wrapping_neg())
    }
}

#[auto_ops]
impl<R> Add for &SparsePoly<R>
where R: Coeff {
    type Output = SparsePoly<R>;

    fn add(self, rhs: Self) -> Self::Output {
        self.merge_with(rhs, |b| b, |a, b| a.wrapping_add(&b))
    }
}

#[auto_ops]
impl<R> Sub for &SparsePoly<R>
where R: Coeff {
    type Output = SparsePoly<R>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.merge_with(rhs, |b| b.wrapping_neg(), |a, b| a.wrapping_sub(&b))
    }
}

#[auto_ops]
impl<R> Mul for &SparsePoly<R>
where R: Coeff {
    type Output = SparsePoly<R>;

    fn mul(self, rhs: Self) -> Self::Output {
        trace!("mul: {} x {} terms", self.nterms(), rhs.nterms());

        match self.checked_mul(rhs) {
            Some(res) => res,
            None => panic!("exponent overflow: degree {:?} * degree {:?}", self.degree(), rhs.degree())
        }
    }
}

#[auto_ops]
impl<R> MulAssign<&R> for SparsePoly<R>
where R: Coeff {
    fn mul_assign(&mut self, rhs: &R) {
        let r = *rhs;
        *self = self.map_coeffs(|c| c.wrapping_mul(&r));
    }
}

macro_rules! impl_pow {
    ($t:ty) => {
        impl<R> Pow<$t> for &SparsePoly<R>
        where R: Coeff {
            type Output = SparsePoly<R>;

            // by repeated squaring.
            fn pow(self, n: $t) -> Self::Output {
                trace!("pow: {} terms, n = {n}", self.nterms());

                let mut res = SparsePoly::one();
                let mut base = self.clone();
                let mut n = n;

                while n > 0 {
                    if n & 1 == 1 {
                        res *= &base;
                    }
                    n >>= 1;
                    if n > 0 {
                        base = &base * &base;
                    }
                }
                res
            }
        }

        impl<R> Pow<$t> for SparsePoly<R>
        where R: Coeff {
            type Output = SparsePoly<R>;

            fn pow(self, n: $t) -> Self::Output {
                (&self).pow(n)
            }
        }
    };
}

impl_pow!(u32);
impl_pow!(usize);

impl<R> Sum for SparsePoly<R>
where R: Coeff {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, p| acc + p)
    }
}

impl<'a, R> Sum<&'a SparsePoly<R>> for SparsePoly<R>
where R: Coeff {
    fn sum<I: Iterator<Item = &'a SparsePoly<R>>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, p| acc + p)
    }
}

impl<R> Product for SparsePoly<R>
where R: Coeff {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::one(), |acc, p| acc * p)
    }
}

impl<'a, R> Product<&'a SparsePoly<R>> for SparsePoly<R>
where R: Coeff {
    fn product<I: Iterator<Item = &'a SparsePoly<R>>>(iter: I) -> Self {
        iter.fold(Self::one(), |acc, p| acc * p)
    }
}
