use std::fmt::{Display, Debug};
use num_traits::{AsPrimitive, Zero};

use crate::Coeff;
use crate::util::format::{lc, mono};

// `Term<R>` : a single summand `coeff * x^exp`.

#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Term<R> {
    pub coeff: R,
    pub exp: usize
}

impl<R> Term<R>
where R: Coeff {
    pub fn new(coeff: R, exp: usize) -> Self {
        Self { coeff, exp }
    }

    pub fn is_zero(&self) -> bool {
        self.coeff.is_zero()
    }

    pub fn is_const(&self) -> bool {
        self.exp == 0
    }

    /// Evaluates `coeff * x^exp`. The power is computed by repeated
    /// squaring, so `x^0 = 1` for every `x`, including `x = 0`.
    pub fn eval(&self, x: f64) -> f64 {
        let c: f64 = self.coeff.as_();
        c * num_traits::pow(x, self.exp)
    }
}

impl<R> From<(R, usize)> for Term<R>
where R: Coeff {
    fn from(pair: (R, usize)) -> Self {
        Self::new(pair.0, pair.1)
    }
}

impl<R> Display for Term<R>
where R: Coeff {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = lc(std::iter::once(
            (mono(self.exp, false), self.coeff.to_string())
        ), false);
        f.write_str(&s)
    }
}

impl<R> Debug for Term<R>
where R: Coeff {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}
