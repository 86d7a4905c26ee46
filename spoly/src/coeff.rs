use std::fmt::{Debug, Display};
use std::str::FromStr;
use num_traits::{AsPrimitive, PrimInt, Signed, WrappingAdd, WrappingSub, WrappingMul, WrappingNeg};

// Coefficient types of `SparsePoly`: the signed primitive integers.
// Arithmetic on coefficients is two's-complement wrapping in every
// build profile.

pub trait Coeff: 
    PrimInt + 
    Signed + 
    WrappingAdd + 
    WrappingSub + 
    WrappingMul + 
    WrappingNeg + 
    AsPrimitive<f64> + 
    FromStr + 
    Default + 
    Display + 
    Debug + 
    Send + 
    Sync + 
    'static
{}

impl<T> Coeff for T where T: 
    PrimInt + 
    Signed + 
    WrappingAdd + 
    WrappingSub + 
    WrappingMul + 
    WrappingNeg + 
    AsPrimitive<f64> + 
    FromStr + 
    Default + 
    Display + 
    Debug + 
    Send + 
    Sync + 
    'static
{}
