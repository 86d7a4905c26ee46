pub mod arith;
pub mod eval;
pub mod session;
pub mod show;
