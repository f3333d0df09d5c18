//! Pure marketplace computations: everything here is a function over a
//! snapshot, recomputed per refresh cycle and never cached across them.

pub mod availability;
pub mod fulfillment;
pub mod grouping;
pub mod matching;
