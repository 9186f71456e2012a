//! Fixed parameters of the Winter π spigot.
//!
//! Kept free of dependencies so both the generator and anything that wants
//! to check its output can agree on the same numbers.

pub mod reference;
pub mod specs;
