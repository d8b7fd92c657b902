//! Exact rational numbers used for every intermediate value of a search

mod rational;

pub use rational::Number;
