pub mod chain;

pub use chain::{linearize, next_link, ChainLink, Relation};
