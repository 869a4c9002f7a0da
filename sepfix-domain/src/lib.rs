//! Deterministic separator repair.
//!
//! This crate owns the rewrite decision: which lines are decorative
//! separator banners, what the canonical banner looks like, and how a
//! whole text folds into its repaired form. It is pure. File discovery
//! and persistence live in `sepfix-core`.
//!
//! The bias throughout is conservative: a missed banner is a cosmetic
//! blemish, a false positive corrupts somebody's code. Anything the
//! classifier is not sure about is left byte-identical.

pub mod classify;
pub mod normalize;
pub mod rewrite;
pub mod scrub;

pub use classify::{Classification, classify};
pub use normalize::{SEPARATOR_RUN, SEPARATOR_WIDTH, canonical_line};
pub use rewrite::{Rewrite, TextUnit, process};
pub use scrub::{GARBAGE_CHAR, scrub};
