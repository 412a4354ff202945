//! Tree construction, one operation per grammar reduction.
//!
//! Reductions fire after their sub-rules, so every operation receives
//! already-built, owned children and returns the owned parent (or extends a
//! list). The final reduction publishes the root into a [`state::CompilerState`].

pub mod actions;
pub mod state;
