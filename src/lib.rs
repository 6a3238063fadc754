//! Deinflection of Japanese verbs and adjectives.
//!
//! Japanese content words inflect heavily: a surface form such as
//! 食べさせられませんでした is several transformations away from the
//! dictionary form 食べる that a lookup needs. This crate reduces a
//! surface form to every reachable candidate dictionary form by
//! repeatedly rewriting inflected suffixes according to a fixed rule
//! table.
//!
//! The engine is recall-oriented: ambiguous endings yield a candidate
//! per reading and impossible candidates are expected to be filtered
//! by the caller, which checks each candidate's word class mask
//! against the part-of-speech tags of the dictionary entries it finds
//! (see [`word_type::from_pos_tag`]).
//!
//! ```
//! use deinflect::{deinflect, Reason};
//!
//! let candidates = deinflect("走ります");
//!
//! assert!(candidates
//!     .iter()
//!     .any(|c| c.word == "走る" && c.reasons == vec![vec![Reason::Polite]]));
//! ```

mod deinflect;
pub mod reason;
mod rules;
pub mod word_type;

pub use crate::deinflect::{deinflect, CandidateWord};
pub use crate::reason::Reason;
pub use crate::rules::{rule_groups, DeinflectRule, DeinflectRuleGroup};
