//! Hanzi word selection: picks new vocabulary built from known characters.
//!
//! Stages:
//! 1. Reduce: bound the corpus by word length, rank and frequency ratio
//! 2. Knowledge: estimate per-character knowledge from review history
//! 3. Filter: drop known words and words with unknown or ignored characters
//! 4. Index: invert the candidates into character -> words
//! 5. Select: quota-bounded walk over characters, least known first

pub mod stage1_reduce;
pub mod stage2_knowledge;
pub mod stage3_filter;
pub mod stage4_index;
pub mod stage5_select;
pub mod pipeline;

pub use pipeline::{SelectionPipeline, SelectionReport};
