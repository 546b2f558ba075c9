//! Input reading for one-shot translation.

mod reader;

pub use reader::{InputReader, MAX_INPUT_SIZE};
