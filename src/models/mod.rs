pub mod completion;
pub mod prompt;
