//! Log adapters.

mod file_answer_log;

pub use file_answer_log::FileAnswerLog;
