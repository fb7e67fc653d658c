pub mod answers;
pub mod options;
pub mod question;

pub use answers::{AnswerIssue, AnswerSet};
pub use options::{catalog, AnswerOption};
pub use question::{Question, QuestionKind};
