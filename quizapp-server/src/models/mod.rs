//! Domain models with validation at construction
//!
//! Request payloads are validated into these types before any
//! persistence call. Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod question;
pub mod choice;

pub use validation::ValidationError;
pub use question::{NewQuestion, Question, QuestionText};
pub use choice::{Choice, ChoiceText, NewChoice};
