//! ユースケースレイヤー

pub mod processor;
pub mod run_question;

pub use processor::MathQuestionProcessor;
pub use run_question::run_question;
