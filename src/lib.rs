//! Thai tone quiz: shows a Thai word syllable by syllable and asks for the
//! tone of each one.
//!
//! [`quiz::QuizSession`] is the whole game state; a driver loads a
//! [`quiz::Vocabulary`], forwards user intents to the session and renders
//! from its accessors.

pub mod config;
pub mod error;
pub mod quiz;
