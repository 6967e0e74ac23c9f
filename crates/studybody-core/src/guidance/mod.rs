//! Fixed guidance catalogs.
//!
//! Closed enumerations mapped to ordered string lists: careers by MBTI
//! type, study tips by subject, and flashcard decks. No dynamic dispatch;
//! unknown keys resolve through explicit fallbacks.

mod careers;
mod tips;

pub mod flashcards;

pub use careers::{career_recommendations, recommendations_by_name, Mbti};
pub use flashcards::Flashcard;
pub use tips::study_tips;
