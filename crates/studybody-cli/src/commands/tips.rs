//! Study tips and flashcards for a subject.

use studybody_core::guidance::flashcards;
use studybody_core::{study_tips, GuideCharacter, Subject};

pub fn run(subject: &str, cards: usize, seed: Option<u64>) -> Result<(), Box<dyn std::error::Error>> {
    let subject = subject.parse::<Subject>()?;

    println!("Tips for {}:", subject.label());
    for tip in study_tips(subject) {
        println!("  - {tip}");
    }

    let guide = GuideCharacter::for_subject(subject);
    println!("\nGuide: {} ({})", guide, guide.tag());

    if cards > 0 {
        println!("\nQuick flashcards:");
        for card in flashcards::draw_with_seed(subject, cards, seed) {
            println!("  Q. {}", card.question);
            println!("     A. {}", card.answer);
        }
    }
    Ok(())
}
