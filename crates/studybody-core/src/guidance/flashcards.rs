//! Quick-review flashcard decks.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use serde::Serialize;

use crate::planner::Subject;

/// A question/answer pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Flashcard {
    pub question: &'static str,
    pub answer: &'static str,
}

const fn card(question: &'static str, answer: &'static str) -> Flashcard {
    Flashcard { question, answer }
}

const CHEMISTRY: &[Flashcard] = &[
    card(
        "Oxidation number?",
        "The hypothetical charge an atom carries if electrons were fully transferred",
    ),
    card(
        "Le Chatelier's principle",
        "A disturbed equilibrium shifts in the direction that counteracts the disturbance",
    ),
    card(
        "Enthalpy (dH)",
        "Heat released or absorbed by a process at constant pressure",
    ),
    card(
        "Ka and pKa",
        "pKa = -log(Ka); the smaller the pKa, the stronger the acid",
    ),
    card("Electronegativity", "An atom's pull on a shared electron pair"),
];

const BIOLOGY: &[Flashcard] = &[
    card(
        "Where does cellular respiration run?",
        "Glycolysis in the cytosol; TCA cycle and electron transport in mitochondria",
    ),
    card(
        "Transcription vs translation",
        "DNA to mRNA is transcription; mRNA to protein is translation",
    ),
    card(
        "What is ATP?",
        "The cell's energy currency; hydrolysis of its phosphate bonds releases energy",
    ),
    card(
        "Osmosis",
        "Movement of water across a membrane down its concentration gradient",
    ),
    card("Synaptic plasticity", "Connection strength changes with use"),
];

const PHARMACY: &[Flashcard] = &[
    card(
        "Pharmacokinetics (PK)",
        "Absorption, distribution, metabolism, excretion (ADME)",
    ),
    card("Half-life", "Time for the concentration to fall by half"),
    card(
        "Efficacy vs potency",
        "Efficacy is the maximum effect; potency is the concentration needed for it",
    ),
    card("Therapeutic index", "LD50 / ED50; larger is safer"),
    card("Role of CYP450", "The main enzyme family for drug metabolism"),
];

const DECKS: [&[Flashcard]; 3] = [CHEMISTRY, BIOLOGY, PHARMACY];

/// The deck for a subject, if one exists.
pub fn deck(subject: Subject) -> Option<&'static [Flashcard]> {
    match subject {
        Subject::Chemistry => Some(CHEMISTRY),
        Subject::Biology => Some(BIOLOGY),
        Subject::Pharmacy => Some(PHARMACY),
        _ => None,
    }
}

/// Draw up to `count` distinct cards for a subject.
///
/// Subjects without a deck of their own get a randomly chosen deck.
pub fn draw<R: Rng + ?Sized>(subject: Subject, count: usize, rng: &mut R) -> Vec<Flashcard> {
    let deck = match deck(subject) {
        Some(deck) => deck,
        None => DECKS.choose(rng).copied().unwrap_or(CHEMISTRY),
    };
    deck.choose_multiple(rng, count.min(deck.len()))
        .copied()
        .collect()
}

/// Draw with an optional seed; unseeded draws use OS entropy.
pub fn draw_with_seed(subject: Subject, count: usize, seed: Option<u64>) -> Vec<Flashcard> {
    let mut rng = match seed {
        Some(seed) => Pcg64::seed_from_u64(seed),
        None => Pcg64::from_entropy(),
    };
    draw(subject, count, &mut rng)
}
