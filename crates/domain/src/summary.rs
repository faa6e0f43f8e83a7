use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

pub const EMPTY_PLOT_MESSAGE: &str = "No plot text available to summarize.";
pub const FALLBACK_STUB_TITLE: &str = "Movie";
const SEED_TEXT_CHARS: usize = 64;
const QUICK_SPOIL_MIN_CHARS: usize = 10;

const ADJECTIVES: [&str; 5] = ["taut", "gentle", "thrilling", "surprising", "wistful"];
const MIDDLES: [&str; 5] = [
    "a character forced to confront their past",
    "a group of unlikely allies",
    "a dark secret that changes everything",
    "a bittersweet journey through memory and choice",
    "a high-stakes race against time",
];
const BLENDS: [&str; 5] = [
    "intimate drama",
    "fast-paced action",
    "moody atmosphere",
    "dry humor",
    "genre-bending twists",
];
const ENDINGS: [&str; 4] = ["earned", "ambiguous", "surprising", "heartfelt"];

/// Length bounds handed to a summarization engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryBounds {
    pub max_length: u32,
    pub min_length: u32,
}

impl Default for SummaryBounds {
    fn default() -> Self {
        Self {
            max_length: 180,
            min_length: 60,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FallbackReason {
    EngineUnavailable(String),
    EngineFailed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SummaryOrigin {
    Model,
    EmptyPlot,
    Stub(FallbackReason),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub text: String,
    pub origin: SummaryOrigin,
}

impl Summary {
    /// Text for the summary pane. A stub produced after the engine itself
    /// failed carries the failure in front of it.
    pub fn display_text(&self) -> String {
        match &self.origin {
            SummaryOrigin::Stub(FallbackReason::EngineFailed(reason)) => format!(
                "(Failed to generate with model: {reason})\n\nFallback summary:\n\n{}",
                self.text
            ),
            _ => self.text.clone(),
        }
    }
}

/// Deterministic two-paragraph template summary. Identical inputs always
/// yield identical text.
pub fn generate_stub(title: &str, year: Option<&str>, keywords: Option<&str>) -> String {
    let mut rng = StdRng::seed_from_u64(stub_seed(title, year, keywords));

    let adjective = pick(&mut rng, &ADJECTIVES);
    let openings = [
        format!("{title} is a {adjective} film"),
        format!("In {title}, the story explores"),
        format!("{title} follows"),
    ];
    let opening = pick(&mut rng, &openings);
    let middle = pick(&mut rng, &MIDDLES);
    let blend = pick(&mut rng, &BLENDS);
    let ending = pick(&mut rng, &ENDINGS);

    let first = format!(
        "{opening}. It centers on {middle} and the emotional consequences that follow."
    );
    let second = format!(
        "The film blends {blend} with strong character work, culminating in an ending that feels {ending}."
    );
    format!("{first}\n\n{second}")
}

/// One revealing line: the first sentence of the plot when it is long enough,
/// else the first line of the title's stub.
pub fn quick_spoil_line(plot_text: &str, title: &str) -> String {
    let sentence = plot_text.split('.').next().unwrap_or_default().trim();
    if sentence.chars().count() > QUICK_SPOIL_MIN_CHARS {
        return format!("{sentence}.");
    }
    generate_stub(title, None, None)
        .split('\n')
        .next()
        .unwrap_or_default()
        .to_string()
}

fn stub_seed(title: &str, year: Option<&str>, keywords: Option<&str>) -> u64 {
    let seed_text: String = [title, year.unwrap_or_default(), keywords.unwrap_or_default()]
        .concat()
        .chars()
        .take(SEED_TEXT_CHARS)
        .collect();
    let digest = Sha256::digest(seed_text.as_bytes());
    let mut seed = [0_u8; 8];
    seed.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(seed)
}

fn pick<'a, T: AsRef<str>>(rng: &mut StdRng, pool: &'a [T]) -> &'a str {
    pool[rng.gen_range(0..pool.len())].as_ref()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_is_deterministic_for_identical_inputs() {
        let first = generate_stub("Inception", Some("2010"), Some("dreams"));
        let second = generate_stub("Inception", Some("2010"), Some("dreams"));
        assert_eq!(first, second);
    }

    #[test]
    fn stub_has_exactly_two_paragraphs() {
        let stub = generate_stub("Heat", Some("1995"), None);
        let paragraphs: Vec<&str> = stub.split("\n\n").collect();
        assert_eq!(paragraphs.len(), 2);
        assert!(paragraphs.iter().all(|p| !p.is_empty() && !p.contains('\n')));
        assert!(paragraphs[0].contains("Heat"));
        assert!(paragraphs[1].starts_with("The film blends "));
    }

    #[test]
    fn seed_only_considers_first_sixty_four_characters() {
        let prefix = "a".repeat(64);
        assert_eq!(
            stub_seed(&prefix, Some("1999"), None),
            stub_seed(&prefix, Some("2024"), Some("ignored"))
        );
        assert_ne!(stub_seed("Heat", Some("1995"), None), stub_seed("Heat", None, None));
    }

    #[test]
    fn quick_spoil_prefers_long_first_sentence() {
        let line = quick_spoil_line("Cobb enters dreams to steal secrets. He fails.", "Inception");
        assert_eq!(line, "Cobb enters dreams to steal secrets.");
    }

    #[test]
    fn quick_spoil_falls_back_to_first_stub_line() {
        let line = quick_spoil_line("Short. Plot.", "Inception");
        let expected = generate_stub("Inception", None, None);
        assert_eq!(line, expected.split('\n').next().expect("line"));
        assert_eq!(quick_spoil_line("", "Inception"), line);
    }

    #[test]
    fn display_text_prefixes_engine_failures_only() {
        let failed = Summary {
            text: "stub".to_string(),
            origin: SummaryOrigin::Stub(FallbackReason::EngineFailed("timeout".to_string())),
        };
        assert_eq!(
            failed.display_text(),
            "(Failed to generate with model: timeout)\n\nFallback summary:\n\nstub"
        );

        let unavailable = Summary {
            text: "stub".to_string(),
            origin: SummaryOrigin::Stub(FallbackReason::EngineUnavailable("no token".to_string())),
        };
        assert_eq!(unavailable.display_text(), "stub");
    }
}
