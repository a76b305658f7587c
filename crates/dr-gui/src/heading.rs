//! Randomized window heading built from a few keywords.

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

const KEYWORDS: [&str; 5] = ["Calendar", "Day", "Number", "Probability", "Checker"];

/// Templates with `{0}`..`{2}` placeholders filled from shuffled keywords.
const TEMPLATES: [&str; 5] = [
    "{0} Day Number Probability Checker",
    "{0} {1} Probability - Number Checker",
    "Smart {0} {2} Probability Checker",
    "{2} {1} {0} Probability Tool",
    "{0} {1} -> {2}: Probability Checker",
];

/// Pick a template and fill it with shuffled keywords.
pub fn random_heading<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut words = KEYWORDS;
    words.shuffle(rng);
    let template = TEMPLATES.choose(rng).copied().unwrap_or(TEMPLATES[0]);
    fill(template, &words)
}

fn fill(template: &str, words: &[&str]) -> String {
    words
        .iter()
        .take(3)
        .enumerate()
        .fold(template.to_string(), |acc, (i, word)| {
            acc.replace(&format!("{{{i}}}"), word)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn fill_replaces_placeholders() {
        assert_eq!(
            fill("{2} {1} {0} Probability Tool", &["a", "b", "c", "d"]),
            "c b a Probability Tool"
        );
    }

    #[test]
    fn heading_has_no_placeholders() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let heading = random_heading(&mut rng);
            assert!(!heading.contains('{'), "{heading}");
            assert!(heading.contains("Probability"), "{heading}");
        }
    }

    #[test]
    fn same_seed_same_heading() {
        let a = random_heading(&mut StdRng::seed_from_u64(42));
        let b = random_heading(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
