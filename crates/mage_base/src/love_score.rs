//! Name-based love scores.
//!
//! Two independent formulas over lowercased, trimmed names. Both return 0
//! when either name is blank and always land in [0, 100].
//!
//! Lengths and character sums count Unicode scalar values.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::util::round_half_up;

const VOWELS: &str = "aeiou";

/// Which formula to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoveVariant {
    /// Weighted factors: length 20%, shared letters 30%, vowels 25%, numerology 25%.
    Crush,
    /// Additive point budget: letter overlap 30, length 20, vowel ratio 20, sum mod 31.
    Calculator,
}

impl LoveVariant {
    pub fn score(self, name1: &str, name2: &str) -> u8 {
        match self {
            Self::Crush => crush_score(name1, name2),
            Self::Calculator => love_calculator_score(name1, name2),
        }
    }

    /// Tiered message (90/80/70/60/50/40/30/else).
    pub const fn message(self, score: u8) -> &'static str {
        let tier = message_tier(score);
        match self {
            Self::Crush => CRUSH_MESSAGES[tier],
            Self::Calculator => CALCULATOR_MESSAGES[tier],
        }
    }
}

const CRUSH_MESSAGES: [&str; 8] = [
    "💖 Soulmates! The stars are aligned!",
    "💕 Amazing Match! You two are perfect together!",
    "💗 Great Chemistry! This could be something special!",
    "💓 Good Potential! Worth exploring!",
    "💝 Decent Match! Give it a chance!",
    "💘 It's Complicated! But love finds a way!",
    "💔 Different Paths! Sometimes opposites attract!",
    "💙 Just Friends! But friendship is beautiful too!",
];

const CALCULATOR_MESSAGES: [&str; 8] = [
    "✨ Soulmates! A cosmic match made in the stars!",
    "💫 Incredible Connection! The universe approves!",
    "🌟 Great Match! Strong cosmic alignment!",
    "💕 Good Compatibility! Positive energy flows!",
    "💗 Decent Match! Room for growth together!",
    "💝 Moderate Connection! Effort brings rewards!",
    "💖 Challenging but Possible! Work on understanding!",
    "💔 Different Paths! Sometimes opposites attract!",
];

const CRUSH_TIPS: [&str; 4] = [
    "Your compatibility is off the charts! The cosmic energies between you two are incredibly strong. This is a rare connection - don't let it slip away. Be confident and authentic when you interact with them.",
    "You have solid potential together! While you might have some differences, these can actually make your relationship more interesting. Focus on your common interests and be yourself. Good communication will be key.",
    "There's definitely something there, but it might take some effort. Don't be discouraged - many great relationships start with lower compatibility scores. Focus on building a friendship first and see where it naturally leads.",
    "The stars suggest you might be better as friends, but remember - compatibility calculators are just for fun! If you really like them, go for it. Sometimes the best relationships are the unexpected ones. Be genuine and see what happens!",
];

const fn message_tier(score: u8) -> usize {
    match score {
        90.. => 0,
        80..=89 => 1,
        70..=79 => 2,
        60..=69 => 3,
        50..=59 => 4,
        40..=49 => 5,
        30..=39 => 6,
        _ => 7,
    }
}

/// Advice paragraph for a crush score (80/60/40/else).
pub const fn crush_tip(score: u8) -> &'static str {
    match score {
        80.. => CRUSH_TIPS[0],
        60..=79 => CRUSH_TIPS[1],
        40..=59 => CRUSH_TIPS[2],
        _ => CRUSH_TIPS[3],
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

fn char_sum(name: &str) -> u64 {
    name.chars().map(|c| u64::from(u32::from(c))).sum()
}

fn vowel_count(name: &str) -> usize {
    name.chars().filter(|c| VOWELS.contains(*c)).count()
}

fn to_score(raw: f64) -> u8 {
    round_half_up(raw).clamp(0.0, 100.0) as u8
}

/// Weighted-factor score.
pub fn crush_score(name1: &str, name2: &str) -> u8 {
    let (n1, n2) = (normalize(name1), normalize(name2));
    if n1.is_empty() || n2.is_empty() {
        return 0;
    }

    let (len1, len2) = (n1.chars().count(), n2.chars().count());
    let length = (100.0 - 10.0 * len1.abs_diff(len2) as f64).max(0.0);

    let letters1: BTreeSet<char> = n1.chars().collect();
    let letters2: BTreeSet<char> = n2.chars().collect();
    let shared = letters1.intersection(&letters2).count();
    let common = shared as f64 / letters1.len().max(letters2.len()) as f64 * 100.0;

    let vowels = (100.0 - 15.0 * vowel_count(&n1).abs_diff(vowel_count(&n2)) as f64).max(0.0);

    let numerology = (100.0 - (char_sum(&n1) % 100).abs_diff(char_sum(&n2) % 100) as f64).max(0.0);

    let score = to_score(length * 0.2 + common * 0.3 + vowels * 0.25 + numerology * 0.25);
    debug!(length, common, vowels, numerology, score, "crush score");
    score
}

fn letter_frequencies(name: &str) -> BTreeMap<char, u32> {
    let mut freq = BTreeMap::new();
    for c in name.chars().filter(char::is_ascii_lowercase) {
        *freq.entry(c).or_insert(0) += 1;
    }
    freq
}

/// Additive point-budget score.
pub fn love_calculator_score(name1: &str, name2: &str) -> u8 {
    let (n1, n2) = (normalize(name1), normalize(name2));
    if n1.is_empty() || n2.is_empty() {
        return 0;
    }

    let freq2 = letter_frequencies(&n2);
    let overlap: u32 = letter_frequencies(&n1)
        .iter()
        .map(|(c, f1)| (*f1).min(freq2.get(c).copied().unwrap_or(0)))
        .sum();
    let letters = f64::from((overlap * 3).min(30));

    let (len1, len2) = (n1.chars().count(), n2.chars().count());
    let length = (20.0 - 2.0 * len1.abs_diff(len2) as f64).max(0.0);

    let ratio1 = vowel_count(&n1) as f64 / len1 as f64;
    let ratio2 = vowel_count(&n2) as f64 / len2 as f64;
    let vowels = (20.0 - (ratio1 - ratio2).abs() * 40.0).max(0.0);

    let modulo = ((char_sum(&n1) + char_sum(&n2)) % 31) as f64;

    let score = to_score(letters + length + vowels + modulo);
    debug!(letters, length, vowels, modulo, score, "love calculator score");
    score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_names_score_zero() {
        for v in [LoveVariant::Crush, LoveVariant::Calculator] {
            assert_eq!(v.score("", "anything"), 0);
            assert_eq!(v.score("anything", "   "), 0);
        }
    }

    #[test]
    fn case_and_whitespace_are_ignored() {
        assert_eq!(crush_score("  Alice ", "BOB"), crush_score("alice", "bob"));
        assert_eq!(
            love_calculator_score("ALICE", " bob"),
            love_calculator_score("alice", "bob")
        );
    }

    #[test]
    fn message_thresholds() {
        assert_eq!(LoveVariant::Crush.message(90), CRUSH_MESSAGES[0]);
        assert_eq!(LoveVariant::Crush.message(89), CRUSH_MESSAGES[1]);
        assert_eq!(LoveVariant::Calculator.message(30), CALCULATOR_MESSAGES[6]);
        assert_eq!(LoveVariant::Calculator.message(29), CALCULATOR_MESSAGES[7]);
    }

    #[test]
    fn tip_thresholds() {
        assert_eq!(crush_tip(100), CRUSH_TIPS[0]);
        assert_eq!(crush_tip(79), CRUSH_TIPS[1]);
        assert_eq!(crush_tip(40), CRUSH_TIPS[2]);
        assert_eq!(crush_tip(0), CRUSH_TIPS[3]);
    }
}
