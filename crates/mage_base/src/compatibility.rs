//! Pairwise sign compatibility across love, friendship and work.
//!
//! Scores start from the two signs' elements with random jitter, then get
//! positional adjustments by wheel distance:
//!
//! | elements          | love   | friendship | work   |
//! |-------------------|--------|------------|--------|
//! | same              | 85..95 | 90..100    | 80..90 |
//! | Fire↔Air, Earth↔Water | 80..95 | 85..95 | 75..90 |
//! | other             | 40..70 | 50..80     | 45..75 |
//!
//! Opposition (distance 6) redraws love in 90..100 and pins work to 60.
//! Squares (distance 3 or 9) cap love at 60 and work at 50. A sign paired
//! with itself is fixed at 80/95/85.
//!
//! Jitter is drawn once per unordered pair, so the table is symmetric by
//! construction.

use std::str::FromStr;

use tracing::debug;

use crate::error::MageError;
use crate::lucky::SeededRandom;
use crate::zodiac::{ALL_SIGNS, ZodiacSign, wheel_distance};

/// Scores for a sign paired with itself.
pub const SELF_SCORES: CompatibilityScores = CompatibilityScores {
    love: 80,
    friendship: 95,
    work: 85,
};

const OPPOSITION_WORK: u8 = 60;
const SQUARE_LOVE_CAP: u8 = 60;
const SQUARE_WORK_CAP: u8 = 50;

/// Which relationship a score describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Love,
    Friendship,
    Work,
}

pub const ALL_CATEGORIES: [Category; 3] = [Category::Love, Category::Friendship, Category::Work];

impl Category {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Love => "love",
            Self::Friendship => "friendship",
            Self::Work => "work",
        }
    }

    /// Verdict text for a score in this category (tiers at 90/70/50).
    pub const fn verdict(self, score: u8) -> &'static str {
        let tier = score_tier(score);
        match self {
            Self::Love => [
                "A match made in heaven! Soulmate potential.",
                "Strong chemistry and deep connection.",
                "Good potential, but requires effort.",
                "Challenging match, but opposites can attract!",
            ][tier],
            Self::Friendship => [
                "Best friends forever! You get each other perfectly.",
                "Great pals with lots of fun times.",
                "Casual friends, good for hanging out occasionally.",
                "Might not see eye to eye, but can learn from each other.",
            ][tier],
            Self::Work => [
                "Power team! You can achieve anything together.",
                "Productive partnership with good synergy.",
                "Can work together if roles are clearly defined.",
                "Different working styles might cause friction.",
            ][tier],
        }
    }
}

impl FromStr for Category {
    type Err = MageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ALL_CATEGORIES
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| MageError::InvalidCategory(s.to_string()))
    }
}

/// 0 for >=90, 1 for >=70, 2 for >=50, else 3.
const fn score_tier(score: u8) -> usize {
    if score >= 90 {
        0
    } else if score >= 70 {
        1
    } else if score >= 50 {
        2
    } else {
        3
    }
}

/// Colour band used by grid views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreClass {
    High,
    Medium,
    Low,
}

impl ScoreClass {
    /// `>=80` High, `>=60` Medium, else Low.
    pub const fn from_score(score: u8) -> Self {
        if score >= 80 {
            Self::High
        } else if score >= 60 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// Love/friendship/work scores for one pair, each in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CompatibilityScores {
    pub love: u8,
    pub friendship: u8,
    pub work: u8,
}

impl CompatibilityScores {
    pub const fn get(&self, category: Category) -> u8 {
        match category {
            Category::Love => self.love,
            Category::Friendship => self.friendship,
            Category::Work => self.work,
        }
    }
}

/// Complete 12×12 lookup table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompatibilityMatrix {
    entries: [[CompatibilityScores; 12]; 12],
}

impl CompatibilityMatrix {
    /// Generate the table, threading `rng` through every draw.
    ///
    /// Returns the matrix and the advanced generator.
    pub fn generate(mut rng: SeededRandom) -> (Self, SeededRandom) {
        let mut entries = [[CompatibilityScores::default(); 12]; 12];
        for (i, &a) in ALL_SIGNS.iter().enumerate() {
            entries[i][i] = SELF_SCORES;
            for (j, &b) in ALL_SIGNS.iter().enumerate().skip(i + 1) {
                let (scores, next) = pair_scores(a, b, rng);
                rng = next;
                entries[i][j] = scores;
                entries[j][i] = scores;
            }
        }
        debug!(state = rng.state(), "compatibility matrix generated");
        (Self { entries }, rng)
    }

    /// Generate from a plain seed.
    pub fn from_seed(seed: u64) -> Self {
        Self::generate(SeededRandom::new(seed)).0
    }

    pub fn get(&self, a: ZodiacSign, b: ZodiacSign) -> CompatibilityScores {
        self.entries[usize::from(a.index())][usize::from(b.index())]
    }

    pub fn score(&self, a: ZodiacSign, b: ZodiacSign, category: Category) -> u8 {
        self.get(a, b).get(category)
    }
}

/// Draw an integer in `[base, base + spread)`.
fn jitter(base: u8, spread: u32, rng: SeededRandom) -> (u8, SeededRandom) {
    let (n, rng) = rng.next_int(0, spread - 1);
    (base + n as u8, rng)
}

/// Scores for two distinct signs.
fn pair_scores(a: ZodiacSign, b: ZodiacSign, rng: SeededRandom) -> (CompatibilityScores, SeededRandom) {
    let (ea, eb) = (a.element(), b.element());
    let ((love_base, love_spread), (friend_base, friend_spread), (work_base, work_spread)) =
        if ea == eb {
            ((85, 10), (90, 10), (80, 10))
        } else if ea.is_compatible_with(eb) {
            ((80, 15), (85, 10), (75, 15))
        } else {
            ((40, 30), (50, 30), (45, 30))
        };

    let (mut love, rng) = jitter(love_base, love_spread, rng);
    let (friendship, rng) = jitter(friend_base, friend_spread, rng);
    let (mut work, mut rng) = jitter(work_base, work_spread, rng);

    match wheel_distance(a, b) {
        6 => {
            let (l, next) = jitter(90, 10, rng);
            rng = next;
            love = l;
            work = OPPOSITION_WORK;
        }
        3 | 9 => {
            love = love.min(SQUARE_LOVE_CAP);
            work = work.min(SQUARE_WORK_CAP);
        }
        _ => {}
    }

    (
        CompatibilityScores {
            love,
            friendship,
            work,
        },
        rng,
    )
}

/// Friend-comparison verdict on a friendship score (tiers at 90/70/50).
pub const fn friendship_verdict(score: u8) -> &'static str {
    [
        "BFFs! A cosmic bond that can't be broken.",
        "Great friends with lots of fun times ahead.",
        "Good friends, though you may have different interests.",
        "An unlikely pair, but you can learn a lot from each other.",
    ][score_tier(score)]
}

/// Combined reading for two signs: an intro naming both signs and their
/// elements, then a line on the dynamic chosen by score (>80, >60, else).
pub fn combined_reading(a: ZodiacSign, b: ZodiacSign, score: u8) -> String {
    let intro = if a == b {
        format!(
            "Two {}s together is double the energy! You understand each other instinctively. ",
            a.name()
        )
    } else {
        format!(
            "When {} ({}) and {} ({}) come together, ",
            a.name(),
            a.element().name(),
            b.name(),
            b.element().name()
        )
    };
    let dynamic = if score > 80 {
        "there is an effortless flow of energy. You support each other's dreams and enjoy a harmonious connection."
    } else if score > 60 {
        "you find common ground easily. While you have your differences, they often complement each other well."
    } else {
        "it can be a learning experience. You challenge each other to see the world from a different perspective."
    };
    intro + dynamic
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symmetric_and_self_fixed() {
        let m = CompatibilityMatrix::from_seed(12345);
        for a in ALL_SIGNS {
            assert_eq!(m.get(a, a), SELF_SCORES);
            for b in ALL_SIGNS {
                assert_eq!(m.get(a, b), m.get(b, a), "{a} / {b}");
            }
        }
    }

    #[test]
    fn same_seed_same_table() {
        assert_eq!(CompatibilityMatrix::from_seed(7), CompatibilityMatrix::from_seed(7));
    }

    #[test]
    fn opposition_pins_work() {
        let m = CompatibilityMatrix::from_seed(99);
        let s = m.get(ZodiacSign::Aries, ZodiacSign::Libra);
        assert_eq!(s.work, 60);
        assert!((90..100).contains(&s.love));
    }

    #[test]
    fn squares_are_capped() {
        let m = CompatibilityMatrix::from_seed(3);
        for (a, b) in [
            (ZodiacSign::Aries, ZodiacSign::Cancer),
            (ZodiacSign::Aries, ZodiacSign::Capricorn),
            (ZodiacSign::Gemini, ZodiacSign::Pisces),
        ] {
            let s = m.get(a, b);
            assert!(s.love <= 60 && s.work <= 50, "{a}/{b}: {s:?}");
        }
    }

    #[test]
    fn category_verdict_tiers() {
        assert_eq!(Category::Work.verdict(90), "Power team! You can achieve anything together.");
        assert_eq!(Category::Love.verdict(49), "Challenging match, but opposites can attract!");
        assert_eq!(ScoreClass::from_score(80), ScoreClass::High);
        assert_eq!(ScoreClass::from_score(79), ScoreClass::Medium);
        assert_eq!(ScoreClass::from_score(59), ScoreClass::Low);
    }

    #[test]
    fn category_parsing() {
        assert_eq!(" Friendship ".parse::<Category>(), Ok(Category::Friendship));
        assert_eq!("WORK".parse::<Category>(), Ok(Category::Work));
        assert_eq!(
            "romance".parse::<Category>(),
            Err(MageError::InvalidCategory("romance".into()))
        );
    }

    #[test]
    fn combined_reading_for_same_sign() {
        let r = combined_reading(ZodiacSign::Leo, ZodiacSign::Leo, 95);
        assert!(r.starts_with("Two Leos together"));
        assert!(r.contains("effortless flow"));
    }

    #[test]
    fn combined_reading_names_elements() {
        let r = combined_reading(ZodiacSign::Taurus, ZodiacSign::Gemini, 55);
        assert!(r.starts_with("When Taurus (Earth) and Gemini (Air) come together, "));
        assert!(r.contains("learning experience"));
    }
}
