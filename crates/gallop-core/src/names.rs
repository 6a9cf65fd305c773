//! Horse name word lists
//!
//! Names are an adjective followed by a noun ("Swift Thunder"). The
//! combination space is 24 x 24; uniqueness across a batch is enforced by
//! the registry, not here.

use rand::Rng;

/// Adjectives used as the first word of a horse name
pub const HORSE_ADJECTIVES: [&str; 24] = [
    "Swift", "Brave", "Mighty", "Noble", "Fierce", "Gentle", "Royal", "Golden", "Silver",
    "Crimson", "Dark", "Bright", "Wild", "Free", "Bold", "Proud", "Strong", "Fast", "Majestic",
    "Elegant", "Graceful", "Powerful", "Mystical", "Ancient",
];

/// Nouns used as the second word of a horse name
pub const HORSE_NOUNS: [&str; 24] = [
    "Thunder", "Lightning", "Shadow", "Blaze", "Storm", "Comet", "Spirit", "Wind", "Fire", "Star",
    "Moon", "Sun", "Warrior", "Knight", "Arrow", "Flame", "Diamond", "Phoenix", "Ranger", "Hunter",
    "Champion", "Legend", "Hero", "Dream",
];

/// Draw a random "Adjective Noun" name
pub fn random_name<R: Rng>(rng: &mut R) -> String {
    let adjective = HORSE_ADJECTIVES[rng.gen_range(0..HORSE_ADJECTIVES.len())];
    let noun = HORSE_NOUNS[rng.gen_range(0..HORSE_NOUNS.len())];
    format!("{} {}", adjective, noun)
}

/// Number of distinct names the word lists can produce
pub fn combination_count() -> usize {
    HORSE_ADJECTIVES.len() * HORSE_NOUNS.len()
}
