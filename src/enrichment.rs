//! Presentation metadata attached to detected colors
//!
//! Picks are drawn from an explicit seeded generator. The seed is the packed
//! color mixed with a salt, so a color always gets the same brand, rooms and
//! mood.

use crate::brands::{Brand, ALL_BRANDS};
use crate::color::Rgb;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const ROOM_TYPES: [&str; 6] = [
    "Living Room",
    "Bedroom",
    "Kitchen",
    "Bathroom",
    "Dining Room",
    "Home Office",
];

pub const MOODS: [&str; 8] = [
    "Calm",
    "Energizing",
    "Cozy",
    "Modern",
    "Elegant",
    "Bold",
    "Relaxing",
    "Fresh",
];

const MAX_ROOM_DRAWS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrichment {
    pub brand: Brand,
    pub room_types: Vec<&'static str>,
    pub mood: &'static str,
}

/// Draw one enrichment from `rng`: a brand, 1-3 distinct rooms, a mood
pub fn pick_with<R: Rng + ?Sized>(rng: &mut R) -> Enrichment {
    let brand = ALL_BRANDS[rng.gen_range(0..ALL_BRANDS.len())];

    let draws = rng.gen_range(1..=MAX_ROOM_DRAWS);
    let mut room_types = Vec::with_capacity(draws);
    for _ in 0..draws {
        let room = ROOM_TYPES[rng.gen_range(0..ROOM_TYPES.len())];
        if !room_types.contains(&room) {
            room_types.push(room);
        }
    }

    let mood = MOODS[rng.gen_range(0..MOODS.len())];
    Enrichment {
        brand,
        room_types,
        mood,
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CosmeticPicker {
    salt: u64,
}

impl CosmeticPicker {
    pub fn new(salt: u64) -> Self {
        Self { salt }
    }

    fn seed_for(&self, c: Rgb) -> u64 {
        let packed = (c.r as u64) << 16 | (c.g as u64) << 8 | c.b as u64;
        packed ^ self.salt.rotate_left(24)
    }

    pub fn pick(&self, c: Rgb) -> Enrichment {
        let mut rng = StdRng::seed_from_u64(self.seed_for(c));
        pick_with(&mut rng)
    }
}
