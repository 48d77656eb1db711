use rand::Rng;
use rand::seq::IndexedRandom;
use uuid::{Uuid, Variant, Version};

use crate::lib_constants::NOTE_COLORS;

pub fn make_uuid<R: Rng>(rng: &mut R) -> Uuid {
    uuid::Builder::from_random_bytes(rng.random())
        .with_variant(Variant::RFC4122)
        .with_version(Version::Random)
        .into_uuid()
}

pub fn pick_color<R: Rng>(rng: &mut R) -> String {
    NOTE_COLORS
        .choose(rng)
        .copied()
        .unwrap_or("gray")
        .to_owned()
}
