//! Fixed list of space facts served by `GET /api/space-fact`.

use rand::seq::SliceRandom;
use rand::Rng;

pub const SPACE_FACTS: [&str; 10] = [
    "🌟 A teaspoon of neutron star? 6 BILLION tons. Basically cosmic protein powder. Gains 💪🛸",
    "🪐 Titan got lakes and rivers... but they’re made of liquid methane. Earth could never 💅",
    "🌍 You could literally *drive* to space in like an hour. That’s one aggressive highway playlist 🎶🚗💨",
    "☄️ Ceres is the size of Texas. So yeah, the asteroid belt has a boss level. Yeehaw, space edition 🤠",
    "🚀 Astronauts lowkey stretch taller in space. No gravity = no spinal compression = ✨tall bois✨",
    "🌙 The Moon’s slowly ghosting us — 1.5 inches per year. That’s not very bestie of her 🥲",
    "⭐ The Sun yeets 4 million tons of itself into energy every second. Absolute legend. 🔥🔥🔥",
    "🛸 Venus takes longer to rotate once than to orbit the Sun. Girl’s on slow-mo vibes fr 💅",
    "🪐 Jupiter’s Red Spot? Just a storm that’s been raging since the 1600s. Still mad, apparently 💨👀",
    "🌌 The Milky Way and Andromeda are on a cosmic collision course. Not enemies, just slow-motion drama 💥👀",
];

/// Pick one fact uniformly at random.
pub fn random_fact<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    // The list is a non-empty constant, so `choose` always yields a value.
    SPACE_FACTS.choose(rng).copied().unwrap_or(SPACE_FACTS[0])
}
