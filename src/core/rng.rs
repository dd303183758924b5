// This file is part of HELIOS.
// Copyright (C) 2025 HELIOS contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Shared gameplay RNG. Seeded for reproducible spawns (tests, `--seed`),
/// otherwise drawn from entropy.
#[derive(Resource, Deref, DerefMut)]
pub struct GameRng(pub StdRng);

impl GameRng {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::seeded(s),
            None => Self::default(),
        }
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self(StdRng::from_entropy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = GameRng::seeded(7);
        let mut b = GameRng::from_seed_option(Some(7));
        let xs: Vec<u32> = (0..8).map(|_| a.gen_range(0..1000)).collect();
        let ys: Vec<u32> = (0..8).map(|_| b.gen_range(0..1000)).collect();
        assert_eq!(xs, ys);
    }
}
