use super::*;

/// Scatters traps, then bonuses, by picking uniformly random cells and retrying until a free path cell comes up.
///
/// Termination relies on the config having passed [`GameConfig::validate`].
#[derive(Clone, Debug, PartialEq)]
pub struct RandomLayoutGenerator {
    seed: u64,
}

impl RandomLayoutGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl LayoutGenerator for RandomLayoutGenerator {
    fn generate(self, config: &GameConfig) -> BoardLayout {
        use rand::prelude::*;

        let mut layout = BoardLayout::with_goal(config.size);
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut attempts: u64 = 0;

        for (kind, count) in [(TileKind::Trap, config.traps), (TileKind::Bonus, config.bonuses)] {
            let mut placed = 0;
            while placed < count {
                let coords = (
                    rng.random_range(0..config.size),
                    rng.random_range(0..config.size),
                );
                attempts += 1;
                if layout.place(coords, kind) {
                    log::trace!("Placed {:?} at {:?}", kind, coords);
                    placed += 1;
                }
            }
        }

        log::debug!(
            "Generated {}x{} board from seed {} in {} attempts",
            config.size,
            config.size,
            self.seed,
            attempts
        );

        // double check item counts
        let (traps, bonuses) = (layout.trap_count(), layout.bonus_count());
        if traps != config.traps || bonuses != config.bonuses {
            log::warn!(
                "Generated layout count mismatch, actual: {}/{}, requested: {}/{}",
                traps,
                bonuses,
                config.traps,
                config.bonuses
            );
        }
        layout
    }
}
