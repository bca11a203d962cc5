use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Finished(PlayerId),
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Finished(_))
    }

    pub const fn winner(self) -> Option<PlayerId> {
        match self {
            Self::InProgress => None,
            Self::Finished(winner) => Some(winner),
        }
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::InProgress
    }
}

/// One match of the maze: board, both players, turn counter and outcome.
///
/// Every action is a synchronous, terminating update. Illegal actions are
/// reported as `NoChange` and leave the state untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MazeGame {
    config: GameConfig,
    layout: BoardLayout,
    tiles: Array2<Tile>,
    players: [Player; PLAYER_COUNT],
    turn_index: u32,
    status: GameStatus,
}

impl MazeGame {
    /// Starts a game on `layout` with both players on their starting corners.
    pub fn new(config: GameConfig, layout: BoardLayout) -> Result<Self> {
        let players = Player::starting_pair(&config);
        Self::with_players(config, layout, players)
    }

    /// Starts a game with a freshly generated board.
    pub fn generate(config: GameConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        let layout = RandomLayoutGenerator::new(seed).generate(&config);
        Self::new(config, layout)
    }

    /// Starts a game from explicit player placements, for scripted setups.
    pub fn with_players(
        config: GameConfig,
        layout: BoardLayout,
        players: [Player; PLAYER_COUNT],
    ) -> Result<Self> {
        config.validate()?;
        if layout.side() != config.size {
            return Err(GameError::InvalidBoardSize);
        }
        let (traps, bonuses) = (layout.trap_count(), layout.bonus_count());
        if traps != config.traps || bonuses != config.bonuses {
            return Err(GameError::LayoutMismatch { traps, bonuses });
        }
        for player in &players {
            layout.validate_coords(player.position)?;
            layout.validate_coords(player.checkpoint)?;
        }

        let tiles = layout.kinds().map(|&kind| Tile::new(kind));
        Ok(Self {
            config,
            layout,
            tiles,
            players,
            turn_index: 0,
            status: GameStatus::default(),
        })
    }

    /// A brand new game with the same rules. `self` is left as it was.
    pub fn reset(&self, seed: u64) -> Self {
        let layout = RandomLayoutGenerator::new(seed).generate(&self.config);
        log::debug!("Game reset with seed {}", seed);
        Self {
            config: self.config,
            tiles: layout.kinds().map(|&kind| Tile::new(kind)),
            layout,
            players: Player::starting_pair(&self.config),
            turn_index: 0,
            status: GameStatus::default(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    pub fn size(&self) -> Coord {
        self.layout.side()
    }

    pub fn tile_at(&self, coords: Coord2) -> Tile {
        self.tiles[coords.to_nd_index()]
    }

    pub fn players(&self) -> &[Player; PLAYER_COUNT] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    pub fn turn_index(&self) -> u32 {
        self.turn_index
    }

    pub fn acting_id(&self) -> PlayerId {
        PlayerId::for_turn(self.turn_index)
    }

    pub fn acting_player(&self) -> &Player {
        self.player(self.acting_id())
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn winner(&self) -> Option<PlayerId> {
        self.status.winner()
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    /// Moves the acting player one step, resolving whatever is on the target tile.
    pub fn move_player(&mut self, direction: Direction) -> MoveOutcome {
        use MoveOutcome::*;

        let acting = self.acting_id();
        if self.is_finished() || !self.players[acting.index()].active {
            return NoChange;
        }

        let from = self.players[acting.index()].position;
        let Some(target) = direction.step(from, self.size()) else {
            log::trace!("{} cannot move {:?} from {:?}", acting, direction, from);
            return NoChange;
        };

        self.tiles[target.to_nd_index()].revealed = true;
        let interval = self.config.checkpoint_interval;
        let threshold = self.config.elimination_threshold;
        let kind = self.layout[target];
        let player = &mut self.players[acting.index()];

        let outcome = match kind {
            TileKind::Trap => {
                player.trap_hits = player.trap_hits.saturating_add(1);
                if player.trap_hits >= threshold {
                    player.active = false;
                    log::info!("{} is eliminated", player.name);
                    self.end_game(acting.other());
                    Eliminated
                } else {
                    player.position = player.checkpoint;
                    HitTrap
                }
            }
            TileKind::Bonus => {
                player.memory_tokens = player.memory_tokens.saturating_add(1);
                player.position = target;
                player.checkpoint = target;
                PickedBonus
            }
            TileKind::Path => {
                player.walk_to(target, interval);
                Moved
            }
            TileKind::Goal => {
                player.position = target;
                self.end_game(acting);
                ReachedGoal
            }
        };
        log::debug!("{} moved {:?} to {:?}: {:?}", acting, direction, target, outcome);

        self.clear_temporary_reveals();
        self.turn_index += 1;
        self.check_last_standing();

        outcome
    }

    /// Spends a memory token to show the 3×3 block around the acting player until the next move.
    pub fn use_token(&mut self) -> TokenOutcome {
        let acting = self.acting_id();
        let side = self.size();
        let player = &mut self.players[acting.index()];

        if self.status.is_finished() || !player.active || player.memory_tokens == 0 {
            return TokenOutcome::NoChange;
        }

        player.memory_tokens -= 1;
        let center = player.position;
        for coords in block_around(center, side) {
            self.tiles[coords.to_nd_index()].temporarily_revealed = true;
        }
        log::debug!("{} used a memory token at {:?}", acting, center);

        TokenOutcome::Revealed
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_game(self)
    }

    fn clear_temporary_reveals(&mut self) {
        for tile in self.tiles.iter_mut() {
            tile.temporarily_revealed = false;
        }
    }

    /// The last player still standing wins by default.
    fn check_last_standing(&mut self) {
        let mut active = PlayerId::all().filter(|id| self.players[id.index()].active);
        if let (Some(survivor), None) = (active.next(), active.next()) {
            self.end_game(survivor);
        }
    }

    fn end_game(&mut self, winner: PlayerId) {
        if self.status.is_finished() {
            return;
        }

        log::info!("{} wins", self.players[winner.index()].name);
        self.status = GameStatus::Finished(winner);
    }
}
