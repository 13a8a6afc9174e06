//! Core data model for Forest Planter: the tree records, the world they live
//! in, and the reducer that drives the round lifecycle.

use std::rc::Rc;
use yew::Reducible;

use crate::config::GameConfig;
use crate::error::Rejected;
use crate::input;
use crate::util::clog;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GrowthStage {
    Young,
    Mature,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tree {
    /// Scene position of the trunk base; `y` is always the ground line.
    pub x: f64,
    pub y: f64,
    /// Canopy radius and trunk height. Never shrinks.
    pub size: f64,
    /// Ticks survived since planting.
    pub age: u32,
    pub stage: GrowthStage,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    GameOver,
}

#[derive(Clone, Debug, PartialEq)]
pub struct WorldState {
    /// Planting order; append-only.
    pub trees: Vec<Tree>,
    pub score: u32,
    pub ticks_remaining: u32,
    pub active: bool,
}

impl WorldState {
    /// A fresh, running world with the full countdown.
    pub fn new(cfg: &GameConfig) -> Self {
        Self {
            trees: Vec::with_capacity(cfg.capacity),
            score: 0,
            ticks_remaining: cfg.duration_ticks,
            active: true,
        }
    }

    /// Same layout as [`WorldState::new`] but not accepting input or ticks yet.
    pub fn idle(cfg: &GameConfig) -> Self {
        Self {
            active: false,
            ..Self::new(cfg)
        }
    }

    pub fn is_full(&self, cfg: &GameConfig) -> bool {
        self.trees.len() >= cfg.capacity
    }

    /// Plants a young tree at `x` on the ground line. The click's `y` only
    /// decides whether it landed inside the ground band.
    pub fn add_object(&mut self, x: f64, y: f64, cfg: &GameConfig) -> Result<(), Rejected> {
        if !self.active {
            return Err(Rejected::Inactive);
        }
        if self.is_full(cfg) {
            return Err(Rejected::AtCapacity {
                capacity: cfg.capacity,
            });
        }
        if !(0.0..=cfg.width).contains(&x) {
            return Err(Rejected::OutsideScene { x });
        }
        let band_top = cfg.ground_line();
        if !(band_top..=cfg.height).contains(&y) {
            return Err(Rejected::OutsideBand { y, band_top });
        }
        self.trees.push(Tree {
            x,
            y: band_top,
            size: cfg.initial_size,
            age: 0,
            stage: GrowthStage::Young,
        });
        self.score = self.score.saturating_add(cfg.plant_score);
        Ok(())
    }

    /// Advances the world by one tick: countdown, growth, ageing, maturity.
    pub fn tick(&mut self, cfg: &GameConfig) -> TickOutcome {
        if !self.active {
            return if self.ticks_remaining == 0 {
                TickOutcome::GameOver
            } else {
                TickOutcome::Continue
            };
        }
        self.ticks_remaining = self.ticks_remaining.saturating_sub(1);
        for tree in &mut self.trees {
            tree.size += cfg.growth_per_tick;
            tree.age = tree.age.saturating_add(1);
            if tree.age > cfg.maturity_age {
                tree.stage = GrowthStage::Mature;
            }
        }
        if self.ticks_remaining == 0 {
            self.active = false;
            TickOutcome::GameOver
        } else {
            TickOutcome::Continue
        }
    }
}

// ---------------- Lifecycle reducer -----------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    Running,
    GameOver,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub phase: Phase,
    pub world: WorldState,
    pub config: GameConfig,
    /// Bumped on every (re)start; ticks from an older interval carry a stale value.
    pub session: u32,
    /// Bumped on every applied action so views know to redraw.
    pub version: u64,
}

impl GameState {
    pub fn new(config: GameConfig) -> Self {
        Self {
            phase: Phase::NotStarted,
            world: WorldState::idle(&config),
            config,
            session: 0,
            version: 0,
        }
    }

    pub fn restart_available(&self) -> bool {
        self.phase == Phase::GameOver
    }

    fn begin_round(&mut self) {
        self.world = WorldState::new(&self.config);
        self.phase = Phase::Running;
        self.session = self.session.wrapping_add(1);
    }
}

#[derive(Clone, Debug)]
pub enum GameAction {
    Start,
    Restart,
    /// Fired by the periodic tick source of `session`.
    Tick { session: u32 },
    /// Click in scene coordinates.
    Plant { x: f64, y: f64 },
}

impl Reducible for GameState {
    type Action = GameAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use GameAction::*;
        let mut new = (*self).clone();
        match action {
            Start | Restart => {
                if new.phase == Phase::Running {
                    return self;
                }
                new.begin_round();
                clog(&format!("round {} started", new.session));
            }
            Tick { session } => {
                if new.phase != Phase::Running || session != new.session {
                    return self;
                }
                if new.world.tick(&new.config) == TickOutcome::GameOver {
                    new.phase = Phase::GameOver;
                    clog(&format!(
                        "round {} over: {} trees, score {}",
                        new.session,
                        new.world.trees.len(),
                        new.world.score
                    ));
                }
            }
            Plant { x, y } => {
                if let Err(e) = input::handle_pointer(&mut new, x, y) {
                    clog(&format!("plant ignored: {}", e));
                    return self;
                }
            }
        }
        new.version = new.version.wrapping_add(1);
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running() -> (WorldState, GameConfig) {
        let cfg = GameConfig::default();
        (WorldState::new(&cfg), cfg)
    }

    fn dispatch(state: Rc<GameState>, action: GameAction) -> Rc<GameState> {
        state.reduce(action)
    }

    fn started() -> Rc<GameState> {
        dispatch(Rc::new(GameState::new(GameConfig::default())), GameAction::Start)
    }

    #[test]
    fn planting_on_the_ground_scores_and_adds_a_young_tree() {
        let (mut world, cfg) = running();
        world.add_object(120.0, 480.0, &cfg).unwrap();
        assert_eq!(world.score, 10);
        assert_eq!(world.trees.len(), 1);
        let tree = &world.trees[0];
        assert_eq!(tree.stage, GrowthStage::Young);
        assert_eq!(tree.age, 0);
        assert_eq!(tree.size, 15.0);
        assert_eq!(tree.x, 120.0);
        assert_eq!(tree.y, 450.0);
    }

    #[test]
    fn band_top_edge_is_plantable() {
        let (mut world, cfg) = running();
        assert!(world.add_object(10.0, 450.0, &cfg).is_ok());
    }

    #[test]
    fn planting_above_the_band_is_rejected() {
        let (mut world, cfg) = running();
        let before = world.clone();
        assert_eq!(
            world.add_object(300.0, 449.0, &cfg),
            Err(Rejected::OutsideBand {
                y: 449.0,
                band_top: 450.0
            })
        );
        assert!(matches!(
            world.add_object(300.0, 0.0, &cfg),
            Err(Rejected::OutsideBand { .. })
        ));
        assert_eq!(world, before);
    }

    #[test]
    fn planting_below_the_scene_is_rejected() {
        let (mut world, cfg) = running();
        assert!(matches!(
            world.add_object(400.0, 10_000.0, &cfg),
            Err(Rejected::OutsideBand { .. })
        ));
        assert!(world.add_object(400.0, 500.0, &cfg).is_ok());
        assert_eq!(world.trees.len(), 1);
    }

    #[test]
    fn planting_left_or_right_of_the_scene_is_rejected() {
        let (mut world, cfg) = running();
        assert_eq!(
            world.add_object(-500.0, 470.0, &cfg),
            Err(Rejected::OutsideScene { x: -500.0 })
        );
        assert_eq!(
            world.add_object(800.5, 470.0, &cfg),
            Err(Rejected::OutsideScene { x: 800.5 })
        );
        assert!(world.trees.is_empty());
        assert_eq!(world.score, 0);
    }

    #[test]
    fn nan_coordinates_are_rejected() {
        let (mut world, cfg) = running();
        assert!(matches!(
            world.add_object(400.0, f64::NAN, &cfg),
            Err(Rejected::OutsideBand { .. })
        ));
        assert!(matches!(
            world.add_object(f64::NAN, 470.0, &cfg),
            Err(Rejected::OutsideScene { .. })
        ));
        assert!(world.trees.is_empty());
        assert_eq!(world.score, 0);
    }

    #[test]
    fn planting_at_capacity_never_mutates() {
        let (mut world, cfg) = running();
        for i in 0..cfg.capacity {
            world.add_object(i as f64 * 10.0, 470.0, &cfg).unwrap();
        }
        assert_eq!(world.trees.len(), 50);
        let before = world.clone();
        assert_eq!(
            world.add_object(5.0, 470.0, &cfg),
            Err(Rejected::AtCapacity { capacity: 50 })
        );
        assert_eq!(world, before);
    }

    #[test]
    fn inactive_world_rejects_planting() {
        let cfg = GameConfig::default();
        let mut world = WorldState::idle(&cfg);
        assert_eq!(world.add_object(5.0, 470.0, &cfg), Err(Rejected::Inactive));
        assert!(world.trees.is_empty());
    }

    #[test]
    fn each_tick_counts_down_by_one_until_game_over() {
        let (mut world, cfg) = running();
        for expected in (1..60).rev() {
            assert_eq!(world.tick(&cfg), TickOutcome::Continue);
            assert_eq!(world.ticks_remaining, expected);
            assert!(world.active);
        }
        assert_eq!(world.tick(&cfg), TickOutcome::GameOver);
        assert_eq!(world.ticks_remaining, 0);
        assert!(!world.active);
    }

    #[test]
    fn tick_after_game_over_is_a_no_op() {
        let (mut world, cfg) = running();
        world.add_object(50.0, 460.0, &cfg).unwrap();
        for _ in 0..60 {
            world.tick(&cfg);
        }
        let frozen = world.clone();
        assert_eq!(world.tick(&cfg), TickOutcome::GameOver);
        assert_eq!(world, frozen);
    }

    #[test]
    fn trees_mature_exactly_when_age_exceeds_five() {
        let (mut world, cfg) = running();
        world.add_object(50.0, 460.0, &cfg).unwrap();
        for age in 1..=5 {
            world.tick(&cfg);
            assert_eq!(world.trees[0].age, age);
            assert_eq!(world.trees[0].stage, GrowthStage::Young);
        }
        world.tick(&cfg);
        assert_eq!(world.trees[0].age, 6);
        assert_eq!(world.trees[0].stage, GrowthStage::Mature);
        assert_eq!(world.trees[0].size, 15.0 + 6.0 * 0.5);
        for _ in 0..10 {
            world.tick(&cfg);
            assert_eq!(world.trees[0].stage, GrowthStage::Mature);
        }
    }

    #[test]
    fn trees_age_independently_of_planting_time() {
        let (mut world, cfg) = running();
        world.add_object(50.0, 460.0, &cfg).unwrap();
        world.tick(&cfg);
        world.tick(&cfg);
        world.add_object(90.0, 460.0, &cfg).unwrap();
        world.tick(&cfg);
        assert_eq!(world.trees[0].age, 3);
        assert_eq!(world.trees[1].age, 1);
        assert!(world.trees[0].size > world.trees[1].size);
    }

    #[test]
    fn start_moves_to_running_with_a_fresh_world() {
        let state = started();
        assert_eq!(state.phase, Phase::Running);
        assert_eq!(state.session, 1);
        assert!(state.world.active);
        assert_eq!(state.world.ticks_remaining, 60);
    }

    #[test]
    fn plant_action_updates_score_and_count() {
        let state = dispatch(started(), GameAction::Plant { x: 400.0, y: 490.0 });
        assert_eq!(state.world.score, 10);
        assert_eq!(state.world.trees.len(), 1);
        assert_eq!(state.world.trees[0].stage, GrowthStage::Young);
    }

    #[test]
    fn rejected_plant_leaves_state_untouched() {
        let before = started();
        let after = dispatch(before.clone(), GameAction::Plant { x: 400.0, y: 100.0 });
        assert!(Rc::ptr_eq(&before, &after));
    }

    #[test]
    fn plant_before_start_is_ignored() {
        let idle = Rc::new(GameState::new(GameConfig::default()));
        let after = dispatch(idle.clone(), GameAction::Plant { x: 400.0, y: 490.0 });
        assert!(after.world.trees.is_empty());
        assert_eq!(after.phase, Phase::NotStarted);
    }

    #[test]
    fn sixty_ticks_with_no_trees_ends_the_round() {
        let mut state = started();
        let session = state.session;
        for _ in 0..59 {
            state = dispatch(state, GameAction::Tick { session });
            assert_eq!(state.phase, Phase::Running);
            assert!(!state.restart_available());
        }
        state = dispatch(state, GameAction::Tick { session });
        assert_eq!(state.phase, Phase::GameOver);
        assert_eq!(state.world.ticks_remaining, 0);
        assert!(state.restart_available());
    }

    #[test]
    fn ticks_after_game_over_are_ignored() {
        let mut state = started();
        let session = state.session;
        for _ in 0..60 {
            state = dispatch(state, GameAction::Tick { session });
        }
        let over = state.clone();
        let after = dispatch(state, GameAction::Tick { session });
        assert!(Rc::ptr_eq(&over, &after));
    }

    #[test]
    fn restart_after_game_over_resets_everything() {
        let mut state = dispatch(started(), GameAction::Plant { x: 10.0, y: 480.0 });
        let session = state.session;
        for _ in 0..60 {
            state = dispatch(state, GameAction::Tick { session });
        }
        assert_eq!(state.phase, Phase::GameOver);
        state = dispatch(state, GameAction::Restart);
        assert_eq!(state.phase, Phase::Running);
        assert_eq!(state.world.trees.len(), 0);
        assert_eq!(state.world.score, 0);
        assert_eq!(state.world.ticks_remaining, 60);
        assert_eq!(state.session, session + 1);
    }

    #[test]
    fn stale_session_ticks_are_ignored() {
        let mut state = started();
        let old = state.session;
        for _ in 0..60 {
            state = dispatch(state, GameAction::Tick { session: old });
        }
        state = dispatch(state, GameAction::Restart);
        let fresh = state.clone();
        let after = dispatch(state, GameAction::Tick { session: old });
        assert!(Rc::ptr_eq(&fresh, &after));
        assert_eq!(after.world.ticks_remaining, 60);
    }

    #[test]
    fn start_after_game_over_begins_a_fresh_round() {
        let mut state = dispatch(started(), GameAction::Plant { x: 10.0, y: 480.0 });
        let session = state.session;
        for _ in 0..60 {
            state = dispatch(state, GameAction::Tick { session });
        }
        assert_eq!(state.phase, Phase::GameOver);
        state = dispatch(state, GameAction::Start);
        assert_eq!(state.phase, Phase::Running);
        assert_eq!(state.world, WorldState::new(&state.config));
        assert_eq!(state.session, session + 1);
    }

    #[test]
    fn restart_before_first_start_begins_a_round() {
        let idle = Rc::new(GameState::new(GameConfig::default()));
        let session = idle.session;
        let state = dispatch(idle, GameAction::Restart);
        assert_eq!(state.phase, Phase::Running);
        assert_eq!(state.world, WorldState::new(&state.config));
        assert_eq!(state.session, session + 1);
    }

    #[test]
    fn restart_while_running_is_ignored() {
        let state = dispatch(started(), GameAction::Plant { x: 10.0, y: 480.0 });
        let again = dispatch(state.clone(), GameAction::Restart);
        assert!(Rc::ptr_eq(&state, &again));
        assert_eq!(again.world.trees.len(), 1);
    }

    #[test]
    fn start_while_running_is_ignored() {
        let state = dispatch(started(), GameAction::Plant { x: 10.0, y: 480.0 });
        let again = dispatch(state.clone(), GameAction::Start);
        assert!(Rc::ptr_eq(&state, &again));
        assert_eq!(again.world.trees.len(), 1);
    }
}
