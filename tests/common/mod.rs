pub mod macros;

use formica_core::{Ant, Colony, ColonyConfig, Egg, Queen, Settings};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Builds colonies for tests. Starts from an empty, well-fed colony with a
/// fixed seed so tests only spell out the parameters they care about.
#[allow(dead_code)]
pub struct ColonyBuilder {
    config: ColonyConfig,
    queen: Option<Queen>,
    ants: Option<Vec<Ant>>,
    eggs: Vec<Egg>,
}

#[allow(dead_code)]
impl ColonyBuilder {
    pub fn new() -> Self {
        Self {
            config: ColonyConfig {
                initial_ant_quantity: 0,
                initial_food_quantity: 1_000_000.0,
                seed: Some(42),
                ..Default::default()
            },
            queen: None,
            ants: None,
            eggs: Vec::new(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut ColonyConfig),
    {
        modifier(&mut self.config);
        self
    }

    pub fn with_food(mut self, quantity: f64) -> Self {
        self.config.initial_food_quantity = quantity;
        self
    }

    pub fn with_queen(mut self, queen: Queen) -> Self {
        self.queen = Some(queen);
        self
    }

    /// Replaces the randomly drawn initial population with explicit ants.
    pub fn with_ant(mut self, ant: Ant) -> Self {
        self.ants.get_or_insert_with(Vec::new).push(ant);
        self
    }

    pub fn with_egg(mut self, egg: Egg) -> Self {
        self.eggs.push(egg);
        self
    }

    pub fn settings(&self) -> Settings {
        Settings::new(self.config.clone()).expect("test config must be valid")
    }

    pub fn build(self) -> Colony {
        let settings = self.settings();
        let seed = self.config.seed.unwrap_or(0);
        if self.queen.is_none() && self.ants.is_none() && self.eggs.is_empty() {
            return Colony::new(settings);
        }
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let queen = self
            .queen
            .unwrap_or_else(|| Queen::new(&settings, &mut rng));
        let ants = match self.ants {
            Some(ants) => ants,
            None => (0..settings.initial_ant_quantity)
                .map(|_| Ant::new(&settings, &mut rng))
                .collect(),
        };
        Colony::with_population(settings, rng, queen, ants, self.eggs)
    }
}
