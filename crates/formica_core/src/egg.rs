use crate::ant::Ant;
use crate::config::Settings;
use crate::food::Food;
use crate::lifecycle::{draw_around, roll, Lifecycle};
use crate::queen::Queen;
use formica_data::{EggFate, EggRecord, LifeState};
use rand::Rng;

/// What comes out of an egg that hatches.
#[derive(Debug, Clone, PartialEq)]
pub enum Hatchling {
    Ant(Ant),
    Queen(Queen),
}

/// A regular egg or a queen (successor) egg.
#[derive(Debug, Clone, PartialEq)]
pub struct Egg {
    age: u32,
    max_age: u32,
    state: LifeState,
    is_queen_egg: bool,
    fate: Option<EggFate>,
}

impl Egg {
    /// Fresh egg whose incubation time is drawn from the distribution of its kind.
    pub fn new<R: Rng + ?Sized>(settings: &Settings, rng: &mut R, is_queen_egg: bool) -> Self {
        let max_age = if is_queen_egg {
            draw_around(
                rng,
                settings.queen_avg_egg_age,
                settings.queen_avg_egg_age_variation,
            )
        } else {
            draw_around(rng, settings.egg_avg_age, settings.egg_avg_age_variation)
        };
        Self::with_max_age(max_age, is_queen_egg)
    }

    #[must_use]
    pub fn with_max_age(max_age: u32, is_queen_egg: bool) -> Self {
        Self::aged(0, max_age, is_queen_egg)
    }

    #[must_use]
    pub fn aged(age: u32, max_age: u32, is_queen_egg: bool) -> Self {
        Self {
            age,
            max_age,
            state: LifeState::Alive,
            is_queen_egg,
            fate: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> LifeState {
        self.state
    }

    #[must_use]
    pub fn is_queen_egg(&self) -> bool {
        self.is_queen_egg
    }

    #[must_use]
    pub fn fate(&self) -> Option<EggFate> {
        self.fate
    }

    fn end(&mut self, fate: EggFate) {
        self.state = LifeState::Dead;
        self.fate = Some(fate);
    }

    #[must_use]
    pub fn to_record(&self) -> EggRecord {
        EggRecord {
            age: self.age,
            max_age: self.max_age,
            state: self.state,
            is_queen_egg: self.is_queen_egg,
            fate: self.fate,
        }
    }
}

impl Lifecycle for Egg {
    /// The new colony member, if the egg hatched during this call.
    type Outcome = Option<Hatchling>;

    fn evolve<R: Rng + ?Sized>(
        &mut self,
        food: &mut Food,
        settings: &Settings,
        rng: &mut R,
    ) -> Option<Hatchling> {
        if !self.is_alive() {
            return None;
        }
        let (hunger, evolve_chance) = if self.is_queen_egg {
            (settings.queen_egg_hunger, settings.queen_egg_evolve_chance)
        } else {
            (settings.egg_hunger, settings.egg_evolve_chance)
        };
        if !food.can_afford(hunger) {
            self.end(EggFate::Starved);
            return None;
        }
        self.age += 1;
        food.remove(hunger);
        if self.age <= self.max_age {
            return None;
        }
        if !roll(rng, evolve_chance) {
            self.end(EggFate::FailedToHatch);
            return None;
        }
        self.end(EggFate::Hatched);
        Some(if self.is_queen_egg {
            Hatchling::Queen(Queen::new(settings, rng))
        } else {
            Hatchling::Ant(Ant::new(settings, rng))
        })
    }

    fn is_alive(&self) -> bool {
        self.state.is_alive()
    }

    fn age(&self) -> u32 {
        self.age
    }

    fn max_age(&self) -> u32 {
        self.max_age
    }
}
