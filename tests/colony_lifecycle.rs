mod common;

use common::ColonyBuilder;
use formica_core::{Ant, Egg, Food, Lifecycle, Queen};
use formica_data::{DeathCause, EggFate, Job};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn test_starving_queen_leaves_successor_egg() {
    let mut colony = ColonyBuilder::new()
        .with_food(0.0)
        .with_config(|c| c.queen_egg_hunger = 0.0)
        .build();
    assert_population!(colony, 1);

    let report = colony.evolve();

    assert!(report.queen_died);
    assert!(report.successor_egg_laid);
    assert_eq!(colony.queen().death_cause(), Some(DeathCause::Starvation));
    assert_eq!(colony.egg_count(), 1);
    assert!(colony.eggs()[0].is_queen_egg());
    assert_eq!(colony.eggs()[0].age(), 1);
    assert_eq!(report.eggs_laid, 0, "A dead queen lays nothing");
    assert_population!(colony, 0);
    assert!(!colony.is_extinct());
    assert_colony_invariants!(colony);
}

#[test]
fn test_successor_egg_starves_without_food() {
    let mut colony = ColonyBuilder::new().with_food(0.0).build();
    let report = colony.evolve();

    assert!(report.successor_egg_laid);
    assert_eq!(report.eggs_starved, 1);
    assert!(colony.is_extinct());
    assert_eq!(colony.dead_ant_count(), 1);
    assert_colony_invariants!(colony);
}

#[test]
fn test_ant_dies_of_old_age_after_exact_lifespan() {
    let builder = ColonyBuilder::new().with_config(|c| {
        c.ant_random_death_chance = 0.0;
        c.ant_avg_age = 5;
        c.ant_avg_age_variation = 0;
    });
    let settings = builder.settings();
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut food = Food::new(1_000.0);
    let mut ant = Ant::new(&settings, &mut rng);
    assert_eq!(ant.max_age(), 5);

    for day in 1..=5 {
        assert_eq!(ant.evolve(&mut food, &settings, &mut rng), None);
        assert!(ant.is_alive(), "ant should survive day {day}");
        assert_eq!(ant.age(), day);
    }

    assert_eq!(
        ant.evolve(&mut food, &settings, &mut rng),
        Some(DeathCause::OldAge)
    );
    assert!(!ant.is_alive());
    assert_eq!(ant.age(), 6);
    assert!((food.quantity() - (1_000.0 - 6.0 * settings.ant_hunger)).abs() < 1e-9);
}

#[test]
fn test_colony_drops_ant_that_outlived_its_lifespan() {
    let mut colony = ColonyBuilder::new()
        .with_config(|c| c.ant_random_death_chance = 0.0)
        .with_queen(Queen::with_max_age(10_000))
        .with_ant(Ant::with_traits(5, Job::NotWorker))
        .build();

    for _ in 0..5 {
        colony.evolve();
        assert_eq!(colony.ants().len(), 1);
        assert_colony_invariants!(colony);
    }
    let report = colony.evolve();
    assert_eq!(report.ants_died_of_age, 1);
    assert!(colony.ants().is_empty());
    assert_eq!(colony.dead_ant_count(), 1);
    assert_colony_invariants!(colony);
}

#[test]
fn test_daily_laying_grows_egg_count_by_one_batch() {
    let mut colony = ColonyBuilder::new()
        .with_config(|c| {
            c.queen_laying_rate = 1;
            c.queen_avg_eggs = 10;
            c.queen_avg_egg_variation = 3;
            c.egg_avg_age = 1_000;
            c.egg_avg_age_variation = 0;
            c.queen_avg_age = 10_000;
            c.queen_avg_age_variation = 0;
        })
        .build();

    let mut previous = colony.egg_count();
    for _ in 0..20 {
        let report = colony.evolve();
        let grown = colony.egg_count() - previous;
        assert_eq!(grown, report.eggs_laid);
        assert!((7..=13).contains(&grown), "batch of {grown} eggs");
        previous = colony.egg_count();
        assert_colony_invariants!(colony);
    }
}

#[test]
fn test_laying_only_on_rate_days() {
    let mut colony = ColonyBuilder::new()
        .with_config(|c| {
            c.queen_laying_rate = 3;
            c.queen_avg_eggs = 4;
            c.queen_avg_egg_variation = 0;
            c.egg_avg_age = 1_000;
            c.egg_avg_age_variation = 0;
        })
        .build();

    let laid: Vec<usize> = (0..7).map(|_| colony.evolve().eggs_laid).collect();
    assert_eq!(laid, vec![4, 0, 0, 4, 0, 0, 4]);
}

#[test]
fn test_egg_hatches_into_ant_after_incubation() {
    let mut colony = ColonyBuilder::new()
        .with_config(|c| {
            c.egg_evolve_chance = 1.0;
            c.queen_avg_eggs = 0;
            c.queen_avg_egg_variation = 0;
        })
        .with_queen(Queen::with_max_age(10_000))
        .with_egg(Egg::with_max_age(2, false))
        .build();
    assert_eq!(colony.born_ants(), 1);

    colony.evolve();
    colony.evolve();
    assert_eq!(colony.egg_count(), 1);

    let report = colony.evolve();
    assert_eq!(report.ants_hatched, 1);
    assert_eq!(colony.ants().len(), 1);
    assert_eq!(colony.born_ants(), 2);
    assert_colony_invariants!(colony);
}

#[test]
fn test_failed_hatch_discards_egg() {
    let mut colony = ColonyBuilder::new()
        .with_config(|c| {
            c.egg_evolve_chance = 0.0;
            c.queen_avg_eggs = 0;
            c.queen_avg_egg_variation = 0;
        })
        .with_queen(Queen::with_max_age(10_000))
        .with_egg(Egg::aged(1, 1, false))
        .build();

    let report = colony.evolve();
    assert_eq!(report.failed_hatches, 1);
    assert_eq!(report.ants_hatched, 0);
    assert!(colony.ants().is_empty());
}

#[test]
fn test_queen_egg_takes_over_after_old_queen_dies() {
    let mut colony = ColonyBuilder::new()
        .with_config(|c| {
            c.queen_egg_evolve_chance = 1.0;
            c.queen_avg_egg_age = 3;
            c.queen_avg_egg_age_variation = 0;
            c.queen_avg_eggs = 0;
            c.queen_avg_egg_variation = 0;
        })
        .with_queen(Queen::aged(8, 10))
        .build();

    let report = colony.evolve();
    assert!(report.queen_died);
    assert!(report.successor_egg_laid);
    assert_eq!(colony.queen().death_cause(), Some(DeathCause::OldAge));

    let mut succeeded = false;
    for _ in 0..4 {
        let report = colony.evolve();
        assert_colony_invariants!(colony);
        if report.queen_succeeded {
            succeeded = true;
            break;
        }
    }
    assert!(succeeded);
    assert!(colony.queen().is_alive());
    assert_eq!(colony.queen().age(), 0);
    assert_eq!(colony.born_ants(), 2);
    assert_eq!(colony.dead_ant_count(), 1);
}

#[test]
fn test_queen_hatchling_discarded_while_queen_lives() {
    let mut colony = ColonyBuilder::new()
        .with_config(|c| {
            c.queen_egg_evolve_chance = 1.0;
            c.queen_avg_eggs = 0;
            c.queen_avg_egg_variation = 0;
        })
        .with_queen(Queen::with_max_age(10_000))
        .with_egg(Egg::aged(1, 1, true))
        .build();

    let report = colony.evolve();
    assert_eq!(report.queens_hatched, 1);
    assert_eq!(report.queens_discarded, 1);
    assert!(!report.queen_succeeded);
    assert_eq!(colony.queen().max_age(), 10_000);
    assert_eq!(colony.born_ants(), 1);
    assert_colony_invariants!(colony);
}

#[test]
fn test_starved_egg_is_removed() {
    let mut colony = ColonyBuilder::new()
        .with_food(0.0)
        .with_config(|c| c.queen_avg_eggs = 0)
        .with_queen(Queen::with_max_age(10_000))
        .with_egg(Egg::with_max_age(10, false))
        .build();

    let report = colony.evolve();
    // The starving queen's successor egg starves in the same egg phase.
    assert_eq!(report.eggs_starved, 2);
    assert!(colony.eggs().is_empty());
    assert!(colony.is_extinct());
    assert_eq!(
        colony.to_record().queen.death_cause,
        Some(DeathCause::Starvation)
    );
}

#[test]
fn test_egg_fate_recorded_on_starvation() {
    let builder = ColonyBuilder::new();
    let settings = builder.settings();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut food = Food::new(0.05);
    let mut egg = Egg::with_max_age(4, false);

    assert!(egg.evolve(&mut food, &settings, &mut rng).is_none());
    assert_eq!(egg.fate(), Some(EggFate::Starved));
    assert_eq!(egg.age(), 0);
    assert!((food.quantity() - 0.05).abs() < f64::EPSILON);
}

#[test]
fn test_default_colony_keeps_invariants_for_a_year() {
    let mut colony = ColonyBuilder::new()
        .with_food(30_000.0)
        .with_config(|c| c.initial_ant_quantity = 100)
        .build();
    assert_population!(colony, 101);

    let mut last_day = colony.day();
    for _ in 0..365 {
        if colony.is_extinct() {
            break;
        }
        colony.evolve();
        assert_eq!(colony.day(), last_day + 1);
        last_day = colony.day();
        assert_colony_invariants!(colony);
    }
}
