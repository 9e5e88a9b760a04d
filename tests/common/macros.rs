/// Asserts the colony's population bookkeeping:
/// `ant_count == |ants| + queen alive` and `dead == born - ant_count`.
#[macro_export]
macro_rules! assert_colony_invariants {
    ($colony:expr) => {
        let colony = &$colony;
        let expected =
            colony.ants().len() + usize::from(formica_core::Lifecycle::is_alive(colony.queen()));
        assert_eq!(
            colony.ant_count(),
            expected,
            "ant_count mismatch on day {}",
            colony.day()
        );
        assert_eq!(
            colony.dead_ant_count(),
            colony.born_ants() - colony.ant_count() as u64,
            "dead_ant_count mismatch on day {}",
            colony.day()
        );
        assert!(
            colony.food().quantity() >= 0.0,
            "negative food on day {}",
            colony.day()
        );
        assert!(
            colony.ants().iter().all(formica_core::Lifecycle::is_alive),
            "dead ant kept on day {}",
            colony.day()
        );
        assert!(
            colony.eggs().iter().all(formica_core::Lifecycle::is_alive),
            "dead egg kept on day {}",
            colony.day()
        );
    };
}

/// Asserts the number of living individuals, queen included.
#[macro_export]
macro_rules! assert_population {
    ($colony:expr, $count:expr) => {
        assert_eq!($colony.ant_count(), $count, "Population count mismatch");
    };
}
