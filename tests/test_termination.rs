use std::time::Duration;

use lanevo::{
    adversary::{AdversarialArray, AdversarialArrayFactory},
    breeding::OnePointCrossover,
    evolution::{EvolutionLauncherBuilder, EvolutionOptions},
    mutation::IndexMutation,
    selection::TournamentSelection,
    termination::{
        AnyTermination, CountingTermination, StallTermination, Termination, TimingTermination,
    },
};

fn options(seed: u64) -> EvolutionOptions {
    EvolutionOptions::builder()
        .population_size(10)
        .workers(2)
        .seed(seed)
        .build()
}

#[test]
fn test_counting_limits_generations() {
    for limit in [0, 1, 4, 9] {
        let mut launcher = EvolutionLauncherBuilder::<AdversarialArray, _, _, _, _, _>::new()
            .with_options(options(limit as u64))
            .with_factory(AdversarialArrayFactory::new(8))
            .with_selection(TournamentSelection::new(2))
            .with_crossover(OnePointCrossover)
            .with_mutation(IndexMutation)
            .with_termination(CountingTermination::new(limit))
            .build()
            .unwrap();

        let result = launcher.run().unwrap();
        assert_eq!(result.generations, limit);
    }
}

#[test]
fn test_composite_stops_at_earliest() {
    let termination = AnyTermination::default()
        .with(CountingTermination::new(6))
        .with(StallTermination::new(1_000));

    let mut launcher = EvolutionLauncherBuilder::<AdversarialArray, _, _, _, _, _>::new()
        .with_options(options(1))
        .with_factory(AdversarialArrayFactory::new(8))
        .with_selection(TournamentSelection::new(2))
        .with_crossover(OnePointCrossover)
        .with_mutation(IndexMutation)
        .with_termination(termination)
        .build()
        .unwrap();

    let result = launcher.run().unwrap();
    assert_eq!(result.generations, 6);
    assert_eq!(
        launcher.termination().name(),
        "multi-counting-6,consecutive-1000"
    );
}

#[test]
fn test_stall_eventually_stops() {
    // A four-element array has very few distinct comparison counts, so progress stalls quickly.
    let mut launcher = EvolutionLauncherBuilder::<AdversarialArray, _, _, _, _, _>::new()
        .with_options(options(8))
        .with_factory(AdversarialArrayFactory::new(4))
        .with_selection(TournamentSelection::new(3))
        .with_crossover(OnePointCrossover)
        .with_mutation(IndexMutation)
        .with_termination(StallTermination::new(3))
        .build()
        .unwrap();

    let result = launcher.run().unwrap();
    assert!(result.generations >= 4);

    // The last four checks saw no improvement over the best of the run.
    let tail = &result.history[result.history.len() - 4..];
    let before: i64 = result.history[..result.history.len() - 4]
        .iter()
        .map(|r| r.max)
        .max()
        .unwrap();
    assert!(tail.iter().all(|r| r.max <= before));
}

#[test]
fn test_timing_stops_run() {
    let termination = AnyTermination::default()
        .with(TimingTermination::new(Duration::from_millis(20)))
        .with(CountingTermination::new(1_000_000));

    let mut launcher = EvolutionLauncherBuilder::<AdversarialArray, _, _, _, _, _>::new()
        .with_options(options(2))
        .with_factory(AdversarialArrayFactory::new(16))
        .with_selection(TournamentSelection::new(2))
        .with_crossover(OnePointCrossover)
        .with_mutation(IndexMutation)
        .with_termination(termination)
        .build()
        .unwrap();

    let result = launcher.run().unwrap();
    assert!(result.generations > 0);
    assert!(result.generations < 1_000_000);
}
