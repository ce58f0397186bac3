use lanevo::{
    adversary::{AdversarialArray, AdversarialArrayFactory},
    breeding::OnePointCrossover,
    evolution::{EvolutionLauncherBuilder, EvolutionOptions, EvolutionResult, LogLevel},
    mutation::{AdaptiveMutation, SwapMutation},
    rng::RandomAllocator,
    selection::{ParentSurvivorSelection, TournamentSelection},
    termination::CountingTermination,
};
use rand::{rngs::SmallRng, Rng, SeedableRng};

fn run(workers: usize, seed: u64) -> EvolutionResult<AdversarialArray> {
    let options = EvolutionOptions::builder()
        .population_size(16)
        .workers(workers)
        .seed(seed)
        .log_level(LogLevel::Minimal)
        .build();

    EvolutionLauncherBuilder::<AdversarialArray, _, _, _, _, _>::new()
        .with_options(options)
        .with_factory(AdversarialArrayFactory::new(20))
        .with_selection(TournamentSelection::new(3))
        .with_crossover(OnePointCrossover)
        .with_mutation(AdaptiveMutation::new(SwapMutation, 4).unwrap())
        .with_termination(CountingTermination::new(10))
        .with_survivor_selection(ParentSurvivorSelection::new(TournamentSelection::new(2)))
        .build()
        .unwrap()
        .run()
        .unwrap()
}

#[test]
fn test_same_seed_same_result_for_any_worker_count() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let baseline = run(1, 2024);
    for workers in [2, 3, 8] {
        let other = run(workers, 2024);
        assert_eq!(baseline.chromosome.values(), other.chromosome.values());
        assert_eq!(baseline.fitness, other.fitness);
        assert_eq!(baseline.history, other.history);
    }
}

#[test]
fn test_different_seeds_diverge() {
    let first = run(1, 1);
    let second = run(1, 2);
    assert_ne!(first.history[0], second.history[0]);
}

#[test]
fn test_custom_lane_constructor() {
    let build = || {
        EvolutionLauncherBuilder::<AdversarialArray, _, _, _, _, _>::new()
            .with_options(EvolutionOptions::builder().population_size(6).workers(2).build())
            .with_allocator(RandomAllocator::build(6, 77, SmallRng::seed_from_u64))
            .with_factory(AdversarialArrayFactory::new(10))
            .with_selection(TournamentSelection::new(2))
            .with_crossover(OnePointCrossover)
            .with_mutation(SwapMutation)
            .with_termination(CountingTermination::new(5))
            .build()
            .unwrap()
    };

    let first = build().run().unwrap();
    let second = build().run().unwrap();
    assert_eq!(first.chromosome.values(), second.chromosome.values());
}

#[test]
fn test_allocators_agree_lane_by_lane() {
    let mut first = RandomAllocator::seeded(8, 5);
    let mut second = RandomAllocator::seeded(8, 5);
    for lane in 0..8 {
        let a: Vec<u32> = (0..16).map(|_| first.lane(lane).gen()).collect();
        let b: Vec<u32> = (0..16).map(|_| second.lane(lane).gen()).collect();
        assert_eq!(a, b);
    }
}
