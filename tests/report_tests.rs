#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use krokets::simulation::report::{
    FitnessEntry, FitnessHistory, FitnessSummary, GenerationReport,
};

fn entries(normalized: &[f32]) -> Vec<FitnessEntry> {
    normalized
        .iter()
        .enumerate()
        .map(|(index, &normalized)| FitnessEntry {
            index,
            raw: normalized * 100.0,
            normalized,
        })
        .collect()
}

fn report(generation: u32, completed: usize) -> GenerationReport {
    let fitness = entries(&[0.25, 0.5, 0.25]);
    GenerationReport {
        generation,
        summary: FitnessSummary::from_entries(&fitness),
        fitness,
        selections: Vec::new(),
        parents: (0, 0),
        mutation_rate: 0.1,
        degenerate: false,
        completed,
        crashed: 0,
    }
}

#[test]
fn test_summary_min_avg_max() {
    let summary = FitnessSummary::from_entries(&entries(&[0.1, 0.4, 0.05, 0.45]));

    assert_eq!(summary.min, 0.05);
    assert_eq!(summary.min_index, 2);
    assert_eq!(summary.max, 0.45);
    assert_eq!(summary.max_index, 3);
    assert!((summary.avg - 0.25).abs() < 1e-6);
}

#[test]
fn test_summary_of_nothing_is_zero() {
    assert_eq!(FitnessSummary::from_entries(&[]), FitnessSummary::default());
}

#[test]
fn test_history_tracks_recent_generations() {
    let mut history = FitnessHistory::new(2);
    assert!(history.is_empty());
    assert_eq!(history.average_completed(), 0.0);

    history.record(&report(0, 1));
    history.record(&report(1, 2));
    history.record(&report(2, 4));

    assert_eq!(history.len(), 2);
    assert_eq!(history.latest().map(|e| e.generation), Some(2));
    assert_eq!(history.average_completed(), 3.0);
    assert_eq!(history.best_raw(), Some(50.0));

    history.clear();
    assert!(history.is_empty());
}
