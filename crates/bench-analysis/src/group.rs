//! Cross-configuration / cross-solution grouping.

use std::collections::BTreeMap;

/// Key of one sample set in a multi-pipeline comparison.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SampleKey {
    pub solution: String,
    pub configuration: String,
    pub benchmark: String,
}

/// benchmark → configuration → solution → sample set
pub type GroupedSamples = BTreeMap<String, BTreeMap<String, BTreeMap<String, Vec<f64>>>>;

/// Reorganize sample sets keyed by (solution, configuration, benchmark)
/// into a benchmark-first lookup.
///
/// This is a pure reshape: no aggregation, and combinations absent from the
/// input are absent from the output.
pub fn group_by_benchmark<I>(entries: I) -> GroupedSamples
where
    I: IntoIterator<Item = (SampleKey, Vec<f64>)>,
{
    let mut grouped = GroupedSamples::new();
    for (key, samples) in entries {
        grouped
            .entry(key.benchmark)
            .or_default()
            .entry(key.configuration)
            .or_default()
            .insert(key.solution, samples);
    }
    grouped
}
