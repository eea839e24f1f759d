use crate::types::{Word, WordFrequency};
use std::collections::HashMap;

/// Sorts a mapping of words to their frequencies.
///
/// ### Sorting Order:
/// - **Primary:** Sorts by frequency in descending order (higher frequency first).
/// - **Secondary:** If two words have the same frequency, sorts by word in
///   ascending lexicographical order for deterministic ordering.
///
/// ### Example:
/// ```ignore
/// let mut results = HashMap::new();
/// results.insert("bitcoin".to_string(), 10);
/// results.insert("ether".to_string(), 15);
/// results.insert("altcoin".to_string(), 10);
///
/// let sorted = sort_results(results);
/// assert_eq!(sorted, vec![
///     ("ether".to_string(), 15),
///     ("altcoin".to_string(), 10),
///     ("bitcoin".to_string(), 10)
/// ]);
/// ```
pub fn sort_results(results: HashMap<Word, WordFrequency>) -> Vec<(Word, WordFrequency)> {
    let mut sorted_results: Vec<(Word, WordFrequency)> = results.into_iter().collect();

    sorted_results.sort_by(|a, b| {
        b.1.cmp(&a.1) // Sort by frequency (descending)
            .then_with(|| a.0.cmp(&b.0)) // Secondary sort by word (ascending)
    });

    sorted_results
}
