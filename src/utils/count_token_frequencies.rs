use crate::types::{RankedWordMap, TokenRef};

/// Counts the frequency of tokens in the given list.
///
/// # Arguments
/// * `tokens` - The tokens to analyze, in document order.
///
/// # Returns
/// * A map where the keys are tokens and the values are their respective
///   frequencies. Keys iterate in first-encountered order.
///
/// # Example
/// ```ignore
/// let frequencies = count_token_frequencies(&["BTC", "ETH", "BTC"]);
/// assert_eq!(frequencies.get("BTC"), Some(&2));
/// assert_eq!(frequencies.get_index(1), Some((&"ETH".to_string(), &1)));
/// ```
pub fn count_token_frequencies<T: AsRef<TokenRef>>(tokens: &[T]) -> RankedWordMap {
    let mut frequencies = RankedWordMap::new();

    for token in tokens {
        let token = token.as_ref();
        match frequencies.get_mut(token) {
            Some(frequency) => *frequency += 1,
            None => {
                frequencies.insert(token.to_string(), 1);
            }
        }
    }

    frequencies
}
