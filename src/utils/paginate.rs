/// Returns the `[skip, skip + limit)` window of `items`, clamped to its bounds.
pub fn paginate<T>(items: &[T], skip: usize, limit: usize) -> &[T] {
    let start = skip.min(items.len());
    let end = skip.saturating_add(limit).min(items.len());

    &items[start..end]
}
