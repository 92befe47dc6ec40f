// src/pipeline/chunk.rs

/// Per-request keyword ceiling documented by the estimation service.
pub const MAX_KEYWORDS_PER_REQUEST: usize = 500;

/// Lazily partition `items` into contiguous, non-overlapping chunks of at
/// most `max` elements. Concatenating the chunks reproduces `items`
/// exactly; only the last chunk may be shorter. A `max` of zero is clamped
/// to one.
pub fn chunks<T>(items: &[T], max: usize) -> impl Iterator<Item = &[T]> {
    items.chunks(max.max(1))
}
