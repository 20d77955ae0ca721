use rowmap_core::{Record, Value};
use std_util::str::snake_case;

/// Finds the source field for `expected`.
///
/// An exact name match always wins. Otherwise a source field matches when its
/// snake-cased name equals the snake-cased expected name, so `user_id` in the
/// source fills a model field named `UserId` and `userId` fills `user_id`.
/// More than one such fallback candidate is ambiguous and resolves to nothing.
pub(super) fn resolve<'a>(source: &'a Record, expected: &str) -> Option<(&'a str, &'a Value)> {
    if let Some(entry) = source.get_entry(expected) {
        return Some(entry);
    }

    let expected = snake_case(expected);
    let mut candidates = source
        .iter()
        .filter(|(name, _)| snake_case(name) == expected);

    let first = candidates.next()?;

    if let Some((second, _)) = candidates.next() {
        tracing::debug!(
            expected = expected.as_str(),
            first = first.0,
            second,
            "ambiguous source field"
        );
        return None;
    }

    Some(first)
}
