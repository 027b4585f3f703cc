//! Building one rule per element of a list-shaped input.

use crate::core::LazyRule;

/// Map every item to a lazy rule, passing the item's index along.
///
/// Nothing is evaluated here. An empty input gives an empty vector; an
/// optional list can be passed as `maybe_list.into_iter().flatten()`.
///
/// # Example
///
/// ```rust
/// use verdict::engine::validate_all;
/// use verdict::rules::{collection, lazy};
///
/// let names = vec!["Ada".to_string(), " ".to_string()];
/// let rules = collection::from(&names, |i, name| {
///     lazy::not_blank(format!("input[{i}]"), Some(name.as_str()))
/// });
///
/// let violations = validate_all(rules);
/// assert_eq!(violations.len(), 1);
/// assert_eq!(violations[0].field_path(), "input[1]");
/// ```
pub fn from<'a, I, F>(items: I, mut mapper: F) -> Vec<LazyRule<'a>>
where
    I: IntoIterator,
    F: FnMut(usize, I::Item) -> LazyRule<'a>,
{
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| mapper(index, item))
        .collect()
}
