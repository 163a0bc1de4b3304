//! Boolean reductions

/// Exclusive-or over any number of booleans: true iff an odd number are true.
///
/// # Example
///
/// ```rust
/// use candiff_util::xor;
///
/// assert!(xor([true, false, false]));
/// assert!(!xor([true, true]));
/// assert!(!xor(std::iter::empty::<bool>()));
/// ```
pub fn xor<I>(items: I) -> bool
where
    I: IntoIterator<Item = bool>,
{
    items.into_iter().fold(false, |acc, item| acc ^ item)
}
