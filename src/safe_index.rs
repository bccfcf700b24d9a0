//! Bounds-checked indexing that answers `None` instead of panicking.

/// Read and write access to a slice that tolerates missing or out-of-range indices.
///
/// ```
/// use view_reconciler::SafeIndex;
///
/// let words = vec!["Hello", "World"];
/// assert_eq!(words.get_safe(Some(2)).copied().unwrap_or("Out of range"), "Out of range");
/// ```
pub trait SafeIndex<T> {
    /// The element at `index`, or `None` when the index is absent or outside `[0, len)`.
    fn get_safe(&self, index: Option<isize>) -> Option<&T>;

    /// Writes `value` at `index` when both are present and the index is valid.
    /// Returns whether the slice changed.
    fn set_safe(&mut self, index: Option<isize>, value: Option<T>) -> bool;
}

impl<T> SafeIndex<T> for [T] {
    fn get_safe(&self, index: Option<isize>) -> Option<&T> {
        checked_position(index, self.len()).map(|position| &self[position])
    }

    fn set_safe(&mut self, index: Option<isize>, value: Option<T>) -> bool {
        match (checked_position(index, self.len()), value) {
            (Some(position), Some(value)) => {
                self[position] = value;
                true
            }
            _ => false,
        }
    }
}

fn checked_position(index: Option<isize>, len: usize) -> Option<usize> {
    let position = usize::try_from(index?).ok()?;
    (position < len).then_some(position)
}
