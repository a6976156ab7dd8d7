// Stock predicates for `diff`.

use crate::edit::EditScript;
use crate::myers;

/// Plain value equality, for when both sequences share an element type.
///
/// ```
/// use anydiff::{diff, equal};
///
/// assert_eq!(diff(b"kitten", b"sitting", equal).distance(), 5);
/// ```
#[inline]
pub fn equal<T: PartialEq + ?Sized>(a: &T, b: &T) -> bool {
    a == b
}

/// Shortcut for `diff(a, b, equal)`.
pub fn diff_eq<T: PartialEq>(a: &[T], b: &[T]) -> EditScript {
    myers::diff(a, b, equal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_compares_values() {
        assert!(equal(&3, &3));
        assert!(!equal(&3, &4));
        assert!(equal("abc", "abc"));
    }

    #[test]
    fn diff_eq_matches_diff_with_equal() {
        let a = [1, 2, 3, 4];
        let b = [1, 3, 4, 5];
        assert_eq!(diff_eq(&a, &b), myers::diff(&a, &b, equal));
        assert_eq!(diff_eq(&a, &b).to_string(), "=-==+");
    }
}
