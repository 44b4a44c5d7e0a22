use std::fmt;

use crate::math::{canonical_zero, Coord};

/// Writes `(c0, c1, ..., cN)`, printing negative zero as `0`.
///
/// Formatter flags such as precision are forwarded to each component.
pub(crate) fn write_tuple<T: Coord>(
    f: &mut fmt::Formatter<'_>,
    components: impl IntoIterator<Item = T>,
) -> fmt::Result {
    f.write_str("(")?;
    for (i, c) in components.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        fmt::Display::fmt(&canonical_zero(c), f)?;
    }
    f.write_str(")")
}
