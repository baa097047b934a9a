use std::fmt;

/// Writes elements in array-literal form: `[a, b, c]`.
pub(crate) fn write_list<'a, T: fmt::Display + 'a>(
    f: &mut fmt::Formatter<'_>,
    iter: impl Iterator<Item = &'a T>,
) -> fmt::Result {
    f.write_str("[")?;
    for (i, value) in iter.enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        fmt::Display::fmt(value, f)?;
    }
    f.write_str("]")
}
