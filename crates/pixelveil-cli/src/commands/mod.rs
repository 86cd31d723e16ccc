pub mod clear;
pub mod diff;
pub mod hide;
pub mod tint;
pub mod unveil;

use std::num::ParseIntError;

/// parses `a,b,c,...` into exactly `N` numbers
pub(crate) fn parse_list<T, const N: usize>(s: &str) -> Result<[T; N], String>
where
    T: std::str::FromStr<Err = ParseIntError> + Copy + Default,
{
    let mut values = [T::default(); N];
    let mut parts = s.split(',');
    for value in values.iter_mut() {
        let part = parts
            .next()
            .ok_or_else(|| format!("expected {N} comma separated numbers"))?;
        *value = part.trim().parse().map_err(|e| format!("{part:?}: {e}"))?;
    }
    if parts.next().is_some() {
        return Err(format!("expected {N} comma separated numbers"));
    }

    Ok(values)
}
