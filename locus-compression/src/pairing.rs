//! Integer transforms that fold a latitude/longitude delta into a single non-negative value.

/// Maps signed values to unsigned ones so that small magnitudes stay small:
/// `0, -1, 1, -2, 2` become `0, 1, 2, 3, 4`.
pub(crate) fn zigzag(value: i64) -> u64 {
    ((value << 1) ^ (value >> 63)) as u64
}

/// Inverse of [`zigzag`].
pub(crate) fn unzigzag(value: u64) -> i64 {
    ((value >> 1) as i64) ^ -((value & 1) as i64)
}

/// Cantor pairing of two values.
///
/// The sum of the arguments must stay below `2^63`, which holds for zig-zagged deltas of coordinates
/// limited to `2^53`.
pub(crate) fn pair(y: u64, x: u64) -> u128 {
    let diagonal = y as u128 + x as u128;
    diagonal * (diagonal + 1) / 2 + y as u128
}

/// Inverse of [`pair`]. Returns `None` if the index does not correspond to two 64-bit values.
pub(crate) fn unpair(index: u128) -> Option<(u64, u64)> {
    let diagonal = (index.checked_mul(8)?.checked_add(1)?.isqrt() - 1) / 2;
    let y = index - diagonal * (diagonal + 1) / 2;
    let x = diagonal - y;

    Some((u64::try_from(y).ok()?, u64::try_from(x).ok()?))
}
