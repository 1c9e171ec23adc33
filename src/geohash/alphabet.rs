//! The geohash base-32 alphabet and per-character bit weights.

/// Symbols for the 5-bit values 0 through 31, in value order.
pub const BASE32: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

/// Bit weights within one character, most significant first.
pub const BITS: [u8; 5] = [0b10000, 0b01000, 0b00100, 0b00010, 0b00001];

/// Number of bisection bits carried by one character.
pub const BITS_PER_CHAR: usize = BITS.len();

/// Returns the symbol for a 5-bit value.
///
/// Only the low five bits of `value` are used.
///
/// # Examples
///
/// ```
/// use geocell::geohash::alphabet::symbol;
///
/// assert_eq!(symbol(7), '7');
/// assert_eq!(symbol(31), 'z');
/// ```
#[must_use]
pub const fn symbol(value: u8) -> char {
    BASE32[(value & 0b11111) as usize] as char
}

/// Returns the 5-bit value of a symbol, or `None` if it is not in the alphabet.
///
/// Lookup is case-sensitive; `a`, `i`, `l` and `o` are never valid.
///
/// # Examples
///
/// ```
/// use geocell::geohash::alphabet::value_of;
///
/// assert_eq!(value_of('b'), Some(10));
/// assert_eq!(value_of('a'), None);
/// ```
#[must_use]
pub fn value_of(c: char) -> Option<u8> {
    let byte = u8::try_from(c).ok()?;
    BASE32
        .iter()
        .position(|&b| b == byte)
        .and_then(|idx| u8::try_from(idx).ok())
}
