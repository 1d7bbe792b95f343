//! Code 128 barcodes restricted to subset C (digit pairs).
//!
//! The access key printed on a DANFE is encoded as 22 digit pairs between a
//! start C symbol, a modulo 103 checksum and the stop pattern.

use crate::error::{DecodeError, EncodingError};
use danfe_format::digits_only;
use danfe_types::BarModule;
use std::fmt::Write;

pub const START_C: u8 = 105;
pub const STOP: u8 = 106;
/// Modules in every symbol except the stop pattern.
pub const SYMBOL_MODULES: usize = 11;
pub const STOP_MODULES: usize = 13;
/// Blank modules required on each side of the symbol.
pub const QUIET_ZONE_MODULES: usize = 10;

const MODULUS: u32 = 103;

/// Bar/space widths of symbol values 0 to 105, starting with a bar.
const PATTERNS: [[u8; 6]; 106] = [
    [2, 1, 2, 2, 2, 2], [2, 2, 2, 1, 2, 2], [2, 2, 2, 2, 2, 1], [1, 2, 1, 2, 2, 3],
    [1, 2, 1, 3, 2, 2], [1, 3, 1, 2, 2, 2], [1, 2, 2, 2, 1, 3], [1, 2, 2, 3, 1, 2],
    [1, 3, 2, 2, 1, 2], [2, 2, 1, 2, 1, 3], [2, 2, 1, 3, 1, 2], [2, 3, 1, 2, 1, 2],
    [1, 1, 2, 2, 3, 2], [1, 2, 2, 1, 3, 2], [1, 2, 2, 2, 3, 1], [1, 1, 3, 2, 2, 2],
    [1, 2, 3, 1, 2, 2], [1, 2, 3, 2, 2, 1], [2, 2, 3, 2, 1, 1], [2, 2, 1, 1, 3, 2],
    [2, 2, 1, 2, 3, 1], [2, 1, 3, 2, 1, 2], [2, 2, 3, 1, 1, 2], [3, 1, 2, 1, 3, 1],
    [3, 1, 1, 2, 2, 2], [3, 2, 1, 1, 2, 2], [3, 2, 1, 2, 2, 1], [3, 1, 2, 2, 1, 2],
    [3, 2, 2, 1, 1, 2], [3, 2, 2, 2, 1, 1], [2, 1, 2, 1, 2, 3], [2, 1, 2, 3, 2, 1],
    [2, 3, 2, 1, 2, 1], [1, 1, 1, 3, 2, 3], [1, 3, 1, 1, 2, 3], [1, 3, 1, 3, 2, 1],
    [1, 1, 2, 3, 1, 3], [1, 3, 2, 1, 1, 3], [1, 3, 2, 3, 1, 1], [2, 1, 1, 3, 1, 3],
    [2, 3, 1, 1, 1, 3], [2, 3, 1, 3, 1, 1], [1, 1, 2, 1, 3, 3], [1, 1, 2, 3, 3, 1],
    [1, 3, 2, 1, 3, 1], [1, 1, 3, 1, 2, 3], [1, 1, 3, 3, 2, 1], [1, 3, 3, 1, 2, 1],
    [3, 1, 3, 1, 2, 1], [2, 1, 1, 3, 3, 1], [2, 3, 1, 1, 3, 1], [2, 1, 3, 1, 1, 3],
    [2, 1, 3, 3, 1, 1], [2, 1, 3, 1, 3, 1], [3, 1, 1, 1, 2, 3], [3, 1, 1, 3, 2, 1],
    [3, 3, 1, 1, 2, 1], [3, 1, 2, 1, 1, 3], [3, 1, 2, 3, 1, 1], [3, 3, 2, 1, 1, 1],
    [3, 1, 4, 1, 1, 1], [2, 2, 1, 4, 1, 1], [4, 3, 1, 1, 1, 1], [1, 1, 1, 2, 2, 4],
    [1, 1, 1, 4, 2, 2], [1, 2, 1, 1, 2, 4], [1, 2, 1, 4, 2, 1], [1, 4, 1, 1, 2, 2],
    [1, 4, 1, 2, 2, 1], [1, 1, 2, 2, 1, 4], [1, 1, 2, 4, 1, 2], [1, 2, 2, 1, 1, 4],
    [1, 2, 2, 4, 1, 1], [1, 4, 2, 1, 1, 2], [1, 4, 2, 2, 1, 1], [2, 4, 1, 2, 1, 1],
    [2, 2, 1, 1, 1, 4], [4, 1, 3, 1, 1, 1], [2, 4, 1, 1, 1, 2], [1, 3, 4, 1, 1, 1],
    [1, 1, 1, 2, 4, 2], [1, 2, 1, 1, 4, 2], [1, 2, 1, 2, 4, 1], [1, 1, 4, 2, 1, 2],
    [1, 2, 4, 1, 1, 2], [1, 2, 4, 2, 1, 1], [4, 1, 1, 2, 1, 2], [4, 2, 1, 1, 1, 2],
    [4, 2, 1, 2, 1, 1], [2, 1, 2, 1, 4, 1], [2, 1, 4, 1, 2, 1], [4, 1, 2, 1, 2, 1],
    [1, 1, 1, 1, 4, 3], [1, 1, 1, 3, 4, 1], [1, 3, 1, 1, 4, 1], [1, 1, 4, 1, 1, 3],
    [1, 1, 4, 3, 1, 1], [4, 1, 1, 1, 1, 3], [4, 1, 1, 3, 1, 1], [1, 1, 3, 1, 4, 1],
    [1, 1, 4, 1, 3, 1], [3, 1, 1, 1, 4, 1], [4, 1, 1, 1, 3, 1], [2, 1, 1, 4, 1, 2],
    [2, 1, 1, 2, 1, 4], [2, 1, 1, 2, 3, 2],
];

const STOP_PATTERN: [u8; 7] = [2, 3, 3, 1, 1, 1, 2];

/// Reduces arbitrary input to something subset C can encode: non-digits are
/// dropped and an odd number of digits gets one leading `0`, which keeps the
/// numeric value.
pub fn sanitize(raw: &str) -> String {
    let digits = digits_only(raw);
    if digits.len() % 2 == 1 {
        format!("0{digits}")
    } else {
        digits
    }
}

/// The modulo 103 check value over the data symbols. The start symbol counts
/// with weight 1 and data symbol `i` (1-based) with weight `i`.
pub fn checksum(data: &[u8]) -> u8 {
    let weighted: u32 = data
        .iter()
        .enumerate()
        .map(|(i, value)| (i as u32 + 1) * u32::from(*value))
        .sum();
    ((u32::from(START_C) + weighted) % MODULUS) as u8
}

/// Encodes a string of digits with an even length.
pub fn encode_digits(digits: &str) -> Result<Code128, EncodingError> {
    if let Some((position, character)) = digits.chars().enumerate().find(|(_, c)| !c.is_ascii_digit()) {
        return Err(EncodingError::InvalidDigits {
            position,
            character,
        });
    }
    if digits.len() % 2 == 1 {
        return Err(EncodingError::OddLength(digits.len()));
    }
    Ok(Code128::from_pairs(digits.to_string()))
}

/// Encodes anything by sanitizing it first. Never fails.
pub fn encode(raw: &str) -> Code128 {
    Code128::from_pairs(sanitize(raw))
}

/// An encoded subset C barcode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Code128 {
    digits: String,
    symbols: Vec<u8>,
}

impl Code128 {
    /// `digits` must hold an even number of ASCII digits.
    fn from_pairs(digits: String) -> Self {
        let data: Vec<u8> = digits
            .as_bytes()
            .chunks(2)
            .map(|pair| (pair[0] - b'0') * 10 + (pair[1] - b'0'))
            .collect();
        let check = checksum(&data);

        let mut symbols = Vec::with_capacity(data.len() + 3);
        symbols.push(START_C);
        symbols.extend_from_slice(&data);
        symbols.push(check);
        symbols.push(STOP);
        Self { digits, symbols }
    }

    /// The encoded digits.
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// Every symbol value: start, data, checksum and stop.
    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    pub fn checksum(&self) -> u8 {
        self.symbols[self.symbols.len() - 2]
    }

    /// Bars and spaces in print order, quiet zones excluded.
    pub fn modules(&self) -> Vec<BarModule> {
        let mut modules = Vec::with_capacity(self.symbols.len() * 6 + 1);
        for &value in &self.symbols[..self.symbols.len() - 1] {
            push_widths(&mut modules, &PATTERNS[usize::from(value)]);
        }
        push_widths(&mut modules, &STOP_PATTERN);
        modules
    }

    /// Width of the symbol in modules.
    pub fn total_modules(&self) -> usize {
        (self.symbols.len() - 1) * SYMBOL_MODULES + STOP_MODULES
    }
}

fn push_widths(modules: &mut Vec<BarModule>, widths: &[u8]) {
    modules.extend(widths.iter().enumerate().map(|(i, &width)| BarModule {
        bar: i % 2 == 0,
        width,
    }));
}

/// Reads a module sequence back into its digits, checking the start symbol,
/// the stop pattern and the checksum.
pub fn decode(modules: &[BarModule]) -> Result<String, DecodeError> {
    if let Some(index) = modules.iter().enumerate().position(|(i, m)| m.bar != (i % 2 == 0)) {
        return Err(DecodeError::BrokenAlternation(index));
    }
    let len = modules.len();
    // start + checksum + stop at minimum
    if len < 2 * 6 + STOP_PATTERN.len() || (len - STOP_PATTERN.len()) % 6 != 0 {
        return Err(DecodeError::Truncated(len));
    }

    let (body, stop) = modules.split_at(len - STOP_PATTERN.len());
    if !stop.iter().map(|m| m.width).eq(STOP_PATTERN) {
        return Err(DecodeError::MissingStop);
    }

    let values = body
        .chunks(6)
        .enumerate()
        .map(|(index, chunk)| {
            PATTERNS
                .iter()
                .position(|pattern| chunk.iter().map(|m| m.width).eq(pattern.iter().copied()))
                .map(|value| value as u8)
                .ok_or(DecodeError::UnknownPattern { index })
        })
        .collect::<Result<Vec<u8>, _>>()?;

    let (&start, rest) = values.split_first().ok_or(DecodeError::Truncated(len))?;
    if start != START_C {
        return Err(DecodeError::WrongStart(start));
    }
    let (&found, data) = rest.split_last().ok_or(DecodeError::Truncated(len))?;
    if let Some(&value) = data.iter().find(|&&v| v > 99) {
        return Err(DecodeError::NotDigitPair(value));
    }
    let expected = checksum(data);
    if expected != found {
        return Err(DecodeError::ChecksumMismatch { expected, found });
    }

    let mut digits = String::with_capacity(data.len() * 2);
    for value in data {
        let _ = write!(digits, "{value:02}");
    }
    Ok(digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "35250513516247000107550010000113401146202508";

    /// Deterministic digit strings of every even length up to `max_len`.
    fn digit_strings(max_len: usize) -> Vec<String> {
        let mut state: u64 = 0x2545_F491_4F6C_DD1D;
        (0..=max_len)
            .step_by(2)
            .flat_map(|len| std::iter::repeat_n(len, 8))
            .map(|len| {
                (0..len)
                    .map(|_| {
                        state = state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
                        char::from(b'0' + ((state >> 33) % 10) as u8)
                    })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn patterns_are_well_formed() {
        for (value, pattern) in PATTERNS.iter().enumerate() {
            let total: u8 = pattern.iter().sum();
            assert_eq!(usize::from(total), SYMBOL_MODULES, "value {value}");
            assert!(pattern.iter().all(|w| (1..=4).contains(w)));
        }
        let stop: u8 = STOP_PATTERN.iter().sum();
        assert_eq!(usize::from(stop), STOP_MODULES);
        for (i, a) in PATTERNS.iter().enumerate() {
            assert!(PATTERNS[i + 1..].iter().all(|b| a != b), "duplicate pattern {i}");
        }
    }

    #[test]
    fn known_checksum() {
        // 105 + 12*1 + 34*2 + 56*3 = 353, 353 mod 103 = 44
        let code = encode_digits("123456").unwrap();
        assert_eq!(code.symbols(), &[105, 12, 34, 56, 44, 106]);
        assert_eq!(code.checksum(), 44);
    }

    #[test]
    fn access_key_round_trip() {
        let code = encode(KEY);
        assert_eq!(code.symbols().len(), 22 + 3);
        assert_eq!(code.total_modules(), 24 * 11 + 13);
        let modules = code.modules();
        let width: usize = modules.iter().map(|m| usize::from(m.width)).sum();
        assert_eq!(width, code.total_modules());
        assert!(modules[0].bar);
        assert!(modules.last().unwrap().bar);
        assert_eq!(decode(&modules).unwrap(), KEY);
    }

    #[test]
    fn round_trip_for_even_digit_strings() {
        for digits in digit_strings(60) {
            let code = encode_digits(&digits).unwrap();
            let decoded = decode(&code.modules()).unwrap();
            assert_eq!(decoded, digits);
            let data: Vec<u8> = code.symbols()[1..code.symbols().len() - 2].to_vec();
            assert_eq!(checksum(&data), code.checksum());
        }
    }

    #[test]
    fn sanitize_pads_odd_input() {
        assert_eq!(sanitize("12.345"), "012345");
        assert_eq!(sanitize("ab"), "");
        assert_eq!(sanitize("1234"), "1234");
        assert_eq!(decode(&encode("12.345").modules()).unwrap(), "012345");
    }

    #[test]
    fn strict_encoding_rejects_bad_input() {
        assert_eq!(
            encode_digits("12a4"),
            Err(EncodingError::InvalidDigits {
                position: 2,
                character: 'a'
            })
        );
        assert_eq!(encode_digits("123"), Err(EncodingError::OddLength(3)));
    }

    #[test]
    fn empty_input_still_has_frame() {
        let code = encode("");
        assert_eq!(code.symbols(), &[105, 2, 106]);
        assert_eq!(decode(&code.modules()).unwrap(), "");
    }

    #[test]
    fn decode_detects_corruption() {
        let mut modules = encode("123456").modules();
        // swap the checksum symbol (44) for the pattern of value 45
        let checksum_at = 4 * 6;
        for (slot, width) in modules[checksum_at..checksum_at + 6].iter_mut().zip(PATTERNS[45]) {
            slot.width = width;
        }
        assert_eq!(
            decode(&modules),
            Err(DecodeError::ChecksumMismatch {
                expected: 44,
                found: 45
            })
        );

        let modules = encode("1234").modules();
        assert_eq!(decode(&modules[..10]), Err(DecodeError::Truncated(10)));
        assert_eq!(decode(&modules[1..]), Err(DecodeError::BrokenAlternation(0)));
    }
}
