//! CPF/CNPJ validation and canonical formatting
//!
//! Brazilian tax identifiers carry two modulo-11 check digits. This module is
//! the single authoritative implementation: request handlers always re-check
//! here before persisting, regardless of any client-side pre-validation.

/// Tax identifier kind, decided by digit count alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaxIdKind {
    /// 11-digit individual identifier
    Cpf,
    /// 14-digit company identifier
    Cnpj,
    Invalid,
}

const CPF_WEIGHTS_1: [u32; 9] = [10, 9, 8, 7, 6, 5, 4, 3, 2];
const CPF_WEIGHTS_2: [u32; 10] = [11, 10, 9, 8, 7, 6, 5, 4, 3, 2];
const CNPJ_WEIGHTS_1: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const CNPJ_WEIGHTS_2: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Strip every non-digit character. Total over arbitrary input.
pub fn normalize(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Classify an already-normalized digit string by length.
pub fn classify(digits: &str) -> TaxIdKind {
    match digits.len() {
        11 => TaxIdKind::Cpf,
        14 => TaxIdKind::Cnpj,
        _ => TaxIdKind::Invalid,
    }
}

/// Validate a raw CPF or CNPJ. Never panics; any length other than 11 or 14
/// digits after normalization is simply invalid.
pub fn validate(raw: &str) -> bool {
    let digits = normalize(raw);
    let values: Vec<u32> = digits.chars().filter_map(|c| c.to_digit(10)).collect();
    match classify(&digits) {
        TaxIdKind::Cpf => validate_cpf(&values),
        TaxIdKind::Cnpj => validate_cnpj(&values),
        TaxIdKind::Invalid => false,
    }
}

/// Canonical formatting: `XXX.XXX.XXX-XX` for 11 digits,
/// `XX.XXX.XXX/XXXX-XX` for 14. Anything else passes through as the bare
/// normalized digits. Best-effort only; formatting does not imply validity.
pub fn format(raw: &str) -> String {
    let d = normalize(raw);
    match d.len() {
        11 => format!("{}.{}.{}-{}", &d[..3], &d[3..6], &d[6..9], &d[9..]),
        14 => format!("{}.{}.{}/{}-{}", &d[..2], &d[2..5], &d[5..8], &d[8..12], &d[12..]),
        _ => d,
    }
}

/// Modulo-11 check digit over a weighted digit prefix.
fn check_digit(digits: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = digits.iter().zip(weights.iter()).map(|(d, w)| d * w).sum();
    match sum % 11 {
        r if r < 2 => 0,
        r => 11 - r,
    }
}

fn all_same(digits: &[u32]) -> bool {
    digits.windows(2).all(|w| w[0] == w[1])
}

/// Check-digit validation for an 11-digit CPF.
///
/// Sequences of one repeated digit are rejected outright: several of them
/// satisfy the arithmetic but are not assignable identifiers.
pub fn validate_cpf(digits: &[u32]) -> bool {
    if digits.len() != 11 || all_same(digits) {
        return false;
    }
    check_digit(&digits[..9], &CPF_WEIGHTS_1) == digits[9]
        && check_digit(&digits[..10], &CPF_WEIGHTS_2) == digits[10]
}

/// Check-digit validation for a 14-digit CNPJ.
pub fn validate_cnpj(digits: &[u32]) -> bool {
    if digits.len() != 14 || all_same(digits) {
        return false;
    }
    check_digit(&digits[..12], &CNPJ_WEIGHTS_1) == digits[12]
        && check_digit(&digits[..13], &CNPJ_WEIGHTS_2) == digits[13]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_cpf() {
        assert!(validate("11144477735"));
    }

    #[test]
    fn valid_cnpj() {
        assert!(validate("11222333000181"));
    }

    #[test]
    fn repeated_digits_rejected() {
        for d in 0..=9 {
            let cpf: String = std::iter::repeat(char::from(b'0' + d)).take(11).collect();
            let cnpj: String = std::iter::repeat(char::from(b'0' + d)).take(14).collect();
            assert!(!validate(&cpf), "{cpf} must be invalid");
            assert!(!validate(&cnpj), "{cnpj} must be invalid");
        }
    }

    #[test]
    fn wrong_check_digits_rejected() {
        assert!(!validate("11144477734"));
        assert!(!validate("11144477725"));
        assert!(!validate("11222333000182"));
    }

    #[test]
    fn punctuation_is_ignored() {
        assert_eq!(validate("111.444.777-35"), validate("11144477735"));
        assert_eq!(validate("11.222.333/0001-81"), validate("11222333000181"));
        assert!(validate("111 444 777 35"));
    }

    #[test]
    fn degenerate_input_never_panics() {
        assert!(!validate(""));
        assert!(!validate("abc"));
        assert!(!validate("12345"));
        assert!(!validate("111444777351234567890"));
        assert!(!validate("ção-ß-٣٣٣"));
    }

    #[test]
    fn classify_by_length() {
        assert_eq!(classify("11144477735"), TaxIdKind::Cpf);
        assert_eq!(classify("11222333000181"), TaxIdKind::Cnpj);
        assert_eq!(classify(""), TaxIdKind::Invalid);
        assert_eq!(classify("123456789012"), TaxIdKind::Invalid);
    }

    #[test]
    fn canonical_formatting() {
        assert_eq!(format("11144477735"), "111.444.777-35");
        assert_eq!(format("11222333000181"), "11.222.333/0001-81");
    }

    #[test]
    fn format_is_idempotent() {
        for raw in ["11144477735", "11222333000181", "123", ""] {
            let once = format(raw);
            assert_eq!(format(&once), once);
        }
    }

    #[test]
    fn format_passes_through_other_lengths() {
        assert_eq!(format("123-45"), "12345");
        assert_eq!(format(""), "");
        assert_eq!(format("no digits"), "");
    }

    #[test]
    fn format_does_not_imply_validity() {
        // 11 repeated digits format fine but never validate
        assert_eq!(format("00000000000"), "000.000.000-00");
        assert!(!validate("00000000000"));
    }
}
