//! Extraction and validation of the XOR checksum trailing a sentence.

use err::FormatError;

const CHECKSUM_DELIMITER: u8 = b'*';
const CHECKSUM_LENGTH: usize = 2;

/// Pull the two checksum characters following the first `*` out of
/// `sentence`. Returns `None` when there is no `*` or fewer than two
/// characters follow it; absence is not an error at this stage.
pub fn extract(sentence: &str) -> Option<String> {
    let star = sentence.as_bytes().iter().position(|&b| b == CHECKSUM_DELIMITER)?;
    let mut checksum = String::with_capacity(CHECKSUM_LENGTH);
    checksum.extend(sentence[star + 1..].chars().take(CHECKSUM_LENGTH));
    if checksum.chars().count() == CHECKSUM_LENGTH {
        Some(checksum)
    } else {
        None
    }
}

/// Recompute the XOR over the sentence body and require it to match
/// `checksum`.
///
/// The body is every byte strictly between the sentence start marker and the
/// `*` delimiter. A checksum that is absent or not exactly two hex digits
/// fails as an invalid checksum format; there is no skip branch for
/// sentences without one.
pub fn validate(sentence: &str, checksum: Option<&str>) -> Result<(), FormatError> {
    let checksum = match checksum {
        Some(c) if c.len() == CHECKSUM_LENGTH && c.bytes().all(|b| b.is_ascii_hexdigit()) => c,
        _ => return Err(FormatError::ChecksumFormat),
    };
    let actual = match u8::from_str_radix(checksum, 16) {
        Ok(v) => v,
        Err(_) => return Err(FormatError::ChecksumFormat),
    };

    let bytes = sentence.as_bytes();
    let body = match bytes.iter().position(|&b| b == CHECKSUM_DELIMITER) {
        Some(star) if star > 0 => &bytes[1..star],
        _ => return Err(FormatError::ChecksumFormat),
    };
    let expected = body.iter().fold(0u8, |acc, &b| acc ^ b);

    if expected != actual {
        return Err(FormatError::InvalidChecksum(expected, actual));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xor(body: &str) -> u8 {
        body.bytes().fold(0, |acc, b| acc ^ b)
    }

    #[test]
    fn extracts_checksum_after_star() {
        assert_eq!(
            extract("$GPMWV,270,R,10.5,N,A*05"),
            Some("05".to_string())
        );
    }

    #[test]
    fn extracts_only_two_characters() {
        assert_eq!(extract("$GPGLL,A*6C\r\n"), Some("6C".to_string()));
    }

    #[test]
    fn extraction_treats_missing_checksum_as_absent() {
        assert_eq!(extract("$GPGLL,A"), None);
        assert_eq!(extract("$GPGLL,A*"), None);
        assert_eq!(extract("$GPGLL,A*4"), None);
    }

    #[test]
    fn accepts_matching_checksum() {
        let body = "GPGLL,5057.970,N,01424.326,E,123456.78,A,A";
        let sentence = format!("${}*{:02X}", body, xor(body));
        let checksum = extract(&sentence);
        assert_matches!(
            validate(&sentence, checksum.as_ref().map(|c| c.as_str())),
            Ok(())
        );
    }

    #[test]
    fn accepts_hand_computed_vector() {
        let sentence = "$GPGLL,5057.970,N,01424.326,E,123456.78,A,A*6C";
        assert_matches!(validate(sentence, Some("6C")), Ok(()));
    }

    #[test]
    fn accepts_lowercase_hex() {
        let sentence = "$GPGLL,5057.970,N,01424.326,E,123456.78,A,A*6c";
        assert_matches!(validate(sentence, Some("6c")), Ok(()));
    }

    #[test]
    fn rejects_corrupted_checksum() {
        let body = "GPMWV,270,R,10.5,N,A";
        let good = xor(body);
        for bit in 0..8 {
            let bad = good ^ (1 << bit);
            let bad_hex = format!("{:02X}", bad);
            let sentence = format!("${}*{}", body, bad_hex);
            assert_matches!(
                validate(&sentence, Some(bad_hex.as_str())),
                Err(FormatError::InvalidChecksum(expected, actual)) => {
                    assert_eq!(expected, good);
                    assert_eq!(actual, bad);
                }
            );
        }
    }

    #[test]
    fn rejects_absent_checksum() {
        assert_matches!(
            validate("$GPGLL,A,B", None),
            Err(FormatError::ChecksumFormat)
        );
    }

    #[test]
    fn rejects_malformed_checksum() {
        assert_matches!(
            validate("$GPGLL,A*6", Some("6")),
            Err(FormatError::ChecksumFormat)
        );
        assert_matches!(
            validate("$GPGLL,A*XY", Some("XY")),
            Err(FormatError::ChecksumFormat)
        );
        assert_matches!(
            validate("$GPGLL,A*+F", Some("+F")),
            Err(FormatError::ChecksumFormat)
        );
    }
}
