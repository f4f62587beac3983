//! Vehicle Identification Number value object.

use std::fmt;

use crate::domain::errors::VinError;

/// A validated 17-character Vehicle Identification Number.
///
/// Values are always upper-cased, exactly [`Vin::LENGTH`] characters long and
/// free of whitespace or control characters.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Vin {
    value: String,
}

impl Vin {
    /// Required VIN length.
    pub const LENGTH: usize = 17;

    /// Parses a VIN, upper-casing it first.
    ///
    /// # Errors
    /// Returns error if the value is not 17 characters long or contains
    /// whitespace or control characters.
    pub fn parse(value: &str) -> Result<Self, VinError> {
        let value = value.to_uppercase();
        let length = value.chars().count();

        if length != Self::LENGTH {
            return Err(VinError::InvalidLength { length });
        }

        if let Some(invalid) = value.chars().find(|c| !is_vin_char(*c)) {
            return Err(VinError::InvalidCharacter { character: invalid });
        }

        Ok(Self { value })
    }

    /// Returns VIN as string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

}

/// Returns whether a character may appear in a VIN.
#[must_use]
pub fn is_vin_char(c: char) -> bool {
    !c.is_whitespace() && !c.is_control()
}

impl fmt::Debug for Vin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Vin").field(&self.value).finish()
    }
}

impl fmt::Display for Vin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl TryFrom<&str> for Vin {
    type Error = VinError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl AsRef<str> for Vin {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "1HGBH41JXMN109186";

    #[test]
    fn test_parse_valid_vin() {
        let vin = Vin::parse(SAMPLE).unwrap();
        assert_eq!(vin.as_str(), SAMPLE);
        assert_eq!(vin.as_str().len(), Vin::LENGTH);
    }

    #[test]
    fn test_parse_uppercases() {
        let vin = Vin::parse("5yjsa1dn5dfp14705").unwrap();
        assert_eq!(vin.as_str(), "5YJSA1DN5DFP14705");
    }

    #[test]
    fn test_parse_rejects_short() {
        let err = Vin::parse("1HGBH41").unwrap_err();
        assert_eq!(err, VinError::InvalidLength { length: 7 });
    }

    #[test]
    fn test_parse_rejects_long() {
        let err = Vin::parse("1HGBH41JXMN1091860").unwrap_err();
        assert_eq!(err, VinError::InvalidLength { length: 18 });
    }

    #[test]
    fn test_parse_rejects_blanks() {
        let err = Vin::parse("1HGBH41JXMN10918 ").unwrap_err();
        assert_eq!(err, VinError::InvalidCharacter { character: ' ' });
    }

    #[test]
    fn test_parse_accepts_punctuation() {
        assert!(Vin::parse("ABCDEFGHIJ-KLMNOP").is_ok());
    }

    #[test]
    fn test_display_is_raw_value() {
        let vin = Vin::parse(SAMPLE).unwrap();
        assert_eq!(vin.to_string(), SAMPLE);
    }
}
