#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Unit {
    Seconds,
    Minutes,
    Hours,
}

impl Unit {
    /// Convert the unit to seconds
    pub fn to_seconds(&self) -> u64 {
        match self {
            Unit::Seconds => 1,
            Unit::Minutes => 60,
            Unit::Hours => 3600,
        }
    }
}

impl TryFrom<char> for Unit {
    type Error = crate::Error;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            's' => Ok(Unit::Seconds),
            'm' => Ok(Unit::Minutes),
            'h' => Ok(Unit::Hours),
            _ => Err("Invalid unit".into()),
        }
    }
}

/// Given a string of the format `<number><unit>` with unit one of `s`, `m`
/// or `h`, parse it into an amount and a unit.
///
/// The whole string must match: no whitespace, no sign, and no composite
/// durations such as `1h30m`.
pub fn parse_duration_string(s: &str) -> Result<(u64, Unit), crate::Error> {
    let mut chars = s.chars();

    let Some(unit) = chars.next_back() else {
        return Err("Empty duration".into());
    };
    let unit = Unit::try_from(unit)?;

    let digits = chars.as_str();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err("Invalid duration".into());
    }

    let number: u64 = digits.parse().map_err(|_| "Invalid duration")?;

    Ok((number, unit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_each_unit() {
        assert_eq!(parse_duration_string("10s").unwrap(), (10, Unit::Seconds));
        assert_eq!(parse_duration_string("5m").unwrap(), (5, Unit::Minutes));
        assert_eq!(parse_duration_string("2h").unwrap(), (2, Unit::Hours));
        assert_eq!(parse_duration_string("0s").unwrap(), (0, Unit::Seconds));
    }

    #[test]
    fn unit_multipliers() {
        assert_eq!(Unit::Seconds.to_seconds(), 1);
        assert_eq!(Unit::Minutes.to_seconds(), 60);
        assert_eq!(Unit::Hours.to_seconds(), 3600);
    }

    #[test]
    fn rejects_anything_else() {
        for bad in [
            "", "10", "1d", "5x", "h", "s", "1h30m", "10 s", " 10s", "-5m", "+5m", "๑0s", "10S",
        ] {
            assert!(parse_duration_string(bad).is_err(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn rejects_numbers_too_large_to_represent() {
        assert!(parse_duration_string("99999999999999999999s").is_err());
    }
}
