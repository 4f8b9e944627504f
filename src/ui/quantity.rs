/// Quantity selector, always within `MIN..=MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantity(u8);

impl Quantity {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 9;

    pub fn value(self) -> u8 {
        self.0
    }

    /// Clamps any integer into range.
    pub fn set(&mut self, value: i64) {
        let clamped = value.clamp(i64::from(Self::MIN), i64::from(Self::MAX));
        self.0 = u8::try_from(clamped).unwrap_or(Self::MIN);
    }

    /// Manual entry from the number field. Anything that isn't an integer
    /// leaves the value alone.
    pub fn set_from_input(&mut self, input: &str) -> u8 {
        if let Ok(value) = input.trim().parse::<i64>() {
            self.set(value);
        }
        self.0
    }

    pub fn can_increment(self) -> bool {
        self.0 < Self::MAX
    }

    pub fn can_decrement(self) -> bool {
        self.0 > Self::MIN
    }

    pub fn increment(&mut self) {
        if self.can_increment() {
            self.0 += 1;
        }
    }

    pub fn decrement(&mut self) {
        if self.can_decrement() {
            self.0 -= 1;
        }
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_one() {
        assert_eq!(Quantity::default().value(), 1);
    }

    #[test]
    fn manual_entry_is_clamped() {
        let mut quantity = Quantity::default();
        assert_eq!(quantity.set_from_input("50"), 9);
        assert_eq!(quantity.set_from_input("0"), 1);
        assert_eq!(quantity.set_from_input("-3"), 1);
        assert_eq!(quantity.set_from_input(" 4 "), 4);
    }

    #[test]
    fn garbage_input_keeps_the_value() {
        let mut quantity = Quantity::default();
        quantity.set(6);
        assert_eq!(quantity.set_from_input("six"), 6);
        assert_eq!(quantity.set_from_input(""), 6);
    }

    #[test]
    fn stepping_stops_at_the_bounds() {
        let mut quantity = Quantity::default();
        assert!(!quantity.can_decrement());
        quantity.decrement();
        assert_eq!(quantity.value(), 1);

        for _ in 0..20 {
            quantity.increment();
        }
        assert_eq!(quantity.value(), 9);
        assert!(!quantity.can_increment());

        quantity.decrement();
        assert_eq!(quantity.value(), 8);
    }

    #[test]
    fn any_sequence_stays_in_range() {
        let mut quantity = Quantity::default();
        let inputs = ["12", "x", "-100", "3", "999999999999999999999", "7"];

        for (step, input) in inputs.iter().enumerate() {
            quantity.set_from_input(input);
            if step % 2 == 0 {
                quantity.increment();
            } else {
                quantity.decrement();
            }
            assert!((Quantity::MIN..=Quantity::MAX).contains(&quantity.value()));
        }
    }
}
