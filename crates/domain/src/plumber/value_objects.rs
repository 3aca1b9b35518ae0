//! Value objects for the plumber domain.

use serde::{Deserialize, Serialize};

/// Hourly billing rate represented in cents to avoid floating point issues.
///
/// Rate comparisons in the scheduling rules use exact equality, so the
/// amount is kept as an integer rather than a float.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HourlyRate {
    /// Amount in cents per hour (e.g., 8000 = $80.00/h)
    cents: i64,
}

impl HourlyRate {
    /// Creates a new rate from cents.
    pub fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Creates a new rate from a whole dollar value.
    pub fn from_dollars(dollars: i64) -> Self {
        Self {
            cents: dollars * 100,
        }
    }

    /// Returns a zero rate.
    pub fn zero() -> Self {
        Self { cents: 0 }
    }

    /// Returns the amount in cents.
    pub fn cents(&self) -> i64 {
        self.cents
    }

    /// Returns the dollar portion (whole number).
    pub fn dollars(&self) -> i64 {
        self.cents / 100
    }

    /// Returns the cents portion (remainder after dollars).
    pub fn cents_part(&self) -> i64 {
        self.cents.abs() % 100
    }

    /// Returns true if the rate is strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        self.cents > 0
    }

    /// Returns true if the rate is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.cents == 0
    }
}

impl Default for HourlyRate {
    fn default() -> Self {
        Self::zero()
    }
}

impl std::fmt::Display for HourlyRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.cents < 0 {
            write!(f, "-${}.{:02}/h", self.dollars().abs(), self.cents_part())
        } else {
            write!(f, "${}.{:02}/h", self.dollars(), self.cents_part())
        }
    }
}

/// A plumber's pair of billing rates, either of which may be unconfigured.
///
/// This is the policy seat for every rate-derived scheduling rule: a plumber
/// is schedulable only with a complete, strictly positive rate card, and a
/// rate card of two explicit zeros marks the plumber unavailable. There is
/// no distinct "only one rate configured" state; an incomplete card simply
/// never qualifies as schedulable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateCard {
    regular: Option<HourlyRate>,
    overtime: Option<HourlyRate>,
}

impl RateCard {
    /// Creates a rate card from optional regular and overtime rates.
    pub fn new(regular: Option<HourlyRate>, overtime: Option<HourlyRate>) -> Self {
        Self { regular, overtime }
    }

    /// Creates a rate card with both rates configured.
    pub fn both(regular: HourlyRate, overtime: HourlyRate) -> Self {
        Self {
            regular: Some(regular),
            overtime: Some(overtime),
        }
    }

    /// Returns the regular rate, if configured.
    pub fn regular(&self) -> Option<HourlyRate> {
        self.regular
    }

    /// Returns the overtime rate, if configured.
    pub fn overtime(&self) -> Option<HourlyRate> {
        self.overtime
    }

    /// Returns both rates when both are configured, regardless of value.
    pub fn complete(&self) -> Option<(HourlyRate, HourlyRate)> {
        self.regular.zip(self.overtime)
    }

    /// Returns both rates when the card qualifies the plumber for
    /// scheduling: both rates configured and strictly positive.
    pub fn schedulable(&self) -> Option<(HourlyRate, HourlyRate)> {
        self.complete()
            .filter(|(regular, overtime)| regular.is_positive() && overtime.is_positive())
    }

    /// Returns true if both rates are configured and exactly zero.
    ///
    /// An absent rate is not zero; only two explicit zeros count.
    pub fn is_unpaid(&self) -> bool {
        matches!(self.complete(), Some((regular, overtime)) if regular.is_zero() && overtime.is_zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_from_cents() {
        let rate = HourlyRate::from_cents(8550);
        assert_eq!(rate.cents(), 8550);
        assert_eq!(rate.dollars(), 85);
        assert_eq!(rate.cents_part(), 50);
    }

    #[test]
    fn test_rate_from_dollars() {
        let rate = HourlyRate::from_dollars(80);
        assert_eq!(rate.cents(), 8000);
        assert_eq!(rate, HourlyRate::from_cents(8000));
    }

    #[test]
    fn test_rate_display() {
        assert_eq!(HourlyRate::from_cents(8000).to_string(), "$80.00/h");
        assert_eq!(HourlyRate::from_cents(5).to_string(), "$0.05/h");
        assert_eq!(HourlyRate::from_cents(-500).to_string(), "-$5.00/h");
    }

    #[test]
    fn test_rate_predicates() {
        assert!(HourlyRate::from_cents(1).is_positive());
        assert!(!HourlyRate::zero().is_positive());
        assert!(HourlyRate::zero().is_zero());
        assert!(!HourlyRate::from_cents(-500).is_positive());
    }

    #[test]
    fn test_schedulable_requires_both_positive_rates() {
        let both = RateCard::both(HourlyRate::from_dollars(80), HourlyRate::from_dollars(100));
        assert_eq!(
            both.schedulable(),
            Some((HourlyRate::from_dollars(80), HourlyRate::from_dollars(100)))
        );

        let negative = RateCard::both(HourlyRate::from_cents(-500), HourlyRate::from_dollars(100));
        assert_eq!(negative.schedulable(), None);

        let partial = RateCard::new(Some(HourlyRate::from_dollars(80)), None);
        assert_eq!(partial.schedulable(), None);

        assert_eq!(RateCard::default().schedulable(), None);
    }

    #[test]
    fn test_unpaid_requires_two_explicit_zeros() {
        assert!(RateCard::both(HourlyRate::zero(), HourlyRate::zero()).is_unpaid());
        assert!(!RateCard::both(HourlyRate::zero(), HourlyRate::from_dollars(100)).is_unpaid());
        assert!(!RateCard::new(Some(HourlyRate::zero()), None).is_unpaid());
        assert!(!RateCard::default().is_unpaid());
    }

    #[test]
    fn test_rate_card_equality_is_exact() {
        let a = RateCard::both(HourlyRate::from_dollars(80), HourlyRate::from_dollars(100));
        let b = RateCard::both(HourlyRate::from_dollars(80), HourlyRate::from_dollars(100));
        let c = RateCard::both(HourlyRate::from_cents(8001), HourlyRate::from_dollars(100));
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, RateCard::new(Some(HourlyRate::from_dollars(80)), None));
    }

    #[test]
    fn test_rate_card_serialization() {
        let card = RateCard::both(HourlyRate::from_dollars(80), HourlyRate::from_dollars(100));
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: RateCard = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
