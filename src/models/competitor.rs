//! Competitor profiles

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompetitorProfile {
    pub name: String,
    pub country: String,
    pub currency: String,
    pub price_min: u32,
    pub price_max: u32,
    pub price_usd_min: u32,
    pub price_usd_max: u32,
    pub trial: String,
    /// Overall rating on a 0-10 scale.
    pub score: f32,
    /// Market share percentage. Shares are independent estimates and do not sum to 100.
    pub market_share: u8,
    pub features: Vec<String>,
}

impl CompetitorProfile {
    pub fn new(name: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            country: country.into(),
            currency: "MXN".to_string(),
            price_min: 0,
            price_max: 0,
            price_usd_min: 0,
            price_usd_max: 0,
            trial: String::new(),
            score: 0.0,
            market_share: 0,
            features: Vec::new(),
        }
    }

    /// Monthly price range in the source currency.
    pub fn with_price(mut self, currency: impl Into<String>, min: u32, max: u32) -> Self {
        self.currency = currency.into();
        self.price_min = min;
        self.price_max = max;
        self
    }

    pub fn with_usd_price(mut self, min: u32, max: u32) -> Self {
        self.price_usd_min = min;
        self.price_usd_max = max;
        self
    }

    pub fn with_trial(mut self, trial: impl Into<String>) -> Self {
        self.trial = trial.into();
        self
    }

    pub fn with_rating(mut self, score: f32, market_share: u8) -> Self {
        self.score = score;
        self.market_share = market_share;
        self
    }

    pub fn with_features(mut self, features: &[&str]) -> Self {
        self.features = features.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Score as a 0-100 width for progress bars.
    pub fn score_percent(&self) -> u32 {
        (self.score * 10.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_all_fields() {
        let competitor = CompetitorProfile::new("Acme Vet", "Chile")
            .with_price("CLP", 100, 200)
            .with_usd_price(10, 20)
            .with_trial("14 días")
            .with_rating(7.6, 4)
            .with_features(&["Agenda", "Inventario"]);

        assert_eq!(competitor.currency, "CLP");
        assert_eq!((competitor.price_min, competitor.price_max), (100, 200));
        assert_eq!((competitor.price_usd_min, competitor.price_usd_max), (10, 20));
        assert_eq!(competitor.trial, "14 días");
        assert_eq!(competitor.market_share, 4);
        assert_eq!(competitor.features, vec!["Agenda", "Inventario"]);
    }

    #[test]
    fn test_score_percent() {
        let competitor = CompetitorProfile::new("A", "B").with_rating(7.6, 3);
        assert_eq!(competitor.score_percent(), 76);

        let competitor = CompetitorProfile::new("A", "B").with_rating(9.2, 18);
        assert_eq!(competitor.score_percent(), 92);
    }
}
