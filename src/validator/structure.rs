//! Structural validation of the report data

use crate::data::AnalysisData;
use crate::error::{ReportError, Result};
use crate::models::{BusinessPlan, CompetitorProfile, ProductProfile};

macro_rules! invalid {
    ($($arg:tt)*) => {
        return Err(ReportError::Validation(format!($($arg)*)))
    };
}

pub fn validate_structure(data: &AnalysisData<'_>) -> Result<()> {
    validate_product(data.product)?;

    if data.competitors.is_empty() {
        invalid!("at least one competitor is required");
    }
    for competitor in data.competitors {
        validate_competitor(competitor)?;
    }

    validate_business(data.business)?;

    Ok(())
}

fn validate_product(product: &ProductProfile) -> Result<()> {
    if product.name.is_empty() {
        invalid!("product name is required");
    }

    if product.completeness_pct > 100 {
        invalid!("completeness {}% is above 100%", product.completeness_pct);
    }

    if let Some(rating) = product.quality.iter().find(|q| q.percent > 100) {
        invalid!("quality rating '{}' is above 100%", rating.aspect);
    }

    Ok(())
}

fn validate_competitor(competitor: &CompetitorProfile) -> Result<()> {
    let name = &competitor.name;

    if name.is_empty() {
        invalid!("competitor name is required");
    }

    if competitor.features.is_empty() {
        invalid!("competitor '{}' has no features", name);
    }

    if competitor.price_min > competitor.price_max {
        invalid!(
            "competitor '{}' has minimum price {} above maximum {} {}",
            name, competitor.price_min, competitor.price_max, competitor.currency
        );
    }

    if competitor.price_usd_min > competitor.price_usd_max {
        invalid!(
            "competitor '{}' has minimum price {} above maximum {} USD",
            name, competitor.price_usd_min, competitor.price_usd_max
        );
    }

    if !(0.0..=10.0).contains(&competitor.score) {
        invalid!("competitor '{}' has score {} outside 0-10", name, competitor.score);
    }

    if competitor.market_share > 100 {
        invalid!("competitor '{}' has market share {}% above 100%", name, competitor.market_share);
    }

    Ok(())
}

fn validate_business(business: &BusinessPlan) -> Result<()> {
    let matrix = &business.feature_matrix;
    let columns = matrix.products.len();

    for criterion in &matrix.criteria {
        if criterion.scores.len() != columns {
            invalid!(
                "feature '{}' has {} scores for {} products",
                criterion.name,
                criterion.scores.len(),
                columns
            );
        }
        if let Some(score) = criterion.scores.iter().find(|s| !(0.0..=10.0).contains(*s)) {
            invalid!("feature '{}' has score {} outside 0-10", criterion.name, score);
        }
    }

    let series = &business.projection.series;
    let months = series.months.len();
    if series.conservative_mxn.len() != months || series.optimistic_mxn.len() != months {
        invalid!(
            "revenue series must have one value per month ({} months, {} conservative, {} optimistic)",
            months,
            series.conservative_mxn.len(),
            series.optimistic_mxn.len()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{analysis_data, BUSINESS_PLAN, COMPETITORS, SISVET};
    use test_case::test_case;

    fn with_competitor(competitor: CompetitorProfile) -> Result<()> {
        let competitors = vec![competitor];
        let data = AnalysisData {
            product: &SISVET,
            competitors: &competitors,
            business: &BUSINESS_PLAN,
        };
        validate_structure(&data)
    }

    fn valid_competitor() -> CompetitorProfile {
        CompetitorProfile::new("Acme Vet", "México")
            .with_price("MXN", 100, 200)
            .with_usd_price(5, 10)
            .with_trial("Demo")
            .with_rating(8.0, 10)
            .with_features(&["Agenda"])
    }

    #[test]
    fn test_shipped_data_is_valid() {
        assert!(validate_structure(&analysis_data()).is_ok());
    }

    #[test]
    fn test_accepts_valid_competitor() {
        assert!(with_competitor(valid_competitor()).is_ok());
    }

    #[test]
    fn test_rejects_empty_features() {
        let err = with_competitor(valid_competitor().with_features(&[])).unwrap_err();
        assert!(err.to_string().contains("has no features"));
    }

    #[test]
    fn test_rejects_inverted_price_range() {
        let err = with_competitor(valid_competitor().with_price("MXN", 300, 200)).unwrap_err();
        assert!(err.to_string().contains("minimum price 300"));

        let err = with_competitor(valid_competitor().with_usd_price(20, 10)).unwrap_err();
        assert!(err.to_string().contains("USD"));
    }

    #[test_case(-0.5 ; "negative score")]
    #[test_case(10.5 ; "score above ten")]
    fn test_rejects_score_out_of_range(score: f32) {
        let err = with_competitor(valid_competitor().with_rating(score, 10)).unwrap_err();
        assert!(matches!(err, ReportError::Validation(_)));
    }

    #[test_case(0.0 ; "zero")]
    #[test_case(10.0 ; "ten")]
    fn test_accepts_score_bounds(score: f32) {
        assert!(with_competitor(valid_competitor().with_rating(score, 10)).is_ok());
    }

    #[test]
    fn test_rejects_empty_competitor_list() {
        let data = AnalysisData {
            product: &SISVET,
            competitors: &[],
            business: &BUSINESS_PLAN,
        };
        assert!(validate_structure(&data).is_err());
    }

    #[test]
    fn test_rejects_ragged_feature_matrix() {
        let mut business = BUSINESS_PLAN.clone();
        business.feature_matrix.criteria[0].scores.pop();
        let data = AnalysisData {
            product: &SISVET,
            competitors: &COMPETITORS,
            business: &business,
        };
        let err = validate_structure(&data).unwrap_err();
        assert!(err.to_string().contains("4 scores for 5 products"));
    }

    #[test_case(101 ; "just above one hundred")]
    #[test_case(255 ; "max byte")]
    fn test_rejects_market_share_above_hundred(share: u8) {
        let err = with_competitor(valid_competitor().with_rating(8.0, share)).unwrap_err();
        assert!(err.to_string().contains("market share"));
    }

    #[test]
    fn test_accepts_full_market_share() {
        assert!(with_competitor(valid_competitor().with_rating(8.0, 100)).is_ok());
    }

    #[test_case(-1.0 ; "negative")]
    #[test_case(10.5 ; "above ten")]
    #[test_case(f32::NAN ; "not a number")]
    fn test_rejects_matrix_score_out_of_range(score: f32) {
        let mut business = BUSINESS_PLAN.clone();
        business.feature_matrix.criteria[0].scores[0] = score;
        let data = AnalysisData {
            product: &SISVET,
            competitors: &COMPETITORS,
            business: &business,
        };
        let err = validate_structure(&data).unwrap_err();
        assert!(err.to_string().contains("outside 0-10"));
    }

    #[test]
    fn test_rejects_completeness_above_hundred() {
        let mut product = SISVET.clone();
        product.completeness_pct = 101;
        let data = AnalysisData {
            product: &product,
            competitors: &COMPETITORS,
            business: &BUSINESS_PLAN,
        };
        let err = validate_structure(&data).unwrap_err();
        assert!(err.to_string().contains("completeness 101%"));
    }

    #[test]
    fn test_rejects_quality_rating_above_hundred() {
        let mut product = SISVET.clone();
        product.quality[0].percent = 120;
        let data = AnalysisData {
            product: &product,
            competitors: &COMPETITORS,
            business: &BUSINESS_PLAN,
        };
        let err = validate_structure(&data).unwrap_err();
        assert!(err.to_string().contains("quality rating 'Arquitectura'"));
    }

    #[test]
    fn test_rejects_short_revenue_series() {
        let mut business = BUSINESS_PLAN.clone();
        business.projection.series.optimistic_mxn.truncate(11);
        let data = AnalysisData {
            product: &SISVET,
            competitors: &COMPETITORS,
            business: &business,
        };
        assert!(validate_structure(&data).is_err());
    }
}
