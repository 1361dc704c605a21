//! Static report data: the SisVet profile, its competitors and the business plan.
//!
//! Everything here is literal configuration. The statics are built once on first
//! access and never mutated.

mod business;
mod competitors;
mod product;

use crate::models::{BusinessPlan, CompetitorProfile, ProductProfile};
use lazy_static::lazy_static;
use serde::Serialize;

lazy_static! {
    pub static ref SISVET: ProductProfile = product::sisvet_profile();
    pub static ref COMPETITORS: Vec<CompetitorProfile> = competitors::competitor_profiles();
    pub static ref BUSINESS_PLAN: BusinessPlan = business::business_plan();
}

/// Borrowed view over everything the renderer needs.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AnalysisData<'a> {
    pub product: &'a ProductProfile,
    pub competitors: &'a [CompetitorProfile],
    pub business: &'a BusinessPlan,
}

/// The data shipped with the program.
pub fn analysis_data() -> AnalysisData<'static> {
    AnalysisData {
        product: &*SISVET,
        competitors: COMPETITORS.as_slice(),
        business: &*BUSINESS_PLAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_competitor_order() {
        let names: Vec<&str> = COMPETITORS.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["MyVete", "Provet Cloud", "Panther", "OKVet", "GVET", "Sami.vet", "QVET", "SaelVet"]
        );
    }

    #[test]
    fn test_market_shares() {
        let shares: Vec<u8> = COMPETITORS.iter().map(|c| c.market_share).collect();
        assert_eq!(shares, vec![15, 20, 10, 12, 14, 8, 18, 3]);
    }

    #[test]
    fn test_data_is_deterministic() {
        let first = serde_json::to_string(&analysis_data()).unwrap();
        let second = serde_json::to_string(&analysis_data()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_cost_totals_match_published_figures() {
        let costs = &BUSINESS_PLAN.costs;
        assert_eq!(costs.development_total_usd(), 45_800);
        assert_eq!(costs.infrastructure_monthly_usd(), 350);
        assert_eq!(costs.total_monthly_usd(), 2_850);
        assert_eq!(costs.total_monthly_usd() * 12, 34_200);
        assert_eq!(BUSINESS_PLAN.marketing.total_monthly_usd(), 500);
    }

    #[test]
    fn test_radar_products() {
        let matrix = &BUSINESS_PLAN.feature_matrix;
        let radar: Vec<&str> = matrix.radar_products().map(|(_, p)| p.name.as_str()).collect();
        assert_eq!(radar, vec!["SisVet", "Provet Cloud", "QVET"]);
        assert_eq!(
            matrix.column_scores(0),
            vec![9.5, 9.0, 0.0, 4.0, 0.0, 0.0, 0.0, 0.0, 9.5, 9.0]
        );
    }
}
