//! Business plan tables: feature comparison, costs, pricing, projections and go-to-market

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BadgeTone {
    Success,
    Warning,
    Danger,
    Info,
}

impl BadgeTone {
    pub fn css_class(&self) -> &'static str {
        match self {
            BadgeTone::Success => "badge-success",
            BadgeTone::Warning => "badge-warning",
            BadgeTone::Danger => "badge-danger",
            BadgeTone::Info => "badge-info",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn tone(&self) -> BadgeTone {
        match self {
            Priority::High => BadgeTone::Success,
            Priority::Medium => BadgeTone::Info,
            Priority::Low => BadgeTone::Warning,
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::High => write!(f, "Alta"),
            Priority::Medium => write!(f, "Media"),
            Priority::Low => write!(f, "Baja"),
        }
    }
}

// ============================================================================
// Feature comparison
// ============================================================================

/// A product column of the feature matrix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparedProduct {
    /// Table header, e.g. "Provet".
    pub column: String,
    /// Full name used in the radar legend, e.g. "Provet Cloud".
    pub name: String,
    pub on_radar: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureCriterion {
    pub name: String,
    /// Shorter label for the radar axis.
    pub axis_label: String,
    /// One 0-10 score per compared product, in column order.
    pub scores: Vec<f32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureMatrix {
    pub products: Vec<ComparedProduct>,
    pub criteria: Vec<FeatureCriterion>,
}

impl FeatureMatrix {
    /// Scores of one product across all criteria.
    pub fn column_scores(&self, index: usize) -> Vec<f32> {
        self.criteria
            .iter()
            .map(|c| c.scores.get(index).copied().unwrap_or(0.0))
            .collect()
    }

    /// Products plotted on the radar chart, with their column index.
    pub fn radar_products(&self) -> impl Iterator<Item = (usize, &ComparedProduct)> {
        self.products.iter().enumerate().filter(|(_, p)| p.on_radar)
    }
}

// ============================================================================
// Costs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DevelopmentCost {
    pub concept: String,
    pub hours: u32,
    pub rate_usd: u32,
}

impl DevelopmentCost {
    pub fn total_usd(&self) -> u32 {
        self.hours * self.rate_usd
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperatingCost {
    pub concept: String,
    pub monthly_usd: u32,
}

impl OperatingCost {
    pub fn annual_usd(&self) -> u32 {
        self.monthly_usd * 12
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub development: Vec<DevelopmentCost>,
    pub infrastructure: Vec<OperatingCost>,
    pub operations: Vec<OperatingCost>,
}

impl CostBreakdown {
    pub fn development_total_usd(&self) -> u32 {
        self.development.iter().map(DevelopmentCost::total_usd).sum()
    }

    pub fn infrastructure_monthly_usd(&self) -> u32 {
        self.infrastructure.iter().map(|c| c.monthly_usd).sum()
    }

    /// Infrastructure plus staff and running costs.
    pub fn total_monthly_usd(&self) -> u32 {
        self.infrastructure_monthly_usd() + self.operations.iter().map(|c| c.monthly_usd).sum::<u32>()
    }
}

// ============================================================================
// Pricing and projections
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingPlan {
    pub icon: String,
    pub name: String,
    pub price_mxn: u32,
    pub approx_usd: u32,
    pub includes: Vec<String>,
    pub featured: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionRow {
    pub period: String,
    pub new_clients: u32,
    pub total_clients: u32,
    pub monthly_mxn: u32,
    pub cumulative_mxn: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimisticScenario {
    pub clinics: u32,
    pub mrr_mxn: u32,
    pub mrr_usd: u32,
    pub annual_mxn: u32,
    pub annual_usd: u32,
    pub roi: String,
}

/// Month-by-month MRR series plotted on the revenue chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevenueSeries {
    pub months: Vec<String>,
    pub conservative_mxn: Vec<u32>,
    pub optimistic_mxn: Vec<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialProjection {
    pub conservative: Vec<ProjectionRow>,
    pub conservative_annual_usd: u32,
    pub conservative_roi: String,
    pub optimistic: OptimisticScenario,
    pub series: RevenueSeries,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreakEven {
    pub fixed_monthly_mxn: u32,
    pub average_price_mxn: u32,
    pub clients_needed: u32,
    pub time_to_reach: String,
}

// ============================================================================
// Market plan
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketSegment {
    pub title: String,
    pub traits: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoToMarketPhase {
    pub title: String,
    pub actions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesObjection {
    pub objection: String,
    pub answer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesZone {
    pub name: String,
    pub priority: Priority,
    pub profile: String,
    pub approach: String,
    pub clinics: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketingChannel {
    pub name: String,
    pub chart_label: String,
    pub monthly_usd: u32,
    pub objective: String,
    pub kpi: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketingPlan {
    pub channels: Vec<MarketingChannel>,
    pub expected_leads: String,
    pub expected_conversion: String,
}

impl MarketingPlan {
    pub fn total_monthly_usd(&self) -> u32 {
        self.channels.iter().map(|c| c.monthly_usd).sum()
    }
}

/// Everything the report says about the business beyond the product and competitor profiles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessPlan {
    pub feature_matrix: FeatureMatrix,
    pub costs: CostBreakdown,
    pub plans: Vec<PricingPlan>,
    pub projection: FinancialProjection,
    pub break_even: BreakEven,
    pub segments: Vec<MarketSegment>,
    pub phases: Vec<GoToMarketPhase>,
    pub objections: Vec<SalesObjection>,
    pub zones: Vec<SalesZone>,
    pub marketing: MarketingPlan,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn op(concept: &str, monthly_usd: u32) -> OperatingCost {
        OperatingCost { concept: concept.to_string(), monthly_usd }
    }

    #[test]
    fn test_cost_totals() {
        let costs = CostBreakdown {
            development: vec![
                DevelopmentCost { concept: "A".into(), hours: 10, rate_usd: 50 },
                DevelopmentCost { concept: "B".into(), hours: 4, rate_usd: 60 },
            ],
            infrastructure: vec![op("server", 150), op("db", 50)],
            operations: vec![op("support", 800)],
        };

        assert_eq!(costs.development_total_usd(), 740);
        assert_eq!(costs.infrastructure_monthly_usd(), 200);
        assert_eq!(costs.total_monthly_usd(), 1000);
        assert_eq!(costs.operations[0].annual_usd(), 9600);
    }

    #[test]
    fn test_priority_badges() {
        assert_eq!(Priority::High.to_string(), "Alta");
        assert_eq!(Priority::Low.tone().css_class(), "badge-warning");
        assert!(Priority::High > Priority::Medium);
    }

    #[test]
    fn test_column_scores_fill_missing_with_zero() {
        let matrix = FeatureMatrix {
            products: vec![],
            criteria: vec![
                FeatureCriterion { name: "A".into(), axis_label: "A".into(), scores: vec![1.0, 2.0] },
                FeatureCriterion { name: "B".into(), axis_label: "B".into(), scores: vec![3.0] },
            ],
        };
        assert_eq!(matrix.column_scores(1), vec![2.0, 0.0]);
    }
}
