//! KPI weighted scoring engine.
//!
//! Reduces a multi-category score vector (raw 0-5 scale) to a single
//! percentage using role-specific weights, with a per-category breakdown
//! for explainability and a qualitative rating band.
//!
//! The functions here are pure and total. They trust the caller's
//! invariants: weights are expected to sum to 1.0 (validated where the
//! weight table is built, see the roles module) and scores are expected to
//! sit on the 0-5 scale. Out-of-range scores pass through untouched;
//! [`CategoryScores::validate`] exists for callers that want the check up
//! front.

use serde::{Deserialize, Serialize};

/// Top of the raw scoring scale.
pub const MAX_RAW_SCORE: f64 = 5.0;

/// Tolerance for a role's weight total.
pub const WEIGHT_SUM_EPSILON: f64 = 1e-6;

/// One scoring pillar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreCategory {
    Knowledge,
    People,
    Service,
    Business,
    Leadership,
}

impl ScoreCategory {
    /// All pillars, in display order.
    pub const ALL: [ScoreCategory; 5] = [
        ScoreCategory::Knowledge,
        ScoreCategory::People,
        ScoreCategory::Service,
        ScoreCategory::Business,
        ScoreCategory::Leadership,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Knowledge => "knowledge",
            Self::People => "people",
            Self::Service => "service",
            Self::Business => "business",
            Self::Leadership => "leadership",
        }
    }
}

/// Raw category scores on the 0-5 scale
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryScores {
    #[serde(default)]
    pub knowledge: f64,
    #[serde(default)]
    pub people: f64,
    #[serde(default)]
    pub service: f64,
    #[serde(default)]
    pub business: f64,
    #[serde(default)]
    pub leadership: f64,
}

impl CategoryScores {
    pub fn new(knowledge: f64, people: f64, service: f64, business: f64, leadership: f64) -> Self {
        Self {
            knowledge,
            people,
            service,
            business,
            leadership,
        }
    }

    /// Score for one category.
    pub fn get(&self, category: ScoreCategory) -> f64 {
        match category {
            ScoreCategory::Knowledge => self.knowledge,
            ScoreCategory::People => self.people,
            ScoreCategory::Service => self.service,
            ScoreCategory::Business => self.business,
            ScoreCategory::Leadership => self.leadership,
        }
    }

    /// Validate that every score sits on the 0-5 scale.
    ///
    /// Advisory only: the calculator passes out-of-range values through
    /// untouched, so callers that want the check run it before scoring.
    pub fn validate(&self) -> Result<(), String> {
        for category in ScoreCategory::ALL {
            let value = self.get(category);
            if !(0.0..=MAX_RAW_SCORE).contains(&value) {
                return Err(format!(
                    "Score '{}' must be in [0.0, {MAX_RAW_SCORE}], got {value}",
                    category.as_str()
                ));
            }
        }
        Ok(())
    }
}

/// Per-category weights for one role.
///
/// A role's weights sum to 1.0, with 0 marking a pillar that does not apply
/// to the role.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryWeights {
    pub knowledge: f64,
    pub people: f64,
    pub service: f64,
    pub business: f64,
    pub leadership: f64,
}

impl CategoryWeights {
    pub fn new(knowledge: f64, people: f64, service: f64, business: f64, leadership: f64) -> Self {
        Self {
            knowledge,
            people,
            service,
            business,
            leadership,
        }
    }

    /// Weight for one category.
    pub fn get(&self, category: ScoreCategory) -> f64 {
        match category {
            ScoreCategory::Knowledge => self.knowledge,
            ScoreCategory::People => self.people,
            ScoreCategory::Service => self.service,
            ScoreCategory::Business => self.business,
            ScoreCategory::Leadership => self.leadership,
        }
    }

    /// Sum of all weights.
    pub fn sum(&self) -> f64 {
        ScoreCategory::ALL.iter().map(|&c| self.get(c)).sum()
    }

    /// Validate that each weight is in [0, 1] and the total is 1.0 within
    /// [`WEIGHT_SUM_EPSILON`].
    pub fn validate(&self) -> Result<(), String> {
        for category in ScoreCategory::ALL {
            let weight = self.get(category);
            if !(0.0..=1.0).contains(&weight) {
                return Err(format!(
                    "Weight '{}' must be in [0.0, 1.0], got {weight}",
                    category.as_str()
                ));
            }
        }

        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_EPSILON {
            return Err(format!("Weights must sum to 1.0, got {sum}"));
        }

        Ok(())
    }

    /// Normalize weights to sum to 1.0 (no-op for an all-zero vector).
    pub fn normalize(&mut self) {
        let sum = self.sum();
        if sum > 0.0 {
            self.knowledge /= sum;
            self.people /= sum;
            self.service /= sum;
            self.business /= sum;
            self.leadership /= sum;
        }
    }
}

/// Weighted sum over all categories, on the raw 0-5 scale.
pub fn weighted_sum(scores: &CategoryScores, weights: &CategoryWeights) -> f64 {
    ScoreCategory::ALL
        .iter()
        .map(|&category| scores.get(category) * weights.get(category))
        .sum()
}

/// Overall score as a 0-100 percentage.
///
/// The division by [`MAX_RAW_SCORE`] normalizes the raw scale assuming the
/// weights already sum to 1.0; the calculator never re-normalizes, so a
/// caller holding an unnormalized vector can push the result past 100.
pub fn overall_score_percent(scores: &CategoryScores, weights: &CategoryWeights) -> f64 {
    weighted_sum(scores, weights) / MAX_RAW_SCORE * 100.0
}

/// Weighted contribution of one category, in pre-normalization 0-5 units.
///
/// Used for the per-category breakdown; the ÷5 rescale applied to the total
/// is deliberately absent here.
pub fn contribution_of(
    category: ScoreCategory,
    scores: &CategoryScores,
    weights: &CategoryWeights,
) -> f64 {
    scores.get(category) * weights.get(category)
}

/// Qualitative rating band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    Poor,
    NeedImprovement,
    Good,
    VeryGood,
    Excellent,
}

impl Rating {
    /// Classify a raw 0-5 score into its band.
    ///
    /// Bands are half-open, so a boundary value lands in the upper band.
    /// Scores outside the declared range (negative, 5.1 or above, NaN) fall
    /// back to `Good` -- the caller always gets a renderable label.
    pub fn classify(score: f64) -> Self {
        if (0.0..1.5).contains(&score) {
            Self::Poor
        } else if (1.5..2.5).contains(&score) {
            Self::NeedImprovement
        } else if (2.5..3.5).contains(&score) {
            Self::Good
        } else if (3.5..4.5).contains(&score) {
            Self::VeryGood
        } else if (4.5..5.1).contains(&score) {
            Self::Excellent
        } else {
            Self::Good
        }
    }

    /// Display label for the band.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Poor => "Poor",
            Self::NeedImprovement => "Need Improvement",
            Self::Good => "Good",
            Self::VeryGood => "Very Good",
            Self::Excellent => "Excellent",
        }
    }
}

/// Weighted contribution of a single category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryContribution {
    pub category: ScoreCategory,
    /// Raw score, 0-5 scale
    pub score: f64,
    pub weight: f64,
    /// `score * weight`, in pre-normalization 0-5 units
    pub contribution: f64,
}

/// Complete scoring result for one person
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Per-category contributions, in pillar display order
    pub contributions: Vec<CategoryContribution>,
    /// Weighted sum on the raw 0-5 scale
    pub weighted_sum: f64,
    /// Overall percentage; 0-100 when the weights are normalized
    pub overall_pct: f64,
    pub rating: Rating,
}

impl ScoreBreakdown {
    /// The category contributing the most to the overall score.
    pub fn top_contribution(&self) -> Option<&CategoryContribution> {
        self.contributions
            .iter()
            .max_by(|a, b| a.contribution.partial_cmp(&b.contribution).unwrap())
    }
}

/// Score a full profile, producing the per-category breakdown.
pub fn score_profile(scores: &CategoryScores, weights: &CategoryWeights) -> ScoreBreakdown {
    let contributions = ScoreCategory::ALL
        .iter()
        .map(|&category| CategoryContribution {
            category,
            score: scores.get(category),
            weight: weights.get(category),
            contribution: contribution_of(category, scores, weights),
        })
        .collect();

    let sum = weighted_sum(scores, weights);

    ScoreBreakdown {
        contributions,
        weighted_sum: sum,
        overall_pct: sum / MAX_RAW_SCORE * 100.0,
        rating: Rating::classify(sum),
    }
}
