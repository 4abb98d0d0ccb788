//! Keyword rules that map a free-text query onto a refusal category.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reason a query is declined. The set is closed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RefusalCategory {
    InvestmentAdvice,
    PortfolioAdvice,
    Comparison,
    Timing,
    Default,
}

impl RefusalCategory {
    pub const ALL: [RefusalCategory; 5] = [
        RefusalCategory::InvestmentAdvice,
        RefusalCategory::PortfolioAdvice,
        RefusalCategory::Comparison,
        RefusalCategory::Timing,
        RefusalCategory::Default,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RefusalCategory::InvestmentAdvice => "investment_advice",
            RefusalCategory::PortfolioAdvice => "portfolio_advice",
            RefusalCategory::Comparison => "comparison",
            RefusalCategory::Timing => "timing",
            RefusalCategory::Default => "default",
        }
    }
}

impl fmt::Display for RefusalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One ordered matching rule: any keyword hit selects the category.
pub struct KeywordRule {
    pub category: RefusalCategory,
    pub keywords: &'static [&'static str],
}

/// Evaluated top to bottom, first hit wins. "best advice" must stay a
/// comparison, so the order here is part of the contract.
pub const KEYWORD_RULES: &[KeywordRule] = &[
    KeywordRule {
        category: RefusalCategory::Comparison,
        keywords: &["recommend", "suggest", "best", "better", "which"],
    },
    KeywordRule {
        category: RefusalCategory::PortfolioAdvice,
        // "diversif" covers diversify / diversification
        keywords: &["portfolio", "allocation", "diversif"],
    },
    KeywordRule {
        category: RefusalCategory::Timing,
        keywords: &["good time", "right time", "when to"],
    },
    KeywordRule {
        category: RefusalCategory::InvestmentAdvice,
        keywords: &["should i", "advice", "advise"],
    },
];

/// Resolves the refusal category for a query. Absent or empty input falls
/// through to [`RefusalCategory::Default`].
pub fn infer_category(query: Option<&str>) -> RefusalCategory {
    let Some(query) = query.filter(|q| !q.is_empty()) else {
        return RefusalCategory::Default;
    };
    let lower = query.to_lowercase();
    KEYWORD_RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|needle| lower.contains(needle)))
        .map(|rule| rule.category)
        .unwrap_or(RefusalCategory::Default)
}
