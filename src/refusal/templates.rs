//! Static refusal copy and the educational link directory.

use super::category::RefusalCategory;
use serde::{Deserialize, Serialize};

/// Canned refusal text plus the page a user is pointed to instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefusalTemplate {
    pub category: RefusalCategory,
    pub message: &'static str,
    pub educational_link: &'static str,
}

const KNOWLEDGE_CENTER: &str = "https://www.amfiindia.com/investor-corner/knowledge-center";
const BASICS_OF_MUTUAL_FUNDS: &str =
    "https://www.amfiindia.com/investor-corner/knowledge-center/basics-of-mutual-funds";
const HOW_TO_INVEST: &str =
    "https://www.amfiindia.com/investor-corner/knowledge-center/how-to-invest-in-mutual-funds";
const RISK_AND_RETURN: &str =
    "https://www.amfiindia.com/investor-corner/knowledge-center/understanding-risk-and-return";
const TAX_IMPLICATIONS: &str =
    "https://www.amfiindia.com/investor-corner/knowledge-center/tax-implications";
const SEBI_ADVISORS: &str =
    "https://www.sebi.gov.in/sebiweb/other/OtherAction.do?doRecognisedFpi=yes&intmId=34";

pub const DEFAULT_TEMPLATE: RefusalTemplate = RefusalTemplate {
    category: RefusalCategory::Default,
    message: "I can only provide factual information from official sources, not investment advice 🙂 Please consult a SEBI-registered advisor for personalized guidance.",
    educational_link: KNOWLEDGE_CENTER,
};

pub const REFUSAL_TEMPLATES: &[RefusalTemplate] = &[
    RefusalTemplate {
        category: RefusalCategory::InvestmentAdvice,
        message: "I can't provide investment advice or recommendations 🙂 Please consult a SEBI-registered investment advisor for personalized guidance.",
        educational_link: KNOWLEDGE_CENTER,
    },
    RefusalTemplate {
        category: RefusalCategory::PortfolioAdvice,
        message: "I can't help with portfolio decisions 🙂 For personalized advice, please speak with a qualified financial advisor.",
        educational_link: BASICS_OF_MUTUAL_FUNDS,
    },
    RefusalTemplate {
        category: RefusalCategory::Comparison,
        message: "I can't compare or recommend funds 🙂 I can only share factual information about individual funds from official sources.",
        educational_link: HOW_TO_INVEST,
    },
    RefusalTemplate {
        category: RefusalCategory::Timing,
        message: "I can't advise on market timing or when to invest 🙂 Please consult a financial advisor for guidance on investment timing.",
        educational_link: RISK_AND_RETURN,
    },
    DEFAULT_TEMPLATE,
];

/// Returns the template for `category`, or the default template when the
/// table has no row for it.
pub fn template_for(category: RefusalCategory) -> &'static RefusalTemplate {
    REFUSAL_TEMPLATES
        .iter()
        .find(|template| template.category == category)
        .unwrap_or(&DEFAULT_TEMPLATE)
}

/// Topics in the educational link directory.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EducationalTopic {
    InvestmentBasics,
    HowToInvest,
    RiskReturn,
    TaxImplications,
    SebiAdvisors,
}

impl EducationalTopic {
    pub const ALL: [EducationalTopic; 5] = [
        EducationalTopic::InvestmentBasics,
        EducationalTopic::HowToInvest,
        EducationalTopic::RiskReturn,
        EducationalTopic::TaxImplications,
        EducationalTopic::SebiAdvisors,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EducationalTopic::InvestmentBasics => "investment_basics",
            EducationalTopic::HowToInvest => "how_to_invest",
            EducationalTopic::RiskReturn => "risk_return",
            EducationalTopic::TaxImplications => "tax_implications",
            EducationalTopic::SebiAdvisors => "sebi_advisors",
        }
    }

    /// Parses the snake_case topic name used in the directory.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|topic| topic.as_str() == name)
    }

    pub fn link(&self) -> &'static str {
        match self {
            EducationalTopic::InvestmentBasics => BASICS_OF_MUTUAL_FUNDS,
            EducationalTopic::HowToInvest => HOW_TO_INVEST,
            EducationalTopic::RiskReturn => RISK_AND_RETURN,
            EducationalTopic::TaxImplications => TAX_IMPLICATIONS,
            EducationalTopic::SebiAdvisors => SEBI_ADVISORS,
        }
    }
}
