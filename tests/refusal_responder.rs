use fundguard::refusal::suggestions::SUGGESTION_BANK;
use fundguard::refusal::templates::template_for;
use fundguard::{RefusalCategory, RefusalResponder, RefusalResponse};
use std::collections::HashSet;

fn assert_template(response: &RefusalResponse, category: RefusalCategory) {
    let template = template_for(category);
    assert_eq!(response.message, template.message, "{category}");
    assert_eq!(
        response.educational_link, template.educational_link,
        "{category}"
    );
}

#[test]
fn sample_queries_resolve_to_expected_templates() {
    let responder = RefusalResponder::new();
    let cases = [
        ("Should I buy HDFC Midcap Fund?", RefusalCategory::InvestmentAdvice),
        ("Which fund is better?", RefusalCategory::Comparison),
        ("What's a good portfolio allocation?", RefusalCategory::PortfolioAdvice),
        ("Is this a good time to invest?", RefusalCategory::Timing),
    ];
    for (query, expected) in cases {
        assert_eq!(responder.classify(Some(query)), expected, "{query}");
        let response = responder.get_refusal(Some(query), None);
        assert_template(&response, expected);
        assert_eq!(response.suggestions.len(), 2);
    }
}

#[test]
fn first_keyword_per_category() {
    let responder = RefusalResponder::new();
    let cases = [
        ("recommend", RefusalCategory::Comparison),
        ("portfolio", RefusalCategory::PortfolioAdvice),
        ("good time", RefusalCategory::Timing),
        ("should i", RefusalCategory::InvestmentAdvice),
        ("NAV history", RefusalCategory::Default),
    ];
    for (query, expected) in cases {
        assert_template(&responder.get_refusal(Some(query), None), expected);
    }
}

#[test]
fn comparison_beats_investment_advice() {
    let response = RefusalResponder::new().get_refusal(Some("best advice"), None);
    assert_template(&response, RefusalCategory::Comparison);
}

#[test]
fn empty_or_missing_query_gets_default() {
    let responder = RefusalResponder::new();
    assert_template(&responder.get_refusal(None, None), RefusalCategory::Default);
    assert_template(&responder.get_refusal(Some(""), None), RefusalCategory::Default);
}

#[test]
fn repeated_queries_are_stable() {
    let responder = RefusalResponder::new();
    let first = responder.get_refusal(Some("When to exit a fund?"), None);
    for _ in 0..10 {
        let next = responder.get_refusal(Some("When to exit a fund?"), None);
        assert_eq!(next.message, first.message);
        assert_eq!(next.educational_link, first.educational_link);
    }
}

#[test]
fn factual_suggestions_respect_bank_bounds() {
    let responder = RefusalResponder::new();
    assert!(responder.factual_suggestions(0).is_empty());

    for count in [1, 2, 5, 8] {
        let picked = responder.factual_suggestions(count);
        assert_eq!(picked.len(), count);
        let unique: HashSet<&String> = picked.iter().collect();
        assert_eq!(unique.len(), count);
    }

    let all = responder.factual_suggestions(100);
    let all: HashSet<&str> = all.iter().map(String::as_str).collect();
    let bank: HashSet<&str> = SUGGESTION_BANK.iter().copied().collect();
    assert_eq!(all, bank);
}
