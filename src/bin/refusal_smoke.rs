use std::env;

use anyhow::Result;
use fundguard::config::load_or_default;
use fundguard::RefusalResponder;
use tracing_subscriber::EnvFilter;

const SAMPLE_QUERIES: &[&str] = &[
    "Should I buy HDFC Midcap Fund?",
    "Which fund is better?",
    "What's a good portfolio allocation?",
    "Is this a good time to invest?",
];

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = load_or_default()?;
    let responder = RefusalResponder::with_config(config);

    let args: Vec<String> = env::args().skip(1).collect();
    let queries: Vec<&str> = if args.is_empty() {
        SAMPLE_QUERIES.to_vec()
    } else {
        args.iter().map(String::as_str).collect()
    };

    println!("Refusal Handler Test Results:");
    println!("{}", "=".repeat(80));
    for query in queries {
        let refusal = responder.get_refusal(Some(query), None);
        println!();
        println!("Query: {query}");
        println!("Category: {}", responder.classify(Some(query)));
        println!("Message: {}", refusal.message);
        println!("Link: {}", refusal.educational_link);
        println!("Suggestions: {:?}", refusal.suggestions);
    }
    Ok(())
}
