// Keyword retrieval over the knowledge base and a catalog snapshot.
use crate::knowledge::KnowledgeBase;
use crate::model::Product;
use crate::utils::contains_any;
use regex::Regex;
use std::sync::{Arc, LazyLock};

/// Emitted when no check produced a block.
pub const NO_CONTEXT: &str = "General PC building info available.";
pub const PRODUCTS_HEADER: &str = "Available Products:";
pub const MAX_PRODUCT_MATCHES: usize = 5;
pub const TIPS_SHOWN: usize = 3;

const TIP_KEYWORDS: &[&str] = &["tip", "advice", "recommend", "help"];
const OPTION_KEYWORDS: &[&str] = &["option", "choice", "range", "budget"];

static AMOUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$?([0-9]+)").expect("amount pattern is valid"));

pub struct ContextRetriever {
    knowledge: Arc<KnowledgeBase>,
}

impl ContextRetriever {
    pub fn new(knowledge: Arc<KnowledgeBase>) -> Self {
        Self { knowledge }
    }

    /// Builds the context block for `query`. Blocks keep the order of the
    /// checks and are separated by a blank line.
    pub fn retrieve(&self, query: &str, products: &[Product]) -> String {
        let lower = query.to_lowercase();
        let mut blocks: Vec<String> = Vec::new();

        if let Some(amount) = first_amount(&lower) {
            blocks.extend(
                self.knowledge
                    .budget_ranges
                    .iter()
                    .filter(|b| b.contains(amount))
                    .map(|b| b.describe()),
            );
        }

        let matched: Vec<String> = products
            .iter()
            .filter(|p| product_mentioned(p, &lower))
            .take(MAX_PRODUCT_MATCHES)
            .map(|p| format!("{} (${:.2})", p.name, p.price))
            .collect();
        if !matched.is_empty() {
            blocks.push(format!("{}\n{}", PRODUCTS_HEADER, matched.join("\n")));
        }

        for entry in &self.knowledge.components {
            if lower.contains(entry.keyword.as_str()) {
                blocks.push(format!("{}: {}", entry.keyword.to_uppercase(), entry.description));
            }
        }

        if contains_any(&lower, TIP_KEYWORDS) {
            let tips: Vec<String> = self
                .knowledge
                .tips
                .iter()
                .take(TIPS_SHOWN)
                .map(|t| format!("- {}", t))
                .collect();
            blocks.push(format!("Tips:\n{}", tips.join("\n")));
        }

        if contains_any(&lower, OPTION_KEYWORDS) {
            let options: Vec<String> = self
                .knowledge
                .budget_ranges
                .iter()
                .map(|b| format!("{}: {}", b.range, b.use_case))
                .collect();
            blocks.push(format!("Budget Options:\n{}", options.join("\n")));
        }

        if blocks.is_empty() {
            return NO_CONTEXT.to_string();
        }
        blocks.join("\n\n")
    }
}

fn first_amount(text: &str) -> Option<u64> {
    AMOUNT_RE
        .captures(text)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// A product is relevant when its category or any word of its name shows up
/// in the (lowercased) query.
fn product_mentioned(product: &Product, lower_query: &str) -> bool {
    let category = product.category.to_lowercase();
    if !category.is_empty() && lower_query.contains(category.as_str()) {
        return true;
    }
    product
        .name
        .to_lowercase()
        .split_whitespace()
        .any(|word| lower_query.contains(word))
}
