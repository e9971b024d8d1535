// Component selection: one product per build slot, chosen by per-slot rules.

pub mod rules;

pub use rules::{rule_for, End, Predicate, Rule};

use crate::model::{BuildType, BuildSuggestion, Category, Product};
use crate::utils::round_currency;
use tracing::debug;

/// Budgets above this are treated as high-end whatever the keywords said.
pub const HIGH_END_BUDGET_THRESHOLD: u32 = 2500;

pub fn effective_build_type(build_type: BuildType, budget: u32) -> BuildType {
    if build_type == BuildType::HighEnd || budget > HIGH_END_BUDGET_THRESHOLD {
        BuildType::HighEnd
    } else {
        build_type
    }
}

pub struct ComponentSelector;

impl ComponentSelector {
    pub fn new() -> Self {
        Self
    }

    /// Never fails: slots without candidates are left out of the build.
    pub fn select(&self, products: &[Product], budget: u32, build_type: BuildType) -> BuildSuggestion {
        let effective = effective_build_type(build_type, budget);

        let components: Vec<Product> = Category::ALL
            .into_iter()
            .filter_map(|category| {
                let bucket: Vec<&Product> = products
                    .iter()
                    .filter(|p| p.slot() == Some(category))
                    .collect();
                let chosen = rule_for(effective, category).pick(&bucket);
                if chosen.is_none() {
                    debug!("No {} candidates, leaving slot empty", category);
                }
                chosen.cloned()
            })
            .collect();

        let total_price = round_currency(components.iter().map(|c| c.price).sum());
        BuildSuggestion { components, total_price }
    }
}

impl Default for ComponentSelector {
    fn default() -> Self {
        Self::new()
    }
}
