// Budget and build-type extraction from free text
use crate::model::{BuildRequest, BuildType, QueryError};
use crate::utils::contains_any;
use regex::Regex;
use std::sync::LazyLock;

pub const DEFAULT_BUDGET: u32 = 2000;

static BUDGET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$?([0-9]{3,5})").expect("budget pattern is valid"));

const WORKSTATION_KEYWORDS: &[&str] = &["workstation", "video editing", "content creation"];
const BUDGET_KEYWORDS: &[&str] = &["budget", "cheap", "affordable"];
const HIGH_END_KEYWORDS: &[&str] = &["4k", "high-end", "premium"];

pub struct QueryIntentParser;

impl QueryIntentParser {
    pub fn new() -> Self {
        Self
    }

    /// Validates the query and extracts its intent.
    pub fn parse(&self, raw_query: &str) -> Result<BuildRequest, QueryError> {
        if raw_query.trim().is_empty() {
            return Err(QueryError::EmptyQuery);
        }
        let (budget, build_type) = Self::intent(raw_query);
        Ok(BuildRequest {
            raw_query: raw_query.to_string(),
            budget,
            build_type,
        })
    }

    pub fn intent(query: &str) -> (u32, BuildType) {
        (Self::extract_budget(query), Self::classify(query))
    }

    /// First run of 3 to 5 digits, optionally `$`-prefixed.
    pub fn extract_budget(query: &str) -> u32 {
        BUDGET_RE
            .captures(query)
            .and_then(|c| c.get(1))
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(DEFAULT_BUDGET)
    }

    /// Keyword sets are checked in fixed precedence: workstation, budget, high-end.
    pub fn classify(query: &str) -> BuildType {
        let lower = query.to_lowercase();
        if contains_any(&lower, WORKSTATION_KEYWORDS) {
            BuildType::Workstation
        } else if contains_any(&lower, BUDGET_KEYWORDS) {
            BuildType::Budget
        } else if contains_any(&lower, HIGH_END_KEYWORDS) {
            BuildType::HighEnd
        } else {
            BuildType::Gaming
        }
    }
}

impl Default for QueryIntentParser {
    fn default() -> Self {
        Self::new()
    }
}
