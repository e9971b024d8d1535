use crate::catalog::CatalogAdapter;
use crate::composer::{chat_reply, compose_reply};
use crate::knowledge::KnowledgeBase;
use crate::model::{BuildRequest, BuildSuggestion, BuildType, QueryError};
use crate::parser::QueryIntentParser;
use crate::retriever::ContextRetriever;
use crate::selector::{effective_build_type, ComponentSelector};

use rand::rngs::StdRng;
use std::sync::{Arc, Mutex};
use tracing::info;

#[derive(Debug, Clone)]
pub struct QueryAnswer {
    pub context: String,
    pub response: String,
}

#[derive(Debug, Clone)]
pub struct BuilderReply {
    pub request: BuildRequest,
    pub effective_type: BuildType,
    pub message: String,
    pub suggestion: BuildSuggestion,
}

/// Runs one request end to end against a single catalog snapshot.
pub struct Assistant {
    catalog: CatalogAdapter,
    parser: QueryIntentParser,
    retriever: ContextRetriever,
    selector: ComponentSelector,
}

impl Assistant {
    pub fn new(catalog: CatalogAdapter, knowledge: Arc<KnowledgeBase>) -> Self {
        Self {
            catalog,
            parser: QueryIntentParser::new(),
            retriever: ContextRetriever::new(knowledge),
            selector: ComponentSelector::new(),
        }
    }

    pub async fn answer(&self, query: &str) -> Result<QueryAnswer, QueryError> {
        let request = self.parser.parse(query)?;
        let products = self.catalog.products().await;
        let context = self.retriever.retrieve(&request.raw_query, &products);
        let response = compose_reply(&context, &request.raw_query);
        Ok(QueryAnswer { context, response })
    }

    pub async fn suggest_build(&self, query: &str) -> Result<BuilderReply, QueryError> {
        let request = self.parser.parse(query)?;
        let products = self.catalog.products().await;

        let context = self.retriever.retrieve(&request.raw_query, &products);
        let suggestion = self.selector.select(&products, request.budget, request.build_type);
        let effective_type = effective_build_type(request.build_type, request.budget);
        info!(
            "Built {} suggestion: {} components, total ${:.2}",
            effective_type,
            suggestion.components.len(),
            suggestion.total_price
        );

        let message = format!(
            "{}\n\nI've configured a {} build for you based on your budget of ${}.",
            compose_reply(&context, &request.raw_query),
            effective_type,
            request.budget
        );

        Ok(BuilderReply {
            request,
            effective_type,
            message,
            suggestion,
        })
    }

    /// The RNG lock is only held for the synchronous reply, never across the fetch.
    pub async fn chat(&self, message: &str, rng: &Mutex<StdRng>) -> String {
        let products = self.catalog.products().await;
        let mut rng = rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        chat_reply(message, &products, &mut *rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{fallback_products, CatalogSource};
    use crate::model::{CatalogError, Product};
    use crate::retriever::NO_CONTEXT;
    use rand::SeedableRng;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Unreachable;

    #[async_trait::async_trait]
    impl CatalogSource for Unreachable {
        async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
            Err(CatalogError::Timeout(5000))
        }
    }

    fn assistant() -> Assistant {
        Assistant::new(
            CatalogAdapter::new(Arc::new(Unreachable)),
            Arc::new(KnowledgeBase::builtin()),
        )
    }

    #[derive(Default)]
    struct Counting {
        calls: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl CatalogSource for Counting {
        async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(fallback_products())
        }
    }

    #[tokio::test]
    async fn empty_query_never_reaches_the_catalog() {
        let source = Arc::new(Counting::default());
        let assistant = Assistant::new(
            CatalogAdapter::new(source.clone()),
            Arc::new(KnowledgeBase::builtin()),
        );
        assert!(assistant.answer(" \t").await.is_err());
        assert!(assistant.suggest_build("").await.is_err());
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);

        assistant.answer("gpu").await.unwrap();
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn empty_query_is_rejected_before_any_work() {
        assert_eq!(assistant().answer("  ").await.unwrap_err(), QueryError::EmptyQuery);
        assert_eq!(assistant().suggest_build("").await.unwrap_err(), QueryError::EmptyQuery);
    }

    #[tokio::test]
    async fn build_survives_catalog_outage() {
        let reply = assistant().suggest_build("I have $800 for gaming").await.unwrap();
        assert_eq!(reply.suggestion.components.len(), 8);
        assert_eq!(reply.suggestion.components[0].price, 319.99);
        assert!(reply.message.ends_with("I've configured a gaming build for you based on your budget of $800."));
    }

    #[tokio::test]
    async fn big_budget_reports_high_end() {
        let reply = assistant().suggest_build("machine for 3000").await.unwrap();
        assert_eq!(reply.request.build_type, BuildType::Gaming);
        assert_eq!(reply.effective_type, BuildType::HighEnd);
        let expected: Vec<_> = fallback_products().into_iter().filter(|p| p.id == "4").collect();
        assert_eq!(reply.suggestion.components[1], expected[0]);
    }

    #[tokio::test]
    async fn answer_uses_onboarding_for_unmatched_queries() {
        let answer = assistant().answer("hello there").await.unwrap();
        assert_eq!(answer.context, NO_CONTEXT);
        assert_eq!(answer.response, crate::composer::ONBOARDING_REPLY);
    }

    #[tokio::test]
    async fn chat_filler_repeats_for_same_seed() {
        let a = assistant()
            .chat("hello", &Mutex::new(StdRng::seed_from_u64(1)))
            .await;
        let b = assistant()
            .chat("hello", &Mutex::new(StdRng::seed_from_u64(1)))
            .await;
        assert_eq!(a, b);
    }
}
