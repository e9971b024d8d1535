// Reply templates over retrieved context.

pub mod chat;

pub use chat::{chat_reply, FILLER_REPLIES};

use crate::retriever::{NO_CONTEXT, PRODUCTS_HEADER};

pub const ONBOARDING_REPLY: &str =
    "I can help you build PCs! Ask me about budgets like '$800' or components like 'GPU'.";

pub fn compose_reply(context: &str, query: &str) -> String {
    if context == NO_CONTEXT {
        return ONBOARDING_REPLY.to_string();
    }
    if context.contains(PRODUCTS_HEADER) {
        return format!(
            "Based on your request, here are some options from our catalog:\n{}\n\nWould you like me to build a PC with these?",
            context
        );
    }
    format!("Based on your question about '{}':\n{}", query, context)
}
