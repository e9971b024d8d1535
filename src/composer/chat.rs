// Free-form chat: first matching keyword rule wins, otherwise a filler line.
use crate::model::{Category, Product};
use crate::utils::contains_any;
use rand::Rng;

pub const FILLER_REPLIES: [&str; 4] = [
    "Thanks for your message! I'm here to help with any questions about our products.",
    "That's a great question! Let me connect you with a specialist who can help.",
    "I'd be happy to help you with that. You can also check out our Help Center for quick answers.",
    "Great choice! Would you like me to help you build a complete system?",
];

const HELP_REPLY: &str =
    "I can help you find products like CPUs, GPUs, Motherboards, RAM, and Storage. Just ask me about them!";
const NAMES_SHOWN: usize = 3;

struct ChatRule {
    keywords: &'static [&'static str],
    category: Category,
    /// Text around the comma-joined product names.
    with_stock: (&'static str, &'static str),
    no_stock: &'static str,
}

static RULES: [ChatRule; 5] = [
    ChatRule {
        keywords: &["cpu", "processor"],
        category: Category::Cpu,
        with_stock: ("We have some great CPUs available, including: ", ". Would you like to see more details?"),
        no_stock: "Our CPU shelf is empty right now. Tell me your budget and I'll suggest what to look for.",
    },
    ChatRule {
        keywords: &["gpu", "graphics card"],
        category: Category::Gpu,
        with_stock: ("Check out our latest GPUs: ", ". I can help you find the right one for your build."),
        no_stock: "No graphics cards are listed at the moment. Ask me again soon or tell me what resolution you play at.",
    },
    ChatRule {
        keywords: &["motherboard"],
        category: Category::Motherboard,
        with_stock: ("We stock top-tier motherboards like: ", "."),
        no_stock: "No motherboards are listed right now. Let me know your CPU and I'll tell you which socket to look for.",
    },
    ChatRule {
        keywords: &["ram", "memory"],
        category: Category::Ram,
        with_stock: ("Upgrade your memory with: ", "."),
        no_stock: "Memory is out of stock at the moment. 16GB is a good starting point for most builds.",
    },
    ChatRule {
        keywords: &["storage", "ssd"],
        category: Category::Storage,
        with_stock: ("Fast storage options available: ", "."),
        no_stock: "No drives are listed right now. An NVMe SSD for the OS is always a good call.",
    },
];

/// Answers a chat message from the catalog snapshot. `rng` only decides which
/// filler line is used when no rule matches.
pub fn chat_reply<R: Rng>(message: &str, products: &[Product], rng: &mut R) -> String {
    let lower = message.to_lowercase();

    if let Some(rule) = RULES.iter().find(|r| contains_any(&lower, r.keywords)) {
        let names: Vec<&str> = products
            .iter()
            .filter(|p| p.slot() == Some(rule.category))
            .take(NAMES_SHOWN)
            .map(|p| p.name.as_str())
            .collect();
        if names.is_empty() {
            return rule.no_stock.to_string();
        }
        let (before, after) = rule.with_stock;
        return format!("{}{}{}", before, names.join(", "), after);
    }

    if lower.contains("help") {
        return HELP_REPLY.to_string();
    }

    FILLER_REPLIES[rng.random_range(0..FILLER_REPLIES.len())].to_string()
}
