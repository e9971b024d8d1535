// Static reference data: budget tiers, component glossary, build tips.
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct BudgetRange {
    pub range: String,
    #[serde(skip)]
    pub min: u64,
    #[serde(skip)]
    pub max: u64,
    pub cpu: String,
    pub gpu: String,
    pub ram: String,
    pub storage: String,
    pub use_case: String,
}

impl BudgetRange {
    fn new(min: u64, max: u64, cpu: &str, gpu: &str, ram: &str, storage: &str, use_case: &str) -> Self {
        Self {
            range: format!("${}-${}", min, max),
            min,
            max,
            cpu: cpu.to_string(),
            gpu: gpu.to_string(),
            ram: ram.to_string(),
            storage: storage.to_string(),
            use_case: use_case.to_string(),
        }
    }

    /// Inclusive on both ends.
    pub fn contains(&self, amount: u64) -> bool {
        self.min <= amount && amount <= self.max
    }

    pub fn describe(&self) -> String {
        format!(
            "Budget: {}\nCPU: {}\nGPU: {}\nRAM: {}\nStorage: {}\nUse Case: {}",
            self.range, self.cpu, self.gpu, self.ram, self.storage, self.use_case
        )
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GlossaryEntry {
    pub keyword: String,
    pub description: String,
}

/// Built once at startup and shared read-only.
#[derive(Debug, Clone, Serialize)]
pub struct KnowledgeBase {
    pub budget_ranges: Vec<BudgetRange>,
    pub components: Vec<GlossaryEntry>,
    pub tips: Vec<String>,
}

impl KnowledgeBase {
    pub fn builtin() -> Self {
        let budget_ranges = vec![
            BudgetRange::new(
                300, 500,
                "Intel Pentium Gold or AMD Athlon",
                "Integrated Graphics",
                "8GB DDR4",
                "256GB SSD",
                "Basic computing, web browsing, office work",
            ),
            BudgetRange::new(
                600, 900,
                "Intel Core i3-12100F or AMD Ryzen 5 5600",
                "GTX 1650 or RX 6500 XT",
                "16GB DDR4",
                "500GB NVMe SSD",
                "Gaming at 1080p, content creation, multitasking",
            ),
            BudgetRange::new(
                1000, 1500,
                "Intel Core i5-13400F or AMD Ryzen 5 7600",
                "RTX 4060 or RX 7600",
                "16GB DDR4/DDR5",
                "1TB NVMe SSD",
                "High-end gaming, streaming, video editing",
            ),
            BudgetRange::new(
                1500, 2500,
                "Intel Core i7-14700K or AMD Ryzen 7 7800X3D",
                "RTX 4070 Super or RX 7800 XT",
                "32GB DDR5",
                "2TB NVMe Gen4 SSD",
                "4K gaming, professional work, heavy multitasking",
            ),
        ];

        let components = [
            ("cpu", "The processor is the brain of your computer."),
            ("gpu", "Graphics card handles visuals and gaming."),
            ("ram", "Memory for running programs."),
            ("storage", "SSD (Solid State Drive) is faster than HDD."),
            ("motherboard", "Connects all components. Must match CPU socket."),
            ("psu", "Power Supply Unit. Bronze/Gold/Platinum ratings show efficiency."),
            ("cooler", "Keeps the CPU within safe temperatures. Check case clearance."),
            ("case", "Houses all components. Ensure good airflow."),
        ]
        .into_iter()
        .map(|(keyword, description)| GlossaryEntry {
            keyword: keyword.to_string(),
            description: description.to_string(),
        })
        .collect();

        let tips = [
            "Check component compatibility before buying",
            "Invest more in GPU if gaming is priority",
            "Don't cheap out on PSU - it powers everything",
            "SSD for OS is essential",
            "Consider future upgradability",
        ]
        .into_iter()
        .map(String::from)
        .collect();

        Self { budget_ranges, components, tips }
    }
}
