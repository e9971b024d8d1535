use crate::model::{BuildType, Category, Product};

/// Filter tried first when picking from a bucket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Predicate {
    PriceAbove(f64),
    PriceBelow(f64),
    Brand(&'static str),
    WattageAtLeast(u32),
}

impl Predicate {
    pub fn matches(&self, product: &Product) -> bool {
        match *self {
            Predicate::PriceAbove(limit) => product.price > limit,
            Predicate::PriceBelow(limit) => product.price < limit,
            Predicate::Brand(brand) => product.brand.eq_ignore_ascii_case(brand),
            Predicate::WattageAtLeast(watts) => product.wattage() >= watts,
        }
    }
}

/// Which end of the bucket to fall back to when the predicate finds nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum End {
    First,
    Last,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rule {
    pub prefer: Option<Predicate>,
    pub otherwise: End,
}

impl Rule {
    const FIRST: Rule = Rule { prefer: None, otherwise: End::First };
    const LAST: Rule = Rule { prefer: None, otherwise: End::Last };

    const fn prefer(predicate: Predicate, otherwise: End) -> Rule {
        Rule { prefer: Some(predicate), otherwise }
    }

    /// Picks from `bucket` in fetch order; `None` only when the bucket is empty.
    pub fn pick<'a>(&self, bucket: &[&'a Product]) -> Option<&'a Product> {
        let preferred = self
            .prefer
            .and_then(|p| bucket.iter().copied().find(|product| p.matches(product)));
        preferred.or_else(|| match self.otherwise {
            End::First => bucket.first().copied(),
            End::Last => bucket.last().copied(),
        })
    }
}

/// Selection rule for one slot under an already-resolved build type.
/// Gaming builds share the budget rules.
pub fn rule_for(build_type: BuildType, category: Category) -> Rule {
    use Category::*;
    use Predicate::*;

    match build_type {
        BuildType::HighEnd => match category {
            Cpu => Rule::prefer(PriceAbove(500.0), End::First),
            Gpu => Rule::prefer(PriceAbove(900.0), End::First),
            Motherboard => Rule::prefer(PriceAbove(300.0), End::First),
            Psu => Rule::prefer(WattageAtLeast(850), End::First),
            Ram | Storage | Cooler | Case => Rule::FIRST,
        },
        BuildType::Workstation => match category {
            Cpu => Rule::prefer(Brand("AMD"), End::First),
            _ => Rule::FIRST,
        },
        BuildType::Budget | BuildType::Gaming => match category {
            Cpu => Rule::prefer(PriceBelow(400.0), End::Last),
            Gpu => Rule::prefer(PriceBelow(700.0), End::Last),
            Motherboard => Rule::prefer(PriceBelow(250.0), End::Last),
            Psu => Rule::LAST,
            Ram | Storage | Cooler | Case => Rule::FIRST,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn item(id: &str, price: f64, brand: &str) -> Product {
        Product {
            id: id.into(),
            name: id.into(),
            category: "CPU".into(),
            price,
            brand: brand.into(),
            specs: BTreeMap::new(),
            image_url: crate::model::PLACEHOLDER_IMAGE.into(),
        }
    }

    #[test]
    fn predicate_miss_falls_back_to_configured_end() {
        let a = item("a", 600.0, "Intel");
        let b = item("b", 700.0, "Intel");
        let bucket = vec![&a, &b];
        let budget_cpu = rule_for(BuildType::Budget, Category::Cpu);
        assert_eq!(budget_cpu.pick(&bucket).map(|p| p.id.as_str()), Some("b"));
        let workstation_cpu = rule_for(BuildType::Workstation, Category::Cpu);
        assert_eq!(workstation_cpu.pick(&bucket).map(|p| p.id.as_str()), Some("a"));
    }

    #[test]
    fn predicate_takes_first_match_in_fetch_order() {
        let a = item("a", 450.0, "Intel");
        let b = item("b", 550.0, "AMD");
        let c = item("c", 650.0, "AMD");
        let bucket = vec![&a, &b, &c];
        let pick = rule_for(BuildType::Workstation, Category::Cpu).pick(&bucket);
        assert_eq!(pick.map(|p| p.id.as_str()), Some("b"));
        let pick = rule_for(BuildType::HighEnd, Category::Cpu).pick(&bucket);
        assert_eq!(pick.map(|p| p.id.as_str()), Some("b"));
    }

    #[test]
    fn empty_bucket_picks_nothing() {
        assert!(rule_for(BuildType::HighEnd, Category::Gpu).pick(&[]).is_none());
    }

    #[test]
    fn gaming_uses_budget_rules() {
        for category in Category::ALL {
            assert_eq!(
                rule_for(BuildType::Gaming, category),
                rule_for(BuildType::Budget, category)
            );
        }
    }
}
