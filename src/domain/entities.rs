use std::{collections::BTreeSet, fmt};

use serde::{Deserialize, Serialize};

/// Who delivers the service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Human,
    Ai,
}

impl ProviderKind {
    pub fn label(&self) -> &'static str {
        match self {
            ProviderKind::Human => "Freelance",
            ProviderKind::Ai => "Agent IA",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            ProviderKind::Human => "🧑‍💻",
            ProviderKind::Ai => "🤖",
        }
    }
}

/// Unit a service is charged by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceBasis {
    #[default]
    Hour,
    Project,
    Request,
}

impl PriceBasis {
    pub const ALL: [PriceBasis; 3] = [PriceBasis::Hour, PriceBasis::Project, PriceBasis::Request];

    /// Suffix shown after a unit price, e.g. `45 € / h`.
    pub fn suffix(&self) -> &'static str {
        match self {
            PriceBasis::Hour => "/ h",
            PriceBasis::Project => "/ projet",
            PriceBasis::Request => "/ requête",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            PriceBasis::Hour => "hour",
            PriceBasis::Project => "project",
            PriceBasis::Request => "request",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|basis| basis.key() == key)
    }
}

/// A single provider service selected for purchase.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: String,
    pub name: String,
    pub provider_kind: ProviderKind,
    #[serde(default)]
    pub title: Option<String>,
    pub unit_price: f64,
    pub price_basis: PriceBasis,
    /// Only meaningful for [`PriceBasis::Hour`]. Never stored below 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_hours: Option<u32>,
    #[serde(default)]
    pub skills: BTreeSet<String>,
    /// 0.0 to 5.0
    #[serde(default)]
    pub rating: f32,
}

/// A bundle of providers sold as one unit.
///
/// `total_price` is authored with the bundle and is never derived from the
/// members' own prices.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamItem {
    pub id: String,
    pub name: String,
    pub members: Vec<CartItem>,
    pub rating: f32,
    pub total_price: f64,
    pub project_count: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProviderProfile {
    pub id: String,
    pub name: String,
    pub kind: ProviderKind,
    pub title: String,
    pub bio: String,
    pub skills: Vec<String>,
    pub rating: f32,
    pub review_count: u32,
    pub unit_price: f64,
    pub price_basis: PriceBasis,
    pub location: Option<String>,
    pub availability: Availability,
    pub completed_projects: u32,
    pub portfolio: Vec<String>,
}

impl ProviderProfile {
    /// Snapshot of this provider as a cart line. Hourly services start at one hour.
    pub fn to_cart_item(&self) -> CartItem {
        CartItem {
            id: self.id.clone(),
            name: self.name.clone(),
            provider_kind: self.kind,
            title: Some(self.title.clone()),
            unit_price: self.unit_price,
            price_basis: self.price_basis,
            estimated_hours: (self.price_basis == PriceBasis::Hour).then_some(1),
            skills: self.skills.iter().cloned().collect(),
            rating: self.rating,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Availability {
    Available,
    Busy,
    Away,
}

impl Availability {
    pub fn label(&self) -> &'static str {
        match self {
            Availability::Available => "Disponible",
            Availability::Busy => "Occupé",
            Availability::Away => "Absent",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectStatus {
    InProgress,
    Review,
    Completed,
    Cancelled,
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ProjectStatus::InProgress => "En cours",
            ProjectStatus::Review => "En revue",
            ProjectStatus::Completed => "Terminé",
            ProjectStatus::Cancelled => "Annulé",
        };
        f.write_str(label)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub provider_name: String,
    pub provider_kind: ProviderKind,
    pub status: ProjectStatus,
    pub budget: f64,
    /// 0 to 100
    pub progress: u8,
    pub due_label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PricingTier {
    pub name: String,
    pub tagline: String,
    pub monthly_price: f64,
    pub yearly_price: f64,
    pub features: Vec<String>,
    pub highlighted: bool,
    pub cta: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BillingCycle {
    Monthly,
    Yearly,
}

impl PricingTier {
    pub fn price_for(&self, cycle: BillingCycle) -> f64 {
        match cycle {
            BillingCycle::Monthly => self.monthly_price,
            BillingCycle::Yearly => self.yearly_price,
        }
    }

    /// Percentage saved by paying yearly instead of twelve monthly payments.
    pub fn yearly_savings_pct(&self) -> Option<f64> {
        let full_year = self.monthly_price * 12.0;
        if full_year <= 0.0 || self.yearly_price >= full_year {
            return None;
        }
        Some((1.0 - self.yearly_price / full_year) * 100.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HowItWorksStep {
    pub icon: &'static str,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardStat {
    pub title: String,
    pub value: String,
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cart_item_reads_camel_case_json() {
        let item: CartItem = serde_json::from_value(serde_json::json!({
            "id": "p-1",
            "name": "Sophie Martin",
            "providerKind": "human",
            "unitPrice": 45,
            "priceBasis": "hour",
            "estimatedHours": 40,
            "skills": ["React", "TypeScript"],
            "rating": 4.9
        }))
        .expect("valid cart item");

        assert_eq!(item.provider_kind, ProviderKind::Human);
        assert_eq!(item.price_basis, PriceBasis::Hour);
        assert_eq!(item.estimated_hours, Some(40));
        assert!(item.skills.contains("React"));
    }

    #[test]
    fn hourly_profile_enters_cart_with_one_hour() {
        let profile = ProviderProfile {
            id: "p-9".into(),
            name: "Test".into(),
            kind: ProviderKind::Ai,
            title: "Bot".into(),
            bio: String::new(),
            skills: vec!["NLP".into()],
            rating: 4.0,
            review_count: 0,
            unit_price: 12.0,
            price_basis: PriceBasis::Hour,
            location: None,
            availability: Availability::Available,
            completed_projects: 0,
            portfolio: Vec::new(),
        };
        assert_eq!(profile.to_cart_item().estimated_hours, Some(1));

        let flat = ProviderProfile {
            price_basis: PriceBasis::Request,
            ..profile
        };
        assert_eq!(flat.to_cart_item().estimated_hours, None);
    }

    #[test]
    fn yearly_savings_only_when_cheaper() {
        let tier = PricingTier {
            name: "Pro".into(),
            tagline: String::new(),
            monthly_price: 10.0,
            yearly_price: 96.0,
            features: Vec::new(),
            highlighted: false,
            cta: String::new(),
        };
        let savings = tier.yearly_savings_pct().expect("cheaper yearly");
        assert!((savings - 20.0).abs() < 1e-9);

        let free = PricingTier {
            monthly_price: 0.0,
            yearly_price: 0.0,
            ..tier
        };
        assert_eq!(free.yearly_savings_pct(), None);
    }

    #[test]
    fn price_basis_keys_round_trip() {
        for basis in PriceBasis::ALL {
            assert_eq!(PriceBasis::from_key(basis.key()), Some(basis));
        }
        assert_eq!(PriceBasis::from_key("week"), None);
    }
}
