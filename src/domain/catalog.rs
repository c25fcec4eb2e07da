//! Static marketplace content shown until a real backend exists.

use std::sync::OnceLock;

use super::cart::Cart;
use super::entities::{
    Availability, CartItem, DashboardStat, FaqEntry, HowItWorksStep, PriceBasis, PricingTier,
    Project, ProjectStatus, ProviderKind, ProviderProfile, TeamItem,
};

static PROFILES: OnceLock<Vec<ProviderProfile>> = OnceLock::new();

pub fn profiles() -> &'static [ProviderProfile] {
    PROFILES.get_or_init(build_profiles).as_slice()
}

pub fn find_profile(id: &str) -> Option<&'static ProviderProfile> {
    profiles().iter().find(|profile| profile.id == id)
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn build_profiles() -> Vec<ProviderProfile> {
    vec![
        ProviderProfile {
            id: "sophie-martin".into(),
            name: "Sophie Martin".into(),
            kind: ProviderKind::Human,
            title: "Développeuse Full-Stack React / Node".into(),
            bio: "Huit ans d'expérience sur des produits SaaS, de la maquette à la mise en production.".into(),
            skills: strings(&["React", "TypeScript", "Node.js", "PostgreSQL"]),
            rating: 4.9,
            review_count: 127,
            unit_price: 45.0,
            price_basis: PriceBasis::Hour,
            location: Some("Lyon, France".into()),
            availability: Availability::Available,
            completed_projects: 84,
            portfolio: strings(&["prj-ecommerce", "prj-crm"]),
        },
        ProviderProfile {
            id: "redac-ia".into(),
            name: "RédacIA".into(),
            kind: ProviderKind::Ai,
            title: "Agent de rédaction marketing".into(),
            bio: "Génère articles, fiches produit et newsletters dans le ton de votre marque.".into(),
            skills: strings(&["Copywriting", "SEO", "Traduction"]),
            rating: 4.7,
            review_count: 2_341,
            unit_price: 0.05,
            price_basis: PriceBasis::Request,
            location: None,
            availability: Availability::Available,
            completed_projects: 15_820,
            portfolio: strings(&["prj-blog"]),
        },
        ProviderProfile {
            id: "karim-benali".into(),
            name: "Karim Benali".into(),
            kind: ProviderKind::Human,
            title: "Designer UI/UX".into(),
            bio: "Design systems et parcours utilisateurs pour applications mobiles.".into(),
            skills: strings(&["Figma", "Design System", "Prototypage"]),
            rating: 4.8,
            review_count: 64,
            unit_price: 2_500.0,
            price_basis: PriceBasis::Project,
            location: Some("Paris, France".into()),
            availability: Availability::Busy,
            completed_projects: 41,
            portfolio: strings(&["prj-mobile"]),
        },
        ProviderProfile {
            id: "data-pilot".into(),
            name: "DataPilot".into(),
            kind: ProviderKind::Ai,
            title: "Agent d'analyse de données".into(),
            bio: "Nettoie, explore et résume vos jeux de données en tableaux de bord clairs.".into(),
            skills: strings(&["Python", "SQL", "Data Viz"]),
            rating: 4.6,
            review_count: 512,
            unit_price: 12.0,
            price_basis: PriceBasis::Hour,
            location: None,
            availability: Availability::Available,
            completed_projects: 3_208,
            portfolio: Vec::new(),
        },
        ProviderProfile {
            id: "claire-dubois".into(),
            name: "Claire Dubois".into(),
            kind: ProviderKind::Human,
            title: "Cheffe de projet digital".into(),
            bio: "Coordonne équipes mixtes humains / agents IA sur des lancements produits.".into(),
            skills: strings(&["Scrum", "Gestion de projet", "Product"]),
            rating: 4.9,
            review_count: 89,
            unit_price: 60.0,
            price_basis: PriceBasis::Hour,
            location: Some("Bordeaux, France".into()),
            availability: Availability::Away,
            completed_projects: 57,
            portfolio: strings(&["prj-crm"]),
        },
    ]
}

/// Cart contents at the start of a session.
pub fn seed_cart() -> Cart {
    let mut sophie = profile_item("sophie-martin");
    if let Some(item) = sophie.as_mut() {
        item.estimated_hours = Some(40);
    }
    let items = [sophie, profile_item("redac-ia")]
        .into_iter()
        .flatten()
        .collect();

    let members = ["karim-benali", "data-pilot", "claire-dubois"]
        .into_iter()
        .filter_map(profile_item)
        .collect();

    Cart::new(
        items,
        vec![TeamItem {
            id: "team-launch".into(),
            name: "Équipe Lancement SaaS".into(),
            members,
            rating: 4.8,
            total_price: 8_500.0,
            project_count: 23,
        }],
    )
}

fn profile_item(id: &str) -> Option<CartItem> {
    find_profile(id).map(ProviderProfile::to_cart_item)
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "prj-ecommerce".into(),
            title: "Refonte boutique e-commerce".into(),
            provider_name: "Sophie Martin".into(),
            provider_kind: ProviderKind::Human,
            status: ProjectStatus::InProgress,
            budget: 4_800.0,
            progress: 65,
            due_label: "15 nov.".into(),
        },
        Project {
            id: "prj-blog".into(),
            title: "Série d'articles SEO".into(),
            provider_name: "RédacIA".into(),
            provider_kind: ProviderKind::Ai,
            status: ProjectStatus::Review,
            budget: 120.0,
            progress: 90,
            due_label: "Demain".into(),
        },
        Project {
            id: "prj-mobile".into(),
            title: "Maquettes application mobile".into(),
            provider_name: "Karim Benali".into(),
            provider_kind: ProviderKind::Human,
            status: ProjectStatus::Completed,
            budget: 2_500.0,
            progress: 100,
            due_label: "Livré".into(),
        },
        Project {
            id: "prj-crm".into(),
            title: "Migration CRM".into(),
            provider_name: "Claire Dubois".into(),
            provider_kind: ProviderKind::Human,
            status: ProjectStatus::Cancelled,
            budget: 3_200.0,
            progress: 20,
            due_label: "—".into(),
        },
    ]
}

pub fn dashboard_stats(projects: &[Project]) -> Vec<DashboardStat> {
    let active = projects
        .iter()
        .filter(|project| {
            matches!(
                project.status,
                ProjectStatus::InProgress | ProjectStatus::Review
            )
        })
        .count();
    let completed = projects
        .iter()
        .filter(|project| project.status == ProjectStatus::Completed)
        .count();
    let spent: f64 = projects
        .iter()
        .filter(|project| project.status != ProjectStatus::Cancelled)
        .map(|project| project.budget * f64::from(project.progress) / 100.0)
        .sum();
    let ai_share = if projects.is_empty() {
        0.0
    } else {
        let ai = projects
            .iter()
            .filter(|project| project.provider_kind == ProviderKind::Ai)
            .count();
        ai as f64 / projects.len() as f64 * 100.0
    };

    vec![
        DashboardStat {
            title: "Projets actifs".into(),
            value: active.to_string(),
            description: Some("En cours ou en revue".into()),
        },
        DashboardStat {
            title: "Projets terminés".into(),
            value: completed.to_string(),
            description: None,
        },
        DashboardStat {
            title: "Dépenses engagées".into(),
            value: format!("{spent:.0} €"),
            description: Some("Au prorata de l'avancement".into()),
        },
        DashboardStat {
            title: "Part IA".into(),
            value: format!("{ai_share:.0} %"),
            description: Some("Projets confiés à des agents".into()),
        },
    ]
}

pub fn pricing_tiers() -> Vec<PricingTier> {
    vec![
        PricingTier {
            name: "Découverte".into(),
            tagline: "Pour tester la plateforme".into(),
            monthly_price: 0.0,
            yearly_price: 0.0,
            features: strings(&[
                "3 projets actifs",
                "Accès aux freelances vérifiés",
                "Agents IA en paiement à l'usage",
            ]),
            highlighted: false,
            cta: "Commencer".into(),
        },
        PricingTier {
            name: "Pro".into(),
            tagline: "Pour les équipes qui livrent".into(),
            monthly_price: 29.0,
            yearly_price: 290.0,
            features: strings(&[
                "Projets illimités",
                "Équipes mixtes humains / IA",
                "Commission réduite à 5 %",
                "Support prioritaire",
            ]),
            highlighted: true,
            cta: "Passer Pro".into(),
        },
        PricingTier {
            name: "Entreprise".into(),
            tagline: "Pour les organisations".into(),
            monthly_price: 99.0,
            yearly_price: 990.0,
            features: strings(&[
                "Tout le plan Pro",
                "Agents IA dédiés",
                "Facturation centralisée",
                "Gestionnaire de compte",
            ]),
            highlighted: false,
            cta: "Nous contacter".into(),
        },
    ]
}

pub fn faq() -> Vec<FaqEntry> {
    [
        (
            "Comment sont facturés les agents IA ?",
            "À la requête, à l'heure ou au projet selon l'agent. Le tarif est affiché sur chaque profil.",
        ),
        (
            "Puis-je changer de formule ?",
            "Oui, à tout moment. Le changement prend effet à la prochaine période de facturation.",
        ),
        (
            "Qu'est-ce qu'une équipe ?",
            "Un groupe de prestataires proposé à un prix global, indépendant des tarifs individuels.",
        ),
        (
            "Mes paiements sont-ils sécurisés ?",
            "Les fonds sont conservés jusqu'à la validation de chaque livrable.",
        ),
    ]
    .into_iter()
    .map(|(question, answer)| FaqEntry {
        question: question.into(),
        answer: answer.into(),
    })
    .collect()
}

pub fn client_steps() -> Vec<HowItWorksStep> {
    vec![
        step("📝", "Décrivez votre besoin", "Publiez votre projet en quelques minutes."),
        step("🔍", "Comparez les profils", "Freelances et agents IA notés par la communauté."),
        step("🛒", "Composez votre panier", "Ajoutez des prestataires ou une équipe complète."),
        step("✅", "Validez les livrables", "Le paiement n'est libéré qu'à votre validation."),
    ]
}

pub fn provider_steps() -> Vec<HowItWorksStep> {
    vec![
        step("👤", "Créez votre profil", "Présentez vos compétences et votre tarif."),
        step("🤖", "Ou publiez votre agent", "Exposez votre agent IA via notre API."),
        step("💬", "Recevez des missions", "Les clients vous contactent directement."),
        step("💶", "Soyez payé", "Virement dès validation du livrable."),
    ]
}

fn step(icon: &'static str, title: &str, description: &str) -> HowItWorksStep {
    HowItWorksStep {
        icon,
        title: title.into(),
        description: description.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_cart_matches_reference_total() {
        let cart = seed_cart();
        assert_eq!(cart.items.len(), 2);
        assert_eq!(cart.teams.len(), 1);
        assert_eq!(cart.teams[0].members.len(), 3);
        assert!((cart.grand_total() - 10_300.05).abs() < 1e-6);
    }

    #[test]
    fn profile_ids_are_unique() {
        let mut ids: Vec<_> = profiles().iter().map(|profile| profile.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), profiles().len());
    }

    #[test]
    fn unknown_profile_is_none() {
        assert!(find_profile("sophie-martin").is_some());
        assert!(find_profile("nobody").is_none());
    }

    #[test]
    fn stats_ignore_cancelled_spend() {
        let stats = dashboard_stats(&projects());
        assert_eq!(stats[0].value, "2");
        assert_eq!(stats[1].value, "1");
        // 4800 * 0.65 + 120 * 0.9 + 2500
        assert_eq!(stats[2].value, "5728 €");
        assert_eq!(stats[3].value, "25 %");
    }
}
