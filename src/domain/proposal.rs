//! Provider onboarding form model.

use thiserror::Error;

use super::entities::{PriceBasis, ProviderKind};

pub const MAX_SKILLS: usize = 12;
const MIN_DESCRIPTION_LEN: usize = 30;

#[derive(Clone, Debug, PartialEq)]
pub struct ProposalForm {
    pub name: String,
    pub email: String,
    pub kind: ProviderKind,
    pub title: String,
    pub description: String,
    pub unit_price: String,
    pub price_basis: PriceBasis,
    pub skills: Vec<String>,
}

impl Default for ProposalForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            kind: ProviderKind::Human,
            title: String::new(),
            description: String::new(),
            unit_price: String::new(),
            price_basis: PriceBasis::Hour,
            skills: Vec::new(),
        }
    }
}

/// A form that passed validation.
#[derive(Clone, Debug, PartialEq)]
pub struct Proposal {
    pub reference: String,
    pub name: String,
    pub email: String,
    pub kind: ProviderKind,
    pub title: String,
    pub description: String,
    pub unit_price: f64,
    pub price_basis: PriceBasis,
    pub skills: Vec<String>,
}

#[derive(Debug, Error, PartialEq)]
pub enum ProposalError {
    #[error("Le nom est obligatoire.")]
    MissingName,
    #[error("Adresse e-mail invalide.")]
    InvalidEmail,
    #[error("Le titre est obligatoire.")]
    MissingTitle,
    #[error("La description doit contenir au moins 30 caractères.")]
    DescriptionTooShort,
    #[error("Tarif invalide : {0}")]
    InvalidPrice(String),
    #[error("Ajoutez au moins une compétence.")]
    NoSkills,
    #[error("Compétence déjà présente : {0}")]
    DuplicateSkill(String),
    #[error("Maximum 12 compétences.")]
    TooManySkills,
}

impl ProposalForm {
    /// Adds a trimmed skill, ignoring case when checking for duplicates.
    pub fn add_skill(&mut self, raw: &str) -> Result<(), ProposalError> {
        let skill = raw.trim();
        if skill.is_empty() {
            return Ok(());
        }
        let folded = skill.to_lowercase();
        if self
            .skills
            .iter()
            .any(|existing| existing.to_lowercase() == folded)
        {
            return Err(ProposalError::DuplicateSkill(skill.to_string()));
        }
        if self.skills.len() >= MAX_SKILLS {
            return Err(ProposalError::TooManySkills);
        }
        self.skills.push(skill.to_string());
        Ok(())
    }

    pub fn remove_skill(&mut self, skill: &str) {
        self.skills.retain(|existing| existing != skill);
    }

    pub fn validate(&self) -> Result<Proposal, ProposalError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ProposalError::MissingName);
        }

        let email = self.email.trim();
        if !looks_like_email(email) {
            return Err(ProposalError::InvalidEmail);
        }

        let title = self.title.trim();
        if title.is_empty() {
            return Err(ProposalError::MissingTitle);
        }

        let description = self.description.trim();
        if description.chars().count() < MIN_DESCRIPTION_LEN {
            return Err(ProposalError::DescriptionTooShort);
        }

        let unit_price = parse_price(&self.unit_price)?;

        if self.skills.is_empty() {
            return Err(ProposalError::NoSkills);
        }

        Ok(Proposal {
            reference: new_reference(),
            name: name.to_string(),
            email: email.to_string(),
            kind: self.kind,
            title: title.to_string(),
            description: description.to_string(),
            unit_price,
            price_basis: self.price_basis,
            skills: self.skills.clone(),
        })
    }
}

fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && domain.contains('.')
        && !email.contains(char::is_whitespace)
}

/// Accepts both `12.5` and `12,5`.
fn parse_price(raw: &str) -> Result<f64, ProposalError> {
    let normalized = raw.trim().replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(value),
        Ok(_) => Err(ProposalError::InvalidPrice(
            "le montant doit être positif".to_string(),
        )),
        Err(_) => Err(ProposalError::InvalidPrice(raw.trim().to_string())),
    }
}

fn new_reference() -> String {
    let id = uuid::Uuid::new_v4().simple().to_string();
    format!("PRP-{}", id[..8].to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ProposalForm {
        ProposalForm {
            name: "  Léa Dubois ".into(),
            email: "lea@example.fr".into(),
            kind: ProviderKind::Human,
            title: "Designer UX".into(),
            description: "Conception d'interfaces pour applications SaaS B2B.".into(),
            unit_price: "55,5".into(),
            price_basis: PriceBasis::Hour,
            skills: vec!["Figma".into()],
        }
    }

    #[test]
    fn valid_form_produces_trimmed_proposal() {
        let proposal = filled_form().validate().expect("form is valid");
        assert_eq!(proposal.name, "Léa Dubois");
        assert!((proposal.unit_price - 55.5).abs() < 1e-9);
        assert!(proposal.reference.starts_with("PRP-"));
        assert_eq!(proposal.reference.len(), 12);
    }

    #[test]
    fn rejects_each_missing_field() {
        let mut form = filled_form();
        form.name = "   ".into();
        assert_eq!(form.validate(), Err(ProposalError::MissingName));

        let mut form = filled_form();
        form.email = "lea.example.fr".into();
        assert_eq!(form.validate(), Err(ProposalError::InvalidEmail));

        let mut form = filled_form();
        form.email = "lea@localhost".into();
        assert_eq!(form.validate(), Err(ProposalError::InvalidEmail));

        let mut form = filled_form();
        form.description = "Trop court".into();
        assert_eq!(form.validate(), Err(ProposalError::DescriptionTooShort));

        let mut form = filled_form();
        form.skills.clear();
        assert_eq!(form.validate(), Err(ProposalError::NoSkills));
    }

    #[test]
    fn rejects_non_positive_or_garbage_price() {
        let mut form = filled_form();
        form.unit_price = "0".into();
        assert!(matches!(form.validate(), Err(ProposalError::InvalidPrice(_))));

        form.unit_price = "abc".into();
        assert_eq!(
            form.validate(),
            Err(ProposalError::InvalidPrice("abc".into()))
        );
    }

    #[test]
    fn skill_list_ignores_blank_and_duplicates() {
        let mut form = ProposalForm::default();
        form.add_skill("  Rust ").expect("new skill");
        form.add_skill("   ").expect("blank is ignored");
        assert_eq!(
            form.add_skill("rust"),
            Err(ProposalError::DuplicateSkill("rust".into()))
        );
        assert_eq!(form.skills, vec!["Rust".to_string()]);

        form.remove_skill("Rust");
        assert!(form.skills.is_empty());
    }

    #[test]
    fn accented_skills_match_regardless_of_case() {
        let mut form = ProposalForm::default();
        form.add_skill("Écriture").expect("new skill");
        assert_eq!(
            form.add_skill("écriture"),
            Err(ProposalError::DuplicateSkill("écriture".into()))
        );
        assert_eq!(form.skills, vec!["Écriture".to_string()]);
    }

    #[test]
    fn skill_list_is_capped() {
        let mut form = ProposalForm::default();
        for idx in 0..MAX_SKILLS {
            form.add_skill(&format!("skill-{idx}")).expect("under cap");
        }
        assert_eq!(form.add_skill("one-more"), Err(ProposalError::TooManySkills));
    }
}
