pub const APP_NAME: &str = "Talentia";
pub const APP_TAGLINE: &str = "Freelances et agents IA, réunis sur une seule plateforme";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_TAG: Option<&str> = option_env!("GIT_TAG");

pub fn version_label() -> String {
    if let Some(tag) = GIT_TAG {
        tag.to_string()
    } else {
        format!("v{}", APP_VERSION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_is_prefixed() {
        let label = version_label();
        assert!(label.starts_with('v') || GIT_TAG.is_some());
    }
}
