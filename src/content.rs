//! Static display strings for the hero.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct HeroContent {
    pub greeting: String,
    pub name: String,
    pub title: String,
    pub bio: Vec<BioSegment>,
    pub buttons: Vec<CtaButton>,
}

/// A run of bio text. Skills render highlighted and grow on hover.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum BioSegment {
    Text(String),
    Skill(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CtaButton {
    pub label: String,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub style: ButtonStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ButtonStyle {
    #[default]
    Primary,
    Secondary,
}

impl ButtonStyle {
    pub fn class(self) -> &'static str {
        match self {
            ButtonStyle::Primary => "hero-cta hero-cta-primary",
            ButtonStyle::Secondary => "hero-cta hero-cta-secondary",
        }
    }
}

impl Default for HeroContent {
    fn default() -> Self {
        let text = |s: &str| BioSegment::Text(s.to_string());
        let skill = |s: &str| BioSegment::Skill(s.to_string());
        Self {
            greeting: "Hello, I'm".to_string(),
            name: "Amit Chauhan".to_string(),
            title: "Software Developer".to_string(),
            bio: vec![
                text("I am a software developer specializing in building high-performance, user-focused web applications. Skilled in "),
                skill("ReactJS"),
                text(", "),
                skill("NextJS"),
                text(", "),
                skill("SolidJS"),
                text(", and an expert in "),
                skill("JavaScript"),
                text(", "),
                skill("HTML"),
                text(" and "),
                skill("CSS"),
            ],
            buttons: vec![
                CtaButton {
                    label: "View My Work".to_string(),
                    href: None,
                    style: ButtonStyle::Primary,
                },
                CtaButton {
                    label: "Contact Me".to_string(),
                    href: None,
                    style: ButtonStyle::Secondary,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_deserialize_by_kind() {
        let bio: Vec<BioSegment> = serde_json::from_str(
            r#"[{"kind": "text", "text": "Skilled in "}, {"kind": "skill", "text": "Rust"}]"#,
        )
        .unwrap();
        assert_eq!(
            bio,
            vec![
                BioSegment::Text("Skilled in ".to_string()),
                BioSegment::Skill("Rust".to_string())
            ]
        );
    }

    #[test]
    fn button_style_defaults_to_primary() {
        let button: CtaButton = serde_json::from_str(r#"{"label": "Go"}"#).unwrap();
        assert_eq!(button.style, ButtonStyle::Primary);
        assert_eq!(button.href, None);
    }
}
