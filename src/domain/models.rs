use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::links::LinkList;

/// Interface language. Selects the template set and the active slot of
/// every [`BilingualText`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Pt,
}

impl Language {
    pub fn other(self) -> Self {
        match self {
            Language::En => Language::Pt,
            Language::Pt => Language::En,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Pt => "pt",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code().to_uppercase())
    }
}

impl FromStr for Language {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "pt" => Ok(Language::Pt),
            _ => Err(ConfigError::UnknownLanguage(s.to_string())),
        }
    }
}

/// Text kept separately per language. Writing one slot never touches the other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BilingualText {
    pub en: String,
    pub pt: String,
}

impl BilingualText {
    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::En => &self.en,
            Language::Pt => &self.pt,
        }
    }

    pub fn set(&mut self, language: Language, value: String) {
        match language {
            Language::En => self.en = value,
            Language::Pt => self.pt = value,
        }
    }

    /// Copies the other language's text into `language`'s slot when that slot
    /// is empty. Returns whether anything was copied.
    pub fn fill_from_other(&mut self, language: Language) -> bool {
        if !self.get(language).is_empty() {
            return false;
        }
        let other = self.get(language.other());
        if other.is_empty() {
            return false;
        }
        let copied = other.to_string();
        self.set(language, copied);
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    GitHub,
    LinkedIn,
    Custom,
}

/// Edit state of a single link. Edits are only accepted while unlocked,
/// copies only while locked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LockState {
    #[default]
    Unlocked,
    Locked,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkEntry {
    pub kind: LinkKind,
    pub value: String,
    pub lock: LockState,
    pub placeholder: String,
}

impl LinkEntry {
    pub fn new(kind: LinkKind, placeholder: impl Into<String>) -> Self {
        Self {
            kind,
            value: String::new(),
            lock: LockState::Unlocked,
            placeholder: placeholder.into(),
        }
    }

    pub fn is_locked(&self) -> bool {
        self.lock == LockState::Locked
    }

    pub fn is_seeded(&self) -> bool {
        matches!(self.kind, LinkKind::GitHub | LinkKind::LinkedIn)
    }
}

/// Everything the user has entered in one session.
///
/// # Examples
///
/// ```
/// use jobhelper::domain::{FormState, Language};
///
/// let form = FormState::default();
/// assert_eq!(form.language, Language::En);
/// assert_eq!(form.links.len(), 2);
/// assert!(form.letter.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub language: Language,
    pub name: String,
    pub company: String,
    pub skills: BilingualText,
    pub include_interest: bool,
    pub interest: BilingualText,
    pub links: LinkList,
    /// Last generated letter. Not recomputed when inputs change.
    pub letter: String,
}

impl FormState {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            name: String::new(),
            company: String::new(),
            skills: BilingualText::default(),
            include_interest: false,
            interest: BilingualText::default(),
            links: LinkList::seeded(language),
            letter: String::new(),
        }
    }

    pub fn active_skills(&self) -> &str {
        self.skills.get(self.language)
    }

    pub fn active_interest(&self) -> &str {
        self.interest.get(self.language)
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_parse() {
        assert_eq!("en".parse::<Language>().unwrap(), Language::En);
        assert_eq!(" PT ".parse::<Language>().unwrap(), Language::Pt);
        assert!(matches!(
            "fr".parse::<Language>(),
            Err(ConfigError::UnknownLanguage(s)) if s == "fr"
        ));
    }

    #[test]
    fn test_language_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Language::Pt).unwrap(), "\"pt\"");
        let lang: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(lang, Language::En);
    }

    #[test]
    fn test_bilingual_set_keeps_other_slot() {
        let mut text = BilingualText::default();
        text.set(Language::En, "rust".to_string());
        text.set(Language::Pt, "ferrugem".to_string());
        text.set(Language::En, String::new());

        assert_eq!(text.en, "");
        assert_eq!(text.pt, "ferrugem");
    }

    #[test]
    fn test_fill_from_other_only_into_empty_slot() {
        let mut text = BilingualText {
            en: "testing".to_string(),
            pt: String::new(),
        };
        assert!(text.fill_from_other(Language::Pt));
        assert_eq!(text.pt, "testing");
        assert_eq!(text.en, "testing");

        let mut text = BilingualText {
            en: "testing".to_string(),
            pt: "testes".to_string(),
        };
        assert!(!text.fill_from_other(Language::Pt));
        assert_eq!(text.pt, "testes");

        let mut text = BilingualText::default();
        assert!(!text.fill_from_other(Language::En));
        assert_eq!(text, BilingualText::default());
    }

    #[test]
    fn test_form_state_defaults() {
        let form = FormState::new(Language::Pt);
        assert_eq!(form.language, Language::Pt);
        assert!(form.name.is_empty());
        assert!(form.company.is_empty());
        assert!(!form.include_interest);
        assert_eq!(form.links.len(), 2);
        assert_eq!(form.links.get(0).unwrap().placeholder, "Link do GitHub");
    }
}
