//! Declarative field validation shared by every form.
//!
//! A form is a list of [`FieldRules`]; [`validate`] runs them against a
//! [`FormDraft`] and reports the first failing rule per field.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::i18n::{t, t_n, Lang};

pub const MAX_CV_BYTES: u64 = 5 * 1024 * 1024;

/// Value for the CV picker's `accept` attribute.
pub const CV_ACCEPT: &str = ".pdf,.doc,.docx";

pub const ACCEPTED_CV_TYPES: [&str; 3] = [
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

static EMAIL_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

static DOMAIN_RE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^(?:[a-zA-Z0-9][a-zA-Z0-9-]+[a-zA-Z0-9]\.\S{2,}|[a-zA-Z0-9]+\.\S{2,})$").ok()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Trimmed text is non-empty.
    Required,
    Email,
    /// Raw character count.
    MinLength(usize),
    MinTrimmedLength(usize),
    /// Equal to the named field.
    Matches(&'static str),
    /// Only checked when non-empty.
    WebUrl,
    /// Only checked when non-empty.
    StartsWith(&'static str),
    NonNegativeInteger,
    FileRequired,
    MaxFileSize(u64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Required")]
    Required,
    #[error("Invalid email")]
    InvalidEmail,
    #[error("Min {0} chars")]
    TooShort(usize),
    #[error("Mismatch")]
    Mismatch,
    #[error("Invalid URL")]
    InvalidUrl,
    #[error("Start with {0}")]
    MustStartWith(&'static str),
    #[error("Invalid")]
    Invalid,
    #[error("Max {}MB", .0 / (1024 * 1024))]
    FileTooLarge(u64),
}

impl ValidationError {
    /// Message in the user's language.
    pub fn localized(&self, lang: Lang) -> String {
        match self {
            ValidationError::Required => t(lang, "validation.required"),
            ValidationError::InvalidEmail => t(lang, "validation.invalid_email"),
            ValidationError::TooShort(n) => t_n(lang, "validation.min_chars", n),
            ValidationError::Mismatch => t(lang, "validation.mismatch"),
            ValidationError::InvalidUrl => t(lang, "validation.invalid_url"),
            ValidationError::MustStartWith(_) => t(lang, "validation.start_with_http"),
            ValidationError::Invalid => t(lang, "validation.invalid"),
            ValidationError::FileTooLarge(max) => {
                t_n(lang, "validation.max_file_size", max / (1024 * 1024))
            }
        }
    }
}

/// Rules for one field, checked in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRules {
    pub field: &'static str,
    pub rules: &'static [Rule],
}

/// File metadata picked in the browser. Content is read only on submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
    pub content_type: String,
}

impl SelectedFile {
    pub fn is_accepted_cv(&self) -> bool {
        ACCEPTED_CV_TYPES.contains(&self.content_type.as_str())
    }
}

/// Field values of a form being edited, plus the errors currently shown.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormDraft {
    values: BTreeMap<&'static str, String>,
    files: BTreeMap<&'static str, SelectedFile>,
    errors: BTreeMap<&'static str, ValidationError>,
}

impl FormDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: &'static str, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Update a value and clear that field's error.
    pub fn set(&mut self, field: &'static str, value: impl Into<String>) {
        self.values.insert(field, value.into());
        self.errors.remove(field);
    }

    pub fn value(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }

    /// Owned copy of a value, for payload builders.
    pub fn owned(&self, field: &str) -> String {
        self.value(field).to_string()
    }

    pub fn set_file(&mut self, field: &'static str, file: Option<SelectedFile>) {
        match file {
            Some(file) => {
                self.files.insert(field, file);
            }
            None => {
                self.files.remove(field);
            }
        }
        self.errors.remove(field);
    }

    pub fn file(&self, field: &str) -> Option<&SelectedFile> {
        self.files.get(field)
    }

    pub fn error(&self, field: &str) -> Option<ValidationError> {
        self.errors.get(field).copied()
    }

    pub fn errors(&self) -> &BTreeMap<&'static str, ValidationError> {
        &self.errors
    }

    pub fn set_errors(&mut self, errors: BTreeMap<&'static str, ValidationError>) {
        self.errors = errors;
    }
}

/// Every field's first failing rule.
pub fn validate(rules: &[FieldRules], draft: &FormDraft) -> BTreeMap<&'static str, ValidationError> {
    rules
        .iter()
        .filter_map(|field| {
            field
                .rules
                .iter()
                .find_map(|rule| check(*rule, field.field, draft).err())
                .map(|err| (field.field, err))
        })
        .collect()
}

pub fn is_valid(rules: &[FieldRules], draft: &FormDraft) -> bool {
    validate(rules, draft).is_empty()
}

fn check(rule: Rule, field: &str, draft: &FormDraft) -> Result<(), ValidationError> {
    let value = draft.value(field);
    let ok = match rule {
        Rule::Required => !value.trim().is_empty(),
        Rule::Email => is_email(value),
        Rule::MinLength(n) => value.chars().count() >= n,
        Rule::MinTrimmedLength(n) => value.trim().chars().count() >= n,
        Rule::Matches(other) => value == draft.value(other),
        Rule::WebUrl => value.trim().is_empty() || is_web_url(value.trim()),
        Rule::StartsWith(prefix) => value.is_empty() || value.starts_with(prefix),
        Rule::NonNegativeInteger => value.trim().parse::<u32>().is_ok(),
        Rule::FileRequired => draft.file(field).is_some(),
        Rule::MaxFileSize(max) => draft.file(field).is_none_or(|f| f.size <= max),
    };
    if ok {
        return Ok(());
    }
    Err(match rule {
        Rule::Required | Rule::FileRequired => ValidationError::Required,
        Rule::Email => ValidationError::InvalidEmail,
        Rule::MinLength(n) | Rule::MinTrimmedLength(n) => ValidationError::TooShort(n),
        Rule::Matches(_) => ValidationError::Mismatch,
        Rule::WebUrl => ValidationError::InvalidUrl,
        Rule::StartsWith(prefix) => ValidationError::MustStartWith(prefix),
        Rule::NonNegativeInteger => ValidationError::Invalid,
        Rule::MaxFileSize(max) => ValidationError::FileTooLarge(max),
    })
}

pub fn is_email(s: &str) -> bool {
    EMAIL_RE.as_ref().is_some_and(|re| re.is_match(s))
}

/// `http(s)://host.tld`, `http(s)://www.host.tld` or `www.host.tld`.
pub fn is_web_url(s: &str) -> bool {
    let Some(domain_re) = DOMAIN_RE.as_ref() else {
        return false;
    };
    let rest = s
        .strip_prefix("https://")
        .or_else(|| s.strip_prefix("http://"));
    match rest {
        Some(rest) => match rest.strip_prefix("www.") {
            Some(domain) => domain_re.is_match(domain),
            None => !rest.starts_with("www") && domain_re.is_match(rest),
        },
        None => s
            .strip_prefix("www.")
            .is_some_and(|domain| domain_re.is_match(domain)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOGIN: &[FieldRules] = &[
        FieldRules {
            field: "email",
            rules: &[Rule::Required, Rule::Email],
        },
        FieldRules {
            field: "password",
            rules: &[Rule::MinLength(8)],
        },
        FieldRules {
            field: "confirmPassword",
            rules: &[Rule::Required, Rule::Matches("password")],
        },
    ];

    #[test]
    fn first_failing_rule_wins() {
        let draft = FormDraft::new().with("email", "   ");
        let errors = validate(LOGIN, &draft);
        assert_eq!(errors.get("email"), Some(&ValidationError::Required));
        assert_eq!(errors.get("password"), Some(&ValidationError::TooShort(8)));
        assert_eq!(errors.get("confirmPassword"), Some(&ValidationError::Required));
    }

    #[test]
    fn mismatch_is_reported_whatever_the_length() {
        let draft = FormDraft::new()
            .with("email", "a@b.co")
            .with("password", "longenough")
            .with("confirmPassword", "different!");
        let errors = validate(LOGIN, &draft);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors["confirmPassword"], ValidationError::Mismatch);
    }

    #[test]
    fn emails() {
        assert!(is_email("student@uni.edu.eg"));
        assert!(!is_email("not-an-email"));
        assert!(!is_email("a@b"));
        assert!(!is_email("a b@c.de"));
    }

    #[test]
    fn web_urls() {
        for ok in [
            "https://acme.io",
            "http://www.acme.com",
            "www.acme.com",
            "https://my-company.org/careers",
        ] {
            assert!(is_web_url(ok), "{ok}");
        }
        for bad in ["acme", "acme.com", "https://wwwacme.com", "ftp://acme.com", "www.x"] {
            assert!(!is_web_url(bad), "{bad}");
        }
    }

    #[test]
    fn optional_rules_pass_when_empty() {
        const RULES: &[FieldRules] = &[
            FieldRules {
                field: "webSite",
                rules: &[Rule::WebUrl],
            },
            FieldRules {
                field: "linkedin",
                rules: &[Rule::StartsWith("http")],
            },
        ];
        assert!(is_valid(RULES, &FormDraft::new()));
        let draft = FormDraft::new().with("linkedin", "linkedin.com/in/x");
        assert_eq!(
            validate(RULES, &draft)["linkedin"],
            ValidationError::MustStartWith("http")
        );
    }

    #[test]
    fn years_must_be_a_non_negative_integer() {
        const RULES: &[FieldRules] = &[FieldRules {
            field: "years",
            rules: &[Rule::Required, Rule::NonNegativeInteger],
        }];
        assert!(is_valid(RULES, &FormDraft::new().with("years", "0")));
        assert!(is_valid(RULES, &FormDraft::new().with("years", " 12 ")));
        for bad in ["-1", "abc", "2.5"] {
            assert_eq!(
                validate(RULES, &FormDraft::new().with("years", bad))["years"],
                ValidationError::Invalid,
                "{bad}"
            );
        }
    }

    #[test]
    fn trimmed_length_ignores_padding() {
        const RULES: &[FieldRules] = &[FieldRules {
            field: "description",
            rules: &[Rule::MinTrimmedLength(20)],
        }];
        let padded = format!("   {}   ", "x".repeat(19));
        assert_eq!(
            validate(RULES, &FormDraft::new().with("description", padded))["description"],
            ValidationError::TooShort(20)
        );
    }

    #[test]
    fn file_rules() {
        const RULES: &[FieldRules] = &[FieldRules {
            field: "cvFile",
            rules: &[Rule::FileRequired, Rule::MaxFileSize(MAX_CV_BYTES)],
        }];
        let mut draft = FormDraft::new();
        assert_eq!(validate(RULES, &draft)["cvFile"], ValidationError::Required);

        let big = SelectedFile {
            name: "cv.pdf".into(),
            size: MAX_CV_BYTES + 1,
            content_type: "application/pdf".into(),
        };
        draft.set_file("cvFile", Some(big.clone()));
        assert_eq!(
            validate(RULES, &draft)["cvFile"],
            ValidationError::FileTooLarge(MAX_CV_BYTES)
        );
        assert_eq!(ValidationError::FileTooLarge(MAX_CV_BYTES).to_string(), "Max 5MB");

        draft.set_file(
            "cvFile",
            Some(SelectedFile {
                size: MAX_CV_BYTES,
                ..big
            }),
        );
        assert!(is_valid(RULES, &draft));
    }

    #[test]
    fn editing_a_field_clears_its_error_only() {
        let mut draft = FormDraft::new();
        draft.set_errors(validate(LOGIN, &draft));
        assert!(draft.error("email").is_some());
        draft.set("email", "x");
        assert_eq!(draft.error("email"), None);
        assert_eq!(draft.error("password"), Some(ValidationError::TooShort(8)));
    }

    #[test]
    fn messages() {
        assert_eq!(ValidationError::TooShort(8).to_string(), "Min 8 chars");
        assert_eq!(ValidationError::MustStartWith("http").to_string(), "Start with http");
        assert_eq!(ValidationError::Mismatch.localized(Lang::En), "Mismatch");
        assert_eq!(ValidationError::Required.localized(Lang::Ar), "مطلوب");
    }

    #[test]
    fn cv_types() {
        let mut f = SelectedFile {
            name: "cv.docx".into(),
            size: 10,
            content_type: ACCEPTED_CV_TYPES[2].into(),
        };
        assert!(f.is_accepted_cv());
        f.content_type = "image/png".into();
        assert!(!f.is_accepted_cv());
    }
}
