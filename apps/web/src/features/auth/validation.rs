//! Declarative validation shared by the login and signup forms. A `Schema` is
//! an ordered list of rules per field; the first failing rule of a field wins.
//! Forms expose their values through `FormValues`, so the same schema code
//! validates either form.

use crate::features::auth::types::ProfileImage;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Loose `local@domain.tld` shape used by the login form.
pub const LOGIN_EMAIL_PATTERN: &str = r"^\S+@\S+\.\S+$";
/// RFC-shaped address (the WHATWG `input[type=email]` grammar).
pub const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$";
pub const PHONE_PATTERN: &str = r"^[0-9]{10}$";

static LOGIN_EMAIL: Pattern = Pattern::new(LOGIN_EMAIL_PATTERN);
static EMAIL: Pattern = Pattern::new(EMAIL_PATTERN);
static PHONE: Pattern = Pattern::new(PHONE_PATTERN);
pub const MIN_PASSWORD_CHARS: usize = 6;
pub const MAX_IMAGE_BYTES: u64 = 2 * 1024 * 1024;
pub const IMAGE_MIME_TYPES: &[&str] = &["image/jpeg", "image/png", "image/jpg"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FullName,
    Email,
    PhoneNumber,
    Password,
    Role,
    ProfileImage,
}

impl Field {
    /// Wire name of the field, also used as the input `name`.
    pub fn name(self) -> &'static str {
        match self {
            Field::FullName => "fullname",
            Field::Email => "email",
            Field::PhoneNumber => "phoneNumber",
            Field::Password => "password",
            Field::Role => "role",
            Field::ProfileImage => "file",
        }
    }
}

/// Current value of one form field as seen by the schema.
#[derive(Clone, Copy, Debug)]
pub enum FieldValue<'a> {
    Text(&'a str),
    File(Option<&'a ProfileImage>),
}

pub trait FormValues {
    fn field_value(&self, field: Field) -> FieldValue<'_>;
}

/// A regex compiled on first use and shared by every later check.
#[derive(Debug)]
pub struct Pattern {
    source: &'static str,
    compiled: OnceLock<Option<Regex>>,
}

impl Pattern {
    pub const fn new(source: &'static str) -> Self {
        Self {
            source,
            compiled: OnceLock::new(),
        }
    }

    /// An invalid pattern matches nothing.
    pub fn is_match(&self, text: &str) -> bool {
        self.compiled
            .get_or_init(|| Regex::new(self.source).ok())
            .as_ref()
            .is_some_and(|regex| regex.is_match(text))
    }
}

#[derive(Clone, Copy, Debug)]
pub enum Rule {
    /// Text must be non-blank after trimming.
    Required(&'static str),
    /// Non-empty text must match the pattern.
    Matches(&'static Pattern, &'static str),
    /// Text must have at least this many characters.
    MinChars(usize, &'static str),
    /// An attached file must have one of these MIME types.
    FileType(&'static [&'static str], &'static str),
    /// An attached file must not exceed this many bytes.
    MaxFileBytes(u64, &'static str),
}

impl Rule {
    fn check(&self, value: FieldValue<'_>) -> Result<(), &'static str> {
        let passed = match (*self, value) {
            (Rule::Required(_), FieldValue::Text(text)) => !text.trim().is_empty(),
            (Rule::Required(_), FieldValue::File(file)) => file.is_some(),
            (Rule::Matches(pattern, _), FieldValue::Text(text)) => {
                text.is_empty() || pattern.is_match(text)
            }
            (Rule::MinChars(min, _), FieldValue::Text(text)) => text.chars().count() >= min,
            (Rule::FileType(allowed, _), FieldValue::File(file)) => {
                file.map_or(true, |file| allowed.contains(&file.mime.as_str()))
            }
            (Rule::MaxFileBytes(max, _), FieldValue::File(file)) => {
                file.map_or(true, |file| file.size <= max)
            }
            // Text rules never apply to files and vice versa.
            _ => true,
        };

        if passed { Ok(()) } else { Err(self.message()) }
    }

    fn message(&self) -> &'static str {
        match *self {
            Rule::Required(message)
            | Rule::Matches(_, message)
            | Rule::MinChars(_, message)
            | Rule::FileType(_, message)
            | Rule::MaxFileBytes(_, message) => message,
        }
    }
}

/// Field-to-message map produced by a validation pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<Field, &'static str>,
}

impl ValidationErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.keys().copied()
    }

    pub fn clear(&mut self, field: Field) {
        self.errors.remove(&field);
    }

    /// Keeps only the errors of the given fields.
    pub fn retain(&mut self, mut keep: impl FnMut(Field) -> bool) {
        self.errors.retain(|field, _| keep(*field));
    }
}

#[derive(Clone, Debug)]
pub struct Schema {
    fields: Vec<(Field, Vec<Rule>)>,
}

impl Schema {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    #[must_use]
    pub fn field(mut self, field: Field, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.fields.push((field, rules.into_iter().collect()));
        self
    }

    /// Runs every rule and returns the first failure of each field.
    pub fn validate(&self, values: &impl FormValues) -> ValidationErrors {
        let mut errors = ValidationErrors::default();
        for (field, rules) in &self.fields {
            let value = values.field_value(*field);
            if let Some(message) = rules.iter().find_map(|rule| rule.check(value).err()) {
                errors.errors.insert(*field, message);
            }
        }
        errors
    }

    /// Validates a single field, used to refresh one input on edit.
    pub fn validate_field(&self, values: &impl FormValues, field: Field) -> Option<&'static str> {
        let value = values.field_value(field);
        self.fields
            .iter()
            .filter(|(candidate, _)| *candidate == field)
            .flat_map(|(_, rules)| rules)
            .find_map(|rule| rule.check(value).err())
    }

    pub fn is_valid(&self, values: &impl FormValues) -> bool {
        self.validate(values).is_empty()
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::new()
    }
}

pub fn login_schema() -> Schema {
    Schema::new()
        .field(
            Field::Email,
            [
                Rule::Required("Email is required"),
                Rule::Matches(&LOGIN_EMAIL, "Enter a valid email"),
            ],
        )
        .field(Field::Password, [Rule::Required("Password is required")])
        .field(Field::Role, [Rule::Required("Select your role")])
}

pub fn signup_schema() -> Schema {
    Schema::new()
        .field(Field::FullName, [Rule::Required("Full name is required")])
        .field(
            Field::Email,
            [
                Rule::Required("Email is required"),
                Rule::Matches(&EMAIL, "Enter a valid email address"),
            ],
        )
        .field(
            Field::PhoneNumber,
            [
                Rule::Required("Phone number is required"),
                Rule::Matches(&PHONE, "Phone number must be 10 digits"),
            ],
        )
        .field(
            Field::Password,
            [
                Rule::Required("Password is required"),
                Rule::MinChars(
                    MIN_PASSWORD_CHARS,
                    "Password must be at least 6 characters",
                ),
            ],
        )
        .field(Field::Role, [Rule::Required("Please select a role")])
        .field(
            Field::ProfileImage,
            [
                Rule::FileType(IMAGE_MIME_TYPES, "Only JPG or PNG allowed"),
                Rule::MaxFileBytes(MAX_IMAGE_BYTES, "Image must be less than 2MB"),
            ],
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct Values {
        text: HashMap<Field, &'static str>,
        file: Option<ProfileImage>,
    }

    impl FormValues for Values {
        fn field_value(&self, field: Field) -> FieldValue<'_> {
            match field {
                Field::ProfileImage => FieldValue::File(self.file.as_ref()),
                other => FieldValue::Text(self.text.get(&other).copied().unwrap_or("")),
            }
        }
    }

    fn values(pairs: &[(Field, &'static str)]) -> Values {
        Values {
            text: pairs.iter().copied().collect(),
            file: None,
        }
    }

    fn image(mime: &str, size: u64) -> ProfileImage {
        ProfileImage {
            name: "avatar".to_string(),
            mime: mime.to_string(),
            size,
        }
    }

    #[test]
    fn login_email_shape() {
        let schema = login_schema();
        for bad in ["ada", "ada@", "ada@example", "a da@example.com", "@x.y"] {
            let errors = schema.validate(&values(&[(Field::Email, bad)]));
            assert_eq!(errors.get(Field::Email), Some("Enter a valid email"), "{bad}");
        }
        for good in ["ada@example.com", "a@b.c", "first.last+tag@sub.domain.org"] {
            let errors = schema.validate(&values(&[(Field::Email, good)]));
            assert!(!errors.contains(Field::Email), "{good}");
        }
    }

    #[test]
    fn required_rule_wins_over_pattern() {
        let errors = login_schema().validate(&values(&[(Field::Email, "   ")]));
        assert_eq!(errors.get(Field::Email), Some("Email is required"));
    }

    #[test]
    fn signup_rules_report_first_failure_per_field() {
        let schema = signup_schema();
        let errors = schema.validate(&values(&[
            (Field::FullName, "  "),
            (Field::Email, "ada@"),
            (Field::PhoneNumber, "12345"),
            (Field::Password, "abc"),
        ]));
        assert_eq!(errors.get(Field::FullName), Some("Full name is required"));
        assert_eq!(errors.get(Field::Email), Some("Enter a valid email address"));
        assert_eq!(
            errors.get(Field::PhoneNumber),
            Some("Phone number must be 10 digits")
        );
        assert_eq!(
            errors.get(Field::Password),
            Some("Password must be at least 6 characters")
        );
        assert_eq!(errors.get(Field::Role), Some("Please select a role"));
        assert!(!errors.contains(Field::ProfileImage));
    }

    #[test]
    fn phone_must_be_exactly_ten_digits() {
        let schema = signup_schema();
        for bad in ["123456789", "12345678901", "12345abcde", "+123456789"] {
            assert_eq!(
                schema.validate_field(&values(&[(Field::PhoneNumber, bad)]), Field::PhoneNumber),
                Some("Phone number must be 10 digits"),
                "{bad}"
            );
        }
        assert_eq!(
            schema.validate_field(&values(&[(Field::PhoneNumber, "9876543210")]), Field::PhoneNumber),
            None
        );
    }

    #[test]
    fn image_rules_skip_when_absent() {
        let schema = signup_schema();
        let mut form = values(&[]);
        assert_eq!(schema.validate_field(&form, Field::ProfileImage), None);

        form.file = Some(image("image/gif", 10));
        assert_eq!(
            schema.validate_field(&form, Field::ProfileImage),
            Some("Only JPG or PNG allowed")
        );

        form.file = Some(image("image/png", MAX_IMAGE_BYTES + 1));
        assert_eq!(
            schema.validate_field(&form, Field::ProfileImage),
            Some("Image must be less than 2MB")
        );

        form.file = Some(image("image/jpeg", MAX_IMAGE_BYTES));
        assert_eq!(schema.validate_field(&form, Field::ProfileImage), None);
    }

    #[test]
    fn complete_signup_is_valid() {
        let form = values(&[
            (Field::FullName, "Ada Lovelace"),
            (Field::Email, "ada@example.com"),
            (Field::PhoneNumber, "9876543210"),
            (Field::Password, "secret1"),
            (Field::Role, "student"),
        ]);
        assert!(signup_schema().is_valid(&form));
    }

    #[test]
    fn errors_clear_and_retain() {
        let mut errors = login_schema().validate(&values(&[]));
        assert_eq!(errors.len(), 3);
        errors.clear(Field::Email);
        assert!(!errors.contains(Field::Email));
        errors.retain(|field| field == Field::Role);
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec![Field::Role]);
    }

    #[test]
    fn pattern_compiles_once_and_is_reused() {
        let pattern = Pattern::new(PHONE_PATTERN);
        assert!(pattern.compiled.get().is_none());

        assert!(pattern.is_match("9876543210"));
        let compiled = |pattern: &Pattern| {
            pattern
                .compiled
                .get()
                .and_then(Option::as_ref)
                .map(|regex| regex as *const Regex)
        };
        let first = compiled(&pattern);
        assert!(first.is_some());

        assert!(!pattern.is_match("98765"));
        assert_eq!(compiled(&pattern), first);
    }

    #[test]
    fn invalid_pattern_matches_nothing() {
        let pattern = Pattern::new("(");
        assert!(!pattern.is_match("("));
        assert!(!pattern.is_match(""));
    }
}
