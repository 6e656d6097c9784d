//! Request and response types for the user API. Request types hold passwords
//! in `SecretString`, so deriving `Debug` never prints them.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};

/// Account type; gates which navigation branches render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Recruiter,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Student, Role::Recruiter];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Recruiter => "recruiter",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Recruiter => "Recruiter",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "student" => Ok(Role::Student),
            "recruiter" => Ok(Role::Recruiter),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skills: Vec<String>,
    #[serde(
        rename = "profilePhoto",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub profile_photo: Option<String>,
}

/// Authenticated identity held for the current tab. Mirrors the user document
/// returned by `/login`; unknown fields are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(rename = "_id")]
    pub id: String,
    pub fullname: String,
    pub email: String,
    #[serde(
        rename = "phoneNumber",
        default,
        deserialize_with = "string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub phone_number: Option<String>,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
}

impl SessionUser {
    pub fn is_recruiter(&self) -> bool {
        self.role == Role::Recruiter
    }

    /// Avatar fallback: first letter of the full name, or "U".
    pub fn initial(&self) -> String {
        self.fullname
            .trim()
            .chars()
            .next()
            .map_or_else(|| "U".to_string(), |letter| letter.to_uppercase().collect())
    }

    pub fn photo_url(&self) -> Option<&str> {
        self.profile
            .as_ref()
            .and_then(|profile| profile.profile_photo.as_deref())
            .filter(|url| !url.trim().is_empty())
    }

    pub fn bio(&self) -> Option<&str> {
        self.profile
            .as_ref()
            .and_then(|profile| profile.bio.as_deref())
            .filter(|bio| !bio.trim().is_empty())
    }
}

/// The backend stores phone numbers as numbers; accept either shape.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Phone {
        Text(String),
        Number(u64),
    }

    Ok(Option::<Phone>::deserialize(deserializer)?.map(|phone| match phone {
        Phone::Text(text) => text,
        Phone::Number(number) => number.to_string(),
    }))
}

fn expose<S: Serializer>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(secret.expose_secret())
}

/// JSON body of `POST /login`.
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    #[serde(serialize_with = "expose")]
    pub password: SecretString,
    pub role: Role,
}

/// Metadata of the image attached to a signup. The browser `File` itself is
/// carried separately as the API's attachment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileImage {
    pub name: String,
    pub mime: String,
    pub size: u64,
}

/// Fields of the multipart `POST /register` body.
#[derive(Debug)]
pub struct RegisterRequest {
    pub fullname: String,
    pub email: String,
    pub phone_number: String,
    pub password: SecretString,
    pub role: Role,
    pub profile_image: Option<ProfileImage>,
}

impl RegisterRequest {
    /// Text parts of the multipart body, in wire order. The optional `file`
    /// part is appended by the HTTP client.
    pub fn text_fields(&self) -> [(&'static str, &str); 5] {
        [
            ("fullname", self.fullname.as_str()),
            ("email", self.email.as_str()),
            ("phoneNumber", self.phone_number.as_str()),
            ("password", self.password.expose_secret()),
            ("role", self.role.as_str()),
        ]
    }
}

/// Envelope of `POST /login`.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<SessionUser>,
}

/// Envelope of `POST /register` and `GET /logout`.
#[derive(Clone, Debug, Deserialize)]
pub struct ApiMessage {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student_json() -> &'static str {
        r#"{
            "_id": "65f1c0ffee",
            "fullname": "ada lovelace",
            "email": "ada@example.com",
            "phoneNumber": 9876543210,
            "role": "student",
            "profile": {
                "bio": "Analytical engines",
                "skills": ["rust", "math"],
                "resume": "https://cdn.example.com/ada.pdf",
                "profilePhoto": "https://cdn.example.com/ada.png"
            },
            "createdAt": "2024-03-13T10:00:00.000Z"
        }"#
    }

    #[test]
    fn session_user_parses_backend_document() {
        let user: SessionUser = serde_json::from_str(student_json()).expect("user");
        assert_eq!(user.id, "65f1c0ffee");
        assert_eq!(user.role, Role::Student);
        assert_eq!(user.phone_number.as_deref(), Some("9876543210"));
        assert_eq!(user.photo_url(), Some("https://cdn.example.com/ada.png"));
        assert_eq!(user.bio(), Some("Analytical engines"));
        assert_eq!(user.initial(), "A");
    }

    #[test]
    fn session_user_without_profile_falls_back() {
        let user: SessionUser = serde_json::from_str(
            r#"{"_id":"1","fullname":"  ","email":"r@corp.io","role":"recruiter"}"#,
        )
        .expect("user");
        assert!(user.is_recruiter());
        assert_eq!(user.phone_number, None);
        assert_eq!(user.photo_url(), None);
        assert_eq!(user.bio(), None);
        assert_eq!(user.initial(), "U");
    }

    #[test]
    fn login_request_serializes_password_but_debug_hides_it() {
        let request = LoginRequest {
            email: "ada@example.com".to_string(),
            password: SecretString::from("hunter22".to_string()),
            role: Role::Recruiter,
        };
        let json = serde_json::to_value(&request).expect("json");
        assert_eq!(
            json,
            serde_json::json!({
                "email": "ada@example.com",
                "password": "hunter22",
                "role": "recruiter"
            })
        );
        assert!(!format!("{request:?}").contains("hunter22"));
    }

    #[test]
    fn register_request_text_fields_use_wire_names() {
        let request = RegisterRequest {
            fullname: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone_number: "9876543210".to_string(),
            password: SecretString::from("secret1".to_string()),
            role: Role::Student,
            profile_image: None,
        };
        let names: Vec<&str> = request.text_fields().iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            ["fullname", "email", "phoneNumber", "password", "role"]
        );
        assert_eq!(request.text_fields()[3].1, "secret1");
    }

    #[test]
    fn role_parses_radio_values() {
        assert_eq!("student".parse::<Role>(), Ok(Role::Student));
        assert_eq!(" recruiter ".parse::<Role>(), Ok(Role::Recruiter));
        assert!("admin".parse::<Role>().is_err());
    }

    #[test]
    fn login_response_tolerates_missing_user() {
        let response: LoginResponse =
            serde_json::from_str(r#"{"success":false,"message":"Account doesn't exist with current role."}"#)
                .expect("response");
        assert!(!response.success);
        assert!(response.user.is_none());
    }
}
