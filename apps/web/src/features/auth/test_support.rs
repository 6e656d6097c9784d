//! In-memory doubles for the auth flows: a scripted `AuthApi` and a
//! `RefCell`-backed session store.

use crate::{
    app_lib::AppError,
    features::auth::{
        flows::{ApiFuture, AuthApi},
        state::SessionStore,
        types::{
            ApiMessage, LoginRequest, LoginResponse, Profile, ProfileImage, RegisterRequest,
            Role, SessionUser,
        },
    },
};
use std::cell::{Cell, RefCell};

pub(crate) fn student() -> SessionUser {
    SessionUser {
        id: "65f1c0ffee".to_string(),
        fullname: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        phone_number: Some("9876543210".to_string()),
        role: Role::Student,
        profile: Some(Profile {
            bio: Some("Analytical engines".to_string()),
            skills: vec!["rust".to_string()],
            profile_photo: None,
        }),
    }
}

pub(crate) fn recruiter() -> SessionUser {
    SessionUser {
        id: "65f1c0ffef".to_string(),
        fullname: "Grace Hopper".to_string(),
        email: "grace@corp.io".to_string(),
        phone_number: None,
        role: Role::Recruiter,
        profile: Some(Profile {
            bio: None,
            skills: Vec::new(),
            profile_photo: Some("https://cdn.example.com/grace.png".to_string()),
        }),
    }
}

#[derive(Default)]
pub(crate) struct MemorySession(RefCell<Option<SessionUser>>);

impl MemorySession {
    pub(crate) fn with_user(user: SessionUser) -> Self {
        Self(RefCell::new(Some(user)))
    }
}

impl SessionStore for MemorySession {
    fn current(&self) -> Option<SessionUser> {
        self.0.borrow().clone()
    }

    fn set(&self, user: Option<SessionUser>) {
        *self.0.borrow_mut() = user;
    }
}

type Scripted<T> = RefCell<Option<Result<T, AppError>>>;

/// Answers each endpoint with a scripted result; unscripted calls fail as if
/// the network were down.
#[derive(Default)]
pub(crate) struct FakeApi {
    login: Scripted<LoginResponse>,
    register: Scripted<ApiMessage>,
    logout: Scripted<ApiMessage>,
    calls: Cell<usize>,
    last_login: RefCell<Option<serde_json::Value>>,
    last_register: RefCell<Option<String>>,
}

impl FakeApi {
    pub(crate) fn with_login(self, result: Result<LoginResponse, AppError>) -> Self {
        self.login.replace(Some(result));
        self
    }

    pub(crate) fn with_register(self, result: Result<ApiMessage, AppError>) -> Self {
        self.register.replace(Some(result));
        self
    }

    pub(crate) fn with_logout(self, result: Result<ApiMessage, AppError>) -> Self {
        self.logout.replace(Some(result));
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.get()
    }

    /// JSON body of the last login request.
    pub(crate) fn last_login(&self) -> Option<serde_json::Value> {
        self.last_login.borrow().clone()
    }

    /// Email of the last registration.
    pub(crate) fn last_register(&self) -> Option<String> {
        self.last_register.borrow().clone()
    }

    fn answer<T: 'static>(&self, scripted: &Scripted<T>) -> ApiFuture<'static, T> {
        self.calls.set(self.calls.get() + 1);
        let result = scripted
            .borrow_mut()
            .take()
            .unwrap_or_else(|| Err(AppError::Network("no scripted response".to_string())));
        Box::pin(async move { result })
    }
}

impl AuthApi for FakeApi {
    type Attachment = ProfileImage;

    fn login<'a>(&'a self, request: &'a LoginRequest) -> ApiFuture<'a, LoginResponse> {
        self.last_login.replace(serde_json::to_value(request).ok());
        self.answer(&self.login)
    }

    fn register<'a>(
        &'a self,
        request: &'a RegisterRequest,
        _attachment: Option<&'a Self::Attachment>,
    ) -> ApiFuture<'a, ApiMessage> {
        self.last_register.replace(Some(request.email.clone()));
        self.answer(&self.register)
    }

    fn logout(&self) -> ApiFuture<'_, ApiMessage> {
        self.answer(&self.logout)
    }
}
