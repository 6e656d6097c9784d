//! Local state of the login and signup forms. Both forms validate through the
//! shared schema and gate their single request with a submitting flag:
//! `begin_submit` hands out a request only when validation passes and nothing
//! is in flight, and `end_submit` must run once the request settles,
//! whatever the outcome.

use crate::features::auth::{
    types::{LoginRequest, ProfileImage, RegisterRequest, Role},
    validation::{
        Field, FieldValue, FormValues, ValidationErrors, login_schema, signup_schema,
    },
};
use secrecy::SecretString;
use std::collections::BTreeSet;

fn role_value(role: Option<Role>) -> &'static str {
    role.map_or("", Role::as_str)
}

/// Login form. Errors are computed on submit and cleared per field on edit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub role: Option<Role>,
    pub show_password: bool,
    errors: ValidationErrors,
    submitting: bool,
}

impl FormValues for LoginForm {
    fn field_value(&self, field: Field) -> FieldValue<'_> {
        match field {
            Field::Email => FieldValue::Text(&self.email),
            Field::Password => FieldValue::Text(&self.password),
            Field::Role => FieldValue::Text(role_value(self.role)),
            Field::ProfileImage => FieldValue::File(None),
            Field::FullName | Field::PhoneNumber => FieldValue::Text(""),
        }
    }
}

impl LoginForm {
    /// Applies an input event and clears that field's error.
    pub fn edit(&mut self, field: Field, value: &str) {
        match field {
            Field::Email => self.email = value.to_string(),
            Field::Password => self.password = value.to_string(),
            Field::Role => self.role = value.parse().ok(),
            Field::FullName | Field::PhoneNumber | Field::ProfileImage => return,
        }
        self.errors.clear(field);
    }

    pub fn toggle_password(&mut self) {
        self.show_password = !self.show_password;
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(field)
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Re-runs every rule and stores the result.
    pub fn validate(&mut self) -> bool {
        self.errors = login_schema().validate(self);
        self.errors.is_empty()
    }

    /// Validates and, when the form is clean and idle, raises the submitting
    /// flag and returns the request to send.
    pub fn begin_submit(&mut self) -> Option<LoginRequest> {
        if self.submitting || !self.validate() {
            return None;
        }
        let role = self.role?;
        self.submitting = true;
        Some(LoginRequest {
            email: self.email.trim().to_string(),
            password: SecretString::from(self.password.clone()),
            role,
        })
    }

    pub fn end_submit(&mut self) {
        self.submitting = false;
    }
}

/// Signup form. Validation is continuous: errors are recomputed from the
/// current values and shown for the fields the user has touched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignupForm {
    pub fullname: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
    pub role: Option<Role>,
    pub profile_image: Option<ProfileImage>,
    pub show_password: bool,
    touched: BTreeSet<Field>,
    submitting: bool,
}

impl FormValues for SignupForm {
    fn field_value(&self, field: Field) -> FieldValue<'_> {
        match field {
            Field::FullName => FieldValue::Text(&self.fullname),
            Field::Email => FieldValue::Text(&self.email),
            Field::PhoneNumber => FieldValue::Text(&self.phone_number),
            Field::Password => FieldValue::Text(&self.password),
            Field::Role => FieldValue::Text(role_value(self.role)),
            Field::ProfileImage => FieldValue::File(self.profile_image.as_ref()),
        }
    }
}

impl SignupForm {
    pub fn edit(&mut self, field: Field, value: &str) {
        match field {
            Field::FullName => self.fullname = value.to_string(),
            Field::Email => self.email = value.to_string(),
            Field::PhoneNumber => self.phone_number = value.to_string(),
            Field::Password => self.password = value.to_string(),
            Field::Role => self.role = value.parse().ok(),
            Field::ProfileImage => return,
        }
        self.touched.insert(field);
    }

    /// Replaces (or removes) the attached profile image.
    pub fn attach_image(&mut self, image: Option<ProfileImage>) {
        self.profile_image = image;
        self.touched.insert(Field::ProfileImage);
    }

    pub fn toggle_password(&mut self) {
        self.show_password = !self.show_password;
    }

    /// Errors of touched fields, recomputed from the current values.
    pub fn errors(&self) -> ValidationErrors {
        let mut errors = signup_schema().validate(self);
        errors.retain(|field| self.touched.contains(&field));
        errors
    }

    pub fn error(&self, field: Field) -> Option<&'static str> {
        if self.touched.contains(&field) {
            signup_schema().validate_field(self, field)
        } else {
            None
        }
    }

    pub fn is_valid(&self) -> bool {
        signup_schema().is_valid(self)
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// The submit control is enabled only when every rule passes.
    pub fn can_submit(&self) -> bool {
        !self.submitting && self.is_valid()
    }

    /// Marks every field touched so all errors show, then hands out the
    /// request when the form is valid and idle.
    pub fn begin_submit(&mut self) -> Option<RegisterRequest> {
        self.touched.extend([
            Field::FullName,
            Field::Email,
            Field::PhoneNumber,
            Field::Password,
            Field::Role,
        ]);
        if !self.can_submit() {
            return None;
        }
        let role = self.role?;
        self.submitting = true;
        Some(RegisterRequest {
            fullname: self.fullname.trim().to_string(),
            email: self.email.trim().to_string(),
            phone_number: self.phone_number.clone(),
            password: SecretString::from(self.password.clone()),
            role,
            profile_image: self.profile_image.clone(),
        })
    }

    pub fn end_submit(&mut self) {
        self.submitting = false;
    }
}
