//! HTTP implementation of `AuthApi` against the user API. Every call sends
//! cookies so the backend can set and clear its session cookie.

use crate::{
    app_lib::{
        AppError,
        api::{get_json_with_credentials, post_form_with_credentials, post_json_with_credentials},
    },
    features::auth::{
        flows::{ApiFuture, AuthApi},
        types::{ApiMessage, LoginRequest, LoginResponse, RegisterRequest},
    },
};
use web_sys::{File, FormData};

#[derive(Clone, Copy, Debug, Default)]
pub struct HttpAuthApi;

/// Builds the multipart body of a signup; the file part is optional.
fn register_form(request: &RegisterRequest, file: Option<&File>) -> Result<FormData, AppError> {
    let form = FormData::new()
        .map_err(|_| AppError::Serialization("Failed to create form data.".to_string()))?;
    for (name, value) in request.text_fields() {
        form.append_with_str(name, value)
            .map_err(|_| AppError::Serialization(format!("Failed to add {name} to form.")))?;
    }
    if let Some(file) = file {
        form.append_with_blob_and_filename("file", file, &file.name())
            .map_err(|_| AppError::Serialization("Failed to attach profile image.".to_string()))?;
    }
    Ok(form)
}

impl AuthApi for HttpAuthApi {
    type Attachment = File;

    fn login<'a>(&'a self, request: &'a LoginRequest) -> ApiFuture<'a, LoginResponse> {
        Box::pin(post_json_with_credentials("/login", request))
    }

    fn register<'a>(
        &'a self,
        request: &'a RegisterRequest,
        attachment: Option<&'a File>,
    ) -> ApiFuture<'a, ApiMessage> {
        Box::pin(async move {
            let form = register_form(request, attachment)?;
            post_form_with_credentials("/register", form).await
        })
    }

    fn logout(&self) -> ApiFuture<'_, ApiMessage> {
        Box::pin(get_json_with_credentials("/logout"))
    }
}
