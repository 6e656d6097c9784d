mod alert;
mod button;
mod field_error;
mod spinner;
mod toaster;

pub(crate) use alert::Alert;
pub(crate) use button::SubmitButton;
pub(crate) use field_error::FieldError;
pub(crate) use spinner::Spinner;
pub(crate) use toaster::{Toaster, use_notices};
