use crate::errors::RentError;
use crate::forms::FormData;

/// Applicant fields from the rent form on a listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RentalApplication {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub movein: String,
    pub message: Option<String>,
}

impl RentalApplication {
    pub fn from_form(form: &FormData) -> Result<Self, RentError> {
        let (Some(name), Some(email), Some(phone), Some(movein)) = (
            form.get("name"),
            form.get("email"),
            form.get("phone"),
            form.get("movein"),
        ) else {
            return Err(RentError::MissingFields);
        };

        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            movein: movein.to_string(),
            message: form.get("message").map(str::to_string),
        })
    }
}
