use crate::errors::SignupError;
use crate::forms::FormData;

#[derive(Debug, Clone)]
pub struct Signup {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl Signup {
    pub fn from_form(form: &FormData) -> Result<Self, SignupError> {
        let (Some(username), Some(email), Some(password)) = (
            form.get("username"),
            form.get("email"),
            form.get_raw("password"),
        ) else {
            return Err(SignupError::MissingFields);
        };

        Ok(Self {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        })
    }
}
