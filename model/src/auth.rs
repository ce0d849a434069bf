//! Sign-in stub. Credentials are validated for shape only; any well-formed
//! email and password is accepted.

use dioxus_logger::tracing::info;

use crate::forms;
use crate::forms::FormErrors;
use crate::forms::FormValues;

/// The signed-in user for this browser session.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Session {
    pub email: String,
    pub remember_me: bool,
}

impl Session {
    /// The part of the email before `@`, used as a greeting.
    pub fn display_name(&self) -> &str {
        self.email.split('@').next().unwrap_or(&self.email)
    }
}

pub fn login(values: &FormValues) -> Result<Session, FormErrors> {
    forms::login().validate(values)?;
    let session = Session {
        email: values.text("email").trim().to_string(),
        remember_me: values.flag("remember_me"),
    };
    info!("signed in as {}", session.email);
    Ok(session)
}

/// Validates the address and returns the confirmation shown to the user.
pub fn request_password_reset(values: &FormValues) -> Result<String, FormErrors> {
    forms::forgot_password().validate(values)?;
    let email = values.text("email").trim();
    info!("password reset requested for {}", email);
    Ok(format!(
        "Password reset instructions sent to {email}. Please check your inbox."
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_well_formed_login_succeeds() {
        let values = FormValues::default()
            .with("email", "john@poultryfarm.com")
            .with("password", "whatever")
            .with("remember_me", "true");
        let session = login(&values).unwrap();
        assert_eq!(session.email, "john@poultryfarm.com");
        assert_eq!(session.display_name(), "john");
        assert!(session.remember_me);
    }

    #[test]
    fn short_password_is_rejected() {
        let values = FormValues::default()
            .with("email", "john@poultryfarm.com")
            .with("password", "123");
        let errors = login(&values).unwrap_err();
        assert_eq!(errors.get("password"), Some("Password must be at least 6 characters"));
    }

    #[test]
    fn password_reset_confirmation() {
        let values = FormValues::default().with("email", "sarah@poultryfarm.com");
        assert_eq!(
            request_password_reset(&values).unwrap(),
            "Password reset instructions sent to sarah@poultryfarm.com. Please check your inbox."
        );
        assert!(request_password_reset(&FormValues::default()).is_err());
    }
}
