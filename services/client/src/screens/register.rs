//! services/client/src/screens/register.rs
//!
//! The sign-up form.

use crate::error::ClientResult;
use crate::screens::state::AppContext;
use project_manager_core::domain::{Notification, Route, User};
use project_manager_core::validation::{ValidationError, ValidationResult};
use regex::Regex;
use std::sync::{Arc, OnceLock};
use tracing::{error, info};

#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
    })
}

impl RegistrationForm {
    pub fn validate(&self) -> ValidationResult<()> {
        let required = [
            ("name", &self.name),
            ("email", &self.email),
            ("password", &self.password),
            ("confirm_password", &self.confirm_password),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ValidationError::MissingField(field));
            }
        }
        if !email_pattern().is_match(self.email.trim()) {
            return Err(ValidationError::InvalidEmail(self.email.clone()));
        }
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        Ok(())
    }
}

pub struct RegisterScreen {
    ctx: Arc<AppContext>,
}

impl RegisterScreen {
    /// Signed-in users are sent straight on to the chat.
    pub fn mount(ctx: Arc<AppContext>) -> Self {
        if ctx.auth.current_user().is_some() {
            ctx.navigator.navigate(Route::Chat);
        }
        Self { ctx }
    }

    pub fn is_loading(&self) -> bool {
        self.ctx.auth.is_loading()
    }

    pub async fn submit(&self, form: &RegistrationForm) -> ClientResult<User> {
        if let Err(e) = form.validate() {
            let description = match &e {
                ValidationError::PasswordMismatch => "Passwords do not match",
                ValidationError::InvalidEmail(_) => "Enter a valid email address",
                _ => "Fill in every field",
            };
            return Err(self.ctx.reject("Error", description, e));
        }

        match self
            .ctx
            .auth
            .register(&form.name, &form.email, &form.password)
            .await
        {
            Ok(user) => {
                info!("Account created for user {}", user.user_id);
                self.ctx.notify(Notification::info(
                    "Account created!",
                    "Welcome to ProjectManager",
                ));
                self.ctx.navigator.navigate(Route::Chat);
                Ok(user)
            }
            Err(e) => {
                error!("Registration failed: {}", e);
                self.ctx.notify(Notification::error(
                    "Registration error",
                    "Please try again later",
                ));
                Err(e.into())
            }
        }
    }
}
