//! services/client/src/adapters/auth.rs
//!
//! An in-memory `AuthContext`. Accounts live only as long as the adapter;
//! passwords are still hashed so nothing readable is kept around.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};
use project_manager_core::domain::User;
use project_manager_core::ports::{AuthContext, PortError, PortResult};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tracing::{error, info};
use uuid::Uuid;

use crate::config::Config;

struct Account {
    user: User,
    password_hash: String,
}

pub struct SimulatedAuth {
    latency: Duration,
    accounts: Mutex<HashMap<String, Account>>,
    current: RwLock<Option<User>>,
    in_flight: AtomicUsize,
}

/// Keeps `is_loading` true for as long as it is alive.
struct LoadingGuard<'a>(&'a AtomicUsize);

impl<'a> LoadingGuard<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl SimulatedAuth {
    pub fn new(config: &Config) -> Self {
        Self {
            latency: config.simulated_latency,
            accounts: Mutex::new(HashMap::new()),
            current: RwLock::new(None),
            in_flight: AtomicUsize::new(0),
        }
    }

    /// An adapter that starts out signed in as `user`.
    pub fn signed_in(config: &Config, user: User) -> Self {
        let auth = Self::new(config);
        *auth.current.write() = Some(user);
        auth
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn hash_password(password: &str) -> PortResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| {
            error!("Failed to hash password: {:?}", e);
            PortError::Unexpected("Failed to hash password".to_string())
        })
}

fn verify_password(password: &str, password_hash: &str) -> PortResult<bool> {
    let parsed = PasswordHash::new(password_hash).map_err(|e| {
        error!("Failed to parse password hash: {:?}", e);
        PortError::Unexpected("Authentication error".to_string())
    })?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

#[async_trait]
impl AuthContext for SimulatedAuth {
    fn current_user(&self) -> Option<User> {
        self.current.read().clone()
    }

    fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    async fn register(&self, name: &str, email: &str, password: &str) -> PortResult<User> {
        let _loading = LoadingGuard::enter(&self.in_flight);
        tokio::time::sleep(self.latency).await;

        let email = normalize_email(email);
        let password_hash = hash_password(password)?;

        let user = {
            let mut accounts = self.accounts.lock();
            if accounts.contains_key(&email) {
                return Err(PortError::Conflict("Email already registered".to_string()));
            }
            let user = User {
                user_id: Uuid::new_v4(),
                name: name.trim().to_string(),
                email: email.clone(),
            };
            accounts.insert(
                email,
                Account {
                    user: user.clone(),
                    password_hash,
                },
            );
            user
        };

        *self.current.write() = Some(user.clone());
        info!("Registered user {}", user.user_id);
        Ok(user)
    }

    async fn login(&self, email: &str, password: &str) -> PortResult<User> {
        let _loading = LoadingGuard::enter(&self.in_flight);
        tokio::time::sleep(self.latency).await;

        let (user, password_hash) = {
            let accounts = self.accounts.lock();
            let account = accounts
                .get(&normalize_email(email))
                .ok_or(PortError::Unauthorized)?;
            (account.user.clone(), account.password_hash.clone())
        };

        if !verify_password(password, &password_hash)? {
            return Err(PortError::Unauthorized);
        }

        *self.current.write() = Some(user.clone());
        info!("User {} logged in", user.user_id);
        Ok(user)
    }

    async fn logout(&self) -> PortResult<()> {
        if let Some(user) = self.current.write().take() {
            info!("User {} logged out", user.user_id);
        }
        Ok(())
    }
}
