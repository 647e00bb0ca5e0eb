use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use shared_types::{AppError, Role};

/// A seeded demo login. Only the argon2 hash of the password is kept.
#[derive(Debug, Clone)]
pub struct Account {
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub role: Role,
    password_hash: String,
}

/// The fixed set of accounts the demo backend accepts.
#[derive(Debug, Clone)]
pub struct AccountStore {
    accounts: Vec<Account>,
}

/// `(username, email, full name, password, role)` for every seeded login.
const SEED: &[(&str, &str, &str, &str, Role)] = &[
    ("admin", "admin@venturemond.com", "Admin User", "admin123", Role::Admin),
    ("client", "client@venturemond.com", "Client User", "client123", Role::Client),
];

fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

fn verify_password(password: &str, hash: &str) -> bool {
    PasswordHash::new(hash)
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}

impl AccountStore {
    /// Hash and store the demo accounts.
    pub fn seeded() -> Result<Self, AppError> {
        let accounts = SEED
            .iter()
            .map(|(username, email, full_name, password, role)| {
                let password_hash = hash_password(password)
                    .map_err(|e| AppError::internal(format!("failed to hash seed password: {e}")))?;
                Ok(Account {
                    username: username.to_string(),
                    email: email.to_string(),
                    full_name: full_name.to_string(),
                    role: *role,
                    password_hash,
                })
            })
            .collect::<Result<Vec<_>, AppError>>()?;

        tracing::info!(count = accounts.len(), "seeded demo accounts");
        Ok(Self { accounts })
    }

    /// Find an account by username or e-mail alias.
    pub fn find(&self, login: &str) -> Option<&Account> {
        let login = login.trim();
        self.accounts
            .iter()
            .find(|a| a.username == login || a.email.eq_ignore_ascii_case(login))
    }

    /// Check a credential pair and return the account it unlocks.
    pub fn authenticate(&self, login: &str, password: &str) -> Option<&Account> {
        self.find(login)
            .filter(|account| verify_password(password, &account.password_hash))
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
