//! Test users, per-environment passwords and URLs.
//!
//! Runtime overrides are parsed once into `RuntimeCredentials` and passed to
//! whatever builds users; nothing here is process-global.
use anyhow::{anyhow, Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Deployment environment a password or URL applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Env {
    Lcl,
    Dev,
    Test,
    Prod,
}

impl Env {
    pub const ALL: [Env; 4] = [Env::Lcl, Env::Dev, Env::Test, Env::Prod];

    pub fn as_str(self) -> &'static str {
        match self {
            Env::Lcl => "lcl",
            Env::Dev => "dev",
            Env::Test => "test",
            Env::Prod => "prod",
        }
    }
}

impl fmt::Display for Env {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Env {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self> {
        let lowered = value.trim().to_ascii_lowercase();
        Env::ALL
            .into_iter()
            .find(|env| env.as_str() == lowered)
            .ok_or_else(|| anyhow!("unknown env {value:?} (expected lcl, dev, test, or prod)"))
    }
}

/// Password overrides keyed by user name and optional environment.
#[derive(Debug, Clone, Default)]
pub struct RuntimeCredentials {
    passwords: BTreeMap<(String, Option<Env>), String>,
}

impl RuntimeCredentials {
    /// Parse `user<sep>password` or `user<sep>env<sep>password` entries.
    pub fn parse<I, S>(entries: I, separator: &str) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if separator.is_empty() {
            return Err(anyhow!("credential separator must be non-empty"));
        }
        let mut credentials = Self::default();
        for entry in entries {
            let entry = entry.as_ref();
            let parts: Vec<&str> = entry.split(separator).map(str::trim).collect();
            let (user, env, password) = match parts.as_slice() {
                [user, password] => (*user, None, *password),
                [user, env, password] => {
                    let env = env
                        .parse::<Env>()
                        .with_context(|| format!("credential entry {entry:?}"))?;
                    (*user, Some(env), *password)
                }
                _ => {
                    return Err(anyhow!(
                        "credential entry {entry:?} must be user{separator}password or user{separator}env{separator}password"
                    ))
                }
            };
            if user.is_empty() {
                return Err(anyhow!("credential entry {entry:?} has an empty user name"));
            }
            credentials.insert(user, env, password);
        }
        Ok(credentials)
    }

    pub fn insert(&mut self, user: &str, env: Option<Env>, password: &str) {
        self.passwords
            .insert((user.to_string(), env), password.to_string());
    }

    pub fn lookup(&self, user: &str, env: Option<Env>) -> Option<&str> {
        self.passwords
            .get(&(user.to_string(), env))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.passwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passwords.is_empty()
    }
}

/// A test account whose passwords may be overridden at run time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    name: String,
    password: Option<String>,
    passwords_by_env: BTreeMap<Env, String>,
}

impl User {
    /// Build a user, preferring a runtime override over the in-code password.
    pub fn new(name: &str, password: Option<&str>, runtime: &RuntimeCredentials) -> Self {
        let password = runtime
            .lookup(name, None)
            .or(password)
            .map(str::to_string);
        Self {
            name: name.to_string(),
            password,
            passwords_by_env: BTreeMap::new(),
        }
    }

    pub fn add_password(mut self, env: Env, password: &str, runtime: &RuntimeCredentials) -> Self {
        let password = runtime.lookup(&self.name, Some(env)).unwrap_or(password);
        self.passwords_by_env.insert(env, password.to_string());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    /// Environment password, falling back to the default one.
    pub fn password_for(&self, env: Env) -> Option<&str> {
        self.passwords_by_env
            .get(&env)
            .map(String::as_str)
            .or(self.password())
    }
}

/// Application URLs keyed by environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestUrl {
    urls: BTreeMap<Env, String>,
}

impl TestUrl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_url(mut self, env: Env, url: &str) -> Self {
        self.urls.insert(env, url.to_string());
        self
    }

    pub fn url(&self, env: Env) -> Option<&str> {
        self.urls.get(&env).map(String::as_str)
    }
}
