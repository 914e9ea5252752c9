use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub addr: String,
    pub database_path: String,
    pub max_workers: usize,
    pub admin_username: String,
    pub admin_email: String,
    pub admin_password: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1:3000".to_string(),
            database_path: "rentals.sqlite3".to_string(),
            max_workers: 8,
            admin_username: "admin".to_string(),
            admin_email: "admin@bulosan.local".to_string(),
            admin_password: "admin123".to_string(),
        }
    }
}

impl AppConfig {
    /// Defaults, then `Rentals.toml`, then `RENTALS_*` environment variables.
    pub fn load() -> Result<Self, figment::Error> {
        dotenvy::dotenv().ok();
        Self::figment().extract()
    }

    fn figment() -> Figment {
        Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file("Rentals.toml"))
            .merge(Env::prefixed("RENTALS_"))
    }

    /// The seeded admin account, as passed to `init_db`.
    pub fn admin_seed(&self) -> crate::db::connection::AdminSeed<'_> {
        crate::db::connection::AdminSeed {
            username: &self.admin_username,
            email: &self.admin_email,
            password: &self.admin_password,
        }
    }
}
