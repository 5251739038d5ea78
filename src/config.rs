use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Fallback signing secret for local development only.
///
/// `from_env` refuses to fall back to this value when APP_ENV=production.
const DEV_JWT_SECRET: &str = "apis-dev-secret-do-not-deploy";

#[derive(Clone)]
pub struct Config {
    // Deployment environment ("development" or "production")
    pub environment: String,

    // Session token signing secret
    pub jwt_secret: String,

    // Admin bootstrap identity (used only to seed an empty users document)
    pub admin_email: Option<String>,
    pub admin_password: Option<String>,
    pub admin_name: String,

    // Paths
    pub data_dir: PathBuf,
    pub static_dir: PathBuf,

    // Server
    pub bind_addr: SocketAddr,

    // Session lifetime in days
    pub session_ttl_days: i64,
}

impl Config {
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("environment", &self.environment)
            .field("jwt_secret", &"[REDACTED]")
            .field("admin_email", &self.admin_email)
            .field("admin_password", &"[REDACTED]")
            .field("admin_name", &self.admin_name)
            .field("data_dir", &self.data_dir)
            .field("static_dir", &self.static_dir)
            .field("bind_addr", &self.bind_addr)
            .field("session_ttl_days", &self.session_ttl_days)
            .finish()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),

    #[error("Failed to parse {0}: {1}")]
    ParseError(String, String),
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        // Attempt to load .env file, but don't fail if it doesn't exist
        // (env vars may be set directly in production)
        let _ = dotenvy::dotenv();

        let environment = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());
        if environment != "development" && environment != "production" {
            return Err(ConfigError::InvalidValue(
                "APP_ENV".to_string(),
                "must be 'development' or 'production'".to_string(),
            ));
        }

        // Signing secret. Required in production so a known default can never
        // reach a deployed instance; development falls back to a local-only value.
        let jwt_secret = match env::var("JWT_SECRET") {
            Ok(s) if !s.is_empty() => s,
            _ if environment == "production" => {
                return Err(ConfigError::MissingVar("JWT_SECRET".to_string()));
            }
            _ => {
                tracing::warn!(
                    "JWT_SECRET not set; using development default. Never deploy like this."
                );
                DEV_JWT_SECRET.to_string()
            }
        };

        // Admin bootstrap identity. Optional: only consulted when the users
        // document is missing at startup.
        let admin_email = env::var("ADMIN_EMAIL").ok().filter(|s| !s.is_empty());
        if let Some(email) = &admin_email {
            if !email.contains('@') {
                return Err(ConfigError::InvalidValue(
                    "ADMIN_EMAIL".to_string(),
                    "must be an email address".to_string(),
                ));
            }
        }
        let admin_password = env::var("ADMIN_PASSWORD").ok().filter(|s| !s.is_empty());
        let admin_name = env::var("ADMIN_NAME").unwrap_or_else(|_| "Admin".to_string());

        // Paths
        let data_dir = PathBuf::from(env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string()));
        let static_dir =
            PathBuf::from(env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string()));

        // Server
        let bind_addr_str = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let bind_addr = bind_addr_str
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::ParseError("BIND_ADDR".to_string(), e.to_string()))?;

        // Session lifetime
        let session_ttl_days = parse_env_or_default("SESSION_TTL_DAYS", 7)?;
        if session_ttl_days < 1 {
            return Err(ConfigError::InvalidValue(
                "SESSION_TTL_DAYS".to_string(),
                "must be at least 1".to_string(),
            ));
        }

        Ok(Config {
            environment,
            jwt_secret,
            admin_email,
            admin_password,
            admin_name,
            data_dir,
            static_dir,
            bind_addr,
            session_ttl_days,
        })
    }
}

/// Helper function to parse environment variable with a default value
fn parse_env_or_default<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(val) => val
            .parse::<T>()
            .map_err(|e| ConfigError::ParseError(key.to_string(), format!("{}: {}", e, val))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Use a mutex to ensure tests run serially since they modify global env vars.
    // unwrap_or_else handles poison from prior panics.
    static TEST_MUTEX: Mutex<()> = Mutex::new(());

    fn lock_test() -> std::sync::MutexGuard<'static, ()> {
        TEST_MUTEX.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn clear_test_env() {
        env::remove_var("APP_ENV");
        env::remove_var("JWT_SECRET");
        env::remove_var("ADMIN_EMAIL");
        env::remove_var("ADMIN_PASSWORD");
        env::remove_var("ADMIN_NAME");
        env::remove_var("DATA_DIR");
        env::remove_var("STATIC_DIR");
        env::remove_var("BIND_ADDR");
        env::remove_var("SESSION_TTL_DAYS");
    }

    #[test]
    fn test_parse_env_or_default() {
        let _guard = lock_test();

        env::set_var("TEST_I64", "12345");
        let result: Result<i64, ConfigError> = parse_env_or_default("TEST_I64", 100);
        assert_eq!(result.unwrap(), 12345);

        env::remove_var("TEST_I64");
        let result: Result<i64, ConfigError> = parse_env_or_default("TEST_I64", 100);
        assert_eq!(result.unwrap(), 100);
    }

    #[test]
    fn test_production_requires_jwt_secret() {
        let _guard = lock_test();
        clear_test_env();

        env::set_var("APP_ENV", "production");

        let result = Config::from_env();
        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::MissingVar(ref s) if s == "JWT_SECRET"
        ));

        clear_test_env();
    }

    #[test]
    fn test_production_rejects_empty_jwt_secret() {
        let _guard = lock_test();
        clear_test_env();

        env::set_var("APP_ENV", "production");
        env::set_var("JWT_SECRET", "");

        let result = Config::from_env();
        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::MissingVar(ref s) if s == "JWT_SECRET"
        ));

        clear_test_env();
    }

    #[test]
    fn test_development_falls_back_to_dev_secret() {
        let _guard = lock_test();
        clear_test_env();

        let config = Config::from_env().unwrap();
        assert_eq!(config.environment, "development");
        assert!(!config.is_production());
        assert_eq!(config.jwt_secret, DEV_JWT_SECRET);

        clear_test_env();
    }

    #[test]
    fn test_invalid_environment() {
        let _guard = lock_test();
        clear_test_env();

        env::set_var("APP_ENV", "staging");

        let result = Config::from_env();
        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::InvalidValue(ref s, _) if s == "APP_ENV"
        ));

        clear_test_env();
    }

    #[test]
    fn test_invalid_socket_addr() {
        let _guard = lock_test();
        clear_test_env();

        env::set_var("BIND_ADDR", "invalid_address");

        let result = Config::from_env();
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ConfigError::ParseError(_, _)));

        clear_test_env();
    }

    #[test]
    fn test_invalid_admin_email() {
        let _guard = lock_test();
        clear_test_env();

        env::set_var("ADMIN_EMAIL", "not-an-email");

        let result = Config::from_env();
        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::InvalidValue(ref s, _) if s == "ADMIN_EMAIL"
        ));

        clear_test_env();
    }

    #[test]
    fn test_invalid_session_ttl() {
        let _guard = lock_test();
        clear_test_env();

        env::set_var("SESSION_TTL_DAYS", "0");

        let result = Config::from_env();
        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::InvalidValue(ref s, _) if s == "SESSION_TTL_DAYS"
        ));

        clear_test_env();
    }

    #[test]
    fn test_config_defaults() {
        let _guard = lock_test();
        clear_test_env();

        env::set_var("JWT_SECRET", "test-secret");
        env::set_var("BIND_ADDR", "0.0.0.0:3000");

        let config = Config::from_env().unwrap();

        assert_eq!(config.environment, "development");
        assert_eq!(config.jwt_secret, "test-secret");
        assert_eq!(config.admin_email, None);
        assert_eq!(config.admin_password, None);
        assert_eq!(config.admin_name, "Admin");
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.static_dir, PathBuf::from("static"));
        assert_eq!(config.bind_addr.to_string(), "0.0.0.0:3000");
        assert_eq!(config.session_ttl_days, 7);

        clear_test_env();
    }
}
