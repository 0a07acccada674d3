use crate::api::User;
use serde::{Deserialize, Serialize};

#[cfg(target_arch = "wasm32")]
use gloo_storage::{errors::StorageError, LocalStorage, Storage};

/// Error type for database operations on native platforms
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug)]
pub struct DbError(String);

#[cfg(not(target_arch = "wasm32"))]
impl DbError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl std::fmt::Display for DbError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl std::error::Error for DbError {}

const SETTINGS_KEY: &str = "coursefront.app_settings";
const SESSION_KEY: &str = "coursefront.session";

/// Signed-in user and bearer token, shared with every page through context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<User>,
    /// Set while the stored session or profile is being restored.
    #[serde(skip)]
    pub loading: bool,
}

impl Session {
    pub fn signed_in(token: String, user: User) -> Self {
        Self {
            token: Some(token),
            user: Some(user),
            loading: false,
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }
}

/// App settings stored in the database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppSettings {
    /// Overrides the build-time backend URL when set.
    #[serde(default)]
    pub api_base_url: Option<String>,
}

#[cfg(not(target_arch = "wasm32"))]
fn save_value(conn: &rusqlite::Connection, key: &str, json: &str) -> Result<(), DbError> {
    conn.execute(
        "INSERT OR REPLACE INTO settings (key, value) VALUES (?1, ?2)",
        [key, json],
    )
    .map_err(|e| DbError::new(e.to_string()))?;
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn load_value<T: serde::de::DeserializeOwned + Default>(
    conn: &rusqlite::Connection,
    key: &str,
) -> Result<T, DbError> {
    let result: Result<String, rusqlite::Error> = conn.query_row(
        "SELECT value FROM settings WHERE key = ?1",
        [key],
        |row: &rusqlite::Row| row.get(0),
    );

    match result {
        Ok(json) => serde_json::from_str(&json).map_err(|e| DbError::new(e.to_string())),
        Err(_) => Ok(T::default()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn create_tables(conn: &rusqlite::Connection) -> Result<(), DbError> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS settings (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        )",
        [],
    )
    .map_err(|e| DbError::new(e.to_string()))?;
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn save_session(session: Session) -> Result<(), DbError> {
    let conn = get_db_connection()?;
    let json = serde_json::to_string(&session).map_err(|e| DbError::new(e.to_string()))?;
    save_value(&conn, SESSION_KEY, &json)
}

#[cfg(target_arch = "wasm32")]
pub async fn save_session(session: Session) -> Result<(), StorageError> {
    LocalStorage::set(SESSION_KEY, session)
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn load_session() -> Result<Session, DbError> {
    let conn = get_db_connection()?;
    load_value(&conn, SESSION_KEY)
}

#[cfg(target_arch = "wasm32")]
pub async fn load_session() -> Result<Session, StorageError> {
    match LocalStorage::get(SESSION_KEY) {
        Ok(session) => Ok(session),
        Err(_) => Ok(Session::default()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn clear_session() -> Result<(), DbError> {
    let conn = get_db_connection()?;
    conn.execute("DELETE FROM settings WHERE key = ?1", [SESSION_KEY])
        .map_err(|e| DbError::new(e.to_string()))?;
    Ok(())
}

#[cfg(target_arch = "wasm32")]
pub async fn clear_session() -> Result<(), StorageError> {
    LocalStorage::delete(SESSION_KEY);
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn save_settings(settings: AppSettings) -> Result<(), DbError> {
    let conn = get_db_connection()?;
    let json = serde_json::to_string(&settings).map_err(|e| DbError::new(e.to_string()))?;
    save_value(&conn, SETTINGS_KEY, &json)
}

#[cfg(target_arch = "wasm32")]
pub async fn save_settings(settings: AppSettings) -> Result<(), StorageError> {
    LocalStorage::set(SETTINGS_KEY, settings)
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn load_settings() -> Result<AppSettings, DbError> {
    let conn = get_db_connection()?;
    load_value(&conn, SETTINGS_KEY)
}

#[cfg(target_arch = "wasm32")]
pub async fn load_settings() -> Result<AppSettings, StorageError> {
    match LocalStorage::get(SETTINGS_KEY) {
        Ok(settings) => Ok(settings),
        Err(_) => Ok(AppSettings::default()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn initialize_database() -> Result<(), DbError> {
    let conn = get_db_connection()?;
    create_tables(&conn)
}

#[cfg(target_arch = "wasm32")]
pub async fn initialize_database() -> Result<(), StorageError> {
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn get_db_connection() -> Result<rusqlite::Connection, DbError> {
    use std::path::PathBuf;

    let data_dir = dirs::data_dir()
        .map(|dir| dir.join("coursefront"))
        .unwrap_or_else(|| PathBuf::from(".coursefront"));
    std::fs::create_dir_all(&data_dir)
        .map_err(|e| DbError::new(format!("Failed to create data directory: {}", e)))?;
    let db_path = data_dir.join("coursefront.db");

    rusqlite::Connection::open(&db_path)
        .map_err(|e| DbError::new(format!("Failed to open database: {}", e)))
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    fn memory_db() -> rusqlite::Connection {
        let conn = rusqlite::Connection::open_in_memory().expect("open in-memory db");
        create_tables(&conn).expect("create tables");
        conn
    }

    #[test]
    fn session_round_trips_without_loading_flag() {
        let conn = memory_db();
        let mut session = Session::signed_in(
            "tok-123".to_string(),
            User {
                id: "u1".to_string(),
                first_name: "Ada".to_string(),
                ..User::default()
            },
        );
        session.loading = true;

        let json = serde_json::to_string(&session).expect("serialize");
        save_value(&conn, SESSION_KEY, &json).expect("save");
        let restored: Session = load_value(&conn, SESSION_KEY).expect("load");

        assert_eq!(restored.token(), Some("tok-123"));
        assert_eq!(restored.user.map(|u| u.first_name), Some("Ada".to_string()));
        assert!(!restored.loading);
    }

    #[test]
    fn missing_keys_load_defaults() {
        let conn = memory_db();
        let settings: AppSettings = load_value(&conn, SETTINGS_KEY).expect("load");
        assert_eq!(settings, AppSettings::default());
        let session: Session = load_value(&conn, SESSION_KEY).expect("load");
        assert_eq!(session.token(), None);
    }

    #[test]
    fn blank_token_counts_as_signed_out() {
        let session = Session {
            token: Some("   ".to_string()),
            ..Session::default()
        };
        assert_eq!(session.token(), None);
    }
}
