//! A toy, single-threaded database connection pool.
//!
//! No sockets are opened: a "connection" is a host/port pair with a connected
//! flag. The pool hands out new connections until it holds
//! [`PoolConfig::max_connections`], then keeps returning the first one.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

static HOST_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9.-]+$").expect("host regex"));

static CONNECTION_STRING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([^:]+):(\d+)/(.+)").expect("connection string regex"));

// ── Configuration ───────────────────────────────────────────────────────────

/// Pool limits and the target used by [`ConnectionPool::get_default_connection`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    pub max_connections: usize,
    pub default_host: String,
    pub default_port: u16,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: 5,
            default_host: "localhost".to_string(),
            default_port: 5432,
        }
    }
}

// ── DatabaseConnection ──────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatabaseConnection {
    host: String,
    port: u16,
    connected: bool,
}

impl DatabaseConnection {
    fn open(host: &str, port: u16) -> Self {
        Self {
            host: host.to_string(),
            port,
            connected: true,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }
}

impl fmt::Display for DatabaseConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.connected {
            "connected"
        } else {
            "disconnected"
        };
        write!(f, "DatabaseConnection({}:{}, {})", self.host, self.port, status)
    }
}

// ── ConnectionPool ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct ConnectionPool {
    config: PoolConfig,
    connections: Vec<DatabaseConnection>,
}

impl ConnectionPool {
    pub fn new(config: PoolConfig) -> Self {
        Self {
            config,
            connections: Vec::new(),
        }
    }

    pub fn config(&self) -> &PoolConfig {
        &self.config
    }

    pub fn connections(&self) -> &[DatabaseConnection] {
        &self.connections
    }

    /// Open a connection to `host:port`, or reuse the first pooled one once
    /// the pool is full. A full pool ignores `host` and `port`.
    ///
    /// Returns `None` only when `max_connections` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use business_records::connection_pool::{ConnectionPool, PoolConfig};
    ///
    /// let mut pool = ConnectionPool::new(PoolConfig { max_connections: 1, ..Default::default() });
    /// pool.get_connection("db.example.com", 5432).unwrap();
    /// let reused = pool.get_connection("other.example.com", 6543).unwrap();
    /// assert_eq!(reused.host(), "db.example.com");
    /// assert_eq!(pool.active_connections(), 1);
    /// ```
    pub fn get_connection(&mut self, host: &str, port: u16) -> Option<&DatabaseConnection> {
        if self.connections.len() < self.config.max_connections {
            self.connections.push(DatabaseConnection::open(host, port));
            debug!(
                host,
                port,
                pooled = self.connections.len(),
                "opened pooled connection"
            );
            return self.connections.last();
        }
        self.connections.first()
    }

    /// [`ConnectionPool::get_connection`] against the configured default target.
    pub fn get_default_connection(&mut self) -> Option<&DatabaseConnection> {
        let host = self.config.default_host.clone();
        let port = self.config.default_port;
        self.get_connection(&host, port)
    }

    /// Disconnect and drop every pooled connection, returning how many there were.
    pub fn close_all_connections(&mut self) -> usize {
        let closed = self.connections.len();
        self.connections.clear();
        info!(closed, "closed all database connections");
        closed
    }

    pub fn active_connections(&self) -> usize {
        self.connections.iter().filter(|c| c.connected).count()
    }
}

// ── Stateless helpers ───────────────────────────────────────────────────────

/// Hosts may contain only ASCII letters, digits, dots and hyphens.
pub fn validate_host(host: &str) -> bool {
    HOST_RE.is_match(host)
}

/// The parts of a `host:port/database` connection string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionString {
    pub host: String,
    pub port: u16,
    pub database: String,
}

/// Split a `host:port/database` string, or `None` if it does not have that shape.
///
/// # Examples
///
/// ```
/// use business_records::connection_pool::parse_connection_string;
///
/// let parsed = parse_connection_string("localhost:5432/mydb").unwrap();
/// assert_eq!((parsed.host.as_str(), parsed.port, parsed.database.as_str()), ("localhost", 5432, "mydb"));
/// assert!(parse_connection_string("localhost/mydb").is_none());
/// ```
pub fn parse_connection_string(conn_string: &str) -> Option<ConnectionString> {
    let caps = CONNECTION_STRING_RE.captures(conn_string)?;
    let port = caps[2].parse::<u16>().ok()?;
    Some(ConnectionString {
        host: caps[1].to_string(),
        port,
        database: caps[3].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── pool tests ──────────────────────────────────────────────────────

    #[test]
    fn test_new_connections_until_full() {
        let mut pool = ConnectionPool::default();
        for i in 0..5 {
            let conn = pool.get_connection(&format!("db{i}.example.com"), 5432).unwrap();
            assert_eq!(conn.host(), format!("db{i}.example.com"));
            assert!(conn.is_connected());
        }
        assert_eq!(pool.active_connections(), 5);
    }

    #[test]
    fn test_full_pool_returns_first_connection() {
        let mut pool = ConnectionPool::new(PoolConfig {
            max_connections: 2,
            ..Default::default()
        });
        pool.get_connection("first", 1).unwrap();
        pool.get_connection("second", 2).unwrap();
        let reused = pool.get_connection("third", 3).unwrap();
        assert_eq!(reused.host(), "first");
        assert_eq!(reused.port(), 1);
        assert_eq!(pool.connections().len(), 2);
    }

    #[test]
    fn test_zero_capacity_pool_yields_nothing() {
        let mut pool = ConnectionPool::new(PoolConfig {
            max_connections: 0,
            ..Default::default()
        });
        assert!(pool.get_connection("db", 5432).is_none());
    }

    #[test]
    fn test_default_connection_uses_config() {
        let mut pool = ConnectionPool::default();
        let conn = pool.get_default_connection().unwrap();
        assert_eq!(conn.to_string(), "DatabaseConnection(localhost:5432, connected)");
    }

    #[test]
    fn test_close_all_connections() {
        let mut pool = ConnectionPool::default();
        pool.get_connection("a", 1);
        pool.get_connection("b", 2);
        assert_eq!(pool.close_all_connections(), 2);
        assert_eq!(pool.active_connections(), 0);
        assert!(pool.connections().is_empty());
        // The pool can be reused after closing.
        assert_eq!(pool.get_connection("c", 3).unwrap().host(), "c");
    }

    #[test]
    fn test_disconnected_display() {
        let mut conn = DatabaseConnection::open("db.example.com", 5432);
        conn.connected = false;
        assert_eq!(
            conn.to_string(),
            "DatabaseConnection(db.example.com:5432, disconnected)"
        );
    }

    #[test]
    fn test_pool_config_partial_json() {
        let config: PoolConfig = serde_json::from_str(r#"{"max_connections": 10}"#).unwrap();
        assert_eq!(config.max_connections, 10);
        assert_eq!(config.default_host, "localhost");
        assert_eq!(config.default_port, 5432);
    }

    // ── validate_host tests ─────────────────────────────────────────────

    #[test]
    fn test_valid_hosts() {
        assert!(validate_host("db.example.com"));
        assert!(validate_host("db-01.internal"));
        assert!(validate_host("127.0.0.1"));
    }

    #[test]
    fn test_invalid_hosts() {
        assert!(!validate_host("db@hack.com"));
        assert!(!validate_host(""));
        assert!(!validate_host("db example.com"));
        assert!(!validate_host("db.example.com;drop"));
    }

    // ── parse_connection_string tests ───────────────────────────────────

    #[test]
    fn test_parse_connection_string() {
        assert_eq!(
            parse_connection_string("localhost:5432/mydb"),
            Some(ConnectionString {
                host: "localhost".to_string(),
                port: 5432,
                database: "mydb".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_connection_string_database_keeps_slashes() {
        let parsed = parse_connection_string("db:1/a/b").unwrap();
        assert_eq!(parsed.database, "a/b");
    }

    #[test]
    fn test_parse_connection_string_rejects_bad_shapes() {
        assert!(parse_connection_string("localhost").is_none());
        assert!(parse_connection_string("localhost:port/mydb").is_none());
        assert!(parse_connection_string("localhost:5432/").is_none());
        assert!(parse_connection_string(":5432/mydb").is_none());
    }

    #[test]
    fn test_parse_connection_string_port_out_of_range() {
        assert!(parse_connection_string("localhost:70000/mydb").is_none());
    }
}
