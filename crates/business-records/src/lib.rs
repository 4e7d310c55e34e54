//! # business-records
//!
//! Record types built through named factory functions, each owned by an
//! explicit registry instead of shared global state.
//!
//! ## Modules
//!
//! - [`employee`] — [`Employee`] constructors (record line, JSON) and the [`Company`] roster
//! - [`connection_pool`] — toy in-memory [`ConnectionPool`] plus host and connection-string helpers
//! - [`inventory`] — [`Product`] helpers and the [`Inventory`] that prices and queries them
//! - [`money`] — currency formatting
//! - [`error`] — Error types
//!
//! ## Example
//!
//! ```
//! use business_records::{Company, Employee, Inventory};
//!
//! let mut company = Company::default();
//! let bob = company.hire(Employee::from_record_str("Bob Johnson-65000-2021-06-01")?).clone();
//! assert_eq!(company.describe(&bob), "Employee('Bob Johnson', $65,000.00, PyRasif)");
//!
//! let mut inventory = Inventory::default();
//! inventory.add_from_barcode("67890");
//! assert_eq!(inventory.find_by_category("Kitchen").len(), 1);
//! # Ok::<(), business_records::RecordError>(())
//! ```

pub mod connection_pool;
pub mod employee;
pub mod error;
pub mod inventory;
pub mod money;

pub use connection_pool::{
    parse_connection_string, validate_host, ConnectionPool, ConnectionString, DatabaseConnection,
    PoolConfig,
};
pub use employee::{Company, Employee};
pub use error::RecordError;
pub use inventory::{Inventory, InventoryConfig, Product};
pub use money::format_currency;
