//! End-to-end walkthrough of all four domains, as a host program would drive them.

use business_records::{
    format_currency, parse_connection_string, validate_host, Company, ConnectionPool, Employee,
    Inventory, Product,
};
use calendar_utils::{
    count_business_days, format_relative_time, is_business_day, parse_flexible_date,
};
use chrono::{Duration, NaiveDate};
use serde_json::json;

#[test]
fn employee_management() {
    let mut company = Company::default();

    let alice = Employee::new(
        "Alice Smith",
        75_000.0,
        NaiveDate::from_ymd_opt(2020, 1, 15)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap(),
    );
    company.hire(alice);
    assert_eq!(
        company.describe(&company.employees()[0]),
        "Employee('Alice Smith', $75,000.00, PyRasif)"
    );

    let bob = Employee::from_record_str("Bob Johnson-65000-2021-06-01").unwrap();
    assert_eq!(
        company.describe(&bob),
        "Employee('Bob Johnson', $65,000.00, PyRasif)"
    );
    company.hire(bob);

    let carol = Employee::from_value(json!({
        "name": "Carol White",
        "salary": 85000,
        "hire_date": "2019-03-20"
    }))
    .unwrap();
    company.hire(carol);

    assert!(Employee::is_valid_salary(50_000.0));
    assert!(!Employee::is_valid_salary(25_000.0));
    assert_eq!(
        format_currency(Employee::calculate_annual_bonus(75_000.0, 4.0)),
        "$11,250.00"
    );
    assert_eq!(company.employee_count(), 3);
}

#[test]
fn connection_pool() {
    let mut pool = ConnectionPool::default();

    let first = pool.get_connection("db.example.com", 5432).unwrap().clone();
    let second = pool.get_connection("db.example.com", 5432).unwrap().clone();
    assert_eq!(first.to_string(), "DatabaseConnection(db.example.com:5432, connected)");
    assert_eq!(second.to_string(), "DatabaseConnection(db.example.com:5432, connected)");
    assert_eq!(pool.active_connections(), 2);

    assert!(validate_host("db.example.com"));
    assert!(!validate_host("db@hack.com"));

    let parsed = parse_connection_string("localhost:5432/mydb").unwrap();
    assert_eq!(parsed.host, "localhost");
    assert_eq!(parsed.port, 5432);
    assert_eq!(parsed.database, "mydb");

    assert_eq!(pool.close_all_connections(), 2);
    assert_eq!(pool.active_connections(), 0);
}

#[test]
fn product_inventory() {
    let mut inventory = Inventory::default();

    let mouse = inventory.add(Product::new("Wireless Mouse", 29.99, 50, "Electronics"));
    assert_eq!(mouse.to_string(), "Product('Wireless Mouse', $29.99, qty: 50)");

    let laptop = inventory.add_from_barcode("12345").unwrap();
    assert_eq!(laptop.to_string(), "Product('Laptop', $999.99, qty: 10)");

    let imported = inventory.bulk_import([
        Product::new("Notebook", 5.99, 200, "Office"),
        Product::new("Pen Set", 12.99, 150, "Office"),
    ]);
    assert_eq!(imported, 2);

    assert_eq!(
        format_currency(inventory.total_inventory_value()),
        "$14,645.90"
    );
    assert_eq!(inventory.find_by_category("Electronics").len(), 2);
    assert_eq!(
        format_currency(Product::calculate_discount(29.99, 20.0)),
        "$23.99"
    );
    assert!(Product::is_valid_sku("ABC12345"));
}

#[test]
fn date_utilities() {
    let start = parse_flexible_date("2024-01-01").unwrap();
    let end = parse_flexible_date("01/31/2024").unwrap();
    assert!(is_business_day(start));
    assert_eq!(count_business_days(start, end), 23);

    let now = NaiveDate::from_ymd_opt(2026, 10, 18)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap();
    assert_eq!(format_relative_time(now - Duration::days(45), now), "1 months ago");

    assert_eq!(
        parse_flexible_date("2024/12/25").unwrap().to_string(),
        "2024-12-25 00:00:00"
    );
}
