//! Shared sales fixture for integration tests

#![allow(dead_code)]

use tallydb::{Engine, EngineConfig, Field, RawRecord};

/// Ten sales across three vendors and four months
pub fn sales() -> Vec<RawRecord> {
    vec![
        RawRecord::new(1, "Laptop", "Electrónica", 1200, "2023-01-15", "Ana"),
        RawRecord::new(2, "Monitor", "Electrónica", 200, "2023-01-20", "Juan"),
        RawRecord::new(3, "Teclado", "Accesorios", 80, "2023-02-05", "Ana"),
        RawRecord::new(4, "Mouse", "Accesorios", 25, "2023-02-10", "Pedro"),
        RawRecord::new(5, "Laptop", "Electrónica", 1500, "2023-02-15", "Juan"),
        RawRecord::new(6, "Teléfono", "Electrónica", 800, "2023-03-05", "Ana"),
        RawRecord::new(7, "Tablet", "Electrónica", 300, "2023-03-10", "Pedro"),
        RawRecord::new(8, "Teclado", "Accesorios", 85, "2023-03-15", "Juan"),
        RawRecord::new(9, "Monitor", "Electrónica", 250, "2023-04-05", "Ana"),
        RawRecord::new(10, "Mouse", "Accesorios", 30, "2023-04-10", "Pedro"),
    ]
}

pub fn engine() -> Engine {
    engine_indexing(&[Field::Product, Field::Category, Field::Vendor])
}

pub fn engine_indexing(fields: &[Field]) -> Engine {
    let config = EngineConfig {
        indexed_fields: fields.to_vec(),
        ..EngineConfig::quiet()
    };
    Engine::with_config(sales(), config).unwrap()
}

pub fn ids(records: &[&tallydb::Record]) -> Vec<u64> {
    records.iter().map(|r| r.id.0).collect()
}
