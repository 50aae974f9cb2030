//! Builders and canned data sets.

use bintrack_types::{Bin, BinId, Product, Record, RecordId};

/// Fluent builder for [`Record`] values.
///
/// ```
/// use bintrack_testing::fixtures::RecordBuilder;
///
/// let record = RecordBuilder::new(1).bin("A-01").product("0001", "Whole Milk").cases(3).build();
/// assert_eq!(record.cases(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    record: Record,
}

impl RecordBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            record: Record {
                id: RecordId::new(id),
                bin_location: None,
                bin_location_id: None,
                product_upc: None,
                product_description: None,
                unit_qty: None,
                qty_cases: Some(0),
                last_update: None,
            },
        }
    }

    pub fn bin(mut self, name: &str) -> Self {
        self.record.bin_location = Some(name.to_string());
        self
    }

    pub fn bin_id(mut self, id: i64) -> Self {
        self.record.bin_location_id = Some(BinId::new(id));
        self
    }

    pub fn product(mut self, upc: &str, description: &str) -> Self {
        self.record.product_upc = Some(upc.to_string());
        self.record.product_description = Some(description.to_string());
        self
    }

    pub fn per_case(mut self, qty: f64) -> Self {
        self.record.unit_qty = Some(qty);
        self
    }

    pub fn cases(mut self, cases: i64) -> Self {
        self.record.qty_cases = Some(cases);
        self
    }

    pub fn updated(mut self, timestamp: &str) -> Self {
        self.record.last_update = Some(timestamp.to_string());
        self
    }

    pub fn build(self) -> Record {
        self.record
    }
}

pub fn bins() -> Vec<Bin> {
    vec![
        Bin::new(10, "A-01"),
        Bin::new(11, "A-02"),
        Bin::new(12, "B-01"),
        Bin::new(13, "COLD-1"),
    ]
}

/// Three records: one of them has no case size.
pub fn records() -> Vec<Record> {
    vec![
        RecordBuilder::new(1)
            .bin("A-01")
            .bin_id(10)
            .product("0001", "Whole Milk")
            .per_case(10.0)
            .cases(2)
            .build(),
        RecordBuilder::new(2)
            .bin("A-02")
            .bin_id(11)
            .product("0002", "Orange Juice")
            .per_case(0.0)
            .cases(5)
            .build(),
        RecordBuilder::new(3)
            .bin("COLD-1")
            .bin_id(13)
            .product("0003", "Butter")
            .per_case(4.0)
            .cases(1)
            .build(),
    ]
}

pub fn product(upc: &str, description: &str, per_case: Option<f64>) -> Product {
    Product {
        product_id: None,
        upc: Some(upc.to_string()),
        description: Some(description.to_string()),
        unit_qty: per_case,
    }
}

pub fn products() -> Vec<Product> {
    vec![
        product("0001", "Whole Milk", Some(10.0)),
        product("0004", "Milk Chocolate", Some(24.0)),
        product("0002", "Orange Juice", None),
    ]
}
