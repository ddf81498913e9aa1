//! Reflected types and data generators for benchmark reproducibility.

use metascope_core::{
    field_accessor, Attribute, Catalog, CatalogBuilder, ClassMetadata, Entity, Reflect,
};

/// Number of instances a traversal benchmark walks.
#[derive(Clone, Copy, Debug, Default)]
pub enum Scale {
    /// 10 instances.
    Tiny,
    /// 1,000 instances.
    #[default]
    Small,
    /// 100,000 instances.
    Large,
}

impl Scale {
    /// Instance count for this scale.
    pub fn count(&self) -> usize {
        match self {
            Scale::Tiny => 10,
            Scale::Small => 1_000,
            Scale::Large => 100_000,
        }
    }
}

/// Base of [`Order`].
#[derive(Debug, Default, Clone)]
pub struct Audited {
    pub created_at: u64,
    pub updated_at: u64,
}

/// Nested class member of [`Order`].
#[derive(Debug, Default, Clone)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub zip: u32,
}

/// A class with one base, scalar members and a class-typed member.
#[derive(Debug, Default, Clone)]
pub struct Order {
    pub audited: Audited,
    pub id: u64,
    pub customer: String,
    pub quantity: u32,
    pub price: f64,
    pub tags: Vec<String>,
    pub shipping: Address,
}

impl Order {
    pub fn total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

impl Reflect for Audited {
    fn class_metadata() -> ClassMetadata {
        ClassMetadata::named::<Audited>("shop::Audited")
            .with_member(Entity::member_variable(
                "created_at",
                field_accessor!(Audited, created_at: u64),
            ))
            .with_member(Entity::member_variable(
                "updated_at",
                field_accessor!(Audited, updated_at: u64),
            ))
    }
}

impl Reflect for Address {
    fn class_metadata() -> ClassMetadata {
        ClassMetadata::named::<Address>("shop::Address")
            .with_member(Entity::member_variable("street", field_accessor!(Address, street: String)))
            .with_member(Entity::member_variable("city", field_accessor!(Address, city: String)))
            .with_member(Entity::member_variable("zip", field_accessor!(Address, zip: u32)))
    }
}

impl Reflect for Order {
    fn class_metadata() -> ClassMetadata {
        ClassMetadata::named::<Order>("shop::Order")
            .with_namespace("shop")
            .with_attribute(Attribute::new("persistent"))
            .with_base_named("shop::Audited", field_accessor!(Order, audited: Audited))
            .with_member(Entity::member_class::<Address>("Address"))
            .with_member(Entity::member_function("total", Order::total as fn(&Order) -> f64))
            .with_member(Entity::member_variable("id", field_accessor!(Order, id: u64)))
            .with_member(Entity::member_variable(
                "customer",
                field_accessor!(Order, customer: String),
            ))
            .with_member(Entity::member_variable(
                "quantity",
                field_accessor!(Order, quantity: u32),
            ))
            .with_member(Entity::member_variable("price", field_accessor!(Order, price: f64)))
            .with_member(Entity::member_variable(
                "tags",
                field_accessor!(Order, tags: Vec<String>),
            ))
            .with_member(Entity::member_variable(
                "shipping",
                field_accessor!(Order, shipping: Address),
            ))
    }
}

/// Catalog with every benchmark type registered.
pub fn catalog() -> Catalog {
    let mut builder = CatalogBuilder::new();
    builder
        .register::<Audited>()
        .unwrap()
        .register::<Address>()
        .unwrap()
        .register::<Order>()
        .unwrap();
    builder.build()
}

/// Generate `scale.count()` deterministic orders.
pub fn orders(scale: Scale) -> Vec<Order> {
    (0..scale.count())
        .map(|i| Order {
            audited: Audited {
                created_at: 1_700_000_000 + i as u64,
                updated_at: 1_700_000_000 + i as u64 * 2,
            },
            id: i as u64,
            customer: format!("customer_{i}"),
            quantity: (i % 7) as u32 + 1,
            price: 9.99 + (i % 13) as f64,
            tags: vec![format!("tag_{}", i % 5)],
            shipping: Address {
                street: format!("{i} Main St"),
                city: "Springfield".to_string(),
                zip: 10_000 + (i % 90_000) as u32,
            },
        })
        .collect()
}
