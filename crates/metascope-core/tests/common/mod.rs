//! Shared fixture: a class with two bases, three member variables, one
//! member function, one member enum and two member classes.

#![allow(dead_code)]

use metascope_core::{
    field_accessor, Attribute, Catalog, CatalogBuilder, ClassMetadata, Entity, EnumMetadata,
    Reflect, ReflectEnum,
};

pub mod my_namespace {
    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct BaseClass {
        pub base_member: i32,
    }

    impl BaseClass {
        pub fn base_function(&self) -> i32 {
            self.base_member
        }
    }

    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct Foo {
        pub ratio: f64,
    }

    /// Types declared inside `MyClass`.
    pub mod my_class {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum Enum {
            A,
            B,
            C,
        }

        #[derive(Debug, Default)]
        pub struct Foo;

        #[derive(Debug, Default, Clone, PartialEq)]
        pub struct InnerClassWithMembers {
            pub a: i32,
            pub b: i32,
            pub c: i32,
        }
    }

    #[derive(Debug, Default)]
    pub struct MyClass {
        pub base: BaseClass,
        pub foo: Foo,
        pub str: String,
        pub vector: Vec<i32>,
        pub inner_class_instance: my_class::InnerClassWithMembers,
        pub _private: i32,
    }

    impl MyClass {
        pub fn new() -> Self {
            Self {
                str: "initial".into(),
                vector: vec![1, 2, 3],
                ..Default::default()
            }
        }

        pub fn f(&self) -> i32 {
            self.vector.len() as i32
        }
    }
}

use my_namespace::my_class::{Enum, Foo as InnerFoo, InnerClassWithMembers};
use my_namespace::{BaseClass, Foo, MyClass};

impl Reflect for MyClass {
    fn class_metadata() -> ClassMetadata {
        ClassMetadata::named::<MyClass>("my_namespace::MyClass")
            .with_namespace("my_namespace")
            .with_base_named(
                "my_namespace::BaseClass",
                field_accessor!(MyClass, base: BaseClass),
            )
            .with_base_named("my_namespace::Foo", field_accessor!(MyClass, foo: Foo))
            .with_member(Entity::member_function("f", MyClass::f as fn(&MyClass) -> i32))
            .with_member(Entity::constructor("MyClass", MyClass::new as fn() -> MyClass))
            .with_member(Entity::member_enum::<Enum>("Enum"))
            .with_member(Entity::member_class::<InnerFoo>("Foo"))
            .with_member(Entity::member_class::<InnerClassWithMembers>(
                "InnerClassWithMembers",
            ))
            .with_member(
                Entity::member_variable("str", field_accessor!(MyClass, str: String))
                    .with_attribute(Attribute::with_value("json", "string")),
            )
            .with_member(Entity::member_variable(
                "vector",
                field_accessor!(MyClass, vector: Vec<i32>),
            ))
            .with_member(Entity::member_variable(
                "inner_class_instance",
                field_accessor!(MyClass, inner_class_instance: InnerClassWithMembers),
            ))
    }
}

impl Reflect for BaseClass {
    fn class_metadata() -> ClassMetadata {
        ClassMetadata::named::<BaseClass>("my_namespace::BaseClass")
            .with_attribute(Attribute::new("base"))
            .with_member(Entity::member_variable(
                "base_member",
                field_accessor!(BaseClass, base_member: i32),
            ))
            .with_member(Entity::member_function(
                "base_function",
                BaseClass::base_function as fn(&BaseClass) -> i32,
            ))
    }
}

impl Reflect for InnerClassWithMembers {
    fn class_metadata() -> ClassMetadata {
        ClassMetadata::named::<InnerClassWithMembers>("my_namespace::MyClass::InnerClassWithMembers")
            .with_member(Entity::member_variable("a", field_accessor!(InnerClassWithMembers, a: i32)))
            .with_member(Entity::member_variable("b", field_accessor!(InnerClassWithMembers, b: i32)))
            .with_member(Entity::member_variable("c", field_accessor!(InnerClassWithMembers, c: i32)))
    }
}

impl ReflectEnum for Enum {
    fn enum_metadata() -> EnumMetadata {
        EnumMetadata::named::<Enum>("my_namespace::MyClass::Enum")
            .with_value("A", Enum::A, 0)
            .with_value("B", Enum::B, 1)
            .with_value("C", Enum::C, 2)
    }
}

/// Catalog with every fixture type registered.
pub fn catalog() -> Catalog {
    let mut builder = CatalogBuilder::new();
    builder
        .register::<MyClass>()
        .unwrap()
        .register::<BaseClass>()
        .unwrap()
        .register::<InnerClassWithMembers>()
        .unwrap()
        .register_enum::<Enum>()
        .unwrap();
    builder.build()
}
