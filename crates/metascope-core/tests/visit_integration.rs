//! Integration tests for type-level and object-level traversal.

mod common;

use std::any::Any;
use std::cell::Cell;
use std::collections::{HashMap, HashSet};

use common::my_namespace::my_class::{Enum, InnerClassWithMembers};
use common::my_namespace::{BaseClass, Foo, MyClass};
use metascope_core::{Catalog, Entity, EntityKind, Error, ObjectHandlers, TypeHandlers};

fn visited_names(catalog: &Catalog, expected_kind: EntityKind) -> HashMap<String, usize> {
    let mut names = HashMap::new();
    catalog
        .visit::<MyClass>(TypeHandlers::new().on_any(|name, depth, _entity, kind| {
            assert_eq!(depth, 0);
            if kind == expected_kind {
                *names.entry(name.to_string()).or_insert(0) += 1;
            }
        }))
        .unwrap();
    names
}

fn check_counts(catalog: &Catalog, kind: EntityKind, expected: &[(&str, usize)]) {
    let names = visited_names(catalog, kind);
    for (name, count) in expected {
        assert_eq!(
            names.get(*name).copied().unwrap_or(0),
            *count,
            "{name} {kind} expected {count} times"
        );
    }
}

const ALL_NAMES: [&str; 16] = [
    "vector",
    "str",
    "f",
    "base_member",
    "base_function",
    "_private",
    "Enum",
    "Foo",
    "my_namespace::BaseClass",
    "my_namespace::Foo",
    "InnerClassWithMembers",
    "a",
    "b",
    "c",
    "inner_class_instance",
    "MyClass",
];

fn expect_only(present: &[&str]) -> Vec<(&'static str, usize)> {
    ALL_NAMES
        .iter()
        .map(|name| (*name, usize::from(present.contains(name))))
        .collect()
}

#[test]
fn test_class_metadata() {
    let catalog = common::catalog();
    let meta = catalog.lookup::<MyClass>().unwrap();

    assert_eq!(meta.base_classes().size(), 2);
    assert!(meta.base_classes()[0].declared_type().is::<BaseClass>());
    assert!(meta.base_classes()[1].declared_type().is::<Foo>());

    let f = meta.members()[0]
        .payload::<fn(&MyClass) -> i32>()
        .expect("first member is f");
    assert_eq!(f(&MyClass::new()), 3);

    assert!(!catalog.has_attribute::<MyClass>("foo"));
}

#[test]
fn test_visit_class_member_variables() {
    let catalog = common::catalog();
    check_counts(
        &catalog,
        EntityKind::MemberVariable,
        &expect_only(&["vector", "str", "inner_class_instance"]),
    );
}

#[test]
fn test_visit_class_member_functions() {
    let catalog = common::catalog();
    check_counts(&catalog, EntityKind::MemberFunction, &expect_only(&["f"]));
}

#[test]
fn test_visit_class_member_enums() {
    let catalog = common::catalog();
    check_counts(&catalog, EntityKind::MemberEnum, &expect_only(&["Enum"]));
}

#[test]
fn test_visit_class_member_classes() {
    let catalog = common::catalog();
    check_counts(
        &catalog,
        EntityKind::MemberClass,
        &expect_only(&["Foo", "InnerClassWithMembers"]),
    );
}

#[test]
fn test_visit_class_base_classes() {
    let catalog = common::catalog();
    check_counts(
        &catalog,
        EntityKind::BaseClass,
        &expect_only(&["my_namespace::BaseClass", "my_namespace::Foo"]),
    );
}

#[test]
fn test_visit_class_order_and_kinds() {
    let catalog = common::catalog();
    let mut seen = Vec::new();

    let summary = catalog
        .visit::<MyClass>(TypeHandlers::new().on_any(|name, _, _, kind| {
            seen.push((name.to_string(), kind));
        }))
        .unwrap();

    let expected: Vec<(String, EntityKind)> = [
        ("my_namespace::BaseClass", EntityKind::BaseClass),
        ("my_namespace::Foo", EntityKind::BaseClass),
        ("f", EntityKind::MemberFunction),
        ("MyClass", EntityKind::Constructor),
        ("Enum", EntityKind::MemberEnum),
        ("Foo", EntityKind::MemberClass),
        ("InnerClassWithMembers", EntityKind::MemberClass),
        ("str", EntityKind::MemberVariable),
        ("vector", EntityKind::MemberVariable),
        ("inner_class_instance", EntityKind::MemberVariable),
    ]
    .into_iter()
    .map(|(n, k)| (n.to_string(), k))
    .collect();
    assert_eq!(seen, expected);
    assert_eq!(summary.visited, 10);
    assert!(summary.all_dispatched());
}

#[test]
fn test_visit_class_kind_multiset_matches_metadata() {
    let catalog = common::catalog();
    let meta = catalog.lookup::<MyClass>().unwrap();

    let mut visited: HashMap<EntityKind, usize> = HashMap::new();
    catalog
        .visit::<MyClass>(TypeHandlers::new().on_any(|_, _, _, kind| {
            *visited.entry(kind).or_default() += 1;
        }))
        .unwrap();

    let mut recorded: HashMap<EntityKind, usize> = HashMap::new();
    for member in meta.members() {
        *recorded.entry(member.kind()).or_default() += 1;
    }
    recorded.insert(EntityKind::BaseClass, meta.base_classes().size());

    assert_eq!(visited, recorded);
}

#[test]
fn test_visit_class_typed_dispatch() {
    let catalog = common::catalog();
    let mut bases = Vec::new();
    let mut others = 0;

    let summary = catalog
        .visit::<MyClass>(
            TypeHandlers::new()
                .on::<BaseClass>(EntityKind::BaseClass, |name, _, entity: &Entity, _| {
                    assert!(entity.declared_type().is::<BaseClass>());
                    bases.push(name.to_string());
                })
                .on_kind(EntityKind::MemberVariable, |_, _, _, _| others += 1),
        )
        .unwrap();

    assert_eq!(bases, vec!["my_namespace::BaseClass".to_string()]);
    assert_eq!(others, 3);
    assert_eq!(summary.dispatched, 4);
    assert_eq!(summary.skipped, 6);
}

#[test]
fn test_visit_class_without_handlers_skips_everything() {
    let catalog = common::catalog();
    let summary = catalog.visit::<MyClass>(TypeHandlers::new()).unwrap();

    assert_eq!(summary.dispatched, 0);
    assert_eq!(summary.skipped, summary.visited);
}

#[test]
fn test_visit_unregistered_type() {
    struct Unknown;

    let catalog = common::catalog();
    let err = catalog.visit::<Unknown>(TypeHandlers::new()).unwrap_err();
    assert!(matches!(err, Error::UnregisteredType { .. }));
}

#[test]
fn test_visit_enum_values() {
    let catalog = common::catalog();
    let mut values = Vec::new();

    catalog
        .visit_enum::<Enum>(TypeHandlers::new().on_kind(
            EntityKind::EnumValue,
            |name, _, entity, _| values.push((name.to_string(), entity.discriminant())),
        ))
        .unwrap();

    assert_eq!(
        values,
        vec![
            ("A".to_string(), Some(0)),
            ("B".to_string(), Some(1)),
            ("C".to_string(), Some(2)),
        ]
    );
}

fn visited_object_names(expected_kind: EntityKind) -> HashSet<String> {
    let catalog = common::catalog();
    let mut object = MyClass::new();
    let mut members = HashSet::new();

    catalog
        .visit_object(
            &mut object,
            ObjectHandlers::new().on_kind(expected_kind, |name, depth, _value, kind| {
                assert_eq!(kind, expected_kind);
                assert_eq!(depth, 0);
                assert!(members.insert(name.to_string()), "{name} visited twice");
            }),
        )
        .unwrap();

    members
}

#[test]
fn test_visit_object_member_variables_only() {
    let members = visited_object_names(EntityKind::MemberVariable);
    let expected: HashSet<String> = ["str", "inner_class_instance", "vector"]
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(members, expected);
}

#[test]
fn test_visit_object_subobjects_only() {
    let members = visited_object_names(EntityKind::Object);
    let expected: HashSet<String> = ["my_namespace::BaseClass", "my_namespace::Foo"]
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(members, expected);
}

#[test]
fn test_visit_object_entity_count() {
    let catalog = common::catalog();
    let meta = catalog.lookup::<MyClass>().unwrap();
    let mut object = MyClass::new();
    let mut kinds = Vec::new();

    let summary = catalog
        .visit_object(
            &mut object,
            ObjectHandlers::new().on_any(|_, _, _, kind| kinds.push(kind)),
        )
        .unwrap();

    let expected = meta.base_classes().size()
        + meta
            .members()
            .count_where(|m| m.kind() == EntityKind::MemberVariable);
    assert_eq!(summary.visited, expected);
    assert_eq!(kinds.len(), 5);
    assert_eq!(
        kinds,
        vec![
            EntityKind::Object,
            EntityKind::Object,
            EntityKind::MemberVariable,
            EntityKind::MemberVariable,
            EntityKind::MemberVariable,
        ]
    );
}

fn address_of(value: &mut dyn Any) -> usize {
    value as *mut _ as *mut () as usize
}

#[test]
fn test_visit_object_returns_references_to_members() {
    let catalog = common::catalog();
    let mut object = MyClass::new();
    let mut addresses = HashMap::new();

    catalog
        .visit_object(
            &mut object,
            ObjectHandlers::new().on_any(|name, _, value, _| {
                addresses.insert(name.to_string(), address_of(value));
            }),
        )
        .unwrap();

    assert_eq!(addresses["str"], &object.str as *const String as usize);
    assert_eq!(addresses["vector"], &object.vector as *const Vec<i32> as usize);
    assert_eq!(
        addresses["inner_class_instance"],
        &object.inner_class_instance as *const InnerClassWithMembers as usize
    );
    assert_eq!(
        addresses["my_namespace::BaseClass"],
        &object.base as *const BaseClass as usize
    );
}

#[test]
fn test_assigning_in_visit_changes_visited_object() {
    let catalog = common::catalog();
    let mut object = MyClass::new();

    catalog
        .visit_object(
            &mut object,
            ObjectHandlers::new()
                .on_member(|_, _, member: &mut String, _| {
                    *member = "a new string value".to_string();
                })
                .on_member(|_, _, member: &mut Vec<i32>, _| {
                    *member = vec![42; 42];
                })
                .on_member(|_, _, member: &mut InnerClassWithMembers, _| {
                    member.a = 42;
                    member.b = 42;
                    member.c = 42;
                })
                .on_subobject(|_, _, base: &mut BaseClass, _| {
                    base.base_member = 7;
                }),
        )
        .unwrap();

    assert_eq!(object.str, "a new string value");
    assert_eq!(object.vector.len(), 42);
    assert!(object.vector.iter().all(|&e| e == 42));
    assert_eq!(object.inner_class_instance.a, 42);
    assert_eq!(object.inner_class_instance.b, 42);
    assert_eq!(object.inner_class_instance.c, 42);
    assert_eq!(object.base.base_function(), 7);
    assert_eq!(object.foo, Foo::default());
}

#[test]
fn test_typed_handler_outranks_kind_handler() {
    let catalog = common::catalog();
    let mut object = MyClass::new();
    let mut generic = Vec::new();
    let typed = Cell::new(0);

    catalog
        .visit_object(
            &mut object,
            ObjectHandlers::new()
                .on_member(|_, _, _: &mut String, _| typed.set(typed.get() + 1))
                .on_kind(EntityKind::MemberVariable, |name, _, _, _| {
                    generic.push(name.to_string())
                }),
        )
        .unwrap();

    assert_eq!(typed.get(), 1);
    assert_eq!(
        generic,
        vec!["vector".to_string(), "inner_class_instance".to_string()]
    );
}

#[test]
fn test_ambiguous_handlers_rejected_before_visiting() {
    let catalog = common::catalog();
    let mut object = MyClass::new();
    let calls = Cell::new(0);

    let err = catalog
        .visit_object(
            &mut object,
            ObjectHandlers::new()
                .on_kind(EntityKind::Object, |_, _, _, _| calls.set(calls.get() + 1))
                .on_member(|_, _, _: &mut String, _| calls.set(calls.get() + 1))
                .on_member(|_, _, _: &mut String, _| calls.set(calls.get() + 1)),
        )
        .unwrap_err();

    assert!(matches!(err, Error::AmbiguousHandler { .. }));
    assert_eq!(calls.get(), 0);
    assert_eq!(object.str, "initial");
}

#[test]
fn test_class_members_are_not_flattened() {
    let catalog = common::catalog();
    let mut object = MyClass::new();
    let mut names = Vec::new();

    catalog
        .visit_object(
            &mut object,
            ObjectHandlers::new().on_any(|name, _, _, _| names.push(name.to_string())),
        )
        .unwrap();

    for nested in ["a", "b", "c", "base_member"] {
        assert!(!names.iter().any(|n| n == nested), "{nested} was flattened");
    }
}

#[test]
fn test_manual_recursion_into_class_member() {
    let catalog = common::catalog();
    let mut object = MyClass::new();
    let mut nested = Vec::new();

    catalog
        .visit_object(
            &mut object,
            ObjectHandlers::new().on_member(|_, depth, inner: &mut InnerClassWithMembers, _| {
                catalog
                    .visit_object_at(
                        depth + 1,
                        inner,
                        &mut ObjectHandlers::new().on_member(|name, depth, value: &mut i32, _| {
                            *value = name.len() as i32 * 10;
                            nested.push((name.to_string(), depth));
                        }),
                    )
                    .unwrap();
            }),
        )
        .unwrap();

    assert_eq!(
        nested,
        vec![
            ("a".to_string(), 1),
            ("b".to_string(), 1),
            ("c".to_string(), 1),
        ]
    );
    assert_eq!(object.inner_class_instance, InnerClassWithMembers { a: 10, b: 10, c: 10 });
}

#[test]
fn test_visit_dyn_resolves_runtime_type() {
    let catalog = common::catalog();
    let mut base = BaseClass { base_member: 3 };
    let mut seen = Vec::new();

    let erased: &mut dyn Any = &mut base;
    catalog
        .visit_dyn(
            0,
            erased,
            &mut ObjectHandlers::new().on_member(|name, _, value: &mut i32, _| {
                seen.push((name.to_string(), *value));
                *value += 1;
            }),
        )
        .unwrap();

    assert_eq!(seen, vec![("base_member".to_string(), 3)]);
    assert_eq!(base.base_member, 4);
}

#[test]
fn test_reusable_handler_set() {
    let catalog = common::catalog();
    let mut first = MyClass::new();
    let mut second = MyClass::new();
    let visits = Cell::new(0);

    let mut handlers = ObjectHandlers::new().on_member(|_, _, v: &mut Vec<i32>, _| {
        v.push(4);
        visits.set(visits.get() + 1);
    });
    catalog.visit_object_with(&mut first, &mut handlers).unwrap();
    catalog.visit_object_with(&mut second, &mut handlers).unwrap();
    drop(handlers);

    assert_eq!(visits.get(), 2);
    assert_eq!(first.vector, vec![1, 2, 3, 4]);
    assert_eq!(second.vector, vec![1, 2, 3, 4]);
}

#[test]
fn test_filter_then_foreach_visits_matching_members_once() {
    let catalog = common::catalog();
    let meta = catalog.lookup::<MyClass>().unwrap();
    let mut seen = Vec::new();

    meta.members()
        .filter(|m| m.kind() == EntityKind::MemberVariable)
        .foreach(|m, index| seen.push((index, m.name().to_string())));

    assert_eq!(
        seen,
        vec![
            (0, "str".to_string()),
            (1, "vector".to_string()),
            (2, "inner_class_instance".to_string()),
        ]
    );
}
