//! Entity taxonomy.

use std::fmt;

/// The role an entity plays in a class description.
///
/// The set is closed. [`EntityKind::Object`] only appears in object-level
/// traversal output, never in registered metadata.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    rkyv::Archive,
    rkyv::Serialize,
    rkyv::Deserialize,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityKind {
    /// A namespace.
    Namespace,
    /// A class itself.
    Class,
    /// A base class relationship.
    BaseClass,
    /// A data member.
    MemberVariable,
    /// A member function.
    MemberFunction,
    /// A constructor.
    Constructor,
    /// An enum declared inside a class.
    MemberEnum,
    /// One value of an enum.
    EnumValue,
    /// A class declared inside a class.
    MemberClass,
    /// A live base-class subobject, synthesized during object traversal.
    Object,
}

impl EntityKind {
    /// All kinds, in taxonomy order.
    pub const ALL: [EntityKind; 10] = [
        EntityKind::Namespace,
        EntityKind::Class,
        EntityKind::BaseClass,
        EntityKind::MemberVariable,
        EntityKind::MemberFunction,
        EntityKind::Constructor,
        EntityKind::MemberEnum,
        EntityKind::EnumValue,
        EntityKind::MemberClass,
        EntityKind::Object,
    ];

    /// Upper-case tag for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Namespace => "NAMESPACE",
            EntityKind::Class => "CLASS",
            EntityKind::BaseClass => "BASE_CLASS",
            EntityKind::MemberVariable => "MEMBER_VARIABLE",
            EntityKind::MemberFunction => "MEMBER_FUNCTION",
            EntityKind::Constructor => "CONSTRUCTOR",
            EntityKind::MemberEnum => "MEMBER_ENUM",
            EntityKind::EnumValue => "ENUM_VALUE",
            EntityKind::MemberClass => "MEMBER_CLASS",
            EntityKind::Object => "OBJECT",
        }
    }

    /// Check if entities of this kind can be registered as class members.
    pub fn is_member(&self) -> bool {
        matches!(
            self,
            EntityKind::MemberVariable
                | EntityKind::MemberFunction
                | EntityKind::Constructor
                | EntityKind::MemberEnum
                | EntityKind::MemberClass
        )
    }

    /// Check if entities of this kind carry a callable payload.
    pub fn is_callable(&self) -> bool {
        matches!(self, EntityKind::MemberFunction | EntityKind::Constructor)
    }

    /// Check if entities of this kind name a type rather than a value.
    pub fn is_type_declaration(&self) -> bool {
        matches!(
            self,
            EntityKind::Namespace
                | EntityKind::Class
                | EntityKind::MemberEnum
                | EntityKind::MemberClass
        )
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
