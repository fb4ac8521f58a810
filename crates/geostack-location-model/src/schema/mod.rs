//! Static schema describing every location shape.
//!
//! Each shape (operation input, output, or nested structure) carries a
//! [`ShapeSchema`]: the ordered list of its members, how each member is bound
//! to the HTTP message, whether it is required, and the constraints on its
//! value. The HTTP layer reads bindings from here; [`crate::validate`] reads
//! the constraints.
//!
//! Schemas are `const` data, so lookups never allocate and shape identity is
//! fixed at compile time.

mod catalog;
pub mod members;

pub use catalog::REGISTRY;

/// The value kind of a member.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    /// UTF-8 string.
    String,
    /// 32-bit integer.
    Integer,
    /// Double precision float.
    Double,
    /// Boolean.
    Boolean,
    /// ISO-8601 timestamp.
    Timestamp,
    /// Binary data.
    Blob,
    /// String restricted to a closed set of values.
    Enum(&'static [&'static str]),
    /// Ordered list of members of one kind.
    List(&'static Member),
    /// String-keyed map.
    Map {
        /// Key member.
        key: &'static Member,
        /// Value member.
        value: &'static Member,
    },
    /// Nested structure.
    Structure(&'static ShapeSchema),
}

impl FieldKind {
    /// Short name used in diagnostics.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::String | Self::Enum(_) => "string",
            Self::Integer => "integer",
            Self::Double => "double",
            Self::Boolean => "boolean",
            Self::Timestamp => "timestamp",
            Self::Blob => "blob",
            Self::List(_) => "list",
            Self::Map { .. } => "map",
            Self::Structure(_) => "structure",
        }
    }
}

/// Value constraints of a member.
///
/// `min_length`/`max_length` count characters for strings, bytes for blobs,
/// items for lists, and entries for maps. `min`/`max` bound numbers.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Constraints {
    /// Minimum length.
    pub min_length: Option<usize>,
    /// Maximum length.
    pub max_length: Option<usize>,
    /// Minimum numeric value.
    pub min: Option<f64>,
    /// Maximum numeric value.
    pub max: Option<f64>,
    /// Regular expression a string must match.
    pub pattern: Option<&'static str>,
}

impl Constraints {
    /// No constraints.
    pub const NONE: Self = Self {
        min_length: None,
        max_length: None,
        min: None,
        max: None,
        pattern: None,
    };

    /// Whether no constraint is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min_length.is_none()
            && self.max_length.is_none()
            && self.min.is_none()
            && self.max.is_none()
            && self.pattern.is_none()
    }
}

/// A member type: its kind plus constraints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Member {
    /// Value kind.
    pub kind: FieldKind,
    /// Value constraints.
    pub constraints: Constraints,
}

impl Member {
    /// Unconstrained member of the given kind.
    #[must_use]
    pub const fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            constraints: Constraints::NONE,
        }
    }

    /// Unconstrained string.
    #[must_use]
    pub const fn string() -> Self {
        Self::new(FieldKind::String)
    }

    /// Unconstrained integer.
    #[must_use]
    pub const fn integer() -> Self {
        Self::new(FieldKind::Integer)
    }

    /// Unconstrained double.
    #[must_use]
    pub const fn double() -> Self {
        Self::new(FieldKind::Double)
    }

    /// Boolean.
    #[must_use]
    pub const fn boolean() -> Self {
        Self::new(FieldKind::Boolean)
    }

    /// Timestamp.
    #[must_use]
    pub const fn timestamp() -> Self {
        Self::new(FieldKind::Timestamp)
    }

    /// Binary blob.
    #[must_use]
    pub const fn blob() -> Self {
        Self::new(FieldKind::Blob)
    }

    /// Enum restricted to `values`.
    #[must_use]
    pub const fn enumeration(values: &'static [&'static str]) -> Self {
        Self::new(FieldKind::Enum(values))
    }

    /// List of `item`.
    #[must_use]
    pub const fn list(item: &'static Member) -> Self {
        Self::new(FieldKind::List(item))
    }

    /// Map from `key` to `value`.
    #[must_use]
    pub const fn map(key: &'static Member, value: &'static Member) -> Self {
        Self::new(FieldKind::Map { key, value })
    }

    /// Nested structure.
    #[must_use]
    pub const fn structure(schema: &'static ShapeSchema) -> Self {
        Self::new(FieldKind::Structure(schema))
    }

    /// Bound the length to `min..=max`.
    #[must_use]
    pub const fn length(mut self, min: usize, max: usize) -> Self {
        self.constraints.min_length = Some(min);
        self.constraints.max_length = Some(max);
        self
    }

    /// Require at least `min` length.
    #[must_use]
    pub const fn min_length(mut self, min: usize) -> Self {
        self.constraints.min_length = Some(min);
        self
    }

    /// Bound a number to `min..=max`.
    #[must_use]
    pub const fn range(mut self, min: f64, max: f64) -> Self {
        self.constraints.min = Some(min);
        self.constraints.max = Some(max);
        self
    }

    /// Require a string to match `pattern`.
    #[must_use]
    pub const fn pattern(mut self, pattern: &'static str) -> Self {
        self.constraints.pattern = Some(pattern);
        self
    }
}

/// Where a member travels in the HTTP message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpBinding {
    /// URI path label `{WireName}`.
    Label,
    /// Query string parameter with the given name.
    Query(&'static str),
    /// HTTP header with the given name.
    Header(&'static str),
    /// Member of the JSON document body.
    Body,
    /// The whole raw HTTP payload.
    Payload,
}

/// One member of a shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSchema {
    /// Member name as serialized (`PascalCase`).
    pub wire_name: &'static str,
    /// HTTP binding.
    pub binding: HttpBinding,
    /// Whether the member must be present.
    pub required: bool,
    /// Member type.
    pub member: Member,
}

impl FieldSchema {
    /// Optional JSON body member.
    #[must_use]
    pub const fn body(wire_name: &'static str, member: Member) -> Self {
        Self {
            wire_name,
            binding: HttpBinding::Body,
            required: false,
            member,
        }
    }

    /// URI label. Labels are always required.
    #[must_use]
    pub const fn label(wire_name: &'static str, member: Member) -> Self {
        Self {
            wire_name,
            binding: HttpBinding::Label,
            required: true,
            member,
        }
    }

    /// Optional query string parameter.
    #[must_use]
    pub const fn query(wire_name: &'static str, name: &'static str, member: Member) -> Self {
        Self {
            wire_name,
            binding: HttpBinding::Query(name),
            required: false,
            member,
        }
    }

    /// Optional header.
    #[must_use]
    pub const fn header(wire_name: &'static str, name: &'static str, member: Member) -> Self {
        Self {
            wire_name,
            binding: HttpBinding::Header(name),
            required: false,
            member,
        }
    }

    /// Raw payload.
    #[must_use]
    pub const fn payload(wire_name: &'static str, member: Member) -> Self {
        Self {
            wire_name,
            binding: HttpBinding::Payload,
            required: false,
            member,
        }
    }

    /// Mark the member as required.
    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// Schema of a shape.
#[derive(Debug, PartialEq)]
pub struct ShapeSchema {
    /// Shape name, e.g. `BatchDeleteGeofenceInput`.
    pub name: &'static str,
    /// Members in declaration order.
    pub fields: &'static [FieldSchema],
}

impl ShapeSchema {
    /// Find a member by wire name.
    #[must_use]
    pub fn field(&self, wire_name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.wire_name == wire_name)
    }

    /// The payload-bound member, if any.
    #[must_use]
    pub fn payload_field(&self) -> Option<&FieldSchema> {
        self.fields
            .iter()
            .find(|f| f.binding == HttpBinding::Payload)
    }
}

/// A type with a static schema.
pub trait Shape {
    /// Schema of the type.
    const SCHEMA: &'static ShapeSchema;
}

/// Look up a schema by shape name.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static ShapeSchema> {
    REGISTRY.iter().copied().find(|s| s.name == name)
}
