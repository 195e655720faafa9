//! Attribute declarations of the form `name` or `name (annotation)`.

use std::fmt;

/// Key role carried by an attribute annotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyKind {
    #[default]
    None,
    Primary,
    Foreign,
    Unique,
}

impl KeyKind {
    /// Short ERD marker (PK/FK/UK)
    pub fn marker(self) -> Option<&'static str> {
        match self {
            KeyKind::None => None,
            KeyKind::Primary => Some("PK"),
            KeyKind::Foreign => Some("FK"),
            KeyKind::Unique => Some("UK"),
        }
    }
}

/// Display type inferred from the attribute name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrType {
    Int,
    Decimal,
    DateTime,
    Bool,
    Text,
}

impl AttrType {
    /// Classify by naming convention (`*Id`, `*At`, `is*`, `*Fee`, ...)
    pub fn infer(name: &str) -> Self {
        let lower = name.to_ascii_lowercase();
        if lower == "id" || name.ends_with("Id") || lower.ends_with("_id") {
            AttrType::Int
        } else if name.starts_with("is") && name[2..].starts_with(|c: char| c.is_ascii_uppercase())
        {
            AttrType::Bool
        } else if name.ends_with("At")
            || lower.starts_with("date")
            || lower.ends_with("start")
            || lower.ends_with("end")
        {
            AttrType::DateTime
        } else if lower == "amount" || lower.ends_with("fee") {
            AttrType::Decimal
        } else {
            AttrType::Text
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AttrType::Int => "int",
            AttrType::Decimal => "decimal",
            AttrType::DateTime => "datetime",
            AttrType::Bool => "boolean",
            AttrType::Text => "string",
        }
    }
}

impl fmt::Display for AttrType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed attribute declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attribute<'a> {
    /// The declaration exactly as written
    pub raw: &'a str,
    /// Column name
    pub name: &'a str,
    /// Text inside the parentheses, if any
    pub annotation: Option<&'a str>,
    pub key: KeyKind,
}

impl<'a> Attribute<'a> {
    /// Parse `name` or `name (annotation)`
    pub fn parse(raw: &'a str) -> Self {
        let trimmed = raw.trim();
        let (name, annotation) = match trimmed.find('(') {
            Some(open) if trimmed.ends_with(')') => (
                trimmed[..open].trim_end(),
                Some(trimmed[open + 1..trimmed.len() - 1].trim()),
            ),
            _ => (trimmed, None),
        };

        let key = match annotation.map(str::to_ascii_lowercase).as_deref() {
            Some("primary key") => KeyKind::Primary,
            Some("foreign key") => KeyKind::Foreign,
            Some("unique") => KeyKind::Unique,
            _ => KeyKind::None,
        };

        Self {
            raw,
            name,
            annotation,
            key,
        }
    }

    pub fn attr_type(&self) -> AttrType {
        AttrType::infer(self.name)
    }

    pub fn is_primary_key(&self) -> bool {
        self.key == KeyKind::Primary
    }

    pub fn is_foreign_key(&self) -> bool {
        self.key == KeyKind::Foreign
    }

    pub fn is_unique(&self) -> bool {
        self.key == KeyKind::Unique
    }

    /// Free-form annotation that is not a key marker (e.g. allowed values)
    pub fn note(&self) -> Option<&'a str> {
        match self.key {
            KeyKind::None => self.annotation,
            _ => None,
        }
    }

    /// `user` for a foreign key named `userId`
    pub fn reference_stem(&self) -> Option<&'a str> {
        if !self.is_foreign_key() {
            return None;
        }
        self.name
            .strip_suffix("Id")
            .or_else(|| self.name.strip_suffix("_id"))
            .filter(|s| !s.is_empty())
    }
}

impl fmt::Display for Attribute<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain() {
        let attr = Attribute::parse("password");
        assert_eq!(attr.name, "password");
        assert_eq!(attr.annotation, None);
        assert_eq!(attr.key, KeyKind::None);
        assert_eq!(attr.note(), None);
    }

    #[test]
    fn test_parse_keys() {
        assert!(Attribute::parse("id (Primary Key)").is_primary_key());
        assert!(Attribute::parse("userId (Foreign Key)").is_foreign_key());
        assert!(Attribute::parse("email (Unique)").is_unique());
        assert_eq!(Attribute::parse("email (Unique)").name, "email");
    }

    #[test]
    fn test_parse_value_list_kept_as_note() {
        let attr = Attribute::parse("category (CHED, TESDA, etc.)");
        assert_eq!(attr.name, "category");
        assert_eq!(attr.key, KeyKind::None);
        assert_eq!(attr.note(), Some("CHED, TESDA, etc."));
    }

    #[test]
    fn test_display_is_raw() {
        let attr = Attribute::parse("status (Pending, Approved, Rejected)");
        assert_eq!(attr.to_string(), "status (Pending, Approved, Rejected)");
    }

    #[test]
    fn test_attr_type_inference() {
        assert_eq!(AttrType::infer("id"), AttrType::Int);
        assert_eq!(AttrType::infer("studentId"), AttrType::Int);
        assert_eq!(AttrType::infer("isActive"), AttrType::Bool);
        assert_eq!(AttrType::infer("createdAt"), AttrType::DateTime);
        assert_eq!(AttrType::infer("dateApplied"), AttrType::DateTime);
        assert_eq!(AttrType::infer("applicationEnd"), AttrType::DateTime);
        assert_eq!(AttrType::infer("tuitionFee"), AttrType::Decimal);
        assert_eq!(AttrType::infer("amount"), AttrType::Decimal);
        assert_eq!(AttrType::infer("email"), AttrType::Text);
        // "is" prefix needs a camel-case boundary
        assert_eq!(AttrType::infer("issuer"), AttrType::Text);
    }

    #[test]
    fn test_reference_stem() {
        assert_eq!(
            Attribute::parse("scholarshipId (Foreign Key)").reference_stem(),
            Some("scholarship")
        );
        assert_eq!(Attribute::parse("id (Primary Key)").reference_stem(), None);
        assert_eq!(Attribute::parse("userId").reference_stem(), None);
    }
}
