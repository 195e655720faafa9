//! Static model of the scholarship tracking schema.
//!
//! This module provides:
//! - The five entity records (description, legend summary, attributes)
//! - The four foreign-key relationships between them
//! - Attribute annotation parsing (primary/foreign key markers)

mod attribute;

pub use attribute::*;

/// A table of the scholarship tracking schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entity {
    /// Table name
    pub name: &'static str,
    /// Long description printed by the entity report
    pub description: &'static str,
    /// Short phrase shown in the diagram legend
    pub summary: &'static str,
    /// Attributes in declaration order, `name` or `name (annotation)`
    pub attributes: &'static [&'static str],
}

impl Entity {
    /// Parsed attributes in declaration order
    pub fn parsed_attributes(&self) -> Vec<Attribute<'static>> {
        self.attributes.iter().copied().map(Attribute::parse).collect()
    }

    /// Singular form of the table name, used to match `fooId` columns
    pub fn singular(&self) -> &'static str {
        self.name.strip_suffix('s').unwrap_or(self.name)
    }
}

/// A foreign-key relationship: the parent table is referenced by the child
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Relationship {
    pub parent: &'static str,
    pub child: &'static str,
}

pub const ENTITIES: [Entity; 5] = [
    Entity {
        name: "users",
        description: "Main authentication table for system users",
        summary: "Authentication & User Management",
        attributes: &[
            "id (Primary Key)",
            "email (Unique)",
            "password",
            "firstName",
            "lastName",
            "role (admin, staff, student)",
            "isActive",
            "studentId (Foreign Key)",
            "createdAt",
            "updatedAt",
        ],
    },
    Entity {
        name: "user_applications",
        description: "Tracks applications made by users to become students",
        summary: "User Registration Applications",
        attributes: &[
            "id (Primary Key)",
            "userId (Foreign Key)",
            "status (Pending, Approved, Rejected)",
            "remarks",
            "createdAt",
            "updatedAt",
        ],
    },
    Entity {
        name: "students",
        description: "Student profile information",
        summary: "Student Profiles & Academic Info",
        attributes: &[
            "id (Primary Key)",
            "firstName",
            "middleName",
            "lastName",
            "yearLevel",
            "course",
            "tuitionFee",
            "educationLevel",
            "userId (Foreign Key)",
            "createdAt",
            "updatedAt",
        ],
    },
    Entity {
        name: "scholarships",
        description: "Scholarship information",
        summary: "Scholarship Details & Requirements",
        attributes: &[
            "id (Primary Key)",
            "name",
            "description",
            "type (Internal, External)",
            "category (CHED, TESDA, etc.)",
            "amount",
            "eligibility",
            "applicationStart",
            "applicationEnd",
            "isActive",
            "createdAt",
            "updatedAt",
        ],
    },
    Entity {
        name: "student_scholarships",
        description: "Junction table linking students to scholarships",
        summary: "Student-Scholarship Relationships",
        attributes: &[
            "id (Primary Key)",
            "studentId (Foreign Key)",
            "scholarshipId (Foreign Key)",
            "status (Pending, Approved, Rejected, Expired)",
            "dateApplied",
            "dateApproved",
            "remarks",
            "createdAt",
            "updatedAt",
        ],
    },
];

pub const RELATIONSHIPS: [Relationship; 4] = [
    // User has applications
    Relationship {
        parent: "users",
        child: "user_applications",
    },
    // User has a student profile
    Relationship {
        parent: "users",
        child: "students",
    },
    // Student applies for scholarships
    Relationship {
        parent: "students",
        child: "student_scholarships",
    },
    // Scholarship is awarded to students
    Relationship {
        parent: "scholarships",
        child: "student_scholarships",
    },
];

/// All entities in declaration order
pub fn entities() -> &'static [Entity] {
    &ENTITIES
}

/// Look up an entity by table name
pub fn find_entity(name: &str) -> Option<&'static Entity> {
    ENTITIES.iter().find(|e| e.name == name)
}

/// Resolve the table a foreign-key attribute of `owner` points at.
///
/// A relationship edge ending at `owner` wins; otherwise the column name
/// alone decides (`studentId` on `users` has no edge).
pub fn referenced_entity(owner: &str, attr: &Attribute<'_>) -> Option<&'static Entity> {
    let stem = attr.reference_stem()?;
    let matches = |e: &&Entity| e.singular().eq_ignore_ascii_case(stem);

    RELATIONSHIPS
        .iter()
        .filter(|r| r.child == owner)
        .filter_map(|r| find_entity(r.parent))
        .find(matches)
        .or_else(|| ENTITIES.iter().find(matches))
}
