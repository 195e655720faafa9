//! Plain-text entity report.

use crate::schema::Entity;
use std::io::{self, Write};

/// Width of the `=` rule under the report header
const RULE_WIDTH: usize = 50;

/// Write the description block of every entity, in declaration order
pub fn write_report<W: Write>(out: &mut W, entities: &[Entity]) -> io::Result<()> {
    writeln!(out, "\nDetailed Entity Information:")?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;

    for entity in entities {
        write_entity(out, entity)?;
    }

    Ok(())
}

fn write_entity<W: Write>(out: &mut W, entity: &Entity) -> io::Result<()> {
    writeln!(out, "\n{}:", entity.name.to_uppercase())?;
    writeln!(out, "  Description: {}", entity.description)?;
    writeln!(out, "  Attributes:")?;
    for attr in entity.attributes {
        writeln!(out, "    - {}", attr)?;
    }
    writeln!(out)
}

/// Render the report into a string
pub fn report_string(entities: &[Entity]) -> io::Result<String> {
    let mut buf = Vec::new();
    write_report(&mut buf, entities)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::entities;

    #[test]
    fn test_report_header() {
        let report = report_string(entities()).unwrap();
        assert!(report.starts_with("\nDetailed Entity Information:\n"));
        assert!(report.contains(&format!("\n{}\n", "=".repeat(50))));
    }

    #[test]
    fn test_report_block_layout() {
        let report = report_string(&entities()[1..2]).unwrap();
        let expected = "\nDetailed Entity Information:\n\
==================================================\n\
\n\
USER_APPLICATIONS:\n  \
Description: Tracks applications made by users to become students\n  \
Attributes:\n    \
- id (Primary Key)\n    \
- userId (Foreign Key)\n    \
- status (Pending, Approved, Rejected)\n    \
- remarks\n    \
- createdAt\n    \
- updatedAt\n\
\n";
        assert_eq!(report, expected);
    }

    #[test]
    fn test_report_lists_every_attribute_in_order() {
        let report = report_string(entities()).unwrap();

        for entity in entities() {
            let header = format!("\n{}:\n", entity.name.to_uppercase());
            let start = report.find(&header).expect("entity header");
            let block = &report[start + header.len()..];

            let mut lines = block.lines();
            assert_eq!(
                lines.next(),
                Some(format!("  Description: {}", entity.description).as_str())
            );
            assert_eq!(lines.next(), Some("  Attributes:"));
            for attr in entity.attributes {
                assert_eq!(lines.next(), Some(format!("    - {}", attr).as_str()));
            }
            assert_eq!(lines.next(), Some(""));
        }
    }

    #[test]
    fn test_report_entity_order() {
        let report = report_string(entities()).unwrap();
        let positions: Vec<usize> = entities()
            .iter()
            .map(|e| report.find(&format!("\n{}:\n", e.name.to_uppercase())).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_report_is_deterministic() {
        assert_eq!(report_string(entities()).unwrap(), report_string(entities()).unwrap());
    }
}
