/// Table builders shared by unit tests
use crate::types::*;

/// Build a table from string cells; `None` becomes a missing-value marker
pub fn table(columns: &[&str], rows: &[&[Option<&str>]]) -> Table {
    Table::new(
        columns.iter().map(|c| c.to_string()).collect(),
        rows.iter()
            .map(|r| r.iter().map(|c| c.map(|s| Cell::Text(s.to_string())).unwrap_or(Cell::Empty)).collect())
            .collect(),
    )
}

/// One firm with two members, one of which has an empty email
pub fn acme_tables() -> AuditTables {
    AuditTables {
        firms: table(&["companyName", "websiteUrl"], &[&[Some("Acme VC"), Some("acme.vc")]]),
        members: table(
            &["vcFirm", "name", "title", "email", "linkedinUrl"],
            &[
                &[Some("Acme VC"), Some("Ann Lee"), Some("Partner"), Some("ann@acme.vc"), None],
                &[Some("Acme VC"), Some("Bob Ray"), Some("Analyst"), Some(""), Some("linkedin.com/in/bob")],
            ],
        ),
        portfolio: None,
        metrics: None,
    }
}

/// `count` firms named "Firm 0".."Firm N", each with `count - i` members
pub fn many_firms(count: usize) -> AuditTables {
    let firm_names: Vec<String> = (0..count).map(|i| format!("Firm {}", i)).collect();

    let firm_rows: Vec<Vec<Cell>> = firm_names
        .iter()
        .map(|n| vec![Cell::Text(n.clone()), Cell::Text(format!("{}.vc", n.replace(' ', "").to_lowercase()))])
        .collect();

    let mut member_rows = Vec::new();
    for (i, n) in firm_names.iter().enumerate() {
        for j in 0..(count - i) {
            member_rows.push(vec![
                Cell::Text(n.clone()),
                Cell::Text(format!("Person {}-{}", i, j)),
                if j % 2 == 0 { Cell::Text(format!("p{}-{}@x.vc", i, j)) } else { Cell::Empty },
            ]);
        }
    }

    AuditTables {
        firms: Table::new(vec!["companyName".to_string(), "websiteUrl".to_string()], firm_rows),
        members: Table::new(
            vec!["vcFirm".to_string(), "name".to_string(), "email".to_string()],
            member_rows,
        ),
        portfolio: None,
        metrics: None,
    }
}
