use tabled::Table;

use crate::{
    storefronts::STOREFRONTS,
    types::StorefrontTableRow,
    warning,
};

pub fn list_storefronts(search: Option<String>) {
    let mut rows: Vec<StorefrontTableRow> = STOREFRONTS
        .iter()
        .map(|s| StorefrontTableRow {
            code: s.code.to_string(),
            name: s.name.to_string(),
            flag: s.flag.to_string(),
        })
        .collect();

    if let Some(term) = search {
        let term = term.to_lowercase();
        rows.retain(|r| {
            r.name.to_lowercase().contains(&term) || r.code.to_lowercase().contains(&term)
        });
    }

    if rows.is_empty() {
        warning!("No storefront matches the search term.");
        return;
    }

    let table = Table::new(rows);
    println!("{}", table);
}
