//! Single-match detail selection
//!
//! When a filter narrows the table to exactly one record, a first-name search
//! shows a person card and a company search shows a company card.

use crate::app::models::{Field, Record};

/// Which view to present for the visible records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailView<'a> {
    /// Person card for a single match on the first-name field
    Person(&'a Record),
    /// Company card for a single match on the company field
    Company(&'a Record),
    /// Regular table of all visible records
    Table,
}

impl DetailView<'_> {
    pub fn is_table(&self) -> bool {
        matches!(self, DetailView::Table)
    }
}

/// Pick the view for `visible` records filtered on `field`
pub fn select_detail(visible: &[Record], field: Field) -> DetailView<'_> {
    match visible {
        [single] if field.is_name_like() => DetailView::Person(single),
        [single] if field == Field::CompanyName => DetailView::Company(single),
        _ => DetailView::Table,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_detail_on_first_name_only() {
        let records = vec![Record::default()
            .with(Field::FirstName, "Ada")
            .with(Field::LastName, "Butt")];
        assert_eq!(
            select_detail(&records, Field::FirstName),
            DetailView::Person(&records[0])
        );
        assert!(select_detail(&records, Field::LastName).is_table());
    }

    #[test]
    fn test_company_detail() {
        let records = vec![Record::default().with(Field::CompanyName, "Acme")];
        assert_eq!(
            select_detail(&records, Field::CompanyName),
            DetailView::Company(&records[0])
        );
    }

    #[test]
    fn test_table_otherwise() {
        let one = vec![Record::default()];
        let two = vec![Record::default(), Record::default()];

        assert!(select_detail(&one, Field::State).is_table());
        assert!(select_detail(&two, Field::FirstName).is_table());
        assert!(select_detail(&two, Field::CompanyName).is_table());
        assert!(select_detail(&[], Field::FirstName).is_table());
    }
}
