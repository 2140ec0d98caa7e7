use crate::domain::model::{Category, PetRecord};

/// The in-memory collection for one run, in insertion order. Records are
/// only ever appended.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    records: Vec<PetRecord>,
}

impl Inventory {
    pub fn new(records: Vec<PetRecord>) -> Self {
        Self { records }
    }

    pub fn add(&mut self, record: impl Into<PetRecord>) {
        self.records.push(record.into());
    }

    pub fn records(&self) -> &[PetRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn of_category(&self, category: Category) -> impl Iterator<Item = &PetRecord> + '_ {
        self.records
            .iter()
            .filter(move |record| record.category() == category)
    }
}
