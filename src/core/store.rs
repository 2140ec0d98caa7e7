use crate::core::inventory::Inventory;
use crate::domain::model::PetRecord;
use crate::domain::ports::Storage;
use crate::utils::error::{InventoryError, Result};
use std::io::ErrorKind;

/// Loads the whole collection once and writes it back once. The file is a
/// bincode dump of the records with no version header.
pub struct InventoryStore<S: Storage> {
    storage: S,
    file_name: String,
}

impl<S: Storage> InventoryStore<S> {
    pub fn new(storage: S, file_name: impl Into<String>) -> Self {
        Self {
            storage,
            file_name: file_name.into(),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn load(&self) -> Result<Inventory> {
        let bytes = match self.storage.read_file(&self.file_name) {
            Ok(bytes) => bytes,
            Err(InventoryError::IoError(e)) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(file = %self.file_name, "no data file yet, starting empty");
                return Ok(Inventory::default());
            }
            Err(e) => return Err(e),
        };

        let records: Vec<PetRecord> = bincode::deserialize(&bytes)?;
        tracing::info!(file = %self.file_name, records = records.len(), "loaded inventory");
        Ok(Inventory::new(records))
    }

    pub fn save(&self, inventory: &Inventory) -> Result<()> {
        let bytes = bincode::serialize(inventory.records())?;

        tracing::debug!(file = %self.file_name, bytes = bytes.len(), "writing inventory");
        self.storage.write_file(&self.file_name, &bytes)?;

        tracing::info!(file = %self.file_name, records = inventory.len(), "saved inventory");
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domain::model::{Amphibian, Fish, Mammal, Owner, Pet, ScaleCondition, YesNo};
    use chrono::NaiveDate;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    pub(crate) struct MockStorage {
        files: RefCell<HashMap<String, Vec<u8>>>,
    }

    impl MockStorage {
        pub(crate) fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            self.files.borrow().get(path).cloned()
        }

        pub(crate) fn put_file(&self, path: &str, data: &[u8]) {
            self.files.borrow_mut().insert(path.to_string(), data.to_vec());
        }
    }

    impl Storage for MockStorage {
        fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            self.get_file(path).ok_or_else(|| {
                InventoryError::IoError(std::io::Error::new(ErrorKind::NotFound, path.to_string()))
            })
        }

        fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            self.put_file(path, data);
            Ok(())
        }
    }

    fn pet(name: &str, owner: &str) -> Pet {
        Pet::new(
            name,
            NaiveDate::from_ymd_opt(2022, 2, 28).unwrap(),
            6.5,
            Owner::new(owner, "12 Elm St"),
        )
        .unwrap()
    }

    fn sample() -> Inventory {
        let mut inventory = Inventory::default();
        inventory.add(Mammal {
            pet: pet("Rex", "Jo"),
            litter_size: 5,
            has_claws: YesNo::Yes,
        });
        inventory.add(Fish {
            pet: pet("Bubbles", "Sam"),
            scale_condition: ScaleCondition::Rough,
            length_inches: 7,
        });
        inventory.add(Amphibian {
            pet: pet("Hopper", "Jo"),
            num_limbs: 4,
            is_venomous: YesNo::No,
        });
        inventory
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let store = InventoryStore::new(MockStorage::default(), "petdata.dat");
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load_restores_records_in_order() {
        let store = InventoryStore::new(MockStorage::default(), "petdata.dat");
        let inventory = sample();

        store.save(&inventory).unwrap();
        assert!(store.storage().get_file("petdata.dat").is_some());

        let loaded = store.load().unwrap();
        assert_eq!(loaded, inventory);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let storage = MockStorage::default();
        storage.put_file("petdata.dat", &[0xff, 0x01]);
        let store = InventoryStore::new(storage, "petdata.dat");

        assert!(matches!(store.load(), Err(InventoryError::EncodingError(_))));
    }
}
