//! Read-only reports over the in-memory collection.

use crate::core::inventory::Inventory;
use crate::domain::model::{Category, PetRecord};
use crate::domain::ports::PetProfile;
use crate::utils::error::Result;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::io::Write;

const WIDE_RULE: &str =
    "========================================================================";
const RULE: &str = "===============================================================";
const OUNCES_PER_POUND: f64 = 16.0;

fn column_header(category: Category) -> &'static str {
    match category {
        Category::Mammal => {
            "Pet Name | DOB | Birth Weight | Owner Name | Owner Address | Litter Sizes | Has Claws"
        }
        Category::Fish => {
            "Pet Name | DOB | Birth Weight | Owner Name | Owner Address | Scale Condition | Length"
        }
        Category::Amphibian => {
            "Pet Name | DOB | Birth Weight | Owner Name | Owner Address | Number of Limbs | Is Venomous"
        }
    }
}

/// One section per category, each listing its records in collection order.
pub fn write_full_listing<W: Write>(out: &mut W, inventory: &Inventory) -> Result<()> {
    for category in Category::ALL {
        writeln!(out, "{}", WIDE_RULE)?;
        writeln!(out, "Data of all {} in the database", category.plural())?;
        writeln!(out, "{}", WIDE_RULE)?;
        writeln!(out, "{}", column_header(category))?;
        for record in inventory.of_category(category) {
            writeln!(out, "{}", record)?;
        }
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeightLine {
    pub pet_name: String,
    pub pounds: f64,
}

pub fn current_weights(inventory: &Inventory, today: NaiveDate) -> Vec<WeightLine> {
    inventory
        .records()
        .iter()
        .map(|record| {
            let days = record.pet().days_since_birth_on(today);
            WeightLine {
                pet_name: record.name().to_string(),
                pounds: record.current_weight(days) / OUNCES_PER_POUND,
            }
        })
        .collect()
}

pub fn write_current_weights<W: Write>(
    out: &mut W,
    inventory: &Inventory,
    today: NaiveDate,
) -> Result<()> {
    writeln!(out, "{}", RULE)?;
    writeln!(out, "Pet name and current weights of all pets")?;
    writeln!(out, "{}", RULE)?;
    for line in current_weights(inventory, today) {
        writeln!(
            out,
            "{}'s cur_weight in pounds is {:.2}",
            line.pet_name, line.pounds
        )?;
    }
    Ok(())
}

/// An owner name that appears on more than one record.
#[derive(Debug, Clone, PartialEq)]
pub struct OwnerGroup {
    pub owner_name: String,
    /// Address from the last record seen for this name.
    pub address: String,
    pub pet_count: usize,
    /// Every pet under this owner name, in collection order.
    pub pet_names: Vec<String>,
}

/// Groups by owner name only. Groups come out in order of each name's first
/// appearance; the stored address is overwritten by every later record with
/// the same name.
pub fn multi_pet_owners(records: &[PetRecord]) -> Vec<OwnerGroup> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut tally: Vec<(&str, usize, &str)> = Vec::new();

    for record in records {
        let owner = record.pet().owner();
        let slot = index.get(owner.name.as_str()).copied();
        match slot {
            Some(slot) => {
                let entry = &mut tally[slot];
                entry.1 += 1;
                entry.2 = owner.address.as_str();
            }
            None => {
                index.insert(owner.name.as_str(), tally.len());
                tally.push((owner.name.as_str(), 1, owner.address.as_str()));
            }
        }
    }

    tally
        .into_iter()
        .filter(|(_, count, _)| *count > 1)
        .map(|(name, count, address)| OwnerGroup {
            owner_name: name.to_string(),
            address: address.to_string(),
            pet_count: count,
            pet_names: records
                .iter()
                .filter(|record| record.owner_name() == name)
                .map(|record| record.name().to_string())
                .collect(),
        })
        .collect()
}

pub fn write_multi_pet_owners<W: Write>(out: &mut W, inventory: &Inventory) -> Result<()> {
    writeln!(out, "{}", RULE)?;
    writeln!(out, "Pet name - Owner name - Owner address for multi-pet owner")?;
    writeln!(out, "{}", RULE)?;
    for group in multi_pet_owners(inventory.records()) {
        writeln!(
            out,
            "{} lives in {} and has {} pets. The pet names are:",
            group.owner_name, group.address, group.pet_count
        )?;
        for name in &group.pet_names {
            writeln!(out, "  - {}", name)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Amphibian, Fish, Mammal, Owner, Pet, ScaleCondition, YesNo};

    fn dob() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()
    }

    fn pet(name: &str, owner: &str, address: &str, weight: f64) -> Pet {
        Pet::new(name, dob(), weight, Owner::new(owner, address)).unwrap()
    }

    fn mammal(name: &str, owner: &str, address: &str) -> PetRecord {
        PetRecord::from(Mammal {
            pet: pet(name, owner, address, 16.0),
            litter_size: 3,
            has_claws: YesNo::Yes,
        })
    }

    fn fish(name: &str, owner: &str, address: &str) -> PetRecord {
        PetRecord::from(Fish {
            pet: pet(name, owner, address, 8.0),
            scale_condition: ScaleCondition::Smooth,
            length_inches: 4,
        })
    }

    #[test]
    fn test_multi_pet_owner_uses_last_address() {
        let records = vec![
            mammal("A", "Jo", "X"),
            fish("B", "Jo", "Y"),
            mammal("C", "Sam", "Z"),
        ];

        let groups = multi_pet_owners(&records);

        assert_eq!(
            groups,
            vec![OwnerGroup {
                owner_name: "Jo".to_string(),
                address: "Y".to_string(),
                pet_count: 2,
                pet_names: vec!["A".to_string(), "B".to_string()],
            }]
        );
    }

    #[test]
    fn test_groups_follow_first_appearance() {
        let records = vec![
            mammal("A", "Sam", "Z"),
            mammal("B", "Jo", "X"),
            fish("C", "Jo", "X"),
            fish("D", "Sam", "Z2"),
            mammal("E", "Lee", "Q"),
        ];

        let groups = multi_pet_owners(&records);
        let names: Vec<_> = groups.iter().map(|g| g.owner_name.as_str()).collect();
        assert_eq!(names, ["Sam", "Jo"]);
        assert_eq!(groups[0].pet_names, ["A", "D"]);
        assert_eq!(groups[0].address, "Z2");
    }

    #[test]
    fn test_no_groups_for_single_pet_owners() {
        let records = vec![mammal("A", "Jo", "X"), mammal("B", "Sam", "Y")];
        assert!(multi_pet_owners(&records).is_empty());
        assert!(multi_pet_owners(&[]).is_empty());
    }

    #[test]
    fn test_write_multi_pet_owners() {
        let inventory = Inventory::new(vec![mammal("A", "Jo", "X"), fish("B", "Jo", "Y")]);
        let mut out = Vec::new();
        write_multi_pet_owners(&mut out, &inventory).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Jo lives in Y and has 2 pets. The pet names are:\n  - A\n  - B\n\n"));
    }

    #[test]
    fn test_current_weights_in_pounds() {
        let inventory = Inventory::new(vec![mammal("A", "Jo", "X"), fish("B", "Jo", "X")]);
        // 60 天：哺乳類一個週期，魚類還沒到
        let today = dob() + chrono::Days::new(60);

        let lines = current_weights(&inventory, today);
        assert_eq!(lines.len(), 2);
        assert!((lines[0].pounds - 1.1).abs() < 1e-9);
        assert!((lines[1].pounds - 0.5).abs() < 1e-9);

        let mut out = Vec::new();
        write_current_weights(&mut out, &inventory, today).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("A's cur_weight in pounds is 1.10\n"));
        assert!(text.contains("B's cur_weight in pounds is 0.50\n"));
    }

    #[test]
    fn test_full_listing_sections() {
        let frog = PetRecord::from(Amphibian {
            pet: pet("Hop", "Lee", "Pond", 1.5),
            num_limbs: 4,
            is_venomous: YesNo::No,
        });
        let inventory = Inventory::new(vec![fish("B", "Jo", "X"), frog, mammal("A", "Jo", "X")]);

        let mut out = Vec::new();
        write_full_listing(&mut out, &inventory).unwrap();
        let text = String::from_utf8(out).unwrap();

        let mammals = text.find("Data of all Mammals").unwrap();
        let fish_at = text.find("Data of all Fish").unwrap();
        let amphibians = text.find("Data of all Amphibians").unwrap();
        assert!(mammals < fish_at && fish_at < amphibians);

        let a_line = text.find("A | 2023-01-01 | 16.0 | Jo | X | 3 | y").unwrap();
        assert!(mammals < a_line && a_line < fish_at);
        assert!(text.contains("Hop | 2023-01-01 | 1.5 | Lee | Pond | 4 | n"));
    }
}
