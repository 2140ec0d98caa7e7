use crate::core::inventory::Inventory;
use crate::core::report;
use crate::core::store::InventoryStore;
use crate::domain::model::{
    Amphibian, Category, Fish, Mammal, Owner, Pet, PetRecord, ScaleCondition, YesNo,
};
use crate::domain::ports::{ConfigProvider, PetProfile, Storage};
use crate::utils::error::{InventoryError, Result};
use crate::utils::input::{Constraint, Prompter};
use chrono::{Local, NaiveDate};
use std::io::{BufRead, Write};

const MENU: &str = "==== Menu ====
1. To add a pet
2. To print pet information for all pet in the database
3. To print pet name and current weight of all pets in the database
4. To print pet name, owner name and owner address for all owners with more than one pet
5. To exit program";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddPet,
    ListAll,
    CurrentWeights,
    MultiPetOwners,
    Exit,
}

impl MenuChoice {
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(MenuChoice::AddPet),
            2 => Some(MenuChoice::ListAll),
            3 => Some(MenuChoice::CurrentWeights),
            4 => Some(MenuChoice::MultiPetOwners),
            5 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// The interactive loop. Owns the collection for the whole run; the store is
/// read when the app opens and written only on a confirmed exit.
pub struct InventoryApp<S: Storage, R, W> {
    store: InventoryStore<S>,
    inventory: Inventory,
    prompter: Prompter<R, W>,
    birth_years: (i32, i32),
    today: Option<NaiveDate>,
}

impl<S: Storage, R: BufRead, W: Write> InventoryApp<S, R, W> {
    pub fn open<C: ConfigProvider>(
        store: InventoryStore<S>,
        prompter: Prompter<R, W>,
        config: &C,
    ) -> Result<Self> {
        let inventory = store.load()?;
        Ok(Self {
            store,
            inventory,
            prompter,
            birth_years: config.birth_year_bounds(),
            today: None,
        })
    }

    /// Pins "today" for the current-weight report.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn into_prompter(self) -> Prompter<R, W> {
        self.prompter
    }

    /// Runs until the user confirms exit, which saves the collection.
    ///
    /// Any error leaves the data file untouched, so additions from this run
    /// are lost.
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.prompter.writer(), "{}", MENU)?;
            let code = self
                .prompter
                .read("Your selection: ", &Constraint::bounded(1, 5))?;

            match MenuChoice::from_code(code) {
                Some(MenuChoice::AddPet) => self.add_pet()?,
                Some(MenuChoice::ListAll) => {
                    report::write_full_listing(self.prompter.writer(), &self.inventory)?
                }
                Some(MenuChoice::CurrentWeights) => {
                    let today = self.today.unwrap_or_else(|| Local::now().date_naive());
                    report::write_current_weights(self.prompter.writer(), &self.inventory, today)?
                }
                Some(MenuChoice::MultiPetOwners) => {
                    report::write_multi_pet_owners(self.prompter.writer(), &self.inventory)?
                }
                Some(MenuChoice::Exit) => {
                    if self.confirm_exit()? {
                        self.store.save(&self.inventory)?;
                        return Ok(());
                    }
                }
                None => {
                    writeln!(
                        self.prompter.writer(),
                        "Invalid selection. Please enter appropriate number."
                    )?;
                }
            }
        }
    }

    fn confirm_exit(&mut self) -> Result<bool> {
        writeln!(self.prompter.writer(), "You chose to exit the program")?;
        let answer: String = self
            .prompter
            .read("Are you sure (Y/N)? ", &Constraint::one_of(["y", "n", "Y", "N"]))?;
        Ok(answer.to_lowercase() == "y")
    }

    fn add_pet(&mut self) -> Result<()> {
        let code = self.prompter.read(
            "Type of Pet? (1-Mammal;2-Fish;3-Amphibian) : ",
            &Constraint::bounded(1, 3),
        )?;
        let category = Category::from_menu_code(code).ok_or_else(|| {
            InventoryError::ValidationError {
                message: format!("unknown pet type {}", code),
            }
        })?;
        writeln!(self.prompter.writer(), "Adding a pet")?;

        let pet_name = self.prompter.read_text("Enter the pet's name: ")?;
        let date_of_birth = self.read_date_of_birth()?;
        let birth_weight: f64 = self.prompter.read(
            "Enter the birth weight for the pet in ounces: ",
            &Constraint::at_least(0.0),
        )?;
        let owner_name = self.prompter.read_text("Enter owner name: ")?;
        let owner_address = self.prompter.read_text("Enter owner address: ")?;

        let record = match category {
            Category::Mammal => {
                let litter_size = self
                    .prompter
                    .read("Enter litter size: ", &Constraint::at_least(0))?;
                let has_claws = self.read_yes_no("Does the pet have claws? Enter 'y' or 'n': ")?;
                let pet = Pet::new(
                    pet_name,
                    date_of_birth,
                    birth_weight,
                    Owner::new(owner_name, owner_address),
                )?;
                PetRecord::from(Mammal {
                    pet,
                    litter_size,
                    has_claws,
                })
            }
            Category::Fish => {
                let scale: String = self.prompter.read(
                    "Enter the scale condition. Only 'smooth' or 'rough' is allowed: ",
                    &Constraint::one_of(ScaleCondition::TOKENS),
                )?;
                let length_inches = self
                    .prompter
                    .read("Enter the length of pet in inches: ", &Constraint::at_least(0))?;
                let pet = Pet::new(
                    pet_name,
                    date_of_birth,
                    birth_weight,
                    Owner::new(owner_name, owner_address),
                )?;
                PetRecord::from(Fish {
                    pet,
                    scale_condition: scale.parse()?,
                    length_inches,
                })
            }
            Category::Amphibian => {
                let num_limbs = self.prompter.read(
                    "Enter the number of limbs for the pet: ",
                    &Constraint::at_least(0),
                )?;
                let is_venomous = self.read_yes_no("Is the pet venomous? Enter 'y' or 'n': ")?;
                let pet = Pet::new(
                    pet_name,
                    date_of_birth,
                    birth_weight,
                    Owner::new(owner_name, owner_address),
                )?;
                PetRecord::from(Amphibian {
                    pet,
                    num_limbs,
                    is_venomous,
                })
            }
        };

        tracing::info!(category = ?record.category(), name = %record.name(), "pet added");
        self.inventory.add(record);
        writeln!(self.prompter.writer(), "Pet added to database")?;
        Ok(())
    }

    fn read_yes_no(&mut self, prompt: &str) -> Result<YesNo> {
        let token: String = self
            .prompter
            .read(prompt, &Constraint::one_of(YesNo::TOKENS))?;
        token.parse()
    }

    /// Day is range-checked only (1-31); a combination that is not a real
    /// calendar date asks for the whole date again.
    fn read_date_of_birth(&mut self) -> Result<NaiveDate> {
        let (min_year, max_year) = self.birth_years;
        loop {
            let year = self.prompter.read(
                "Enter the pet's year of birth: ",
                &Constraint::bounded(min_year, max_year),
            )?;
            let month: i32 = self
                .prompter
                .read("Enter the pet's month of birth: ", &Constraint::bounded(1, 12))?;
            let day: i32 = self
                .prompter
                .read("Enter the pet's day of birth: ", &Constraint::bounded(1, 31))?;

            // month / day 已限制在正數範圍
            let (month, day) = (month as u32, day as u32);
            match NaiveDate::from_ymd_opt(year, month, day) {
                Some(date) => return Ok(date),
                None => {
                    let invalid = InventoryError::InvalidDate { year, month, day };
                    tracing::debug!("{}", invalid);
                    writeln!(self.prompter.writer(), "Input must be a valid calendar date.")?;
                }
            }
        }
    }
}
