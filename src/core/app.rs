use crate::core::capture::{capture_shoe, prompt_until_valid};
use crate::core::console::Console;
use crate::core::inventory::Inventory;
use crate::core::report::{describe_shoe, render_table, valuation_line};
use crate::domain::ports::{ConfigProvider, Storage};
use crate::utils::error::{InventoryError, Result};
use crate::utils::validation::parse_non_negative;
use std::io::{BufRead, Write};

const MENU: &str = "\nWould you like to:
        1. View all shoes
        2. Capture a shoe
        3. Restock shoes
        4. Search for a shoe
        5. Show total value of all shoes
        6. Show for sale item
        7. Quit

        Enter selection: ";

const EMPTY_INVENTORY: &str = "The inventory is empty.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuSelection {
    ViewAll,
    Capture,
    Restock,
    Search,
    TotalValue,
    ForSale,
    Quit,
}

impl MenuSelection {
    pub fn from_number(number: i64) -> Option<Self> {
        match number {
            1 => Some(Self::ViewAll),
            2 => Some(Self::Capture),
            3 => Some(Self::Restock),
            4 => Some(Self::Search),
            5 => Some(Self::TotalValue),
            6 => Some(Self::ForSale),
            7 => Some(Self::Quit),
            _ => None,
        }
    }
}

fn is_integer_literal(text: &str) -> bool {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// The interactive session. Owns the inventory for its whole lifetime and
/// hands it to each operation.
pub struct InventoryApp<S: Storage, C: ConfigProvider, R, W> {
    storage: S,
    config: C,
    console: Console<R, W>,
    inventory: Inventory,
}

impl<S, C, R, W> InventoryApp<S, C, R, W>
where
    S: Storage,
    C: ConfigProvider,
    R: BufRead,
    W: Write,
{
    /// Loads the inventory. A missing backing file is reported on the
    /// console and the session starts empty; any other load error is
    /// returned.
    pub fn open(storage: S, config: C, mut console: Console<R, W>) -> Result<Self> {
        let inventory = match Inventory::load(&storage) {
            Ok(inventory) => {
                tracing::info!("Loaded {} shoes from {}", inventory.len(), storage.location());
                inventory
            }
            Err(e @ InventoryError::FileNotFoundError { .. }) => {
                tracing::warn!("{}", e);
                console.say(e.user_friendly_message())?;
                Inventory::default()
            }
            Err(e) => return Err(e),
        };

        Ok(Self {
            storage,
            config,
            console,
            inventory,
        })
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn console(&self) -> &Console<R, W> {
        &self.console
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Menu loop. Returns after "Quit" or when input runs out.
    pub fn run(&mut self) -> Result<()> {
        loop {
            let Some(answer) = self.console.prompt(MENU)? else {
                tracing::info!("Input closed, leaving menu");
                return Ok(());
            };

            let selection = match answer.trim().parse::<i64>() {
                Ok(number) => MenuSelection::from_number(number),
                // 超出 i64 範圍的整數仍算整數，只是不在選單內
                Err(_) if is_integer_literal(answer.trim()) => None,
                Err(_) => {
                    self.console.say("Invalid input. Select a valid number")?;
                    continue;
                }
            };

            match selection {
                Some(MenuSelection::Quit) => {
                    self.console.say("Goodbye!")?;
                    return Ok(());
                }
                Some(selection) => {
                    if let Err(e) = self.dispatch(selection) {
                        tracing::error!("{:?} failed: {}", selection, e);
                        self.console.say(format!("❌ {}", e.user_friendly_message()))?;
                    }
                }
                None => self.console.say("Invalid input given. Select a valid number")?,
            }
        }
    }

    pub fn dispatch(&mut self, selection: MenuSelection) -> Result<()> {
        tracing::debug!("Menu selection: {:?}", selection);
        match selection {
            MenuSelection::ViewAll => self.view_all(),
            MenuSelection::Capture => self.capture(),
            MenuSelection::Restock => self.restock(),
            MenuSelection::Search => self.search(),
            MenuSelection::TotalValue => self.show_values(),
            MenuSelection::ForSale => self.show_for_sale(),
            MenuSelection::Quit => Ok(()),
        }
    }

    pub fn view_all(&mut self) -> Result<()> {
        let table = render_table(self.inventory.shoes(), self.config.currency_symbol());
        self.console.say(table)
    }

    pub fn capture(&mut self) -> Result<()> {
        let Some(shoe) = capture_shoe(&mut self.console)? else {
            tracing::debug!("Capture cancelled");
            return Ok(());
        };

        self.inventory.add(shoe);
        self.console.say("Shoe successfully captured.")?;

        if self.config.persist_on_add() {
            self.inventory.save(&self.storage)?;
            self.console.say("Inventory file updated successfully")?;
        }
        Ok(())
    }

    pub fn restock(&mut self) -> Result<()> {
        let Some(index) = self.inventory.lowest_stock_index() else {
            return self.console.say(EMPTY_INVENTORY);
        };
        let target = self.inventory.shoes()[index].clone();
        let symbol = self.config.currency_symbol();

        self.console.say("\nThe following shoe has the lowest stock: ")?;
        self.console.say(describe_shoe(&target, symbol))?;

        let confirmed = self
            .console
            .prompt("Would you like to restock the above shoe?(Y/N) ")?
            .is_some_and(|answer| answer.trim().eq_ignore_ascii_case("y"));
        if !confirmed {
            return self.console.say("Restock cancelled");
        }

        let Some(amount) = prompt_until_valid(
            &mut self.console,
            "Enter the amount you want to restock with(or 'x' to cancel): ",
            "Restock cancelled.",
            |input| parse_non_negative("restock amount", input),
        )?
        else {
            return Ok(());
        };

        if let Some(quantity) = self.inventory.restock(index, amount) {
            self.console.say(format!("Updated quantity: {}", quantity))?;
        }

        self.inventory.save(&self.storage)?;
        tracing::info!("Restocked {} and rewrote {}", target.code, self.storage.location());
        self.console.say("Inventory file updated successfully")
    }

    pub fn search(&mut self) -> Result<()> {
        let Some(answer) = self
            .console
            .prompt("Enter the shoe code for the shoe you are looking for: ")?
        else {
            return Ok(());
        };
        let code = answer.trim().to_uppercase();

        match self.inventory.find_by_code(&code) {
            Some(shoe) => {
                let line = describe_shoe(shoe, self.config.currency_symbol());
                self.console.say("Shoe found!")?;
                self.console.say(line)
            }
            None => self.console.say("Invalid code or shoe not found"),
        }
    }

    pub fn show_values(&mut self) -> Result<()> {
        let symbol = self.config.currency_symbol();
        for (code, value) in self.inventory.valuations() {
            self.console.say(valuation_line(code, value, symbol))?;
        }
        Ok(())
    }

    pub fn show_for_sale(&mut self) -> Result<()> {
        let Some(shoe) = self.inventory.highest_stock() else {
            return self.console.say(EMPTY_INVENTORY);
        };
        let line = describe_shoe(shoe, self.config.currency_symbol());
        self.console.say(format!("The following item is on sale:\n{}", line))
    }
}
