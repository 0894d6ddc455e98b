use crate::domain::model::Shoe;
use crate::utils::error::Result;

/// Where the inventory lives between sessions.
pub trait Storage {
    /// Reads every record in file order. A missing backing file is
    /// `InventoryError::FileNotFoundError`, not an empty list.
    fn load(&self) -> Result<Vec<Shoe>>;

    /// Replaces the whole backing file with `shoes`.
    fn save(&self, shoes: &[Shoe]) -> Result<()>;

    fn location(&self) -> String;
}

pub trait ConfigProvider {
    fn inventory_path(&self) -> &str;
    fn currency_symbol(&self) -> &str;
    fn persist_on_add(&self) -> bool;
}
