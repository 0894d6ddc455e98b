use crate::domain::model::Shoe;
use crate::domain::ports::Storage;
use crate::utils::error::Result;

/// The session's shoes, in file order. Codes are not required to be unique;
/// every lookup by code takes the first match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    shoes: Vec<Shoe>,
}

impl Inventory {
    pub fn new(shoes: Vec<Shoe>) -> Self {
        Self { shoes }
    }

    pub fn load<S: Storage>(storage: &S) -> Result<Self> {
        storage.load().map(Self::new)
    }

    /// Rewrites the whole backing file.
    pub fn save<S: Storage>(&self, storage: &S) -> Result<()> {
        storage.save(&self.shoes)
    }

    pub fn shoes(&self) -> &[Shoe] {
        &self.shoes
    }

    pub fn len(&self) -> usize {
        self.shoes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shoes.is_empty()
    }

    pub fn add(&mut self, shoe: Shoe) {
        tracing::debug!("Adding {} to inventory", shoe.code);
        self.shoes.push(shoe);
    }

    /// First shoe holding the minimum quantity.
    pub fn lowest_stock(&self) -> Option<&Shoe> {
        self.lowest_stock_index().map(|index| &self.shoes[index])
    }

    pub fn lowest_stock_index(&self) -> Option<usize> {
        self.shoes
            .iter()
            .enumerate()
            .min_by_key(|(_, shoe)| shoe.quantity)
            .map(|(index, _)| index)
    }

    /// First shoe holding the maximum quantity.
    pub fn highest_stock(&self) -> Option<&Shoe> {
        // max_by_key would return the last of equal maxima
        self.shoes.iter().fold(None, |best: Option<&Shoe>, shoe| match best {
            Some(current) if current.quantity >= shoe.quantity => Some(current),
            _ => Some(shoe),
        })
    }

    pub fn find_by_code(&self, code: &str) -> Option<&Shoe> {
        self.shoes.iter().find(|shoe| shoe.code == code)
    }

    /// Adds `amount` to the shoe at `index`, then copies that whole record
    /// over the first shoe sharing its code (itself when codes are unique).
    /// Returns the new quantity, or `None` for an index out of range.
    pub fn restock(&mut self, index: usize, amount: u64) -> Option<u64> {
        let target = self.shoes.get_mut(index)?;
        target.quantity = target.quantity.saturating_add(amount);
        let updated = target.clone();

        if let Some(first) = self.shoes.iter().position(|shoe| shoe.code == updated.code) {
            if first != index {
                tracing::warn!(
                    "Duplicate code {}: line {} overwritten by restocked line {}",
                    updated.code,
                    first + 1,
                    index + 1
                );
                self.shoes[first] = updated.clone();
            }
        }

        tracing::debug!("Restocked {} by {} to {}", updated.code, amount, updated.quantity);
        Some(updated.quantity)
    }

    /// (code, cost × quantity) for every shoe, in order.
    pub fn valuations(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.shoes
            .iter()
            .map(|shoe| (shoe.code.as_str(), shoe.total_value()))
    }
}

impl From<Vec<Shoe>> for Inventory {
    fn from(shoes: Vec<Shoe>) -> Self {
        Self::new(shoes)
    }
}
