//! Symbol vocabulary.

use std::collections::HashMap;

use tracing::{debug, warn};
use tts_core::{EncodeError, EncodeResult, SymbolInventory, TokenId, VocabularySource};

/// Immutable symbol → id table.
///
/// A symbol's id is its 0-based position in the inventory. A symbol listed
/// more than once keeps the id of its first occurrence; the later positions
/// stay reserved and decode to nothing.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    slots: Vec<Option<char>>,
    ids: HashMap<char, TokenId>,
}

impl Vocabulary {
    /// Build the vocabulary from an ordered symbol inventory.
    ///
    /// Duplicate symbols are logged and keep their first id. Fails only when
    /// the source supplies no symbols at all.
    pub fn build(source: &dyn VocabularySource) -> EncodeResult<Self> {
        let inventory = source.symbols();
        if inventory.is_empty() {
            return Err(EncodeError::config("symbol inventory is empty"));
        }

        let mut slots = Vec::with_capacity(inventory.len());
        let mut ids = HashMap::with_capacity(inventory.len());

        for (position, symbol) in inventory.into_iter().enumerate() {
            if let Some(&first_id) = ids.get(&symbol) {
                warn!(
                    symbol = %symbol,
                    first_id,
                    position,
                    "duplicate symbol in vocabulary inventory"
                );
                slots.push(None);
                continue;
            }
            ids.insert(symbol, position as TokenId);
            slots.push(Some(symbol));
        }

        debug!(size = slots.len(), distinct = ids.len(), "vocabulary built");
        Ok(Self { slots, ids })
    }

    /// The Kokoro vocabulary built from the default inventory.
    pub fn kokoro() -> EncodeResult<Self> {
        Self::build(&SymbolInventory::default())
    }

    /// Look up the id of a symbol.
    pub fn id_of(&self, symbol: char) -> Option<TokenId> {
        self.ids.get(&symbol).copied()
    }

    /// Look up the symbol for an id. Reserved duplicate positions give `None`.
    pub fn symbol_of(&self, id: TokenId) -> Option<char> {
        self.slots.get(id as usize).copied().flatten()
    }

    /// Check if a symbol is in the vocabulary.
    pub fn contains(&self, symbol: char) -> bool {
        self.ids.contains_key(&symbol)
    }

    /// Id of the pad symbol.
    pub fn pad_id(&self) -> TokenId {
        0
    }

    /// Size of the id space, reserved duplicate positions included.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always false for a built vocabulary.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of distinct symbols.
    pub fn distinct(&self) -> usize {
        self.ids.len()
    }

    /// `(id, symbol)` pairs in id order, skipping reserved positions.
    pub fn symbols(&self) -> impl Iterator<Item = (TokenId, char)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(id, slot)| slot.map(|symbol| (id as TokenId, symbol)))
    }

    /// Map text to ids, silently dropping characters outside the vocabulary.
    pub fn tokenize(&self, text: &str) -> Vec<TokenId> {
        text.chars().filter_map(|c| self.id_of(c)).collect()
    }

    /// Map ids back to text, skipping unknown ids.
    pub fn detokenize(&self, ids: &[TokenId]) -> String {
        ids.iter().filter_map(|&id| self.symbol_of(id)).collect()
    }
}
