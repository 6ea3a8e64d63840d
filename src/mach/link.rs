use super::{Address, Opcode, MAX_LABELS, SLOT};
use crate::error;
use crate::lang::Error;
use std::collections::HashMap;

type Result<T> = std::result::Result<T, Error>;

/// ## Label table
///
/// Every label gets a stable index the first time it is mentioned.
/// Address-carrying instructions hold that index until [`Link::fixup`]
/// swaps it for the offset of the label's last definition.

#[derive(Debug, Default)]
pub struct Link {
    index: HashMap<String, usize>,
    names: Vec<String>,
    offsets: Vec<Option<Address>>,
}

impl Link {
    pub fn new() -> Link {
        Link::default()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn resolve_or_create(&mut self, name: &str) -> Result<usize> {
        if let Some(index) = self.index.get(name) {
            return Ok(*index);
        }
        if self.names.len() >= MAX_LABELS {
            return Err(error!(TooManyLabels));
        }
        let index = self.names.len();
        self.index.insert(name.to_string(), index);
        self.names.push(name.to_string());
        self.offsets.push(None);
        Ok(index)
    }

    /// Point `name` at `addr`. A later definition wins.
    pub fn define(&mut self, name: &str, addr: Address) -> Result<usize> {
        let index = self.resolve_or_create(name)?;
        self.offsets[index] = Some(addr);
        Ok(index)
    }

    /// Resolved offset of a label. Never defined labels resolve to 0.
    pub fn offset(&self, index: usize) -> Option<Address> {
        self.offsets.get(index).map(|offset| offset.unwrap_or(0))
    }

    pub fn is_defined(&self, name: &str) -> bool {
        match self.index.get(name) {
            Some(index) => self.offsets[*index].is_some(),
            None => false,
        }
    }

    pub fn undefined(&self) -> Vec<String> {
        self.names
            .iter()
            .zip(self.offsets.iter())
            .filter(|(_, offset)| offset.is_none())
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Defined labels ordered by offset.
    pub fn symbols(&self) -> Vec<(Address, String)> {
        let mut symbols: Vec<(Address, String)> = self
            .names
            .iter()
            .zip(self.offsets.iter())
            .filter_map(|(name, offset)| offset.map(|addr| (addr, name.clone())))
            .collect();
        symbols.sort();
        symbols
    }

    /// Rewrites the label index of every address-carrying instruction in
    /// `code` to the label's offset. Returns how many were rewritten.
    pub fn fixup(&self, code: &mut [u8]) -> Result<usize> {
        let mut count = 0;
        for slot in code.chunks_exact_mut(SLOT) {
            let op = Opcode::decode(slot)?;
            if let Some(index) = op.address() {
                let addr = match self.offset(index as usize) {
                    Some(addr) => addr,
                    None => return Err(error!(InternalError; "LINK FAILURE")),
                };
                slot.copy_from_slice(&op.with_address(addr).encode());
                count += 1;
            }
        }
        Ok(count)
    }
}
