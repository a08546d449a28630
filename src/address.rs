use crate::constants::*;

/// Represents the decomposed components of a logical address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VirtualAddress {
    pub raw: u16,
    pub page: u8,
    pub offset: u8,
}

impl VirtualAddress {
    /// Decompose a raw 16-bit address into page number and offset
    pub fn from_raw(raw: u16) -> Self {
        let page = (raw >> PAGE_SHIFT) as u8;
        let offset = (raw & OFFSET_MASK) as u8;

        VirtualAddress { raw, page, offset }
    }
}

impl std::fmt::Display for VirtualAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "VA({}) = (page={}, offset={})",
            self.raw, self.page, self.offset
        )
    }
}
