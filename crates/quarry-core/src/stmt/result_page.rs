use crate::{Error, Result};

/// Row window of a selection. A zero size means the selection is unpaged.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ResultPage {
    pub row_offset: u64,
    pub size: u64,
}

impl ResultPage {
    pub const fn new(row_offset: u64, size: u64) -> ResultPage {
        ResultPage { row_offset, size }
    }

    pub fn skip(mut self, rows: u64) -> ResultPage {
        self.row_offset = rows;
        self
    }

    pub fn take(mut self, rows: u64) -> ResultPage {
        self.size = rows;
        self
    }

    pub fn is_paged(&self) -> bool {
        self.size > 0
    }

    /// Moves to the 1-based page `page` of the current size.
    pub fn set_page(&mut self, page: u64) -> Result<()> {
        if page == 0 {
            return Err(Error::invalid_argument("page numbers start at 1"));
        }

        self.row_offset = (page - 1)
            .checked_mul(self.size)
            .ok_or_else(|| Error::invalid_argument(format!("page {page} is out of range")))?;

        Ok(())
    }

    /// The 1-based page the offset falls on, `None` when unpaged.
    pub fn page_number(&self) -> Option<u64> {
        if self.is_paged() {
            Some(self.row_offset / self.size + 1)
        } else {
            None
        }
    }
}
