//! Унифицированный трэйт чтения формата на основе std::io::BufRead.

use crate::{error::Result, model::Record};
use std::io::BufRead;

pub trait ReadFormat {
    fn read<R: BufRead>(r: R) -> Result<Vec<Record>>;
}
