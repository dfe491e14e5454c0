//! JSON: весь вход — один массив объектов с восемью ключами
//! (bill_number, item_code, sale_price, quantity, line_total, discount,
//! internal_price, checksum).
//!
//! В отличие от построчных форматов разбор «всё или ничего»: пропущенный
//! ключ или неверный тип в любом элементе обрывает весь импорт.

use crate::{
    error::Result,
    model::{RawRecord, Record},
};
use std::io::BufRead;

pub struct Json;

impl crate::traits::ReadFormat for Json {
    fn read<R: BufRead>(r: R) -> Result<Vec<Record>> {
        let raw: Vec<RawRecord> = serde_json::from_reader(r)?;
        Ok(raw.into_iter().map(Record::new).collect())
    }
}
