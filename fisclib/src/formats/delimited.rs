//! Построчные форматы (CSV/TSV): заголовок пропускается, дальше ровно
//! 8 полей на строку:
//! bill_number,item_code,sale_price,quantity,line_total,discount,internal_price,checksum
//!
//! Политика терпимости к строкам: неверное число полей или нечисловое
//! значение — строка молча отбрасывается, импорт продолжается. Фатальна
//! только ошибка ввода-вывода посреди потока.

use crate::{
    error::{FiscError, Result},
    model::{RawRecord, Record},
};
use csv::ReaderBuilder;
use rust_decimal::Decimal;
use std::io::BufRead;

pub fn read_delimited<R: BufRead>(r: R, delimiter: u8) -> Result<Vec<Record>> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .quoting(false) // исходный формат режет строку по буквальному разделителю
        .from_reader(r);

    let mut records = Vec::new();
    for rec in rdr.records() {
        let row = match rec {
            Ok(row) => row,
            Err(e) => match e.into_kind() {
                csv::ErrorKind::Io(io) => return Err(FiscError::Io(io)),
                _ => continue,
            },
        };
        if row.len() != 8 {
            continue;
        }
        if let Some(raw) = parse_row(&row) {
            records.push(Record::new(raw));
        }
    }
    Ok(records)
}

// None при любой ошибке разбора — строка просто пропускается
fn parse_row(row: &csv::StringRecord) -> Option<RawRecord> {
    Some(RawRecord {
        bill_number: row.get(0)?.to_string(),
        item_code: row.get(1)?.to_string(),
        sale_price: row.get(2)?.parse::<Decimal>().ok()?,
        quantity: row.get(3)?.parse::<i64>().ok()?,
        line_total: row.get(4)?.parse::<Decimal>().ok()?,
        discount: row.get(5)?.parse::<Decimal>().ok()?,
        internal_price: row.get(6)?.parse::<Decimal>().ok()?,
        checksum: row.get(7)?.to_string(),
    })
}

pub struct Csv;

impl crate::traits::ReadFormat for Csv {
    fn read<R: BufRead>(r: R) -> Result<Vec<Record>> {
        read_delimited(r, b',')
    }
}

pub struct Tsv;

impl crate::traits::ReadFormat for Tsv {
    fn read<R: BufRead>(r: R) -> Result<Vec<Record>> {
        read_delimited(r, b'\t')
    }
}
