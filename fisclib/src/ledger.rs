//! Реестр записей: упорядоченная коллекция, импорт из файла,
//! массовое удаление по предикату и сводка.

use crate::{
    error::{FiscError, Result},
    formats::{delimited, json::Json, xml::Xml},
    model::Record,
    traits::ReadFormat,
};
use rust_decimal::Decimal;
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Формат входа выбирает вызывающий; автоопределения нет.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputFormat {
    Csv,
    Tsv,
    Json,
    Xml,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Total: {}, Valid: {}, Invalid: {}",
            self.total, self.valid, self.invalid
        )
    }
}

/// Порядок вставки сохраняется; записи удаляются только массовыми
/// операциями или полной очисткой.
#[derive(Debug, Default, Clone)]
pub struct Ledger {
    records: Vec<Record>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn push(&mut self, rec: Record) {
        self.records.push(rec);
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Импорт файла целиком. Несуществующий путь — `NotFound` до попытки
    /// чтения. Содержимое реестра заменяется только после успешного
    /// разбора, так что фатальная ошибка оставляет прежние записи.
    /// Возвращает число импортированных записей.
    pub fn import_path<P: AsRef<Path>>(&mut self, format: InputFormat, path: P) -> Result<usize> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(FiscError::NotFound(path.to_path_buf()));
        }
        let file = BufReader::new(File::open(path)?);

        let records = match format {
            InputFormat::Csv => delimited::Csv::read(file),
            InputFormat::Tsv => delimited::Tsv::read(file),
            InputFormat::Json => Json::read(file),
            InputFormat::Xml => Xml::read(file),
        }?;

        let n = records.len();
        self.records = records;
        Ok(n)
    }

    /// Удаляет все записи, удовлетворяющие предикату; порядок остальных
    /// сохраняется. Возвращает число удалённых.
    pub fn remove_where<F>(&mut self, mut pred: F) -> usize
    where
        F: FnMut(&Record) -> bool,
    {
        let before = self.records.len();
        self.records.retain(|r| !pred(r));
        before - self.records.len()
    }

    pub fn remove_invalid(&mut self) -> usize {
        self.remove_where(|r| !r.is_valid())
    }

    /// Удаляет записи с прибылью, равной точно нулю — без допуска:
    /// прибыль детерминирована арифметикой над уже разобранными числами.
    pub fn remove_zero_profit(&mut self) -> usize {
        self.remove_where(|r| r.profit() == Decimal::ZERO)
    }

    pub fn summarize(&self) -> Summary {
        let valid = self.records.iter().filter(|r| r.is_valid()).count();
        Summary {
            total: self.records.len(),
            valid,
            invalid: self.records.len() - valid,
        }
    }
}
