//! Доменная модель — единый «нормализованный» слой между форматами.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::checksum;

/// Восемь полей, как они приходят из файла, до вывода производных.
/// Парсеры всех форматов строят именно этот кортеж.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RawRecord {
    pub bill_number: String,
    pub item_code: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub sale_price: Decimal,
    pub quantity: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub line_total: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub discount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub internal_price: Decimal,
    pub checksum: String,
}

/// Нормализованная транзакция. `is_valid` и `profit` вычисляются один раз
/// в конструкторе и далее не меняются: полей-сеттеров нет, запись
/// неизменяема после создания.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    bill_number: String,
    item_code: String,
    sale_price: Decimal,
    quantity: i64,
    line_total: Decimal,
    discount: Decimal,
    internal_price: Decimal,
    checksum: String,
    is_valid: bool,
    profit: Decimal,
}

impl Record {
    pub fn new(raw: RawRecord) -> Self {
        let computed = checksum::compute(
            &raw.item_code,
            raw.internal_price,
            raw.discount,
            raw.sale_price,
            raw.quantity,
        );
        let is_valid = computed == raw.checksum
            && !checksum::has_special_chars(&raw.item_code)
            && raw.internal_price >= Decimal::ZERO;

        let qty = Decimal::from(raw.quantity);
        // себестоимость минус чистая выручка; скидка уменьшает выручку
        let profit = raw.internal_price * qty - (raw.sale_price * qty - raw.discount);

        Record {
            bill_number: raw.bill_number,
            item_code: raw.item_code,
            sale_price: raw.sale_price,
            quantity: raw.quantity,
            line_total: raw.line_total,
            discount: raw.discount,
            internal_price: raw.internal_price,
            checksum: raw.checksum,
            is_valid,
            profit,
        }
    }

    pub fn bill_number(&self) -> &str {
        &self.bill_number
    }

    pub fn item_code(&self) -> &str {
        &self.item_code
    }

    pub fn sale_price(&self) -> Decimal {
        self.sale_price
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn line_total(&self) -> Decimal {
        self.line_total
    }

    pub fn discount(&self) -> Decimal {
        self.discount
    }

    pub fn internal_price(&self) -> Decimal {
        self.internal_price
    }

    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn profit(&self) -> Decimal {
        self.profit
    }

    /// Фиксированная проекция для табличного вывода; порядок колонок
    /// закреплён, рефлексии по именам полей нет.
    pub fn display_row(&self) -> [String; 10] {
        [
            self.bill_number.clone(),
            self.item_code.clone(),
            self.sale_price.to_string(),
            self.quantity.to_string(),
            self.line_total.to_string(),
            self.discount.to_string(),
            self.internal_price.to_string(),
            self.checksum.clone(),
            self.is_valid.to_string(),
            self.profit.to_string(),
        ]
    }
}

impl From<RawRecord> for Record {
    fn from(raw: RawRecord) -> Self {
        Record::new(raw)
    }
}
