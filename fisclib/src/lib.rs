//! fisclib — библиотека импорта и проверки налоговых транзакций (CSV/TSV, JSON, XML)

pub mod error;
pub mod model;
pub mod checksum;
pub mod ledger;
pub mod traits;

pub mod formats {
    pub mod delimited;
    pub mod json;
    pub mod xml;
}
