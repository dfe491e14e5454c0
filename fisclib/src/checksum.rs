//! Контрольная сумма и правила валидности записи.
//!
//! Сумма — структурный отпечаток: поля склеиваются в одну строку
//! (item_code, internal_price, discount, sale_price, quantity — в этом
//! порядке, без разделителей), затем считаются символы по классам:
//! заглавные, строчные, цифры-или-точка. Результат — сумма трёх счётчиков
//! в десятичной записи. Формула намеренно слабая, но внешние файлы несут
//! именно её значения, поэтому воспроизводится дословно.

use rust_decimal::Decimal;

pub fn compute(
    item_code: &str,
    internal_price: Decimal,
    discount: Decimal,
    sale_price: Decimal,
    quantity: i64,
) -> String {
    let line = format!("{item_code}{internal_price}{discount}{sale_price}{quantity}");

    let mut upper = 0u32;
    let mut lower = 0u32;
    let mut digit = 0u32;
    for c in line.chars() {
        if c.is_uppercase() {
            upper += 1;
        } else if c.is_lowercase() {
            lower += 1;
        } else if c.is_ascii_digit() || c == '.' {
            digit += 1;
        }
    }
    (upper + lower + digit).to_string()
}

/// true, если item_code содержит символ вне [A-Za-z0-9_].
pub fn has_special_chars(item_code: &str) -> bool {
    item_code
        .chars()
        .any(|c| !(c.is_ascii_alphanumeric() || c == '_'))
}
