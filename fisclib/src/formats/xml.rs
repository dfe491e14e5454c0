//! XML: каждый элемент <Transaction> на любой глубине — одна запись,
//! поля — дочерние элементы с фиксированными именами. Разбор
//! «всё или ничего»: отсутствующий дочерний элемент или нечисловой текст
//! обрывают весь импорт. Порядок документа сохраняется.

use crate::{
    error::{FiscError, Result},
    model::{RawRecord, Record},
};
use quick_xml::{events::Event, Reader};
use rust_decimal::Decimal;
use std::io::BufRead;

pub struct Xml;

/// Накопитель текстов дочерних элементов текущего <Transaction>.
#[derive(Default)]
struct Fields {
    bill_number: Option<String>,
    item_code: Option<String>,
    sale_price: Option<String>,
    quantity: Option<String>,
    line_total: Option<String>,
    discount: Option<String>,
    internal_price: Option<String>,
    checksum: Option<String>,
}

impl Fields {
    fn slot(&mut self, tag: &[u8]) -> Option<&mut Option<String>> {
        match tag {
            b"bill_number" => Some(&mut self.bill_number),
            b"item_code" => Some(&mut self.item_code),
            b"sale_price" => Some(&mut self.sale_price),
            b"quantity" => Some(&mut self.quantity),
            b"line_total" => Some(&mut self.line_total),
            b"discount" => Some(&mut self.discount),
            b"internal_price" => Some(&mut self.internal_price),
            b"checksum" => Some(&mut self.checksum),
            _ => None,
        }
    }

    fn finish(self) -> Result<RawRecord> {
        fn take(v: Option<String>, tag: &str) -> Result<String> {
            v.ok_or_else(|| FiscError::Parse(format!("Transaction missing <{tag}>")))
        }
        fn decimal(s: String, tag: &str) -> Result<Decimal> {
            s.parse()
                .map_err(|e| FiscError::Parse(format!("{tag}: {e}")))
        }

        Ok(RawRecord {
            bill_number: take(self.bill_number, "bill_number")?,
            item_code: take(self.item_code, "item_code")?,
            sale_price: decimal(take(self.sale_price, "sale_price")?, "sale_price")?,
            quantity: take(self.quantity, "quantity")?
                .parse()
                .map_err(|e| FiscError::Parse(format!("quantity: {e}")))?,
            line_total: decimal(take(self.line_total, "line_total")?, "line_total")?,
            discount: decimal(take(self.discount, "discount")?, "discount")?,
            internal_price: decimal(
                take(self.internal_price, "internal_price")?,
                "internal_price",
            )?,
            checksum: take(self.checksum, "checksum")?,
        })
    }
}

impl crate::traits::ReadFormat for Xml {
    fn read<R: BufRead>(r: R) -> Result<Vec<Record>> {
        let mut reader = Reader::from_reader(r);
        reader.trim_text(true);

        let mut records = Vec::new();
        let mut buf = Vec::new();

        let mut pending: Option<Fields> = None;
        // имя дочернего элемента, чей текст читается сейчас
        let mut current: Vec<u8> = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => {
                    let name = e.local_name();
                    if name.as_ref() == b"Transaction" {
                        pending = Some(Fields::default());
                        current.clear();
                    } else if let Some(f) = pending.as_mut() {
                        if let Some(slot) = f.slot(name.as_ref()) {
                            // пустой элемент даёт пустую строку, не отсутствие
                            *slot = Some(String::new());
                            current = name.as_ref().to_vec();
                        }
                    }
                }
                Ok(Event::Text(t)) => {
                    if !current.is_empty() {
                        let text = t.unescape().map_err(|e| FiscError::Xml(e.to_string()))?;
                        if let Some(slot) =
                            pending.as_mut().and_then(|f| f.slot(&current))
                        {
                            if let Some(s) = slot.as_mut() {
                                s.push_str(&text);
                            }
                        }
                    }
                }
                // <tag/> эквивалентен <tag></tag>
                Ok(Event::Empty(e)) => {
                    if let Some(slot) = pending
                        .as_mut()
                        .and_then(|f| f.slot(e.local_name().as_ref()))
                    {
                        *slot = Some(String::new());
                    }
                }
                Ok(Event::End(e)) => {
                    let name = e.local_name();
                    if name.as_ref() == b"Transaction" {
                        if let Some(f) = pending.take() {
                            records.push(Record::new(f.finish()?));
                        }
                    } else if name.as_ref() == current.as_slice() {
                        current.clear();
                    }
                }
                Ok(Event::Eof) => {
                    // Reader не считает оборванный документ ошибкой сам
                    if pending.is_some() {
                        return Err(FiscError::Xml(
                            "unexpected EOF inside <Transaction>".into(),
                        ));
                    }
                    break;
                }
                Err(e) => return Err(FiscError::Xml(e.to_string())),
                _ => {}
            }
            buf.clear();
        }
        Ok(records)
    }
}
