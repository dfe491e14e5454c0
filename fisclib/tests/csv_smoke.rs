use fisclib::{
    error::FiscError,
    formats::delimited::{read_delimited, Csv, Tsv},
    ledger::{InputFormat, Ledger},
    traits::ReadFormat,
};
use rust_decimal::Decimal;
use std::io::{Cursor, Write};

fn d(s: &str) -> Decimal {
    Decimal::from_str_exact(s).unwrap()
}

#[test]
fn csv_two_rows_in_file_order() {
    let input = "\
bill_number,item_code,sale_price,quantity,line_total,discount,internal_price,checksum
B001,ITEM1,100.0,2,200.0,10.0,80.0,CHECK1
B002,ITEM2,50.0,3,150.0,5.0,40.0,CHECK2
";
    let recs = Csv::read(Cursor::new(input)).expect("read csv");
    assert_eq!(recs.len(), 2);

    let first = &recs[0];
    assert_eq!(first.bill_number(), "B001");
    assert_eq!(first.item_code(), "ITEM1");
    assert_eq!(first.sale_price(), d("100.0"));
    assert_eq!(first.quantity(), 2);
    assert_eq!(first.line_total(), d("200.0"));
    assert_eq!(first.discount(), d("10.0"));
    assert_eq!(first.internal_price(), d("80.0"));
    assert_eq!(first.checksum(), "CHECK1");
    assert!(!first.is_valid());

    assert_eq!(recs[1].bill_number(), "B002");
}

#[test]
fn csv_row_with_true_checksum_is_valid() {
    // отпечаток "ITEM1" + "80.0" + "10.0" + "100.0" + "2" = 19
    let input = "\
bill_number,item_code,sale_price,quantity,line_total,discount,internal_price,checksum
B001,ITEM1,100.0,2,200.0,10.0,80.0,19
";
    let recs = Csv::read(Cursor::new(input)).expect("read csv");
    assert_eq!(recs.len(), 1);
    assert!(recs[0].is_valid());
}

#[test]
fn tsv_reads_with_tab_delimiter() {
    let input = "\
bill_number\titem_code\tsale_price\tquantity\tline_total\tdiscount\tinternal_price\tchecksum
B003\tITEM3\t75.0\t4\t300.0\t15.0\t60.0\tCHECK3
B004\tITEM4\t120.0\t1\t120.0\t20.0\t90.0\tCHECK4
";
    let recs = Tsv::read(Cursor::new(input)).expect("read tsv");
    assert_eq!(recs.len(), 2);

    let second = &recs[1];
    assert_eq!(second.bill_number(), "B004");
    assert_eq!(second.sale_price(), d("120.0"));
    assert_eq!(second.quantity(), 1);
    assert_eq!(second.internal_price(), d("90.0"));
}

#[test]
fn short_row_is_skipped_without_error() {
    let input = "\
bill_number,item_code,sale_price
B005,ITEM5,200.0
";
    let recs = Csv::read(Cursor::new(input)).expect("read csv");
    assert!(recs.is_empty());
}

#[test]
fn unparsable_numeric_row_is_skipped() {
    let input = "\
bill_number,item_code,sale_price,quantity,line_total,discount,internal_price,checksum
B001,ITEM1,100.0,two,200.0,10.0,80.0,CHECK1
B002,ITEM2,50.0,3,150.0,5.0,40.0,CHECK2
";
    let recs = Csv::read(Cursor::new(input)).expect("read csv");
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].bill_number(), "B002");
}

#[test]
fn header_only_file_yields_empty() {
    let input = "bill_number,item_code,sale_price,quantity,line_total,discount,internal_price,checksum\n";
    let recs = Csv::read(Cursor::new(input)).expect("read csv");
    assert!(recs.is_empty());
}

#[test]
fn empty_input_yields_empty() {
    let recs = read_delimited(Cursor::new(""), b',').expect("read empty");
    assert!(recs.is_empty());
}

#[test]
fn import_path_reads_real_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "bill_number,item_code,sale_price,quantity,line_total,discount,internal_price,checksum\n\
         B001,ITEM1,100.0,2,200.0,10.0,80.0,CHECK1\n\
         B002,ITEM2,50.0,3,150.0,5.0,40.0,CHECK2\n"
    )
    .unwrap();

    let mut ledger = Ledger::new();
    let n = ledger
        .import_path(InputFormat::Csv, file.path())
        .expect("import csv");
    assert_eq!(n, 2);
    assert_eq!(ledger.len(), 2);
}

#[test]
fn import_path_missing_file_is_not_found() {
    let mut ledger = Ledger::new();
    let err = ledger
        .import_path(InputFormat::Csv, "nonexistent.csv")
        .unwrap_err();
    assert!(matches!(err, FiscError::NotFound(_)));
    assert!(ledger.is_empty());
}
