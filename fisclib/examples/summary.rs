use fisclib::{formats::delimited::Csv, ledger::Ledger, traits::ReadFormat};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Пример: читаем CSV со stdin и печатаем сводку
    let records = Csv::read(std::io::BufReader::new(std::io::stdin()))?;

    let mut ledger = Ledger::new();
    for rec in records {
        ledger.push(rec);
    }
    println!("{}", ledger.summarize());
    Ok(())
}
