use clap::{Parser, ValueEnum};
use fisclib::{
    error::Result,
    ledger::{InputFormat, Ledger},
};
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Fmt {
    Csv,
    Tsv,
    Json,
    Xml,
}

impl From<Fmt> for InputFormat {
    fn from(f: Fmt) -> Self {
        match f {
            Fmt::Csv => InputFormat::Csv,
            Fmt::Tsv => InputFormat::Tsv,
            Fmt::Json => InputFormat::Json,
            Fmt::Xml => InputFormat::Xml,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "fisc", version, about = "Импорт и проверка налоговых транзакций")]
struct Cli {
    /// Входной файл
    #[arg(short = 'i', long = "input")]
    input: PathBuf,

    /// Формат входа
    #[arg(long = "format", value_enum)]
    format: Fmt,

    /// Удалить невалидные записи после импорта
    #[arg(long = "drop-invalid")]
    drop_invalid: bool,

    /// Удалить записи с нулевой прибылью после импорта
    #[arg(long = "drop-zero-profit")]
    drop_zero_profit: bool,

    /// Напечатать таблицу записей
    #[arg(long = "table")]
    table: bool,
}

const HEADERS: [&str; 10] = [
    "Bill No",
    "Item Code",
    "Sale Price",
    "Quantity",
    "Line Total",
    "Discount",
    "Internal Price",
    "Checksum",
    "Valid",
    "Profit",
];

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut ledger = Ledger::new();
    ledger.import_path(cli.format.into(), &cli.input)?;

    if cli.drop_invalid {
        ledger.remove_invalid();
    }
    if cli.drop_zero_profit {
        ledger.remove_zero_profit();
    }

    if cli.table {
        println!("{}", HEADERS.join("\t"));
        for rec in ledger.records() {
            println!("{}", rec.display_row().join("\t"));
        }
    }

    println!("{}", ledger.summarize());
    Ok(())
}
