use crate::domain::model::{Shoe, INVENTORY_HEADER};
use crate::domain::ports::Storage;
use crate::utils::error::{InventoryError, Result};
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::{Path, PathBuf};

/// Flat comma-separated file: one header line, then one shoe per line.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for FileStorage {
    fn load(&self) -> Result<Vec<Shoe>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(InventoryError::FileNotFoundError {
                    path: self.location(),
                })
            }
            Err(e) => return Err(e.into()),
        };

        let shoes = read_inventory(file)?;
        tracing::debug!("Loaded {} records from {}", shoes.len(), self.location());
        Ok(shoes)
    }

    fn save(&self, shoes: &[Shoe]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        // 整檔覆寫，不做原子替換
        let file = File::create(&self.path)?;
        write_inventory(file, shoes)?;
        tracing::debug!("Wrote {} records to {}", shoes.len(), self.location());
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// Parses inventory text. The first physical line is skipped whatever it
/// contains, even when blank.
pub fn read_inventory<R: Read>(reader: R) -> Result<Vec<Shoe>> {
    let mut reader = BufReader::new(reader);
    let mut header = String::new();
    reader.read_line(&mut header)?;

    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut shoes = Vec::new();
    for result in csv_reader.records() {
        let record = result.map_err(malformed)?;

        // csv 從第二行開始計數，補回被略過的標題行
        let line = record.position().map(|p| p.line() + 1).unwrap_or(0);
        if record.len() != INVENTORY_HEADER.len() {
            return Err(InventoryError::ParseError {
                line,
                message: format!(
                    "expected {} fields, found {}",
                    INVENTORY_HEADER.len(),
                    record.len()
                ),
            });
        }

        let shoe: Shoe = record.deserialize(None).map_err(|e| InventoryError::ParseError {
            line,
            message: e.to_string(),
        })?;
        shoes.push(shoe);
    }

    Ok(shoes)
}

pub fn write_inventory<W: Write>(writer: W, shoes: &[Shoe]) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    csv_writer.write_record(INVENTORY_HEADER)?;
    for shoe in shoes {
        csv_writer.serialize(shoe)?;
    }
    csv_writer.flush()?;
    Ok(())
}

fn malformed(err: csv::Error) -> InventoryError {
    if err.is_io_error() {
        return InventoryError::CsvError(err);
    }
    InventoryError::ParseError {
        line: err.position().map(|p| p.line() + 1).unwrap_or(0),
        message: err.to_string(),
    }
}
