use crate::cleaner;
use crate::config::Config;
use crate::constants::{CENTURY_BASE, NAME_FIELD_INDEX};
use crate::error::{AutoMpgError, Result};
use crate::fetch::DatasetSource;
use crate::record::{AutoMpg, IntoYear};
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, error, info, instrument};

// Positions within a cleaned row
const MPG_FIELD: usize = 0;
const MODEL_YEAR_FIELD: usize = 6;

/// The loaded data set, in file order until one of the sorts is applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AutoMpgData {
    pub(crate) data: Vec<AutoMpg>,
}

impl AutoMpgData {
    /// Makes sure both files exist, then parses the cleaned one.
    #[instrument(skip_all, fields(source = %source.describe()))]
    pub fn load(config: &Config, source: &dyn DatasetSource) -> Result<Self> {
        let raw = config.raw_path();
        let clean = config.clean_path();

        ensure_raw(&raw, source)?;
        ensure_clean(&raw, &clean)?;
        parse_clean(&clean)
    }

    pub fn from_records(data: Vec<AutoMpg>) -> Self {
        Self { data }
    }

    pub fn records(&self) -> &[AutoMpg] {
        &self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AutoMpg> {
        self.data.iter()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<'a> IntoIterator for &'a AutoMpgData {
    type Item = &'a AutoMpg;
    type IntoIter = std::slice::Iter<'a, AutoMpg>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl IntoIterator for AutoMpgData {
    type Item = AutoMpg;
    type IntoIter = std::vec::IntoIter<AutoMpg>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

/// Fetches the raw file once if it is not on disk yet.
pub fn ensure_raw(raw: &Path, source: &dyn DatasetSource) -> Result<()> {
    if raw.exists() {
        debug!("Original data file {} exists", raw.display());
        return Ok(());
    }
    debug!("Original data file {} does not exist", raw.display());

    let body = source.fetch()?;
    if let Some(parent) = raw.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(raw, &body)?;
    info!("{} file created", raw.display());
    Ok(())
}

/// Derives the cleaned file once if it is not on disk yet.
pub fn ensure_clean(raw: &Path, clean: &Path) -> Result<()> {
    if clean.exists() {
        debug!("Clean data file {} exists", clean.display());
        return Ok(());
    }
    debug!("Clean data file {} doesn't exist", clean.display());

    cleaner::clean_file(raw, clean).map_err(|e| {
        error!("Cleaning {} failed: {}", raw.display(), e);
        e
    })?;
    Ok(())
}

/// Parses every row of the cleaned file, stopping at the first bad one.
pub fn parse_clean(clean: &Path) -> Result<AutoMpgData> {
    let reader = BufReader::new(File::open(clean)?);
    let mut data = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let record = parse_line(idx + 1, &line).map_err(|e| {
            error!("{}", e);
            e
        })?;
        data.push(record);
    }
    debug!("Parsed {} records from {}", data.len(), clean.display());
    Ok(AutoMpgData { data })
}

/// Turns one cleaned row into a record.
///
/// The first eight groups are positional columns; everything after them is
/// the car name, whose first token is the make and the rest the model.
pub fn parse_line(line_no: usize, line: &str) -> Result<AutoMpg> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() <= NAME_FIELD_INDEX {
        return Err(AutoMpgError::MalformedRow {
            line: line_no,
            found: fields.len(),
            content: line.to_string(),
        });
    }

    let name = &fields[NAME_FIELD_INDEX..];
    let make = name[0];
    let model = name[1..].join(" ");
    let model_year = fields[MODEL_YEAR_FIELD].into_year()?;
    let year = CENTURY_BASE
        .checked_add(model_year)
        .ok_or_else(|| AutoMpgError::Construction {
            field: "year",
            value: fields[MODEL_YEAR_FIELD].to_string(),
        })?;

    AutoMpg::new(make, model, year, fields[MPG_FIELD])
}
