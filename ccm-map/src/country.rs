//! Country name → ISO code resolution for tooltip flags.
//!
//! Resolution never fails loudly: an unknown region simply has no code and
//! the tooltip is shown without a flag.

use csv::ReaderBuilder;
use log::warn;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Embedded CSV table: `name,iso2,fips`. Several names may map to the same
/// code (feed spellings such as `"Korea, South"` or `"Taiwan*"`).
pub static COUNTRIES_CSV: &str = include_str!("../fixtures/countries.csv");

static BUILTIN: LazyLock<CountryTable> = LazyLock::new(|| {
    CountryTable::parse_csv(COUNTRIES_CSV).unwrap_or_else(|e| {
        warn!("Embedded country table failed to parse: {}", e);
        CountryTable::default()
    })
});

/// Resolves a region name to an ISO 3166-1 alpha-2 code.
pub trait CountryLookup {
    fn iso_code(&self, region: &str) -> Option<String>;
}

impl<T: CountryLookup + ?Sized> CountryLookup for &T {
    fn iso_code(&self, region: &str) -> Option<String> {
        (**self).iso_code(region)
    }
}

/// Lookup that never resolves; tooltips get no flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLookup;

impl CountryLookup for NoLookup {
    fn iso_code(&self, _region: &str) -> Option<String> {
        None
    }
}

/// In-memory country table keyed by lowercase name and by FIPS 10-4 code.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CountryTable {
    by_name: HashMap<String, String>,
    by_fips: HashMap<String, String>,
}

impl CountryTable {
    /// The table compiled into the crate.
    pub fn builtin() -> &'static CountryTable {
        &BUILTIN
    }

    /// Parse a `name,iso2,fips` CSV (with headers). Rows without an ISO code
    /// are skipped; the FIPS column may be empty.
    pub fn parse_csv(csv_object: &str) -> Result<CountryTable, csv::Error> {
        let mut table = CountryTable::default();
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_object.as_bytes());
        for row in rdr.records() {
            let record = row?;
            let name = record.get(0).unwrap_or("").trim();
            let iso = record.get(1).unwrap_or("").trim().to_uppercase();
            let fips = record.get(2).unwrap_or("").trim().to_uppercase();
            if name.is_empty() || iso.is_empty() {
                continue;
            }
            table.by_name.insert(name.to_lowercase(), iso.clone());
            if !fips.is_empty() {
                table.by_fips.insert(fips, iso);
            }
        }
        Ok(table)
    }

    pub fn by_name(&self, name: &str) -> Option<&str> {
        self.by_name
            .get(&name.trim().to_lowercase())
            .map(String::as_str)
    }

    pub fn by_fips(&self, code: &str) -> Option<&str> {
        self.by_fips
            .get(&code.trim().to_uppercase())
            .map(String::as_str)
    }

    /// Number of distinct names known.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

impl CountryLookup for CountryTable {
    /// Tries the region as a country name first, then as a FIPS code.
    fn iso_code(&self, region: &str) -> Option<String> {
        self.by_name(region)
            .or_else(|| self.by_fips(region))
            .map(str::to_string)
    }
}
