//! Exchange to holiday-table registry.

use log::debug;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use super::config::RegistryConfig;
use super::exchange::Exchange;
use super::holiday::HolidayCalendar;
use super::tables::{builtin_calendar, B3_HOLIDAYS, B3_TABLE, NSE_HOLIDAYS, NSE_TABLE};
use super::Calendar;
use crate::error::{TradeCalError, TradeCalResult};

static BUILTIN: Lazy<Arc<CalendarRegistry>> =
    Lazy::new(|| Arc::new(CalendarRegistry::build_builtin()));

/// Maps exchange codes to immutable holiday tables.
///
/// # Fallback policy
///
/// [`CalendarRegistry::resolve`] never fails: an exchange code with no
/// mapping resolves to the default table. This keeps ad-hoc codes such as
/// `CME` usable with the default holidays instead of turning them into errors.
///
/// # Example
///
/// ```
/// use tradecal_core::calendars::{CalendarRegistry, B3_TABLE, NSE_TABLE};
/// use tradecal_core::calendars::Calendar;
///
/// let registry = CalendarRegistry::builtin();
/// assert_eq!(registry.resolve("b3fo").name(), B3_TABLE);
/// assert_eq!(registry.resolve("CME").name(), NSE_TABLE);
/// ```
#[derive(Debug, Clone)]
pub struct CalendarRegistry {
    tables: BTreeMap<String, Arc<HolidayCalendar>>,
    /// Upper-case exchange code to table name
    exchanges: BTreeMap<String, String>,
    default: Arc<HolidayCalendar>,
}

impl CalendarRegistry {
    /// The registry built from the embedded tables.
    ///
    /// Built once per process and shared.
    pub fn builtin() -> Arc<Self> {
        Arc::clone(&BUILTIN)
    }

    fn build_builtin() -> Self {
        let mut registry = Self::with_default(builtin_calendar(NSE_TABLE, NSE_HOLIDAYS))
            .with_table(builtin_calendar(B3_TABLE, B3_HOLIDAYS));
        for exchange in Exchange::ALL {
            registry
                .exchanges
                .insert(exchange.code().to_string(), exchange.builtin_table().to_string());
        }
        registry
    }

    /// A registry holding a single table that every exchange resolves to.
    pub fn with_default(calendar: HolidayCalendar) -> Self {
        let default = Arc::new(calendar);
        let mut tables = BTreeMap::new();
        tables.insert(table_name(&default), Arc::clone(&default));
        Self {
            tables,
            exchanges: BTreeMap::new(),
            default,
        }
    }

    /// Add a table, replacing any table with the same name.
    pub fn with_table(mut self, calendar: HolidayCalendar) -> Self {
        let calendar = Arc::new(calendar);
        let name = table_name(&calendar);
        if name == table_name(&self.default) {
            self.default = Arc::clone(&calendar);
        }
        self.tables.insert(name, calendar);
        self
    }

    /// Map an exchange code to a registered table.
    pub fn with_exchange(mut self, code: &str, table: &str) -> TradeCalResult<Self> {
        if !self.tables.contains_key(table) {
            return Err(TradeCalError::config(format!(
                "Exchange '{}' maps to unknown table '{}'",
                code, table
            )));
        }
        self.exchanges.insert(normalize_code(code), table.to_string());
        Ok(self)
    }

    /// Build a registry from configuration.
    pub fn from_config(config: RegistryConfig) -> TradeCalResult<Self> {
        let mut tables: BTreeMap<String, HolidayCalendar> = BTreeMap::new();
        let mut exchanges: BTreeMap<String, String> = BTreeMap::new();

        if config.include_builtin {
            let builtin = Self::builtin();
            for (name, calendar) in &builtin.tables {
                tables.insert(name.clone(), HolidayCalendar::clone(calendar));
            }
            exchanges.extend(builtin.exchanges.clone());
        }

        for table_config in config.tables {
            let table = HolidayCalendar::from_table_config(table_config)?;
            let name = table.name().to_string();
            match tables.get_mut(&name) {
                Some(existing) => existing.add_holidays(table.holidays()),
                None => {
                    tables.insert(name, table);
                }
            }
        }

        for (code, table) in config.exchanges {
            exchanges.insert(normalize_code(&code), table);
        }

        let default = tables.remove(&config.default_table).ok_or_else(|| {
            TradeCalError::config(format!("Unknown default table '{}'", config.default_table))
        })?;

        let mut registry = Self::with_default(default);
        for (_, table) in tables {
            registry = registry.with_table(table);
        }
        for (code, table) in &exchanges {
            registry = registry.with_exchange(code, table)?;
        }

        debug!(
            "Loaded calendar registry: {} tables, {} exchanges, default '{}'",
            registry.tables.len(),
            registry.exchanges.len(),
            config.default_table
        );

        Ok(registry)
    }

    /// Load a registry from a TOML or JSON configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> TradeCalResult<Self> {
        Self::from_config(RegistryConfig::from_file(path)?)
    }

    /// Resolve the holiday table for an exchange code.
    ///
    /// Codes are matched case-insensitively. Unmapped codes resolve to the
    /// default table.
    pub fn resolve(&self, exchange: &str) -> &HolidayCalendar {
        let code = normalize_code(exchange);
        match self
            .exchanges
            .get(&code)
            .and_then(|table| self.tables.get(table))
        {
            Some(calendar) => calendar.as_ref(),
            None => {
                debug!(
                    "Exchange '{}' has no holiday table, using default '{}'",
                    exchange,
                    table_name(&self.default)
                );
                self.default.as_ref()
            }
        }
    }

    /// Returns true if the exchange code has an explicit mapping.
    pub fn is_mapped(&self, exchange: &str) -> bool {
        self.exchanges.contains_key(&normalize_code(exchange))
    }

    /// The table used for unmapped exchanges.
    pub fn default_calendar(&self) -> &HolidayCalendar {
        &self.default
    }

    /// Look up a table by name.
    pub fn table(&self, name: &str) -> Option<&HolidayCalendar> {
        self.tables.get(name).map(AsRef::as_ref)
    }

    /// Names of all registered tables, sorted.
    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    /// Exchange code and table name pairs, sorted by code.
    pub fn exchanges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.exchanges
            .iter()
            .map(|(code, table)| (code.as_str(), table.as_str()))
    }
}

impl Default for CalendarRegistry {
    fn default() -> Self {
        CalendarRegistry::clone(&Self::builtin())
    }
}

fn normalize_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

fn table_name(calendar: &HolidayCalendar) -> String {
    calendar.name().to_string()
}
