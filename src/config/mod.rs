use crate::errors::{AppError, AppResult};
use crate::models::category::Category;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Per-category reminder intervals, in hours.
///
/// Zero disables the reminder for that category. Values come from
/// user-edited config files or CLI free text, so anything negative or
/// non-finite is normalized to zero instead of being treated as an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Intervals {
    #[serde(default = "default_feeding_hours")]
    pub feeding: f64,
    #[serde(default = "default_gas_relief_hours")]
    pub gas_relief_dose: f64,
    #[serde(default = "default_vitamin_hours")]
    pub vitamin_dose: f64,
    #[serde(default)]
    pub diaper_change: f64,
}

fn default_feeding_hours() -> f64 {
    3.0
}
fn default_gas_relief_hours() -> f64 {
    8.0
}
fn default_vitamin_hours() -> f64 {
    24.0
}

/// Clamp a user-supplied interval to the valid range.
pub fn normalize_hours(raw: f64) -> f64 {
    if raw.is_finite() && raw > 0.0 { raw } else { 0.0 }
}

impl Default for Intervals {
    fn default() -> Self {
        Self {
            feeding: default_feeding_hours(),
            gas_relief_dose: default_gas_relief_hours(),
            vitamin_dose: default_vitamin_hours(),
            diaper_change: 0.0,
        }
    }
}

impl Intervals {
    pub fn hours_for(&self, category: Category) -> f64 {
        normalize_hours(match category {
            Category::Feeding => self.feeding,
            Category::GasReliefDose => self.gas_relief_dose,
            Category::VitaminDose => self.vitamin_dose,
            Category::DiaperChange => self.diaper_change,
        })
    }

    /// Set an interval from free text. Non-numeric or negative input means
    /// "reminders disabled" (zero), never a hard failure.
    pub fn set_hours(&mut self, category: Category, raw: &str) {
        let hours = normalize_hours(raw.trim().parse::<f64>().unwrap_or(0.0));
        match category {
            Category::Feeding => self.feeding = hours,
            Category::GasReliefDose => self.gas_relief_dose = hours,
            Category::VitaminDose => self.vitamin_dose = hours,
            Category::DiaperChange => self.diaper_change = hours,
        }
    }
}

/// Per-category measurement units for the amount field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Units {
    #[serde(default = "default_feeding_unit")]
    pub feeding: String,
    #[serde(default = "default_drops_unit")]
    pub gas_relief_dose: String,
    #[serde(default = "default_drops_unit")]
    pub vitamin_dose: String,
    #[serde(default)]
    pub diaper_change: String,
}

fn default_feeding_unit() -> String {
    "ml".to_string()
}
fn default_drops_unit() -> String {
    "gotas".to_string()
}

impl Default for Units {
    fn default() -> Self {
        Self {
            feeding: default_feeding_unit(),
            gas_relief_dose: default_drops_unit(),
            vitamin_dose: default_drops_unit(),
            diaper_change: String::new(),
        }
    }
}

impl Units {
    pub fn unit_for(&self, category: Category) -> &str {
        match category {
            Category::Feeding => &self.feeding,
            Category::GasReliefDose => &self.gas_relief_dose,
            Category::VitaminDose => &self.vitamin_dose,
            Category::DiaperChange => &self.diaper_change,
        }
    }

    pub fn set_unit(&mut self, category: Category, unit: &str) {
        let unit = unit.trim().to_string();
        match category {
            Category::Feeding => self.feeding = unit,
            Category::GasReliefDose => self.gas_relief_dose = unit,
            Category::VitaminDose => self.vitamin_dose = unit,
            Category::DiaperChange => self.diaper_change = unit,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default)]
    pub intervals: Intervals,
    #[serde(default)]
    pub units: Units,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            intervals: Intervals::default(),
            units: Units::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("nidolog")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".nidolog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("nidolog.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("nidolog.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if path.exists() {
            let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
            serde_yaml::from_str(&content).map_err(|_| AppError::ConfigLoad)
        } else {
            Ok(Config::default())
        }
    }

    /// Persist the configuration to its standard location.
    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir()).map_err(|_| AppError::ConfigSave)?;
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(Self::config_file()).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes()).map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_db {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            dir.join("nidolog.sqlite")
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            intervals: Intervals::default(),
            units: Units::default(),
        };

        // In test mode the home-directory config file is left untouched.
        if !is_test {
            fs::create_dir_all(&dir)?;
            config.save()?;
            crate::ui::messages::success(format!("Config file: {:?}", Self::config_file()));
        }

        Ok(db_path)
    }
}
