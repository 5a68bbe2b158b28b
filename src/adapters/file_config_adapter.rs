//! INI file configuration adapter.

use configparser::ini::Ini;
use std::path::Path;

use crate::ports::config_port::ConfigPort;

pub struct FileConfigAdapter {
    config: Ini,
}

impl FileConfigAdapter {
    pub fn from_file<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let mut config = Ini::new();
        config.load(path).map_err(std::io::Error::other)?;
        Ok(Self { config })
    }

    pub fn from_string(content: &str) -> Result<Self, String> {
        let mut config = Ini::new();
        config.read(content.to_string())?;
        Ok(Self { config })
    }

    fn parse_bool(value: &str) -> Option<bool> {
        match value.to_lowercase().as_str() {
            "true" | "yes" | "1" => Some(true),
            "false" | "no" | "0" => Some(false),
            _ => None,
        }
    }
}

impl ConfigPort for FileConfigAdapter {
    fn get_string(&self, section: &str, key: &str) -> Option<String> {
        self.config.get(section, key)
    }

    fn get_int(&self, section: &str, key: &str, default: i64) -> i64 {
        self.config
            .getint(section, key)
            .ok()
            .flatten()
            .unwrap_or(default)
    }

    fn get_float(&self, section: &str, key: &str, default: f64) -> f64 {
        self.config
            .getfloat(section, key)
            .ok()
            .flatten()
            .unwrap_or(default)
    }

    fn get_bool(&self, section: &str, key: &str, default: bool) -> bool {
        self.config
            .get(section, key)
            .as_ref()
            .and_then(|v| Self::parse_bool(v))
            .unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn from_string_parses_config() {
        let content = r#"
[data]
quotes_path = ./quotes

[search]
trials = 250
symbols = AAPL,MSFT
intraday = true

[candidate]
buy_threshold = 0.00001
"#;
        let adapter = FileConfigAdapter::from_string(content).unwrap();
        assert_eq!(
            adapter.get_string("data", "quotes_path"),
            Some("./quotes".to_string())
        );
        assert_eq!(adapter.get_int("search", "trials", 0), 250);
        assert_eq!(
            adapter.get_string("search", "symbols"),
            Some("AAPL,MSFT".to_string())
        );
        assert!(adapter.get_bool("search", "intraday", false));
        assert_eq!(
            adapter.get_float("candidate", "buy_threshold", 0.0),
            0.00001
        );
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let adapter = FileConfigAdapter::from_string("[search]\ntrials = 10\n").unwrap();
        assert_eq!(adapter.get_string("search", "missing"), None);
        assert_eq!(adapter.get_int("search", "missing", 42), 42);
        assert_eq!(adapter.get_float("search", "missing", 1.5), 1.5);
        assert!(adapter.get_bool("search", "missing", true));
    }

    #[test]
    fn non_numeric_values_fall_back_to_defaults() {
        let adapter =
            FileConfigAdapter::from_string("[search]\ntrials = lots\nlookback_days = 1.5x\n")
                .unwrap();
        assert_eq!(adapter.get_int("search", "trials", 7), 7);
        assert_eq!(adapter.get_float("search", "lookback_days", 2.0), 2.0);
    }

    #[test]
    fn bool_spellings() {
        let adapter =
            FileConfigAdapter::from_string("[search]\na = yes\nb = 0\nc = FALSE\nd = maybe\n")
                .unwrap();
        assert!(adapter.get_bool("search", "a", false));
        assert!(!adapter.get_bool("search", "b", true));
        assert!(!adapter.get_bool("search", "c", true));
        // Unparseable spelling keeps the default.
        assert!(adapter.get_bool("search", "d", true));
    }

    #[test]
    fn from_file_reads_config() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[data]\nquotes_path = /srv/quotes\n").unwrap();

        let adapter = FileConfigAdapter::from_file(file.path()).unwrap();
        assert_eq!(
            adapter.get_string("data", "quotes_path"),
            Some("/srv/quotes".to_string())
        );
    }

    #[test]
    fn from_file_missing_file_errors() {
        assert!(FileConfigAdapter::from_file("/nonexistent/trendclimb.ini").is_err());
    }
}
