use crate::error::ObservatoryError;
use serde::Deserialize;

pub const DEFAULT_COUNTRIES_FILE: &str = "countries.csv";
pub const DEFAULT_STUDIES_FILE: &str = "studies.csv";
pub const DEFAULT_TOOLS_FILE: &str = "tools.csv";
pub const DEFAULT_RECOMMEND_TOP: usize = 8;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ObservatoryConfig {
    pub data: Option<DataConfig>,
    pub recommend: Option<RecommendConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    pub countries: Option<String>,
    pub studies: Option<String>,
    pub tools: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendConfig {
    pub top: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
}

impl ObservatoryConfig {
    pub fn countries_file(&self) -> &str {
        self.data
            .as_ref()
            .and_then(|data| data.countries.as_deref())
            .unwrap_or(DEFAULT_COUNTRIES_FILE)
    }

    pub fn studies_file(&self) -> &str {
        self.data
            .as_ref()
            .and_then(|data| data.studies.as_deref())
            .unwrap_or(DEFAULT_STUDIES_FILE)
    }

    pub fn tools_file(&self) -> &str {
        self.data
            .as_ref()
            .and_then(|data| data.tools.as_deref())
            .unwrap_or(DEFAULT_TOOLS_FILE)
    }

    /// Default length of the recommender ranking shown by the CLI. The
    /// scoring function itself always ranks every tool.
    pub fn recommend_top(&self) -> usize {
        self.recommend
            .as_ref()
            .and_then(|recommend| recommend.top)
            .unwrap_or(DEFAULT_RECOMMEND_TOP)
    }

    pub fn validate(&self) -> Result<(), ObservatoryError> {
        if let Some(recommend) = &self.recommend {
            if recommend.top == Some(0) {
                return Err(ObservatoryError::ConfigParse(
                    "recommend.top must be greater than 0".to_string(),
                ));
            }
        }

        if let Some(format) = self.output.as_ref().and_then(|output| output.format.as_deref()) {
            if !matches!(format, "table" | "md" | "json") {
                return Err(ObservatoryError::ConfigParse(format!(
                    "unsupported output.format: {format}"
                )));
            }
        }

        for (key, name) in [
            ("data.countries", self.countries_file()),
            ("data.studies", self.studies_file()),
            ("data.tools", self.tools_file()),
        ] {
            if name.trim().is_empty() {
                return Err(ObservatoryError::ConfigParse(format!(
                    "{key} must be a non-empty file name"
                )));
            }
        }

        Ok(())
    }
}
