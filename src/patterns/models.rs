use std::collections::BTreeSet;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{EnumString, IntoStaticStr};

use super::template;
use crate::core::error::{PatternError, Result};


#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Frequency {
    Medium,
    High,
    VeryHigh,
}

impl Frequency {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}


/// One query-classification rule.
///
/// `template` is an arbitrary JSON shape whose string leaves may carry
/// `${N}` placeholders bound to capture group `N` of `pattern`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pattern {
    pub id: String,

    pub category: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    pub examples: Vec<String>,

    pub pattern: String,

    pub template: Value,

    pub confidence: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<Frequency>,
}

impl Pattern {

    pub fn regex(&self) -> Result<Regex> {
        Regex::new(&self.pattern).map_err(|e| PatternError::invalid_regex(&self.id, &e))
    }


    pub fn capture_group_count(&self) -> Result<usize> {
        Ok(self.regex()?.captures_len() - 1)
    }


    pub fn placeholder_groups(&self) -> BTreeSet<usize> {
        template::placeholder_groups(&self.template)
    }

    /// Applies this pattern to `query` and fills its template from the
    /// captures. `Ok(None)` when the regex does not match.
    pub fn instantiate(&self, query: &str) -> Result<Option<Value>> {
        let regex = self.regex()?;
        Ok(regex
            .captures(query)
            .map(|caps| template::interpolate(&self.template, &caps)))
    }

    pub fn is_domain_specific(&self) -> bool {
        self.domain.is_some()
    }
}
