use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub(crate) struct ConfigFile {
    pub(crate) tool: Option<ToolSection>,
    pub(crate) environment: Option<EnvironmentSection>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub(crate) struct ToolSection {
    pub(crate) executable: Option<String>,
    pub(crate) extension: Option<String>,
    pub(crate) config_file: Option<String>,
    pub(crate) report_args: Option<Vec<String>>,
    pub(crate) timeout_secs: Option<u64>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub(crate) struct EnvironmentSection {
    pub(crate) names: Option<Vec<String>>,
    #[serde(default)]
    pub(crate) vars: BTreeMap<String, String>,
}
