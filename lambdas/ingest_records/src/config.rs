use figment::providers::Env;
use figment::Figment;
use serde::{Deserialize, Serialize};
use shared::core::FailurePolicy;

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Config {
    pub table_name: String,
    #[serde(default)]
    pub failure_policy: FailurePolicy,
}

impl Config {
    pub fn load() -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Env::raw().only(&["TABLE_NAME", "FAILURE_POLICY"]))
            .extract()
    }
}

#[cfg(test)]
mod tests {
    use super::Config;
    use shared::core::FailurePolicy;

    #[test]
    fn when_table_name_is_set_should_load_with_default_policy() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("TABLE_NAME", "ingest-test-table");

            let config = Config::load().unwrap();

            assert_eq!(config.table_name, "ingest-test-table");
            assert_eq!(config.failure_policy, FailurePolicy::Abort);

            Ok(())
        });
    }

    #[test]
    fn when_failure_policy_is_continue_should_parse() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("TABLE_NAME", "ingest-test-table");
            jail.set_env("FAILURE_POLICY", "continue");

            let config = Config::load().unwrap();

            assert_eq!(config.failure_policy, FailurePolicy::Continue);

            Ok(())
        });
    }

    #[test]
    fn when_table_name_is_missing_should_fail() {
        figment::Jail::expect_with(|_jail| {
            assert!(Config::load().is_err());

            Ok(())
        });
    }
}
