use config::Config;
use tracing::info;

use crate::dimensions::Dimensions;

const CONFIG_WEIGHT_BANDWIDTH: (&str, u64) = ("fee.weights.bandwidth", 1);
const CONFIG_WEIGHT_DB_READ: (&str, u64) = ("fee.weights.db-read", 1_000);
const CONFIG_WEIGHT_DB_WRITE: (&str, u64) = ("fee.weights.db-write", 1_000);
const CONFIG_WEIGHT_COMPUTE: (&str, u64) = ("fee.weights.compute", 4);
const CONFIG_GAS_PRICE: (&str, u64) = ("fee.gas-price", 1);

/// Weights and price used to turn complexity into a fee
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeConfig {
    /// Gas charged per unit of complexity, per dimension
    pub weights: Dimensions,

    /// Price of one unit of gas, in the smallest denomination
    pub gas_price: u64,
}

impl Default for FeeConfig {
    fn default() -> Self {
        Self {
            weights: Dimensions::new(
                CONFIG_WEIGHT_BANDWIDTH.1,
                CONFIG_WEIGHT_DB_READ.1,
                CONFIG_WEIGHT_DB_WRITE.1,
                CONFIG_WEIGHT_COMPUTE.1,
            ),
            gas_price: CONFIG_GAS_PRICE.1,
        }
    }
}

impl FeeConfig {
    fn conf_u64(config: &Config, keydef: (&str, u64)) -> u64 {
        let actual = config
            .get_int(keydef.0)
            .ok()
            .and_then(|v| u64::try_from(v).ok())
            .unwrap_or(keydef.1);
        info!("Parameter value '{}' for {}", actual, keydef.0);
        actual
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            weights: Dimensions::new(
                Self::conf_u64(config, CONFIG_WEIGHT_BANDWIDTH),
                Self::conf_u64(config, CONFIG_WEIGHT_DB_READ),
                Self::conf_u64(config, CONFIG_WEIGHT_DB_WRITE),
                Self::conf_u64(config, CONFIG_WEIGHT_COMPUTE),
            ),
            gas_price: Self::conf_u64(config, CONFIG_GAS_PRICE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{File, FileFormat};

    #[test]
    fn empty_config_gives_defaults() {
        let config = Config::builder().build().unwrap();
        assert_eq!(FeeConfig::from_config(&config), FeeConfig::default());
    }

    #[test]
    fn reads_weights_and_price() {
        let toml = r#"
            [fee]
            gas-price = 25

            [fee.weights]
            bandwidth = 2
            db-write = 500
        "#;
        let config = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap();

        let fee = FeeConfig::from_config(&config);
        assert_eq!(fee.gas_price, 25);
        assert_eq!(fee.weights, Dimensions::new(2, 1_000, 500, 4));
    }

    #[test]
    fn negative_values_fall_back_to_defaults() {
        let config =
            Config::builder().set_override("fee.gas-price", -3i64).unwrap().build().unwrap();
        assert_eq!(FeeConfig::from_config(&config).gas_price, 1);
    }
}
