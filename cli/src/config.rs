use engine::config::Validate;
use engine::tictactoe::BotType;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum BotKind {
    Random,
    Minimax,
}

impl BotKind {
    pub fn to_bot_type(self) -> BotType {
        match self {
            BotKind::Random => BotType::Random,
            BotKind::Minimax => BotType::Minimax,
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum FirstPlayer {
    Human,
    Computer,
    Random,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub bot: BotKind,
    pub first_player: FirstPlayer,
    pub seed: Option<u64>,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bot: BotKind::Minimax,
            first_player: FirstPlayer::Human,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::config::{ConfigContentProvider, ConfigManager, FileContentConfigProvider};

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_tic_tac_toe_config_{}.yaml", random_number));
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_default_config_round_trips_through_file() {
        let config = Config::default();
        let file_path = get_temp_file_path();
        let manager: ConfigManager<_, Config> = ConfigManager::from_yaml_file(&file_path);

        manager.set_config(&config).unwrap();
        let loaded = manager.get_config().unwrap();
        assert_eq!(config, loaded);

        let loaded_again = manager.get_config().unwrap();
        assert_eq!(config, loaded_again);
    }

    #[test]
    fn test_missing_config_file_returns_default() {
        let manager: ConfigManager<_, Config> =
            ConfigManager::from_yaml_file("this_file_does_not_exist.yaml");
        let loaded = manager.get_config().unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_invalid_config_cant_be_read() {
        let invalid_config_content = r#"
            bot: AlphaBeta
            first_player: Human
        "#;

        let file_path = get_temp_file_path();
        let provider = FileContentConfigProvider::new(file_path);
        provider.set_config_content(invalid_config_content).unwrap();

        let manager: ConfigManager<_, Config> = ConfigManager::new(provider);
        assert!(manager.get_config().is_err());
    }

    #[test]
    fn test_explicit_settings_round_trip() {
        let config = Config {
            bot: BotKind::Random,
            first_player: FirstPlayer::Random,
            seed: Some(1234),
        };
        let file_path = get_temp_file_path();
        let manager: ConfigManager<_, Config> = ConfigManager::from_yaml_file(&file_path);

        manager.set_config(&config).unwrap();
        assert_eq!(manager.get_config().unwrap(), config);
    }
}
