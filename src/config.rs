use std::env;
use std::path::PathBuf;

#[derive(Clone)]
pub struct Config {
    pub port: u16,
    pub users_file: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("PORT must be a number"),
            users_file: env::var("USERS_FILE")
                .unwrap_or_else(|_| "./users.json".to_string())
                .into(),
        }
    }
}
