use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory the key-value store writes its collection files into.
    pub data_dir: PathBuf,

    /// First hour (0-23) of the daytime reminder window, inclusive.
    pub reminder_start_hour: u32,
    /// Last hour (0-23) of the daytime reminder window, inclusive.
    pub reminder_end_hour: u32,
}

impl Config {
    pub fn from_env() -> Self {
        // Absent .env files are fine; real env vars win either way.
        let _ = dotenvy::dotenv();

        Self {
            data_dir: env::var("MOODMOSAIC_DATA_DIR")
                .unwrap_or_else(|_| "./data".into())
                .into(),

            reminder_start_hour: env::var("MOODMOSAIC_REMINDER_START_HOUR")
                .unwrap_or_else(|_| "8".into())
                .parse()
                .expect("MOODMOSAIC_REMINDER_START_HOUR must be a number"),
            reminder_end_hour: env::var("MOODMOSAIC_REMINDER_END_HOUR")
                .unwrap_or_else(|_| "22".into())
                .parse()
                .expect("MOODMOSAIC_REMINDER_END_HOUR must be a number"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: "./data".into(),
            reminder_start_hour: 8,
            reminder_end_hour: 22,
        }
    }
}
