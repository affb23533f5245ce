mod config_io;

pub use config_io::{
    config_dir, config_path, ensure_config_dir, load_config, load_config_from, save_config,
    save_config_to,
};
