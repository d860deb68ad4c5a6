pub mod config;

pub use config::{
    ConfigOverrides, FontConfig, LoadingConfig, LogConfig, NavigationConfig, OrbitConfig,
    ParticleFieldConfig, PrintConfig, RevealConfig, SceneConfig, ScrollConfig, SiteConfig,
    WindowConfig, BASE_CONFIG_PATH, LOCAL_CONFIG_PATH,
};
