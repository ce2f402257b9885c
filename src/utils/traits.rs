use crate::utils::app_config::AppConfig;

pub trait ActionProcessor<Output, Error> {
    async fn process(&self, app_config: &AppConfig) -> Result<Output, Error>;
}
