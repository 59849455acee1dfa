#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("layout is not mounted: `{0}` requires at least one registered pane")]
    NotMounted(&'static str),
}
