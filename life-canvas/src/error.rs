use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("2D drawing context is unavailable")]
    ContextUnavailable,
    #[error("drawable surface rejected a {width}x{height} pixel buffer")]
    Surface {
        width: u32,
        height: u32,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}
