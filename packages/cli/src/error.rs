#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Session(#[from] avusync_http::Error),

    #[error("No home directory found; pass --irods-env")]
    NoHomeDirectory,

    #[error("{variable} is not set")]
    MissingPassword { variable: &'static str },
}
