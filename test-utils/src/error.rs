use thiserror::Error;

/// Errors that can occur while preparing a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Creating the temporary directory or seeding the store file failed.
    #[error("Test filesystem setup failed: {0}")]
    Io(#[from] std::io::Error),
}
