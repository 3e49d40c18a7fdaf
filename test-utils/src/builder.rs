use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with an optional pre-existing welcome document.
///
/// Provides a fluent interface for configuring test environments backed by a fresh
/// temporary directory. Call `build()` to create the directory and seed the store file.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_store_document(r#"{ "1": { "enabled": true, "channel_id": null, "message": "Hi" } }"#)
///     .build()
///     .await?;
/// ```
#[derive(Default)]
pub struct TestBuilder {
    /// Raw bytes written to the store path during `build()`.
    ///
    /// `None` leaves the store path absent, simulating a first run.
    document: Option<Vec<u8>>,

    /// File name of the store inside the temporary directory.
    file_name: Option<String>,
}

impl TestBuilder {
    /// Creates a new test builder with no store document.
    ///
    /// # Returns
    /// - New `TestBuilder` instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store file with `document` before the test runs.
    ///
    /// The bytes are written verbatim, so invalid documents can be used to exercise
    /// corruption handling.
    ///
    /// # Arguments
    /// - `document` - Raw contents of the store file
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_store_document(mut self, document: impl Into<Vec<u8>>) -> Self {
        self.document = Some(document.into());
        self
    }

    /// Places the store file at `name` under the temporary directory.
    ///
    /// Nested names such as `data/welcome.json` exercise parent directory creation.
    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }

    /// Builds the test context.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Temporary directory created and store file seeded if requested
    /// - `Err(TestError::Io)` - Failed to create the directory or write the document
    pub async fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new(self.file_name.as_deref().unwrap_or("welcome.json"))?;

        if let Some(document) = self.document {
            context.write_store_file(&document).await?;
        }

        Ok(context)
    }
}
