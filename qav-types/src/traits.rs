use crate::QavError;

/// Where raw answers come from.
///
/// Implementations return exactly one line per call, without its line
/// terminator. The multiple-answer sentinel `"."` must come back literally.
pub trait InputSource {
    /// Show `prompt` and read one line of input.
    ///
    /// # Returns
    /// * `Ok(line)` with the raw text the user typed (possibly empty)
    /// * `Err(QavError::Cancelled)` on interrupt or end of input
    /// * `Err(QavError::Backend(..))` on any other failure
    fn get_line(&mut self, prompt: &str) -> Result<String, QavError>;
}

/// Where choice listings, error lines and confirmation tables go.
pub trait OutputSink {
    /// Print one line of text.
    fn print(&mut self, text: &str);
}

/// A terminal: something that can both read answers and print output.
pub trait Console: InputSource + OutputSink {}

impl<T: InputSource + OutputSink + ?Sized> Console for T {}

impl OutputSink for Vec<String> {
    fn print(&mut self, text: &str) {
        self.push(text.to_string());
    }
}
