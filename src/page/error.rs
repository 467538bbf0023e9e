use thiserror::Error;

/// Errors raised while binding the controller to a page
///
/// All of these mean the page was built without honouring
/// [`PageLayout`](crate::page::PageLayout). None are recoverable.
#[derive(Debug, Error, PartialEq)]
pub enum PageError {
    /// A required identifier is not registered in the page
    #[error("Required page element not found: #{id}")]
    MissingElement { id: String },

    /// The element exists but cannot play its role (e.g. a trigger that is not clickable)
    #[error("Page element #{id} is not a {expected}")]
    UnexpectedWidget { id: String, expected: &'static str },
}
