use crate::feedback::Polarity;

/// Audible feedback.
///
/// Implementations must return quickly (play in the background) and may fail;
/// callers treat any error as "no sound".
pub trait FeedbackPort: Send + Sync {
    fn play(&self, polarity: Polarity) -> anyhow::Result<()>;
}
