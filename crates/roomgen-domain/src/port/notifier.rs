//! Notifier - User-visible messages

/// Notifier Trait
///
/// Fire-and-forget: the core never reads anything back.
pub trait Notifier {
    fn show(&mut self, title: &str, message: &str);
}
