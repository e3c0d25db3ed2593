/// User-facing alert channel (the modal `alert()` of a browser page).
pub trait Notifier {
    fn alert(&mut self, message: &str);
}

/// Prints alerts to stdout.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn alert(&mut self, message: &str) {
        println!("[alert] {message}");
    }
}

impl<N: Notifier + ?Sized> Notifier for &mut N {
    fn alert(&mut self, message: &str) {
        (**self).alert(message);
    }
}
