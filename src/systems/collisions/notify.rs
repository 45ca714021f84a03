use super::listener::Listeners;

/// Fire enter/stay/exit transitions on every listener.
///
/// Returns how many events were queued by this call.
pub fn notify(listeners: &mut Listeners) -> usize {
    let mut fired = 0;
    for listener in listeners.iter_mut() {
        let before = listener.events().len();
        listener.notify();
        fired += listener.events().len() - before;
    }
    fired
}
