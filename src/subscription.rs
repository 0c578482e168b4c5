/// Keeps an event listener registered until it is detached or dropped.
///
/// The release action runs exactly once: either through [`Subscription::detach`]
/// or when the subscription is dropped.
pub struct Subscription {
    release: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    pub fn is_attached(&self) -> bool {
        self.release.is_some()
    }

    pub fn detach(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("attached", &self.is_attached())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;

    fn counting() -> (Arc<AtomicUsize>, Subscription) {
        let released = Arc::new(AtomicUsize::new(0));
        let counter = released.clone();
        let sub = Subscription::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        (released, sub)
    }

    #[test]
    fn test_detach_releases_once() {
        let (released, sub) = counting();
        assert!(sub.is_attached());
        sub.detach();
        assert_eq!(released.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_drop_releases() {
        let (released, sub) = counting();
        assert_eq!(released.load(Ordering::SeqCst), 0);
        drop(sub);
        assert_eq!(released.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_stays_attached_while_held() {
        let (released, sub) = counting();
        let subs = vec![sub];
        assert_eq!(released.load(Ordering::SeqCst), 0);
        assert!(subs.iter().all(Subscription::is_attached));
        drop(subs);
        assert_eq!(released.load(Ordering::SeqCst), 1);
    }
}
