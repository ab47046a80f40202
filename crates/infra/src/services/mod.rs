mod notifier;

pub use notifier::{
    INotifier, InMemoryNotifier, NotificationError, SentNotification, TwilioConfig,
    TwilioNotifier,
};
