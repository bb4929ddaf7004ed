pub mod notifier;
pub mod toast;
