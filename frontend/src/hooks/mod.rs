pub mod use_notifier;
