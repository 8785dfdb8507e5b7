mod subscribe_newsletter;

pub use subscribe_newsletter::{SubscribeNewsletterError, SubscribeNewsletterUseCase};
