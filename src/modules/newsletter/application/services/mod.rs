mod subscribe_newsletter_service;

pub use subscribe_newsletter_service::SubscribeNewsletterService;
