//! Shared UI components

pub mod helpers;
pub mod home_link;
pub mod logo;

pub use helpers::wrap_if;
pub use home_link::{HomeLink, HOME_ROUTE};
pub use logo::{logo_class, Logo, LogoVariant, UnknownLogoVariant, LOGO_ALT, LOGO_IMAGE};
