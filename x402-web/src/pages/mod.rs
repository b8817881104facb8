mod home;
mod layout;
mod logo_preview;

pub use home::Home;
pub use layout::AppLayout;
pub use logo_preview::{LogoPreview, PreviewSpec};
