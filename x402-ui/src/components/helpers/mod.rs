//! Common helper UI components

mod conditional_wrap;

pub use conditional_wrap::wrap_if;
