// farm/instructions/mod.rs

pub mod admin;
pub mod dao;
pub mod open;
pub mod views;

pub use admin::*;
pub use dao::*;
pub use open::*;

pub use views::{FarmView, ProviderView};
pub(crate) use views::{__client_accounts_farm_view, __client_accounts_provider_view};

cfg_if::cfg_if! {
    if #[cfg(feature = "cpi")] {
        pub(crate) use views::{__cpi_client_accounts_farm_view, __cpi_client_accounts_provider_view};
    }
}
